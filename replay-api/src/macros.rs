/// Generates consuming builder setters on request descriptors. The `opt`
/// forms wrap the value in `Some`; the dotted forms reach into a nested
/// payload struct.
macro_rules! setter {
    ($field:ident : $ty:ty) => {
        pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
            self.$field = $field.into();
            self
        }
    };

    (opt $field:ident : $ty:ty) => {
        pub fn $field(mut self, $field: impl Into<$ty>) -> Self {
            self.$field = Some($field.into());
            self
        }
    };

    ($field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield(mut self, $subfield: impl Into<$ty>) -> Self {
            self.$field.$subfield = $subfield.into();
            self
        }
    };

    (opt $field:ident . $subfield:ident : $ty:ty) => {
        pub fn $subfield(mut self, $subfield: impl Into<$ty>) -> Self {
            self.$field.$subfield = Some($subfield.into());
            self
        }
    };
}

pub(crate) use setter;

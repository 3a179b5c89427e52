//! Domain-facing wrappers over the raw client. Each service remaps
//! [`ApiError`](crate::ApiError) into an error enum whose messages are safe
//! to show in the UI.

mod diaries;
mod users;
mod youtube;

pub use diaries::{DiaryError, DiaryService};
pub use users::{UserError, UserService};
pub use youtube::{YoutubeError, YoutubeService};

pub mod diaries;
pub mod users;
pub mod youtube;

use serde::{Deserialize, Serialize};

/// Numeric identifiers the backend assigns.
pub type DiaryId = i64;
pub type UserId = i64;

/// Page envelope the backend wraps list responses in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub number: u32,
    pub total_pages: u32,
    pub last: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// The page index to request next, if any pages remain.
    pub fn next_page(&self) -> Option<u32> {
        if self.last { None } else { Some(self.number + 1) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_walks_until_last() {
        let page = Page::<i32> {
            content: vec![1, 2],
            number: 0,
            total_pages: 2,
            last: false,
        };
        assert_eq!(page.next_page(), Some(1));

        let page = Page::<i32> {
            content: vec![3],
            number: 1,
            total_pages: 2,
            last: true,
        };
        assert_eq!(page.next_page(), None);
    }
}

//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside list payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    /// Current page number (1-indexed)
    pub page: u32,

    /// Number of items per page
    pub limit: u32,

    /// Total number of items across all pages
    pub total: u64,

    /// Total number of pages
    pub pages: u32,
}

impl PageMeta {
    /// Check if this is the first page
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether there is a page after the current one
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }

    /// Whether there is a page before the current one
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

/// Direction for sorted list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Query-string value for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_navigation() {
        let meta = PageMeta {
            page: 2,
            limit: 20,
            total: 45,
            pages: 3,
        };
        assert!(!meta.is_first_page());
        assert!(meta.has_next());
        assert!(meta.has_prev());
    }

    #[test]
    fn test_page_meta_last_page() {
        let meta = PageMeta {
            page: 3,
            limit: 20,
            total: 45,
            pages: 3,
        };
        assert!(!meta.has_next());
        assert!(meta.has_prev());
    }

    #[test]
    fn test_sort_order_as_str() {
        assert_eq!(SortOrder::Asc.as_str(), "asc");
        assert_eq!(SortOrder::Desc.as_str(), "desc");
    }
}

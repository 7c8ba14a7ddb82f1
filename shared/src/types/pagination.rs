//! Pagination related types for list endpoints

use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// Raw `limit`/`page` query parameters as sent by clients
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub page: Option<i64>,
}

impl PageQuery {
    pub fn new(limit: Option<i64>, page: Option<i64>) -> Self {
        Self { limit, page }
    }

    /// Normalize into a usable window
    pub fn pagination(&self) -> Pagination {
        Pagination::from_raw(self.limit, self.page)
    }
}

/// Offset pagination window (1-indexed page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create a new pagination, falling back to defaults for zero values
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { DEFAULT_PAGE } else { page },
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
        }
    }

    /// Build from untrusted values; unset or non-positive values use the defaults
    pub fn from_raw(limit: Option<i64>, page: Option<i64>) -> Self {
        let positive = |v: Option<i64>| {
            v.filter(|n| *n > 0)
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
        };

        Self {
            page: positive(page).unwrap_or(DEFAULT_PAGE),
            limit: positive(limit).unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// Number of rows to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    /// Number of rows to take
    pub fn limit(&self) -> u64 {
        u64::from(self.limit)
    }

    /// Attach a total count to produce response metadata
    pub fn info(&self, total: u64) -> PageInfo {
        PageInfo {
            total,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Pagination metadata returned alongside list data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// One page of items with its metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub info: PageInfo,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            items,
            info: pagination.info(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_or_non_positive() {
        assert_eq!(Pagination::from_raw(None, None), Pagination::new(1, 10));
        assert_eq!(Pagination::from_raw(Some(0), Some(-3)), Pagination::new(1, 10));
        assert_eq!(Pagination::from_raw(Some(-1), Some(2)), Pagination::new(2, 10));
    }

    #[test]
    fn test_offset_calculation() {
        let pagination = Pagination::from_raw(Some(20), Some(3));
        assert_eq!(pagination.offset(), 40);
        assert_eq!(pagination.limit(), 20);
        assert_eq!(Pagination::default().offset(), 0);
    }

    #[test]
    fn test_page_info() {
        let info = Pagination::new(2, 10).info(25);
        assert_eq!(info.total, 25);
        assert_eq!(info.page, 2);
        assert_eq!(info.limit, 10);
    }
}

use serde::Deserialize;

pub const MAX_PAGE_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    ///
    /// indexing starts at 1
    ///
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Pagination {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_limit() -> u32 {
    20
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn offset_first_page() {
        let pagination = Pagination { page: 1, limit: 20 };

        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn offset_third_page() {
        let pagination = Pagination { page: 3, limit: 15 };

        assert_eq!(pagination.offset(), 30);
    }
}

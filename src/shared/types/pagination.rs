/// Paginated query result
#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResult<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit.max(1) as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(page: u32, limit: u32) -> u64 {
        (page.saturating_sub(1) as u64) * limit as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let r = PaginatedResult::new(vec![1, 2, 3], 41, 1, 20);
        assert_eq!(r.total_pages, 3);

        let empty: PaginatedResult<i32> = PaginatedResult::new(vec![], 0, 1, 20);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn offset_is_zero_based() {
        assert_eq!(PaginatedResult::<()>::offset(1, 20), 0);
        assert_eq!(PaginatedResult::<()>::offset(3, 25), 50);
        assert_eq!(PaginatedResult::<()>::offset(0, 25), 0);
    }
}

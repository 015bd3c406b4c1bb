use serde::{Deserialize, Serialize};

/// Paginated list envelope as the API serializes it (Laravel-style
/// paginator): the records plus the cursor the list screens need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,

    pub current_page: u32,

    /// Last page number. 0 when the collection is empty.
    pub last_page: u32,

    pub total: u64,
}

impl<T> Paginated<T> {
    /// Envelope for an empty collection, used as the initial list state
    /// before the first fetch resolves.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            last_page: 0,
            total: 0,
        }
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_laravel_envelope() {
        let json = r#"{
            "data": [{"id": 1}, {"id": 2}],
            "current_page": 2,
            "last_page": 7,
            "total": 131
        }"#;
        let page: Paginated<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 7);
        assert_eq!(page.total, 131);
    }

    #[test]
    fn test_empty_envelope() {
        let page: Paginated<String> = Paginated::empty();
        assert!(page.data.is_empty());
        assert_eq!(page.last_page, 0);
    }
}

//! Pagination envelope pieces shared by every list endpoint.

use serde::{Deserialize, Serialize};

/// Pagination cursor attached to collection responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

/// Generic `{"data": [...], "meta": {...}}` envelope, parameterized by the
/// item model instead of duplicating a wrapper per entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub meta: Meta,
}

/// Query parameters accepted by list endpoints. The server defaults are
/// `limit = 20`, `page = 1`; `Page::default()` mirrors them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub page: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: 20, page: 1 }
    }
}

impl Page {
    pub fn new(limit: u32, page: u32) -> Self {
        Self { limit, page }
    }

    pub(crate) fn to_query(self) -> [(&'static str, String); 2] {
        [
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        symbol: String,
    }

    #[test]
    fn envelope_parses_items_and_meta() {
        let json = r#"{"data": [{"symbol": "A"}, {"symbol": "B"}],
                       "meta": {"total": 2, "page": 1, "limit": 20}}"#;
        let page: Paginated<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].symbol, "A");
        assert_eq!(
            page.meta,
            Meta {
                total: 2,
                page: 1,
                limit: 20
            }
        );
    }

    #[test]
    fn same_payload_builds_equal_envelopes() {
        let json = r#"{"data": [{"symbol": "A"}], "meta": {"total": 1, "page": 1, "limit": 20}}"#;
        let first: Paginated<Item> = serde_json::from_str(json).unwrap();
        let second: Paginated<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_meta_fields_fail() {
        let json = r#"{"data": [], "meta": {"total": -1, "page": 1, "limit": 20}}"#;
        assert!(serde_json::from_str::<Paginated<Item>>(json).is_err());
    }

    #[test]
    fn default_page_matches_server_defaults() {
        assert_eq!(Page::default(), Page { limit: 20, page: 1 });
    }
}

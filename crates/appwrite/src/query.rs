use serde_json::json;

/// Builders for the JSON query strings the Databases API accepts.
pub struct Query;

impl Query {
    /// Match documents whose attribute equals the given value exactly.
    pub fn equal(attribute: &str, value: impl Into<serde_json::Value>) -> String {
        json!({
            "method": "equal",
            "attribute": attribute,
            "values": [value.into()],
        })
        .to_string()
    }

    /// Order results by the given attribute, descending.
    pub fn order_desc(attribute: &str) -> String {
        json!({
            "method": "orderDesc",
            "attribute": attribute,
        })
        .to_string()
    }

    /// Cap the number of returned documents.
    pub fn limit(limit: u32) -> String {
        json!({
            "method": "limit",
            "values": [limit],
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_builds_json_query() {
        let q = Query::equal("searchTerm", "dune");
        let v: serde_json::Value = serde_json::from_str(&q).unwrap();
        assert_eq!(v["method"], "equal");
        assert_eq!(v["attribute"], "searchTerm");
        assert_eq!(v["values"][0], "dune");
    }

    #[test]
    fn order_desc_builds_json_query() {
        let q = Query::order_desc("count");
        let v: serde_json::Value = serde_json::from_str(&q).unwrap();
        assert_eq!(v["method"], "orderDesc");
        assert_eq!(v["attribute"], "count");
    }

    #[test]
    fn limit_builds_json_query() {
        let q = Query::limit(5);
        let v: serde_json::Value = serde_json::from_str(&q).unwrap();
        assert_eq!(v["method"], "limit");
        assert_eq!(v["values"][0], 5);
    }
}

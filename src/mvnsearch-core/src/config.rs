use serde::{Deserialize, Serialize};

use crate::query::Query;
use crate::request::{SearchRequest, MAX_ROWS};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Full URL of the select endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Page size for requests created through `new_request`
    #[serde(default = "default_rows")]
    pub default_rows: i64,

    /// Filters applied to requests created through `new_request`
    #[serde(default)]
    pub default_query: Query,
}

fn default_base_url() -> String {
    "https://search.maven.org/solrsearch/select".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("mvnsearch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_rows() -> i64 {
    MAX_ROWS
}

impl ClientConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: ClientConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Request using the configured page size and default filters
    pub fn new_request(&self) -> SearchRequest {
        SearchRequest::new()
            .limit(self.default_rows)
            .query(self.default_query.clone())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            default_rows: default_rows(),
            default_query: Query::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://search.maven.org/solrsearch/select");
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("mvnsearch/"));
        assert_eq!(config.new_request().get_limit(), 200);
        assert!(config.default_query.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8983/solr/select", "default_rows": 50}"#)
                .unwrap();
        assert_eq!(config.base_url, "http://localhost:8983/solr/select");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.new_request().get_limit(), 50);
    }

    #[test]
    fn test_default_query_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"default_query": {"group_id": "org.apache.commons", "packaging": "jar"}}"#,
        )
        .unwrap();
        assert_eq!(
            config.default_query,
            Query::new()
                .with_group_id("org.apache.commons")
                .with_packaging("jar")
        );

        let request = config.new_request();
        assert_eq!(
            request.render(),
            "q=g:org.apache.commons%20AND%20p:jar&rows=200&wt=json&start=0"
        );

        let encoded = serde_json::to_value(&config).unwrap();
        assert_eq!(
            encoded["default_query"],
            serde_json::json!({"group_id": "org.apache.commons", "packaging": "jar"})
        );
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ClientConfig::load("./does-not-exist/mvnsearch.json").is_err());
    }
}

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;

use crate::query::Query;

/// Maximum page size accepted by the service
pub const MAX_ROWS: i64 = 200;

/// Core holding one document per artifact version
pub const GAV_CORE: &str = "gav";

/// Characters escaped in parameter keys and values. Query-language
/// punctuation (`*`, `:`, parentheses) is left readable.
const PARAM_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// SearchRequest configures one call to the search endpoint.
///
/// Builder methods take and return the request so they chain. None of them
/// validate: negative offsets or limits are rendered as given.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    start: i64,
    limit: i64,
    query: Query,
    core: Option<String>,
    sort_field: Option<String>,
    ascending: bool,
    facet: bool,
    facet_fields: Vec<String>,
    query_key: Option<String>,
    custom_params: HashMap<String, String>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self {
            start: 0,
            limit: MAX_ROWS,
            query: Query::default(),
            core: None,
            sort_field: None,
            ascending: false,
            facet: false,
            facet_fields: Vec::new(),
            query_key: None,
            custom_params: HashMap::new(),
        }
    }

    pub fn start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn core(mut self, core: impl Into<String>) -> Self {
        self.core = Some(core.into());
        self
    }

    /// Sort on `field`, keeping the current direction
    pub fn sort(mut self, field: impl Into<String>) -> Self {
        self.sort_field = Some(field.into());
        self
    }

    /// Sort direction; only rendered when a sort field is set
    pub fn ascending(mut self, ascending: bool) -> Self {
        self.ascending = ascending;
        self
    }

    pub fn sort_by(self, field: impl Into<String>, ascending: bool) -> Self {
        self.sort(field).ascending(ascending)
    }

    pub fn facet(mut self, enabled: bool) -> Self {
        self.facet = enabled;
        self
    }

    /// Append a facet field. Fields are ignored unless faceting is enabled.
    pub fn facet_field(mut self, field: impl Into<String>) -> Self {
        self.facet_fields.push(field.into());
        self
    }

    pub fn facet_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.facet_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Tag used by callers to correlate batched requests. Never sent.
    pub fn query_key(mut self, key: impl Into<String>) -> Self {
        self.query_key = Some(key.into());
        self
    }

    /// Set a custom parameter. A later call with the same key replaces the
    /// value. Reserved names (`q`, `rows`, `wt`, `start`) are not filtered
    /// and end up sent twice.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_params.insert(key.into(), value.into());
        self
    }

    /// Ask the service to highlight matches in `fields`
    pub fn highlight<I, S>(self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = fields
            .into_iter()
            .map(|f| f.as_ref().to_string())
            .collect();
        let request = self.param("hl", "true");
        if fields.is_empty() {
            request
        } else {
            request.param("hl.fl", fields.join(","))
        }
    }

    pub fn get_start(&self) -> i64 {
        self.start
    }

    pub fn get_limit(&self) -> i64 {
        self.limit
    }

    pub fn get_query(&self) -> &Query {
        &self.query
    }

    pub fn get_core(&self) -> Option<&str> {
        self.core.as_deref()
    }

    pub fn get_query_key(&self) -> Option<&str> {
        self.query_key.as_deref()
    }

    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.custom_params.get(key).map(String::as_str)
    }

    /// True when the request names a non-empty core
    pub fn has_core(&self) -> bool {
        self.core.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Parameters in wire order, before encoding
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("q".to_string(), self.query.render()),
            ("rows".to_string(), self.limit.to_string()),
            ("wt".to_string(), "json".to_string()),
            ("start".to_string(), self.start.to_string()),
        ];

        if let Some(core) = self.core.as_deref().filter(|c| !c.is_empty()) {
            params.push(("core".to_string(), core.to_string()));
        }

        if let Some(field) = self.sort_field.as_deref().filter(|f| !f.is_empty()) {
            let direction = if self.ascending { "asc" } else { "desc" };
            params.push(("sort".to_string(), format!("{} {}", field, direction)));
        }

        if self.facet {
            params.push(("facet".to_string(), "true".to_string()));
            for field in &self.facet_fields {
                params.push(("facet.field".to_string(), field.clone()));
            }
        }

        for (key, value) in &self.custom_params {
            params.push((key.clone(), value.clone()));
        }

        params
    }

    /// Render the encoded parameter string, without a leading `?`
    pub fn render(&self) -> String {
        self.params()
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, PARAM_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::dependency_query;

    fn count(haystack: &str, key: &str) -> usize {
        haystack
            .split('&')
            .filter(|pair| pair.starts_with(&format!("{}=", key)))
            .count()
    }

    #[test]
    fn test_defaults() {
        let request = SearchRequest::new();
        assert_eq!(request.get_start(), 0);
        assert_eq!(request.get_limit(), 200);
        assert_eq!(request.render(), "q=*:*&rows=200&wt=json&start=0");
    }

    #[test]
    fn test_core_scenario() {
        let request = SearchRequest::new().start(0).limit(10).core("gav");
        assert_eq!(request.render(), "q=*:*&rows=10&wt=json&start=0&core=gav");
    }

    #[test]
    fn test_empty_core_is_omitted() {
        let request = SearchRequest::new().core("");
        assert!(!request.has_core());
        assert_eq!(request.render(), "q=*:*&rows=200&wt=json&start=0");
    }

    #[test]
    fn test_query_is_encoded() {
        let request = SearchRequest::new()
            .query(Query::coordinate("com.google.inject", "guice"))
            .limit(20);
        assert_eq!(
            request.render(),
            "q=g:com.google.inject%20AND%20a:guice&rows=20&wt=json&start=0"
        );
    }

    #[test]
    fn test_sort_direction_follows_flag() {
        let request = SearchRequest::new().sort("timestamp");
        assert!(request.render().ends_with("&sort=timestamp%20desc"));

        let request = request.ascending(true);
        assert!(request.render().ends_with("&sort=timestamp%20asc"));

        let request = request.ascending(false);
        assert!(request.render().ends_with("&sort=timestamp%20desc"));
    }

    #[test]
    fn test_ascending_without_sort_field_is_ignored() {
        let request = SearchRequest::new().ascending(true);
        assert!(!request.render().contains("sort="));
    }

    #[test]
    fn test_empty_sort_field_is_omitted() {
        let rendered = SearchRequest::new().sort("").ascending(true).render();
        assert!(!rendered.contains("sort="));
        assert_eq!(rendered, "q=*:*&rows=200&wt=json&start=0");
    }

    #[test]
    fn test_facet_without_fields() {
        let rendered = SearchRequest::new().facet(true).render();
        assert_eq!(count(&rendered, "facet"), 1);
        assert_eq!(count(&rendered, "facet.field"), 0);
        assert!(rendered.ends_with("&facet=true"));
    }

    #[test]
    fn test_facet_fields_keep_order() {
        let request = SearchRequest::new()
            .facet(true)
            .facet_fields(["p", "g"])
            .facet_field("ec");
        let rendered = request.render();
        assert!(rendered.ends_with("&facet=true&facet.field=p&facet.field=g&facet.field=ec"));
        assert_eq!(count(&rendered, "facet.field"), 3);
    }

    #[test]
    fn test_facet_fields_need_toggle() {
        let rendered = SearchRequest::new().facet_field("p").render();
        assert!(!rendered.contains("facet"));
    }

    #[test]
    fn test_full_render_order() {
        let request = SearchRequest::new()
            .start(40)
            .limit(20)
            .query(Query::new().with_group_id("junit"))
            .core("gav")
            .sort_by("v", true)
            .facet(true)
            .facet_field("p")
            .param("fl", "id,g,a,v");
        assert_eq!(
            request.render(),
            "q=g:junit&rows=20&wt=json&start=40&core=gav&sort=v%20asc\
             &facet=true&facet.field=p&fl=id,g,a,v"
        );
    }

    #[test]
    fn test_mandatory_params_appear_once() {
        let request = SearchRequest::new()
            .core("gav")
            .sort("timestamp")
            .facet(true)
            .facet_field("p")
            .param("fl", "id")
            .param("hl", "true");
        let rendered = request.render();
        for key in ["q", "rows", "wt", "start"] {
            assert_eq!(count(&rendered, key), 1, "{} should appear once", key);
        }
        assert_eq!(count(&rendered, "wt"), 1);
        assert!(rendered.contains("wt=json"));
    }

    #[test]
    fn test_custom_param_last_write_wins() {
        let request = SearchRequest::new().param("fl", "id").param("fl", "id,g");
        assert_eq!(request.get_param("fl"), Some("id,g"));
        assert_eq!(count(&request.render(), "fl"), 1);
    }

    #[test]
    fn test_reserved_custom_key_is_sent_twice() {
        let request = SearchRequest::new().limit(10).param("rows", "5");
        let rendered = request.render();
        assert_eq!(count(&rendered, "rows"), 2);
        assert!(rendered.starts_with("q=*:*&rows=10&"));
        assert!(rendered.ends_with("&rows=5"));
    }

    #[test]
    fn test_query_key_is_not_rendered() {
        let request = SearchRequest::new().query_key("batch-7");
        assert_eq!(request.get_query_key(), Some("batch-7"));
        assert!(!request.render().contains("batch-7"));
    }

    #[test]
    fn test_negative_pagination_is_rendered_as_given() {
        let rendered = SearchRequest::new().start(-5).limit(-1).render();
        assert_eq!(rendered, "q=*:*&rows=-1&wt=json&start=-5");
    }

    #[test]
    fn test_special_characters_are_escaped() {
        let request = SearchRequest::new()
            .query(Query::advanced("text:\"a&b\""))
            .param("x y", "1+1=2");
        let rendered = request.render();
        assert!(rendered.starts_with("q=text:%22a%26b%22&"));
        assert!(rendered.ends_with("&x%20y=1%2B1%3D2"));
    }

    #[test]
    fn test_highlight_sets_custom_params() {
        let request = SearchRequest::new().highlight(["a", "text"]);
        assert_eq!(request.get_param("hl"), Some("true"));
        assert_eq!(request.get_param("hl.fl"), Some("a,text"));

        let request = SearchRequest::new().highlight(Vec::<String>::new());
        assert_eq!(request.get_param("hl"), Some("true"));
        assert_eq!(request.get_param("hl.fl"), None);
    }

    #[test]
    fn test_dependency_query_request() {
        let request = SearchRequest::new()
            .query(Query::advanced(dependency_query("junit", "junit")))
            .limit(5);
        assert_eq!(request.render(), "q=d:junit:junit&rows=5&wt=json&start=0");
    }

    #[test]
    fn test_render_is_stable() {
        let request = SearchRequest::new()
            .query(Query::coordinate("g", "a"))
            .sort("v")
            .param("fl", "id");
        assert_eq!(request.render(), request.render());
        assert_eq!(request.to_string(), request.render());
    }
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;
use crate::models::Document;

/// Highlighted fragments per field, keyed by document id
pub type Highlighting = HashMap<String, HashMap<String, Vec<String>>>;

/// SearchResponse is the decoded envelope of one search call.
///
/// `facet_counts` and `highlighting` are `None` when the request did not ask
/// for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse<D> {
    #[serde(rename = "responseHeader")]
    pub header: ResponseHeader,
    #[serde(rename = "response")]
    pub body: ResponseBody<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet_counts: Option<FacetCounts>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighting: Option<Highlighting>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseHeader {
    pub status: i32,
    #[serde(rename = "QTime")]
    pub query_time: i64,
    /// Request parameters as echoed by the service
    #[serde(default)]
    pub params: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseBody<D> {
    #[serde(rename = "numFound")]
    pub num_found: u64,
    pub start: u64,
    /// Hits in the order the service ranked them
    pub docs: Vec<D>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetCounts {
    /// Field name to a flat `[value, count, value, count, ...]` list
    #[serde(default)]
    pub facet_fields: HashMap<String, Vec<serde_json::Value>>,
    #[serde(default)]
    pub facet_queries: HashMap<String, u64>,
    #[serde(default)]
    pub facet_dates: HashMap<String, serde_json::Value>,
}

impl FacetCounts {
    /// Value/count pairs for `field`, in the order returned.
    /// Pairs whose count is not a non-negative integer are skipped.
    pub fn field_counts(&self, field: &str) -> Option<Vec<(String, u64)>> {
        let flat = self.facet_fields.get(field)?;
        let pairs = flat
            .chunks_exact(2)
            .filter_map(|pair| {
                let value = match &pair[0] {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                pair[1].as_u64().map(|count| (value, count))
            })
            .collect();
        Some(pairs)
    }
}

impl<D> SearchResponse<D> {
    pub fn docs(&self) -> &[D] {
        &self.body.docs
    }

    pub fn num_found(&self) -> u64 {
        self.body.num_found
    }

    /// True when hits remain past this page
    pub fn has_more(&self) -> bool {
        self.body
            .start
            .saturating_add(self.body.docs.len() as u64)
            < self.body.num_found
    }
}

impl<D: Document> SearchResponse<D> {
    /// Highlighted fields for `doc`, looked up by its id
    pub fn highlights_for(&self, doc: &D) -> Option<&HashMap<String, Vec<String>>> {
        self.highlighting.as_ref()?.get(doc.id())
    }

    /// Highlighted fragments of one field of `doc`
    pub fn fragments(&self, doc: &D, field: &str) -> Option<&[String]> {
        self.highlights_for(doc)?.get(field).map(Vec::as_slice)
    }
}

/// Decode a raw JSON body into an envelope of `D` documents
pub fn decode<D: DeserializeOwned>(raw: &str) -> Result<SearchResponse<D>> {
    decode_slice(raw.as_bytes())
}

pub fn decode_slice<D: DeserializeOwned>(raw: &[u8]) -> Result<SearchResponse<D>> {
    let response: SearchResponse<D> = serde_json::from_slice(raw)?;
    tracing::debug!(
        status = response.header.status,
        qtime = response.header.query_time,
        num_found = response.body.num_found,
        docs = response.body.docs.len(),
        facets = response.facet_counts.is_some(),
        highlighting = response.highlighting.is_some(),
        "decoded search response"
    );
    Ok(response)
}

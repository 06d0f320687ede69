//! mvnsearch Client Library
//!
//! HTTP client for Solr-style Maven artifact search endpoints.

mod client;

pub use client::{BatchResult, Client};
pub use mvnsearch_core::highlight;
pub use mvnsearch_core::response::SearchResponse;
pub use mvnsearch_core::{
    dependency_query, license_query, Artifact, ClientConfig, DecodeError, Document, Query,
    SearchRequest, Version,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;

//! mvnsearch Core Library
//!
//! This crate provides the transport-free half of the mvnsearch client:
//! - Query construction for Maven coordinate searches
//! - Search request rendering to an encoded parameter string
//! - Response envelope decoding for artifact and version documents
//! - Highlighting helpers
//! - Client configuration

pub mod config;
pub mod error;
pub mod highlight;
pub mod models;
pub mod query;
pub mod request;
pub mod response;

// Re-export commonly used types
pub use config::ClientConfig;
pub use error::DecodeError;
pub use models::*;
pub use query::{dependency_query, license_query, Query};
pub use request::SearchRequest;
pub use response::{decode, decode_slice, FacetCounts, Highlighting, SearchResponse};

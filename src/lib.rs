//! Container image end-of-life auditing.
//!
//! Resolves an image's version against the product's lifecycle records and
//! classifies it into a risk tier (CRITICAL/WARNING/INFO/OK/UNKNOWN).
//!
//! # Modules
//!
//! - [`audit`]: Pipeline gluing image parsing, data retrieval, and classification
//! - [`config`]: API endpoint and classification window constants
//! - [`image`]: Container image reference parsing
//! - [`lifecycle`]: Core matching and classification engine
//! - [`output`]: Terminal and JSON report rendering
//! - [`provider`]: Lifecycle data providers (endoflife.date)

pub mod audit;
pub mod config;
pub mod image;
pub mod lifecycle;
pub mod output;
pub mod provider;

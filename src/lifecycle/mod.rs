//! Version resolution and lifecycle classification engine
//!
//! This module turns a requested version string plus a product's lifecycle
//! records into a single risk classification.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  candidates │────▶│   Matcher   │────▶│ Classifier  │
//! │  (records)  │     │ (4 tiers)   │     │ (cascade)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │  EolReport  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`]: Lifecycle records, the `DateOrFlag` boundary union, and reports
//! - [`matcher`]: Tiered version-to-cycle resolution
//! - [`classifier`]: Date-driven status cascade

pub mod classifier;
pub mod matcher;
pub mod types;

pub use classifier::{classify, overall_latest};
pub use matcher::resolve;
pub use types::{DateOrFlag, EolReport, LifecycleRecord, Status};

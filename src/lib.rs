//! Email address parsing and normalization with disposable domain detection.
//!
//! ```
//! use disposable_email::blocklist::{BlocklistSet, BlocklistStore};
//! use disposable_email::validation::parser::EmailParser;
//! use std::sync::Arc;
//!
//! let store = Arc::new(BlocklistStore::new(BlocklistSet::from_domains(["mailinator.com"])));
//! let parser = EmailParser::with_store(store);
//!
//! let parsed = parser.parse("John.Smith+news@GMAIL.com", false).unwrap();
//! assert_eq!(parsed.normalized, "johnsmith");
//! assert_eq!(parsed.extra, "news");
//! assert!(!parsed.disposable);
//! ```

pub mod blocklist;
pub mod config;
pub mod error;
pub mod graphql;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod telemetry;
pub mod validation;

pub use blocklist::{BlocklistSet, BlocklistStore, Updater};
pub use error::{EmailError, InvalidReason, RefreshError};
pub use validation::domain::validate_domain;
pub use validation::parser::{EmailParser, ParsedEmail};

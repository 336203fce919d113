/// Structural check of the domain part of an address.
///
/// The domain must already be trimmed and lower-cased. Only characters,
/// leading/trailing separators and the final label length are checked.
///
/// # Examples
/// ```
/// use disposable_email::validation::domain::validate_domain;
///
/// assert!(validate_domain("good.co"));
/// assert!(!validate_domain("x.c"));
/// ```
pub mod domain;

/// Per-provider canonicalization of the local part.
pub mod normalize;

/// Trims, splits, validates and normalizes addresses, and flags
/// disposable domains.
///
/// # Examples
/// ```
/// use disposable_email::blocklist::store::{BlocklistSet, BlocklistStore};
/// use disposable_email::validation::parser::EmailParser;
/// use std::sync::Arc;
///
/// let store = Arc::new(BlocklistStore::new(BlocklistSet::from_domains(["yopmail.com"])));
/// let parser = EmailParser::with_store(store);
///
/// assert!(parser.parse("bob@yopmail.com", false).unwrap().disposable);
/// assert!(parser.parse("bob@", false).is_err());
/// ```
pub mod parser;

use super::domain::validate_domain;
use super::normalize::RuleRegistry;
use crate::blocklist::store::BlocklistStore;
use crate::error::{EmailError, InvalidReason};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use utoipa::ToSchema;

/// A parsed email address.
///
/// An address is `<local-part>@<domain>`. The local part is case-sensitive
/// by the RFCs, but practically every reputable provider treats it as
/// case-insensitive, so that is the default. The domain is always
/// lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ParsedEmail {
    /// Input address with surrounding whitespace removed.
    pub email: String,
    /// Everything before the `@`, untouched.
    pub local_part: String,
    /// Everything after the `@`, lower-cased.
    pub domain: String,
    /// Local part the way the user seems to prefer it, with provider
    /// suffixes removed but case kept.
    pub preferred: String,
    /// Local part in canonical form, for uniqueness comparison.
    ///
    /// For gmail `john.smith`, `johnsmith` and `JohnSmith` all normalize to `johnsmith`.
    pub normalized: String,
    /// Provider specific suffix. `adam+junk@gmail.com` has extra `junk`.
    pub extra: String,
    /// Whether the domain was on the blocklist at lookup time.
    pub disposable: bool,
}

/// Parses addresses against a rule registry and a shared blocklist.
///
/// Cheap to clone and safe to use from any number of threads.
#[derive(Debug, Clone)]
pub struct EmailParser {
    rules: Arc<RuleRegistry>,
    store: Arc<BlocklistStore>,
}

impl EmailParser {
    pub fn new(rules: RuleRegistry, store: Arc<BlocklistStore>) -> Self {
        Self {
            rules: Arc::new(rules),
            store,
        }
    }

    /// Parser with the built-in provider rules.
    pub fn with_store(store: Arc<BlocklistStore>) -> Self {
        Self::new(RuleRegistry::with_defaults(), store)
    }

    pub fn store(&self) -> &Arc<BlocklistStore> {
        &self.store
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Parses `email`. Only basic structural checks are done; this is not
    /// an RFC 5322 validator.
    ///
    /// # Examples
    /// ```
    /// use disposable_email::validation::parser::EmailParser;
    /// use disposable_email::blocklist::store::BlocklistStore;
    /// use std::sync::Arc;
    ///
    /// let parser = EmailParser::with_store(Arc::new(BlocklistStore::default()));
    /// let parsed = parser.parse("adam+junk@gmail.com", false).unwrap();
    /// assert_eq!(parsed.normalized, "adam");
    /// assert_eq!(parsed.extra, "junk");
    /// ```
    pub fn parse(&self, email: &str, case_sensitive: bool) -> Result<ParsedEmail, EmailError> {
        let email = email.trim();
        let invalid = |reason: InvalidReason| {
            debug!(email, %reason, "rejected email");
            EmailError::InvalidFormat {
                email: email.to_string(),
                reason,
            }
        };

        if email.is_empty() {
            return Err(invalid(InvalidReason::Empty));
        }

        if email.chars().any(char::is_whitespace) {
            return Err(invalid(InvalidReason::Whitespace));
        }

        let mut parts = email.split('@');
        let (Some(local_part), Some(domain), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid(InvalidReason::AtCount));
        };

        let domain = domain.to_lowercase();
        if !validate_domain(&domain) {
            return Err(invalid(InvalidReason::InvalidDomain));
        }

        let (normalized, preferred, extra) =
            self.rules.normalize(local_part, &domain, case_sensitive);

        let disposable = self.store.active_set().contains(&domain);

        Ok(ParsedEmail {
            email: email.to_string(),
            local_part: local_part.to_string(),
            domain,
            preferred,
            normalized,
            extra,
            disposable,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocklist::store::BlocklistSet;

    fn parser() -> EmailParser {
        let set = BlocklistSet::from_domains(["mailinator.com"]);
        EmailParser::with_store(Arc::new(BlocklistStore::new(set)))
    }

    fn reason(email: &str) -> InvalidReason {
        parser().parse(email, false).unwrap_err().reason()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(reason(""), InvalidReason::Empty);
        assert_eq!(reason("   \t\n"), InvalidReason::Empty);
    }

    #[test]
    fn test_embedded_whitespace() {
        assert_eq!(reason("a b@x.com"), InvalidReason::Whitespace);
        assert_eq!(reason("a\tb@x.com"), InvalidReason::Whitespace);
        assert_eq!(reason("ab@x.c\u{00a0}om"), InvalidReason::Whitespace);
    }

    #[test]
    fn test_at_count() {
        assert_eq!(reason("no-at.example.com"), InvalidReason::AtCount);
        assert_eq!(reason("a@b@example.com"), InvalidReason::AtCount);
    }

    #[test]
    fn test_invalid_domain() {
        assert_eq!(reason("user@-bad.com"), InvalidReason::InvalidDomain);
        assert_eq!(reason("user@x.c"), InvalidReason::InvalidDomain);
        assert_eq!(reason("user@"), InvalidReason::InvalidDomain);
        assert_eq!(reason("user@exämple.com"), InvalidReason::InvalidDomain);
    }

    #[test]
    fn test_domain_uses_unicode_lowercasing() {
        // 'İ' lower-cases to "i\u{307}", which is not a domain character.
        assert_eq!(reason("a@\u{130}x.com"), InvalidReason::InvalidDomain);

        // The Kelvin sign lower-cases to ASCII 'k'.
        let parsed = parser().parse("a@\u{212a}x.com", false).unwrap();
        assert_eq!(parsed.domain, "kx.com");
    }

    #[test]
    fn test_error_carries_trimmed_email() {
        let err = parser().parse("  a@b@c.com  ", false).unwrap_err();
        assert_eq!(
            err,
            EmailError::InvalidFormat {
                email: "a@b@c.com".to_string(),
                reason: InvalidReason::AtCount,
            }
        );
    }

    #[test]
    fn test_gmail_suffix() {
        let parsed = parser().parse("adam+junk@gmail.com", false).unwrap();
        assert_eq!(parsed.normalized, "adam");
        assert_eq!(parsed.preferred, "adam");
        assert_eq!(parsed.extra, "junk");
        assert_eq!(parsed.domain, "gmail.com");
        assert_eq!(parsed.local_part, "adam+junk");
        assert!(!parsed.disposable);
    }

    #[test]
    fn test_gmail_case_insensitive_by_default() {
        let parsed = parser().parse("  John.Smith@GMAIL.com ", false).unwrap();
        assert_eq!(parsed.email, "John.Smith@GMAIL.com");
        assert_eq!(parsed.normalized, "johnsmith");
        assert_eq!(parsed.preferred, "John.Smith");
        assert_eq!(parsed.domain, "gmail.com");
    }

    #[test]
    fn test_gmail_case_sensitive() {
        let parsed = parser().parse("John.Smith@gmail.com", true).unwrap();
        assert_eq!(parsed.normalized, "JohnSmith");
        assert_eq!(parsed.domain, "gmail.com");
    }

    #[test]
    fn test_other_domain_keeps_separators() {
        let parsed = parser().parse("Jane.Doe+x@Example.org", false).unwrap();
        assert_eq!(parsed.normalized, "jane.doe+x");
        assert_eq!(parsed.preferred, "Jane.Doe+x");
        assert_eq!(parsed.extra, "");
        assert_eq!(parsed.domain, "example.org");
    }

    #[test]
    fn test_disposable_lookup() {
        let parsed = parser().parse("someone@MAILINATOR.com", false).unwrap();
        assert!(parsed.disposable);
    }

    #[test]
    fn test_disposable_follows_swap() {
        let parser = parser();
        assert!(!parser.parse("a@temp-mail.io", false).unwrap().disposable);

        parser
            .store()
            .swap(BlocklistSet::from_domains(["temp-mail.io"]));

        assert!(parser.parse("a@temp-mail.io", false).unwrap().disposable);
        assert!(!parser.parse("a@mailinator.com", false).unwrap().disposable);
    }

    #[test]
    fn test_normalized_ignores_blocklist() {
        let parser = parser();
        let before = parser.parse("A.B+c@gmail.com", false).unwrap();
        parser.store().swap(BlocklistSet::from_domains(["gmail.com"]));
        let after = parser.parse("A.B+c@gmail.com", false).unwrap();

        assert_eq!(before.normalized, after.normalized);
        assert!(after.disposable);
    }
}

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Local part after a provider rule has been applied, before case folding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    /// Form used for uniqueness comparison.
    pub base: String,
    /// Form the user most likely wants displayed.
    pub preferred: String,
    /// Provider specific suffix that was stripped, empty if none.
    pub extra: String,
}

/// Per-provider canonicalization of a local part.
pub trait DomainRule: Send + Sync {
    fn apply(&self, local_part: &str) -> Canonical;
}

/// Leaves the local part alone. Used for every domain without a registered rule.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityRule;

impl DomainRule for IdentityRule {
    fn apply(&self, local_part: &str) -> Canonical {
        Canonical {
            base: local_part.to_string(),
            preferred: local_part.to_string(),
            extra: String::new(),
        }
    }
}

/// Sub-addressing rule: everything after the first `separator` is dropped
/// into `extra`, and optionally dots are ignored.
#[derive(Debug, Clone, Copy)]
pub struct SubaddressRule {
    pub separator: char,
    pub strip_dots: bool,
}

impl SubaddressRule {
    /// `john.smith+news@gmail.com` and `johnsmith@gmail.com` are the same mailbox.
    pub fn gmail() -> Self {
        Self {
            separator: '+',
            strip_dots: true,
        }
    }
}

impl DomainRule for SubaddressRule {
    fn apply(&self, local_part: &str) -> Canonical {
        let (base, extra) = match local_part.split_once(self.separator) {
            Some((base, extra)) => (base, extra),
            None => (local_part, ""),
        };

        let canonical = if self.strip_dots {
            base.replace('.', "")
        } else {
            base.to_string()
        };

        Canonical {
            base: canonical,
            preferred: base.to_string(),
            extra: extra.to_string(),
        }
    }
}

/// Maps exact domain names to the rule used for their local parts.
#[derive(Clone)]
pub struct RuleRegistry {
    rules: HashMap<String, Arc<dyn DomainRule>>,
    fallback: Arc<dyn DomainRule>,
}

impl RuleRegistry {
    /// A registry with no provider rules; every domain gets the identity rule.
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: Arc::new(IdentityRule),
        }
    }

    /// The built-in provider rules.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("gmail.com", SubaddressRule::gmail());
        registry
    }

    /// Registers `rule` for `domain`, replacing any previous rule.
    /// The domain is matched exactly against the lower-cased address domain.
    pub fn register(&mut self, domain: impl Into<String>, rule: impl DomainRule + 'static) {
        self.rules.insert(domain.into().to_lowercase(), Arc::new(rule));
    }

    pub fn rule_for(&self, domain: &str) -> &dyn DomainRule {
        self.rules
            .get(domain)
            .map(|rule| rule.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }

    /// Canonicalizes `local_part` for `domain`.
    ///
    /// Returns `(normalized, preferred, extra)`. Unless `case_sensitive` is set
    /// the normalized form is Unicode lower-cased; `preferred` always keeps the
    /// case it was given in.
    pub fn normalize(
        &self,
        local_part: &str,
        domain: &str,
        case_sensitive: bool,
    ) -> (String, String, String) {
        let Canonical {
            base,
            preferred,
            extra,
        } = self.rule_for(domain).apply(local_part);

        let normalized = if case_sensitive {
            base
        } else {
            base.to_lowercase()
        };

        (normalized, preferred, extra)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut domains: Vec<&String> = self.rules.keys().collect();
        domains.sort();
        f.debug_struct("RuleRegistry")
            .field("domains", &domains)
            .finish()
    }
}

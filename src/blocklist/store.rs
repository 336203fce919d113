use crate::error::RefreshError;
use crate::validation::domain::validate_domain;
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::io::BufRead;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

const BUNDLED_LIST: &str = include_str!("../../assets/disposable_email_blocklist.conf");

/// Maximum number of rejected lines logged individually per ingestion.
const MAX_LOGGED_REJECTS: usize = 10;

/// An immutable set of disposable domains.
///
/// Sets are never edited after construction; a refresh builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlocklistSet {
    domains: HashSet<String>,
}

impl BlocklistSet {
    /// The list shipped with the crate.
    pub fn bundled() -> Self {
        // The bundled asset is plain ASCII, so reading it cannot fail.
        Self::from_reader(BUNDLED_LIST.as_bytes()).unwrap_or_default()
    }

    /// Builds a set from already-clean domain names. Entries are lower-cased.
    pub fn from_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Reads one domain per line.
    ///
    /// Blank lines and `#` comments are skipped. Lines that do not pass
    /// [`validate_domain`] after lower-casing are dropped and logged.
    /// Content that is not valid UTF-8 is a [`RefreshError::Parse`], and so
    /// is content where every entry was rejected (an HTML error page served
    /// with a 200, for instance).
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, RefreshError> {
        let mut domains = HashSet::with_capacity(4096);
        let mut rejected = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| RefreshError::Parse(format!("line {}: {}", idx + 1, e)))?;
            let entry = line.trim();

            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }

            let domain = entry.to_lowercase();
            if validate_domain(&domain) {
                domains.insert(domain);
            } else {
                rejected += 1;
                if rejected <= MAX_LOGGED_REJECTS {
                    warn!(line = idx + 1, entry, "skipping invalid blocklist entry");
                }
            }
        }

        if rejected > MAX_LOGGED_REJECTS {
            warn!(
                "... and {} more invalid blocklist entries",
                rejected - MAX_LOGGED_REJECTS
            );
        }
        if domains.is_empty() && rejected > 0 {
            return Err(RefreshError::Parse(format!(
                "no valid domains in list ({} lines rejected)",
                rejected
            )));
        }
        debug!(domains = domains.len(), rejected, "parsed blocklist");

        Ok(Self { domains })
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }
}

#[derive(Debug)]
struct Active {
    set: Arc<BlocklistSet>,
    refreshed_at: Option<DateTime<Utc>>,
}

/// Holds the currently active [`BlocklistSet`].
///
/// Readers take a cheap `Arc` snapshot and never see a half-built set.
/// Writers replace the whole reference; the lock is only held for the
/// pointer swap.
#[derive(Debug)]
pub struct BlocklistStore {
    active: RwLock<Active>,
}

impl BlocklistStore {
    pub fn new(set: BlocklistSet) -> Self {
        Self {
            active: RwLock::new(Active {
                set: Arc::new(set),
                refreshed_at: None,
            }),
        }
    }

    /// Store seeded with the bundled list.
    pub fn bundled() -> Self {
        let store = Self::new(BlocklistSet::bundled());
        info!(domains = store.len(), "loaded bundled disposable domain list");
        store
    }

    /// Snapshot of the active set. Later swaps do not affect the returned value.
    pub fn active_set(&self) -> Arc<BlocklistSet> {
        // A panicking reader cannot leave the reference half-written, so the
        // value behind a poisoned lock is still whole.
        let guard = self.active.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard.set)
    }

    /// Replaces the active set wholesale. The last call to finish wins.
    pub fn swap(&self, set: BlocklistSet) {
        let set = Arc::new(set);
        let now = Utc::now();
        let previous = {
            let mut guard = self.active.write().unwrap_or_else(PoisonError::into_inner);
            guard.refreshed_at = Some(now);
            std::mem::replace(&mut guard.set, set)
        };
        // Dropped outside the lock; freeing a large set is not free.
        drop(previous);
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.active_set().contains(domain)
    }

    pub fn len(&self) -> usize {
        self.active_set().len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_set().is_empty()
    }

    /// Time of the last successful swap, `None` while the initial set is active.
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .refreshed_at
    }
}

impl Default for BlocklistStore {
    fn default() -> Self {
        Self::new(BlocklistSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_list_loads() {
        let set = BlocklistSet::bundled();
        assert!(!set.is_empty());
        assert!(set.contains("mailinator.com"));
        assert!(!set.contains("gmail.com"));
    }

    #[test]
    fn test_from_reader_filters_noise() {
        let content = "\
# disposable domains
10minutemail.com
  GuerrillaMail.com

not a domain
-bad.com
tempmail.org
";
        let set = BlocklistSet::from_reader(content.as_bytes()).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("10minutemail.com"));
        assert!(set.contains("guerrillamail.com"));
        assert!(set.contains("tempmail.org"));
        assert!(!set.contains("# disposable domains"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_from_reader_rejects_invalid_utf8() {
        let content: &[u8] = b"ok.com\n\xff\xfe.com\n";
        let err = BlocklistSet::from_reader(content).unwrap_err();
        assert!(matches!(err, RefreshError::Parse(_)));
    }

    #[test]
    fn test_from_reader_rejects_content_without_domains() {
        let content = "<!DOCTYPE html>\n<html><body>Rate limited</body></html>\n";
        let err = BlocklistSet::from_reader(content.as_bytes()).unwrap_err();
        assert_eq!(
            err,
            RefreshError::Parse("no valid domains in list (2 lines rejected)".to_string())
        );
    }

    #[test]
    fn test_from_reader_accepts_comment_only_list() {
        let set = BlocklistSet::from_reader("# nothing yet\n\n".as_bytes()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_from_domains_lowercases() {
        let set = BlocklistSet::from_domains(["Temp-Mail.IO", "yopmail.com"]);
        assert!(set.contains("temp-mail.io"));
        assert!(set.contains("yopmail.com"));
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn test_swap_replaces_whole_set() {
        let store = BlocklistStore::new(BlocklistSet::from_domains(["old.com"]));
        assert!(store.last_refreshed().is_none());

        store.swap(BlocklistSet::from_domains(["new.com"]));

        assert!(!store.contains("old.com"));
        assert!(store.contains("new.com"));
        assert_eq!(store.len(), 1);
        assert!(store.last_refreshed().is_some());
    }

    #[test]
    fn test_snapshot_survives_swap() {
        let store = BlocklistStore::new(BlocklistSet::from_domains(["old.com"]));
        let snapshot = store.active_set();

        store.swap(BlocklistSet::from_domains(["new.com"]));

        assert!(snapshot.contains("old.com"));
        assert!(!snapshot.contains("new.com"));
    }
}

use disposable_email::blocklist::{BlocklistSet, BlocklistStore, FileListProvider, Updater};
use disposable_email::validation::parser::EmailParser;
use disposable_email::{InvalidReason, RefreshError};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use tokio_util::sync::CancellationToken;

const OLD: [&str; 3] = ["old-a.com", "old-b.com", "old-c.com"];
const NEW: [&str; 3] = ["new-a.com", "new-b.com", "new-c.com"];

#[test]
fn readers_see_whole_sets_during_swaps() {
    let store = Arc::new(BlocklistStore::new(BlocklistSet::from_domains(OLD)));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                let mut observed = 0usize;
                while !done.load(Ordering::Relaxed) {
                    let set = store.active_set();
                    let old = OLD.iter().filter(|d| set.contains(d)).count();
                    let new = NEW.iter().filter(|d| set.contains(d)).count();
                    assert!(
                        (old == 3 && new == 0) || (old == 0 && new == 3),
                        "mixed set observed: {old} old, {new} new"
                    );
                    observed += 1;
                }
                observed
            })
        })
        .collect();

    for i in 0..2_000 {
        let next = if i % 2 == 0 { NEW } else { OLD };
        store.swap(BlocklistSet::from_domains(next));
    }
    done.store(true, Ordering::Relaxed);

    for reader in readers {
        assert!(reader.join().expect("reader panicked") > 0);
    }
}

#[test]
fn concurrent_swaps_leave_one_whole_set() {
    const WRITERS: [[&str; 3]; 4] = [
        OLD,
        NEW,
        ["w2-a.com", "w2-b.com", "w2-c.com"],
        ["w3-a.com", "w3-b.com", "w3-c.com"],
    ];
    let whole = |set: &BlocklistSet| {
        set.len() == 3
            && WRITERS
                .iter()
                .any(|domains| domains.iter().all(|d| set.contains(d)))
    };

    let store = Arc::new(BlocklistStore::new(BlocklistSet::from_domains(OLD)));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    let set = store.active_set();
                    assert!(whole(&set), "partial set observed: {:?}", set);
                }
            })
        })
        .collect();

    let writers: Vec<_> = WRITERS
        .iter()
        .map(|domains| {
            let store = Arc::clone(&store);
            let domains = *domains;
            thread::spawn(move || {
                for _ in 0..500 {
                    store.swap(BlocklistSet::from_domains(domains));
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().expect("writer panicked");
    }
    done.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().expect("reader panicked");
    }

    let last = store.active_set();
    let matching: Vec<_> = WRITERS
        .iter()
        .filter(|domains| *last == BlocklistSet::from_domains(**domains))
        .collect();
    assert_eq!(matching.len(), 1, "final set is not one writer's set: {:?}", last);
    assert!(store.last_refreshed().is_some());
}

#[test]
fn concurrent_parses_during_swaps_stay_valid() {
    let store = Arc::new(BlocklistStore::new(BlocklistSet::from_domains(OLD)));
    let parser = EmailParser::with_store(Arc::clone(&store));
    let done = Arc::new(AtomicBool::new(false));

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let parser = parser.clone();
            let done = Arc::clone(&done);
            thread::spawn(move || {
                while !done.load(Ordering::Relaxed) {
                    let parsed = parser.parse("Some.One+x@gmail.com", false).unwrap();
                    assert_eq!(parsed.normalized, "someone");
                    assert!(!parsed.disposable);
                    assert_eq!(
                        parser.parse("a b@old-a.com", false).unwrap_err().reason(),
                        InvalidReason::Whitespace
                    );
                }
            })
        })
        .collect();

    for i in 0..500 {
        let next = if i % 2 == 0 { NEW } else { OLD };
        store.swap(BlocklistSet::from_domains(next));
    }
    done.store(true, Ordering::Relaxed);

    for reader in readers {
        reader.join().expect("reader panicked");
    }
}

#[tokio::test]
async fn refresh_flags_new_domain() {
    let mut list = tempfile::NamedTempFile::new().unwrap();
    writeln!(list, "# upstream list").unwrap();
    writeln!(list, "temp-mail.io").unwrap();

    let store = Arc::new(BlocklistStore::bundled());
    let parser = EmailParser::with_store(Arc::clone(&store));
    let updater = Updater::new(FileListProvider::new(list.path()));

    assert!(!parser.parse("a@temp-mail.io", false).unwrap().disposable);

    let count = updater
        .refresh(&CancellationToken::new(), &store)
        .await
        .unwrap();

    assert_eq!(count, 1);
    assert!(parser.parse("a@temp-mail.io", false).unwrap().disposable);
}

#[tokio::test]
async fn canceled_refresh_changes_nothing() {
    let mut list = tempfile::NamedTempFile::new().unwrap();
    writeln!(list, "temp-mail.io").unwrap();

    let store = Arc::new(BlocklistStore::bundled());
    let parser = EmailParser::with_store(Arc::clone(&store));
    let updater = Updater::new(FileListProvider::new(list.path()));

    let before = parser.parse("x@mailinator.com", false).unwrap();

    let cancel = CancellationToken::new();
    cancel.cancel();
    let result = updater.refresh(&cancel, &store).await;

    assert_eq!(result, Err(RefreshError::Canceled));
    assert_eq!(parser.parse("x@mailinator.com", false).unwrap(), before);
    assert!(!parser.parse("a@temp-mail.io", false).unwrap().disposable);
}

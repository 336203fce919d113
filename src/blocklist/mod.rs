//! Disposable domain blocklist: the shared set, where fresh lists come
//! from, and how they get installed.

pub mod provider;
pub mod store;
pub mod updater;
pub mod worker;

pub use provider::{DEFAULT_SOURCE, FileListProvider, HttpListProvider, ListProvider};
pub use store::{BlocklistSet, BlocklistStore};
pub use updater::Updater;
pub use worker::RefreshWorker;

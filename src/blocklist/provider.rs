use crate::error::RefreshError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Upstream list maintained at github.com/disposable-email-domains.
pub const DEFAULT_SOURCE: &str = "https://raw.githubusercontent.com/disposable-email-domains/disposable-email-domains/main/disposable_email_blocklist.conf";

/// Source of the raw disposable domain list, one domain per line.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListProvider: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>, RefreshError>;

    /// Human readable locator used in logs.
    fn source(&self) -> String;
}

/// Downloads the list over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpListProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpListProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RefreshError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ListProvider for HttpListProvider {
    async fn fetch(&self) -> Result<Vec<u8>, RefreshError> {
        debug!(url = %self.url, "downloading blocklist");
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}

/// Reads the list from a local file.
#[derive(Debug, Clone)]
pub struct FileListProvider {
    path: PathBuf,
}

impl FileListProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListProvider for FileListProvider {
    async fn fetch(&self) -> Result<Vec<u8>, RefreshError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| RefreshError::Fetch(format!("{}: {}", self.path.display(), e)))
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}

/// Picks a provider for `source`: `http://` and `https://` URLs are
/// downloaded, anything else is treated as a file path.
pub fn provider_for_source(
    source: &str,
    timeout: Duration,
) -> Result<Box<dyn ListProvider>, RefreshError> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Ok(Box::new(HttpListProvider::new(source, timeout)?))
    } else {
        let path = source.strip_prefix("file://").unwrap_or(source);
        Ok(Box::new(FileListProvider::new(path)))
    }
}

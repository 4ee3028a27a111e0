//! Fetch collaborator and file integrity helpers.

mod archive;
mod checksum;

pub use archive::extract_tar_gz;
pub use checksum::{md5_digest, parse_manifest};

use async_trait::async_trait;
use std::path::Path;

use crate::http::HttpClient;
use crate::{InstallError, Result};

/// Fetches a URL to a path on disk.
///
/// The production implementation is [`HttpClient`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

#[async_trait]
impl Fetcher for HttpClient {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        self.download(url, dest)
            .await
            .map_err(|e| InstallError::Download {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}

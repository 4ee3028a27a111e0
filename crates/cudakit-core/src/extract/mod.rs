//! The extraction capability: one shared lifecycle, three platform
//! strategies.
//!
//! The lifecycle runs strictly in order — activation scripts, blob
//! download, checksum verification, extraction, cleanup. The first three
//! steps and cleanup are identical everywhere; `extract` dispatches on
//! the context's platform tag.

mod linux;
mod osx;
mod runner;
mod windows;

pub use runner::{Runner, SystemRunner};

use console::style;
use std::fs;
use url::Url;

use crate::context::InstallContext;
use crate::downloader::{md5_digest, parse_manifest, Fetcher};
use crate::platform::Platform;
use crate::scripts;
use crate::{InstallError, Result};

pub struct Extractor<'a> {
    ctx: &'a InstallContext,
    fetcher: &'a dyn Fetcher,
    runner: &'a dyn Runner,
}

impl<'a> Extractor<'a> {
    pub fn new(ctx: &'a InstallContext, fetcher: &'a dyn Fetcher, runner: &'a dyn Runner) -> Self {
        Self {
            ctx,
            fetcher,
            runner,
        }
    }

    /// Place the conda activation/deactivation hooks.
    pub fn install_activation_scripts(&self) -> Result<()> {
        scripts::install_activation_scripts(self.ctx)
    }

    /// Fetch the installer blob into the source directory, or copy it
    /// from the debug-source directory when one is configured.
    pub async fn download_blob(&self) -> Result<()> {
        let dest = self.ctx.blob_path();

        if let Some(debug_dir) = &self.ctx.debug_source {
            let existing = debug_dir.join(&self.ctx.platform_config.blob);
            println!(
                "{} {}",
                style(">").green(),
                style(format!(
                    "copying {} to {}",
                    existing.display(),
                    dest.display()
                ))
                .dim()
            );
            tokio::fs::copy(&existing, &dest)
                .await
                .map_err(|e| InstallError::Download {
                    url: existing.display().to_string(),
                    reason: e.to_string(),
                })?;
        } else {
            let url = self.blob_url()?;
            println!(
                "{} {}",
                style(">").green(),
                style(format!("downloading {} to {}", url, dest.display())).dim()
            );
            self.fetcher.fetch(&url, &dest).await?;
        }

        Ok(())
    }

    /// Fetch the vendor's checksum manifest and verify the downloaded
    /// blob against it.
    pub async fn verify_checksum(&self) -> Result<()> {
        let config = &self.ctx.version_config;
        let manifest_name = config.md5_url.rsplit('/').next().unwrap_or("md5sum.txt");
        let manifest_path = self.ctx.src_dir.join(manifest_name);
        self.fetcher.fetch(&config.md5_url, &manifest_path).await?;

        let blob = &self.ctx.platform_config.blob;
        let digest = md5_digest(&self.ctx.blob_path()).await?;

        let text = tokio::fs::read_to_string(&manifest_path).await?;
        let checksums = parse_manifest(&text);

        let recorded = checksums
            .get(&digest)
            .ok_or_else(|| InstallError::ChecksumMismatch {
                blob: blob.clone(),
                reason: format!("digest {digest} is not present in the manifest"),
            })?;

        // The manifest records a shorter name token; the blob name
        // carries a trailing version/extension suffix of fixed width.
        let stem = &blob[..blob.len().saturating_sub(7)];
        if !recorded.starts_with(stem) {
            return Err(InstallError::ChecksumMismatch {
                blob: blob.clone(),
                reason: format!("manifest records {recorded}, expected a name starting with {stem}"),
            });
        }

        Ok(())
    }

    /// Unpack the blob with the platform's extraction strategy.
    pub fn extract(&self) -> Result<()> {
        match self.ctx.platform {
            Platform::Linux => linux::extract(self.ctx, self.runner),
            Platform::Windows => windows::extract(self.ctx, self.runner),
            Platform::Osx => osx::extract(self.ctx, self.runner),
        }
    }

    /// Delete the downloaded blob. A blob already gone is not an error.
    pub fn cleanup(&self) -> Result<()> {
        let blob_path = self.ctx.blob_path();
        if blob_path.exists() {
            fs::remove_file(&blob_path)?;
        }
        Ok(())
    }

    fn blob_url(&self) -> Result<String> {
        let config = &self.ctx.version_config;
        let url = Url::parse(&config.base_url)
            .and_then(|u| u.join(&config.installers_url_ext))
            .and_then(|u| u.join(&self.ctx.platform_config.blob))
            .map_err(|e| InstallError::Download {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;
        Ok(url.into())
    }
}

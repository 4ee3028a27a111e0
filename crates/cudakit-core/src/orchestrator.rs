//! Drives the install lifecycle from start to finish.

use console::style;

use crate::context::InstallContext;
use crate::downloader::Fetcher;
use crate::extract::{Extractor, Runner};
use crate::platform::Platform;
use crate::registry::Registry;
use crate::settings::Settings;
use crate::{InstallError, Result};

/// How a lifecycle step's failure is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepPolicy {
    /// The failure aborts the run.
    Propagate,
    /// The failure is reported and the run moves on.
    LogAndContinue,
}

/// Runs the lifecycle in fixed order: activation scripts, download,
/// verification, extraction, cleanup.
///
/// Everything up to and including verification is fatal on failure. The
/// extraction step is governed by an explicit policy instead, defaulting
/// to [`StepPolicy::LogAndContinue`]: a failed vendor installer is
/// reported, and the run still cleans up and exits successfully.
pub struct Orchestrator {
    registry: Registry,
    settings: Settings,
    extract_policy: StepPolicy,
}

impl Orchestrator {
    pub fn new(registry: Registry, settings: Settings) -> Self {
        Self {
            registry,
            settings,
            extract_policy: StepPolicy::LogAndContinue,
        }
    }

    /// Override how an extraction failure is handled.
    pub fn with_extract_policy(mut self, policy: StepPolicy) -> Self {
        self.extract_policy = policy;
        self
    }

    /// Run the post-install lifecycle on the current platform.
    pub async fn run(&self, fetcher: &dyn Fetcher, runner: &dyn Runner) -> Result<()> {
        let platform = Platform::current()?;
        self.run_on(platform, fetcher, runner).await
    }

    /// Run the post-install lifecycle for an explicit platform.
    pub async fn run_on(
        &self,
        platform: Platform,
        fetcher: &dyn Fetcher,
        runner: &dyn Runner,
    ) -> Result<()> {
        println!(
            "{} Running post installation for {} {}",
            style(">").green().bold(),
            style(&self.settings.package_name).cyan(),
            self.settings.version
        );

        let version_config = self.registry.get(&self.settings.version).ok_or_else(|| {
            InstallError::MissingConfiguration(format!(
                "no configuration for toolkit version {}",
                self.settings.version
            ))
        })?;

        let ctx = InstallContext::new(&self.settings, platform, version_config)?;
        let extractor = Extractor::new(&ctx, fetcher, runner);

        self.phase("Installing activation scripts");
        extractor.install_activation_scripts()?;

        self.phase("Downloading installer");
        extractor.download_blob().await?;

        self.phase("Verifying checksum");
        extractor.verify_checksum().await?;

        self.phase(&format!("Extracting on {platform}"));
        if let Err(e) = extractor.extract() {
            match self.extract_policy {
                StepPolicy::Propagate => return Err(e),
                StepPolicy::LogAndContinue => {
                    eprintln!(
                        "{} Couldn't install the toolkit: {e}",
                        style("Error:").red().bold()
                    );
                    log::warn!("extraction failed, continuing to cleanup: {e}");
                }
            }
        }

        self.phase("Cleaning up");
        extractor.cleanup()?;

        Ok(())
    }

    fn phase(&self, message: &str) {
        println!("{} {}", style(">").green().bold(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::tests::{fixture_settings, RecordingRunner, StaticFetcher};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_unknown_version_is_missing_configuration() {
        let root = TempDir::new().unwrap();
        let mut settings = fixture_settings(&root);
        settings.version = "10.0".to_string();

        let orchestrator = Orchestrator::new(Registry::builtin(), settings);
        let err = orchestrator
            .run_on(
                Platform::Linux,
                &StaticFetcher::default(),
                &RecordingRunner::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, InstallError::MissingConfiguration(_)));
    }
}

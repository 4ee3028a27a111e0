//! Per-run install context.

use std::fs;
use std::path::PathBuf;

use crate::platform::Platform;
use crate::registry::{PlatformConfig, VersionConfig};
use crate::settings::Settings;
use crate::Result;

/// Resolved state for one installer run: identifiers, configuration for
/// the selected version and platform, and the directories the run works
/// in. Constructed once per invocation; creating it also creates the
/// source directory, so it exists before any download happens.
#[derive(Debug, Clone)]
pub struct InstallContext {
    pub version: String,
    pub package_name: String,
    pub build_number: String,
    pub platform: Platform,
    pub version_config: VersionConfig,
    pub platform_config: PlatformConfig,
    /// Scratch directory blobs are downloaded into and extracted under.
    pub src_dir: PathBuf,
    /// Final library destination under the install prefix.
    pub output_dir: PathBuf,
    pub env_root: PathBuf,
    pub prefix: PathBuf,
    pub debug_source: Option<PathBuf>,
}

impl InstallContext {
    pub fn new(
        settings: &Settings,
        platform: Platform,
        version_config: &VersionConfig,
    ) -> Result<Self> {
        let src_dir = settings.env_root.join("pkgs").join(&settings.package_name);
        fs::create_dir_all(&src_dir)?;

        Ok(Self {
            version: settings.version.clone(),
            package_name: settings.package_name.clone(),
            build_number: settings.build_number.clone(),
            platform,
            version_config: version_config.clone(),
            platform_config: version_config.platform(platform).clone(),
            src_dir,
            output_dir: settings.prefix.join(platform.lib_dir()),
            env_root: settings.env_root.clone(),
            prefix: settings.prefix.clone(),
            debug_source: settings.debug_source.clone(),
        })
    }

    /// Where the installer blob lives inside the source directory.
    pub fn blob_path(&self) -> PathBuf {
        self.src_dir.join(&self.platform_config.blob)
    }
}

//! Static registry of supported toolkit versions.
//!
//! The registry is built once at startup and passed explicitly into the
//! orchestrator; nothing looks configuration up through globals during a
//! run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::platform::Platform;

/// Per-platform installer description for one toolkit version.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    /// File name of the installer blob.
    pub blob: String,
    /// Patch blobs applied on top of the base installer, in order.
    pub patches: Vec<String>,
    /// Location of the NVTools extension binaries. Only meaningful on
    /// Windows, where the toolkit installer does not carry them.
    pub nvtoolsext_path: Option<PathBuf>,
}

impl PlatformConfig {
    fn new(blob: &str) -> Self {
        Self {
            blob: blob.to_string(),
            patches: Vec::new(),
            nvtoolsext_path: None,
        }
    }
}

/// Configuration for one toolkit version across all supported platforms.
///
/// Holding one [`PlatformConfig`] field per platform guarantees every
/// version covers the full platform set.
#[derive(Debug, Clone)]
pub struct VersionConfig {
    pub version: String,
    pub base_url: String,
    pub installers_url_ext: String,
    pub patch_url_ext: String,
    pub md5_url: String,
    /// Versions of the libdevice bitcode libraries bundled with this
    /// toolkit release.
    pub libdevice_versions: Vec<String>,
    linux: PlatformConfig,
    windows: PlatformConfig,
    osx: PlatformConfig,
}

impl VersionConfig {
    /// The installer description for the given platform.
    pub fn platform(&self, platform: Platform) -> &PlatformConfig {
        match platform {
            Platform::Linux => &self.linux,
            Platform::Windows => &self.windows,
            Platform::Osx => &self.osx,
        }
    }
}

/// Immutable mapping from toolkit version to its configuration.
#[derive(Debug, Clone)]
pub struct Registry {
    versions: BTreeMap<String, VersionConfig>,
}

impl Registry {
    /// The registry of versions this tool knows how to install.
    pub fn builtin() -> Self {
        let mut versions = BTreeMap::new();

        let cu_92 = VersionConfig {
            version: "9.2".to_string(),
            base_url: "https://developer.nvidia.com/compute/cuda/9.2/Prod2/".to_string(),
            installers_url_ext: "local_installers/".to_string(),
            patch_url_ext: String::new(),
            md5_url: "http://developer.download.nvidia.com/compute/cuda/9.2/Prod2/docs/sidebar/md5sum.txt".to_string(),
            libdevice_versions: vec!["10".to_string()],
            linux: PlatformConfig::new("cuda_9.2.148_396.37_linux"),
            windows: PlatformConfig {
                nvtoolsext_path: Some(
                    ["c:\\", "Program Files", "NVIDIA Corporation", "NVToolsExt", "bin"]
                        .iter()
                        .collect(),
                ),
                ..PlatformConfig::new("cuda_9.2.148_windows")
            },
            osx: PlatformConfig::new("cuda_9.2.148_mac"),
        };
        versions.insert(cu_92.version.clone(), cu_92);

        Self { versions }
    }

    /// Look up the configuration for a toolkit version.
    pub fn get(&self, version: &str) -> Option<&VersionConfig> {
        self.versions.get(version)
    }

    /// All versions the registry covers.
    pub fn versions(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }
}

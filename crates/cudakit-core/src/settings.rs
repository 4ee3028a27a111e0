//! Externally-supplied inputs for one installer run.

use std::path::PathBuf;

/// Everything the run needs from the surrounding package environment,
/// collected into one value at the entry point. No component below the
/// entry point reads ambient environment state.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Toolkit version to install, e.g. `9.2`.
    pub version: String,
    /// Name of the conda package being installed.
    pub package_name: String,
    /// Build number of the conda package.
    pub build_number: String,
    /// Root of the conda environment (`CONDA_PREFIX`).
    pub env_root: PathBuf,
    /// Install prefix the package is being placed into (`PREFIX`).
    pub prefix: PathBuf,
    /// Directory holding a pre-downloaded installer blob. When set, the
    /// blob is copied from here instead of fetched over the network.
    pub debug_source: Option<PathBuf>,
}

//! Post-install command for the cudatoolkit-dev conda package.
//!
//! Resolves the run's inputs from flags and the package environment,
//! then hands one explicit [`Settings`] value to the orchestrator; no
//! other component reads the environment.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use cudakit_core::{
    HttpClient, InstallError, Orchestrator, Registry, Settings, StepPolicy, SystemRunner,
};

#[derive(Parser, Debug)]
#[command(name = "cudakit-post-install")]
#[command(about = "Download, verify and extract the CUDA toolkit into a conda environment")]
struct Args {
    /// Toolkit version to install (defaults to $PKG_VERSION)
    #[arg(long)]
    version: Option<String>,

    /// Name of the package being installed (defaults to $PKG_NAME)
    #[arg(long)]
    package_name: Option<String>,

    /// Build number of the package (defaults to $PKG_BUILDNUM)
    #[arg(long)]
    build_number: Option<String>,

    /// Root of the conda environment (defaults to $CONDA_PREFIX)
    #[arg(long)]
    env_root: Option<PathBuf>,

    /// Install prefix (defaults to $PREFIX)
    #[arg(long)]
    prefix: Option<PathBuf>,

    /// Copy the installer blob from this directory instead of
    /// downloading it (defaults to $DEBUG_INSTALLER_PATH)
    #[arg(long)]
    debug_source: Option<PathBuf>,

    /// Treat an extraction failure as fatal instead of logging it and
    /// continuing to cleanup
    #[arg(long)]
    strict_extract: bool,
}

/// Resolve one input: an explicit flag wins, otherwise the package
/// environment variable.
fn require(var: &str, value: Option<String>) -> Result<String> {
    value
        .or_else(|| std::env::var(var).ok())
        .ok_or_else(|| InstallError::MissingConfiguration(format!("{var} is not set")).into())
}

fn require_path(var: &str, value: Option<PathBuf>) -> Result<PathBuf> {
    value
        .or_else(|| std::env::var_os(var).map(PathBuf::from))
        .ok_or_else(|| InstallError::MissingConfiguration(format!("{var} is not set")).into())
}

fn resolve_settings(args: &Args) -> Result<Settings> {
    Ok(Settings {
        version: require("PKG_VERSION", args.version.clone())?,
        package_name: require("PKG_NAME", args.package_name.clone())?,
        build_number: require("PKG_BUILDNUM", args.build_number.clone())?,
        env_root: require_path("CONDA_PREFIX", args.env_root.clone())?,
        prefix: require_path("PREFIX", args.prefix.clone())?,
        debug_source: args
            .debug_source
            .clone()
            .or_else(|| std::env::var_os("DEBUG_INSTALLER_PATH").map(PathBuf::from)),
    })
}

fn run() -> Result<i32> {
    let args = Args::parse();
    let settings = resolve_settings(&args)?;

    let extract_policy = if args.strict_extract {
        StepPolicy::Propagate
    } else {
        StepPolicy::LogAndContinue
    };
    let orchestrator =
        Orchestrator::new(Registry::builtin(), settings).with_extract_policy(extract_policy);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| anyhow::anyhow!("Failed to create async runtime: {}", e))?;
    rt.block_on(async {
        let client = HttpClient::new().context("Failed to create HTTP client")?;
        orchestrator
            .run(&client, &SystemRunner)
            .await
            .context("Post installation failed")
    })?;

    Ok(0)
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            // Print the error chain for debugging
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

//! Installs the conda activation and deactivation hooks.
//!
//! The hook files are pre-authored payload shipped under
//! `<prefix>/scripts`; this module only places them. Both the shell and
//! the batch variant are copied on every platform.

use std::fs;
use std::path::Path;

use crate::context::InstallContext;
use crate::{InstallError, Result};

const ACTIVATE_SCRIPTS: [&str; 2] = [
    "cudatoolkit-dev-activate.sh",
    "cudatoolkit-dev-activate.bat",
];

const DEACTIVATE_SCRIPTS: [&str; 2] = [
    "cudatoolkit-dev-deactivate.sh",
    "cudatoolkit-dev-deactivate.bat",
];

/// Copy the activation and deactivation hooks into the environment's
/// `etc/conda/activate.d` and `etc/conda/deactivate.d` directories.
/// Pre-existing destination directories are fine; a missing source hook
/// file is fatal.
pub fn install_activation_scripts(ctx: &InstallContext) -> Result<()> {
    let activate_dir = ctx.env_root.join("etc").join("conda").join("activate.d");
    let deactivate_dir = ctx.env_root.join("etc").join("conda").join("deactivate.d");

    fs::create_dir_all(&activate_dir)?;
    fs::create_dir_all(&deactivate_dir)?;

    let scripts_dir = ctx.prefix.join("scripts");

    for name in ACTIVATE_SCRIPTS {
        copy_hook(&scripts_dir.join("activate.d"), name, &activate_dir)?;
    }

    for name in DEACTIVATE_SCRIPTS {
        copy_hook(&scripts_dir.join("deactivate.d"), name, &deactivate_dir)?;
    }

    Ok(())
}

fn copy_hook(source_dir: &Path, name: &str, dest_dir: &Path) -> Result<()> {
    let source = source_dir.join(name);
    if !source.is_file() {
        return Err(InstallError::MissingScript(source));
    }

    fs::copy(&source, dest_dir.join(name))?;
    Ok(())
}

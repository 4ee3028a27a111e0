//! macOS extraction: the blob is a disk image holding `.tar.gz` payloads.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::context::InstallContext;
use crate::downloader::extract_tar_gz;
use crate::Result;

use super::runner::Runner;

const MOUNT_DIR_NAME: &str = "tmpstore";

pub(crate) fn extract(ctx: &InstallContext, runner: &dyn Runner) -> Result<()> {
    let runfile = ctx.blob_path();
    let mount_point = ctx.src_dir.join(MOUNT_DIR_NAME);
    fs::create_dir_all(&mount_point)?;

    runner.run(
        "hdiutil",
        &[
            "attach".to_string(),
            "-mountpoint".to_string(),
            mount_point.display().to_string(),
            runfile.display().to_string(),
        ],
    )?;

    // Detach must happen whether or not the payload extraction worked;
    // only hold on to the extraction result until then.
    let extracted = extract_volume_payloads(&mount_point, &ctx.src_dir);

    if let Err(e) = runner.run(
        "hdiutil",
        &[
            "detach".to_string(),
            mount_point.display().to_string(),
        ],
    ) {
        log::warn!("failed to detach {}: {e}", mount_point.display());
    }

    extracted
}

/// Walk the mounted volume and unpack every `.tar.gz` into the source
/// directory.
fn extract_volume_payloads(mount_point: &Path, dest_dir: &Path) -> Result<()> {
    for entry in WalkDir::new(mount_point)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let name = entry.file_name().to_string_lossy();
        if name.ends_with(".tar.gz") {
            log::debug!("unpacking {}", entry.path().display());
            extract_tar_gz(entry.path(), dest_dir)?;
        }
    }

    Ok(())
}

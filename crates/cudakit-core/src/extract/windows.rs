//! Windows extraction: the blob is an archive unpacked with 7-Zip.

use crate::context::InstallContext;
use crate::Result;

use super::runner::Runner;

pub(crate) fn extract(ctx: &InstallContext, runner: &dyn Runner) -> Result<()> {
    let runfile = ctx.blob_path();

    let args = vec![
        "x".to_string(),
        format!("-o{}", ctx.src_dir.display()),
        runfile.display().to_string(),
    ];

    runner.run("7za", &args)
}

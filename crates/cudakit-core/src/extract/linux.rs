//! Linux extraction: the blob is a self-extracting installer.

use crate::context::InstallContext;
use crate::Result;

use super::runner::Runner;

pub(crate) fn extract(ctx: &InstallContext, runner: &dyn Runner) -> Result<()> {
    let runfile = ctx.blob_path();

    // The downloaded blob arrives without execute permission.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = std::fs::metadata(&runfile)?.permissions();
        perms.set_mode(0o777);
        std::fs::set_permissions(&runfile, perms)?;
    }

    let args = vec![
        "--silent".to_string(),
        "--toolkit".to_string(),
        "--toolkitpath".to_string(),
        ctx.src_dir.display().to_string(),
        "--override".to_string(),
    ];

    runner.run(&runfile.display().to_string(), &args)
}

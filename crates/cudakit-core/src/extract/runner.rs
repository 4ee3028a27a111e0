//! External process invocation.

use std::process::Command;

use crate::{InstallError, Result};

/// Runs an external command to completion.
///
/// The extraction strategies shell out to vendor tooling (the
/// self-extracting installer, `7za`, `hdiutil`) through this
/// collaborator.
pub trait Runner {
    /// Run `program` with `args`, treating a spawn failure or a non-zero
    /// exit as an error.
    fn run(&self, program: &str, args: &[String]) -> Result<()>;
}

/// [`Runner`] backed by `std::process::Command`, inheriting stdio so the
/// vendor tools' own output reaches the console.
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<()> {
        let rendered = render(program, args);
        log::debug!("running: {rendered}");

        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|e| InstallError::ExtractionProcess {
                command: rendered.clone(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(InstallError::ExtractionProcess {
                command: rendered,
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

fn render(program: &str, args: &[String]) -> String {
    let mut rendered = program.to_string();
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            render("7za", &["x".to_string(), "blob".to_string()]),
            "7za x blob"
        );
        assert_eq!(render("hdiutil", &[]), "hdiutil");
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_success_and_failure() {
        let runner = SystemRunner;
        assert!(runner.run("true", &[]).is_ok());

        let err = runner.run("false", &[]).unwrap_err();
        assert!(matches!(err, InstallError::ExtractionProcess { .. }));
    }

    #[test]
    fn test_system_runner_missing_program() {
        let runner = SystemRunner;
        let err = runner
            .run("cudakit-no-such-program", &[])
            .unwrap_err();
        assert!(matches!(err, InstallError::ExtractionProcess { .. }));
    }
}

//! Platform detection for the three supported operating systems.

use crate::{InstallError, Result};

/// The platforms the toolkit ships installers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Linux,
    Windows,
    Osx,
}

impl Platform {
    /// Classify a runtime platform identifier.
    ///
    /// Matching is case-sensitive and prefix-based, so versioned
    /// identifiers such as `linux2` or `darwin17` resolve the same as the
    /// bare names. Anything unrecognized is fatal.
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        if identifier.starts_with("linux") {
            Ok(Platform::Linux)
        } else if identifier.starts_with("win") {
            Ok(Platform::Windows)
        } else if identifier.starts_with("darwin") {
            Ok(Platform::Osx)
        } else {
            Err(InstallError::UnsupportedPlatform(identifier.to_string()))
        }
    }

    /// Detect the platform this process is running on.
    pub fn current() -> Result<Self> {
        Self::from_identifier(runtime_identifier())
    }

    /// The tag used to key per-platform configuration.
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Windows => "windows",
            Platform::Osx => "osx",
        }
    }

    /// Name of the library directory under the install prefix.
    pub fn lib_dir(&self) -> &'static str {
        match self {
            Platform::Linux | Platform::Osx => "lib",
            Platform::Windows => "DLLs",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Canonical identifier for the running operating system.
fn runtime_identifier() -> &'static str {
    if cfg!(target_os = "windows") {
        "win32"
    } else if cfg!(target_os = "macos") {
        "darwin"
    } else {
        std::env::consts::OS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linux_identifiers() {
        assert_eq!(Platform::from_identifier("linux").unwrap(), Platform::Linux);
        assert_eq!(Platform::from_identifier("linux2").unwrap(), Platform::Linux);
    }

    #[test]
    fn test_windows_identifiers() {
        assert_eq!(Platform::from_identifier("win32").unwrap(), Platform::Windows);
        assert_eq!(Platform::from_identifier("windows").unwrap(), Platform::Windows);
    }

    #[test]
    fn test_darwin_identifiers() {
        assert_eq!(Platform::from_identifier("darwin").unwrap(), Platform::Osx);
        assert_eq!(Platform::from_identifier("darwin17").unwrap(), Platform::Osx);
    }

    #[test]
    fn test_unknown_identifier_is_fatal() {
        let err = Platform::from_identifier("freebsd").unwrap_err();
        assert!(matches!(err, InstallError::UnsupportedPlatform(_)));

        assert!(Platform::from_identifier("").is_err());
        // Matching is case-sensitive
        assert!(Platform::from_identifier("Linux").is_err());
    }

    #[test]
    fn test_lib_dir() {
        assert_eq!(Platform::Linux.lib_dir(), "lib");
        assert_eq!(Platform::Osx.lib_dir(), "lib");
        assert_eq!(Platform::Windows.lib_dir(), "DLLs");
    }

    #[test]
    fn test_tags() {
        assert_eq!(Platform::Linux.tag(), "linux");
        assert_eq!(Platform::Windows.tag(), "windows");
        assert_eq!(Platform::Osx.tag(), "osx");
    }

    #[test]
    fn test_current_resolves() {
        // Whatever host runs the tests must be one of the supported three.
        assert!(Platform::current().is_ok());
    }
}

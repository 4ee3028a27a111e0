pub mod context;
pub mod downloader;
pub mod error;
pub mod extract;
pub mod http;
pub mod orchestrator;
pub mod platform;
pub mod registry;
pub mod scripts;
pub mod settings;

pub use context::InstallContext;
pub use downloader::Fetcher;
pub use error::{InstallError, Result};
pub use extract::{Extractor, Runner, SystemRunner};
pub use http::{HttpClient, HttpClientConfig};
pub use orchestrator::{Orchestrator, StepPolicy};
pub use platform::Platform;
pub use registry::{PlatformConfig, Registry, VersionConfig};
pub use settings::Settings;

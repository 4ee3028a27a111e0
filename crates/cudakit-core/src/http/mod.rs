//! HTTP client used to fetch installer blobs and checksum manifests.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpError};

//! MD5 digests and checksum-manifest parsing.
//!
//! The vendor publishes a manifest mapping the MD5 digest of each
//! installer blob to its recorded file name. Verification digests the
//! downloaded blob and checks the manifest agrees on the name.

use md5::{Digest, Md5};
use std::collections::HashMap;
use std::path::Path;
use tokio::io::AsyncReadExt;

use crate::Result;

/// Compute the MD5 digest of a file, rendered as lowercase hex.
pub async fn md5_digest(path: &Path) -> Result<String> {
    let mut file = tokio::fs::File::open(path).await?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).await?;

    let mut hasher = Md5::new();
    hasher.update(&buffer);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Parse a checksum manifest into a digest -> file-name map.
///
/// Each line carries a digest followed by a file-name token; blank lines
/// and lines without both fields are skipped.
pub fn parse_manifest(text: &str) -> HashMap<String, String> {
    let mut checksums = HashMap::new();

    for line in text.lines() {
        let mut fields = line.split_whitespace();
        if let (Some(digest), Some(name)) = (fields.next(), fields.next()) {
            checksums.insert(digest.to_string(), name.to_string());
        }
    }

    checksums
}

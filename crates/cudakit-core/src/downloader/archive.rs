//! Extraction of `.tar.gz` payloads found inside the installer image.

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{InstallError, Result};

/// Extract a gzipped tar archive into a directory.
///
/// Entries are unpacked with their archive paths intact; `tar` refuses
/// entries that would escape the destination.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dest_dir)?;

    let file = File::open(archive_path)?;
    let decoder = GzDecoder::new(BufReader::new(file));
    let mut archive = tar::Archive::new(decoder);

    archive
        .unpack(dest_dir)
        .map_err(|e| InstallError::ExtractionProcess {
            command: format!("unpack {}", archive_path.display()),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    fn write_tar_gz(path: &Path, file_name: &str, contents: &[u8]) {
        let file = File::create(path).unwrap();
        let encoder = GzEncoder::new(file, Compression::default());
        let mut builder = tar::Builder::new(encoder);

        let mut header = tar::Header::new_gnu();
        header.set_size(contents.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, file_name, contents).unwrap();
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn test_extract_tar_gz() {
        let temp_dir = tempfile::tempdir().unwrap();
        let archive = temp_dir.path().join("payload.tar.gz");
        write_tar_gz(&archive, "lib/libcudart.so", b"shared object");

        let dest = temp_dir.path().join("out");
        extract_tar_gz(&archive, &dest).unwrap();

        let extracted = std::fs::read(dest.join("lib/libcudart.so")).unwrap();
        assert_eq!(extracted, b"shared object");
    }

    #[test]
    fn test_extract_corrupt_archive_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let archive = temp_dir.path().join("bad.tar.gz");
        std::fs::write(&archive, b"this is not a tarball").unwrap();

        let err = extract_tar_gz(&archive, &temp_dir.path().join("out")).unwrap_err();
        assert!(matches!(err, InstallError::ExtractionProcess { .. }));
    }
}

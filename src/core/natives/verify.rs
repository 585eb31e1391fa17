// ─── Archive Verification ───
// Validates a native archive against its companion SHA-1 digest file
// before any extraction takes place.

use std::path::Path;

use sha1::{Digest, Sha1};
use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};

/// Number of hex characters in a SHA-1 digest file.
const DIGEST_HEX_LEN: usize = 40;

/// Verify an archive's SHA-1 digest against its digest file.
///
/// The digest file carries the expected digest as 40 lowercase hex
/// characters; anything beyond the first 40 bytes is ignored. The computed
/// digest of the archive's full byte stream must match character for
/// character. Any mismatch, and any failure to read either file, is a fatal
/// `IntegrityViolation` — there is no retry and no partial acceptance.
pub async fn verify_archive(archive: &Path, digest_file: &Path) -> LauncherResult<()> {
    let expected = read_expected_digest(digest_file).await?;

    let bytes = tokio::fs::read(archive)
        .await
        .map_err(|e| LauncherError::IntegrityViolation {
            path: archive.to_path_buf(),
            detail: format!("cannot read archive: {}", e),
        })?;

    let mut hasher = Sha1::new();
    hasher.update(&bytes);
    let actual = hex::encode(hasher.finalize());

    if actual != expected {
        return Err(LauncherError::IntegrityViolation {
            path: archive.to_path_buf(),
            detail: format!("expected SHA-1 {}, computed {}", expected, actual),
        });
    }

    debug!("Verified archive: {:?}", archive);
    Ok(())
}

/// Read exactly 40 hex characters from the digest file.
async fn read_expected_digest(digest_file: &Path) -> LauncherResult<String> {
    let raw = tokio::fs::read(digest_file)
        .await
        .map_err(|e| LauncherError::IntegrityViolation {
            path: digest_file.to_path_buf(),
            detail: format!("cannot read digest file: {}", e),
        })?;

    if raw.len() < DIGEST_HEX_LEN {
        return Err(LauncherError::IntegrityViolation {
            path: digest_file.to_path_buf(),
            detail: format!(
                "digest file holds {} bytes, need {}",
                raw.len(),
                DIGEST_HEX_LEN
            ),
        });
    }

    String::from_utf8(raw[..DIGEST_HEX_LEN].to_vec()).map_err(|_| {
        LauncherError::IntegrityViolation {
            path: digest_file.to_path_buf(),
            detail: "digest file is not valid hex text".into(),
        }
    })
}

// ─── Native Extraction ───
// Unpacks a verified native archive into the scratch natives directory,
// honoring the manifest's exclusion prefixes.

use std::io::Cursor;
use std::path::Path;

use tracing::debug;

use crate::core::error::{LauncherError, LauncherResult};

/// Extract a verified archive into `scratch_dir`.
///
/// Entries whose path starts with any exclusion prefix are skipped. Bare
/// directory entries are skipped too; parent directories of nested files are
/// created on demand. Any create or copy failure is fatal.
///
/// The scratch directory must already exist — it is created once per launch,
/// before any library is processed.
pub async fn extract_archive(
    archive: &Path,
    scratch_dir: &Path,
    excludes: &[String],
) -> LauncherResult<()> {
    // The verifier consumed the archive once for hashing; extraction gets a
    // fresh read of the full byte stream.
    let bytes = tokio::fs::read(archive)
        .await
        .map_err(|e| LauncherError::Io {
            path: archive.to_path_buf(),
            source: e,
        })?;

    let scratch = scratch_dir.to_path_buf();
    let excludes = excludes.to_vec();
    let archive_path = archive.to_path_buf();

    tokio::task::spawn_blocking(move || extract_blocking(bytes, &scratch, &excludes))
        .await
        .map_err(|e| LauncherError::Io {
            path: archive_path,
            source: std::io::Error::other(e.to_string()),
        })?
}

fn extract_blocking(bytes: Vec<u8>, scratch: &Path, excludes: &[String]) -> LauncherResult<()> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let name = entry.name().to_string();

        if excludes.iter().any(|prefix| name.starts_with(prefix.as_str())) {
            debug!("Skipping excluded entry: {}", name);
            continue;
        }

        // Reject entries that would escape the scratch directory.
        let relative = entry
            .enclosed_name()
            .ok_or_else(|| LauncherError::Extraction {
                entry: name.clone(),
                dest: scratch.to_path_buf(),
                source: std::io::Error::other("entry path escapes the destination"),
            })?;
        let dest = scratch.join(relative);

        if entry.is_dir() {
            create_dir(&name, &dest)?;
            continue;
        }

        if let Some(parent) = dest.parent() {
            create_dir(&name, parent)?;
        }

        let mut out = std::fs::File::create(&dest).map_err(|source| LauncherError::Extraction {
            entry: name.clone(),
            dest: dest.clone(),
            source,
        })?;
        std::io::copy(&mut entry, &mut out).map_err(|source| LauncherError::Extraction {
            entry: name.clone(),
            dest: dest.clone(),
            source,
        })?;
        debug!("Extracted native entry: {}", name);
    }

    Ok(())
}

fn create_dir(entry: &str, dir: &Path) -> LauncherResult<()> {
    std::fs::create_dir_all(dir).map_err(|source| LauncherError::Extraction {
        entry: entry.to_string(),
        dest: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, data) in entries {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(data).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[tokio::test]
    async fn extracts_entries_and_skips_excluded_prefixes() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("native.jar");
        let scratch = dir.path().join("natives");
        std::fs::create_dir_all(&scratch).unwrap();

        let zip_bytes = build_zip(&[
            ("liblwjgl.so", b"ELF native".as_slice()),
            ("libopenal.so", b"ELF openal".as_slice()),
            ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0".as_slice()),
        ]);
        std::fs::write(&archive_path, zip_bytes).unwrap();

        extract_archive(&archive_path, &scratch, &["META-INF/".into()])
            .await
            .unwrap();

        assert_eq!(
            std::fs::read(scratch.join("liblwjgl.so")).unwrap(),
            b"ELF native"
        );
        assert!(scratch.join("libopenal.so").exists());
        assert!(!scratch.join("META-INF").exists());
    }

    #[tokio::test]
    async fn nested_entries_get_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("native.jar");
        let scratch = dir.path().join("natives");
        std::fs::create_dir_all(&scratch).unwrap();

        let zip_bytes = build_zip(&[("x86_64/libjinput.so", b"nested".as_slice())]);
        std::fs::write(&archive_path, zip_bytes).unwrap();

        extract_archive(&archive_path, &scratch, &[]).await.unwrap();

        assert_eq!(
            std::fs::read(scratch.join("x86_64").join("libjinput.so")).unwrap(),
            b"nested"
        );
    }

    #[tokio::test]
    async fn corrupt_archive_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let archive_path = dir.path().join("native.jar");
        let scratch = dir.path().join("natives");
        std::fs::create_dir_all(&scratch).unwrap();
        std::fs::write(&archive_path, b"not a zip at all").unwrap();

        let err = extract_archive(&archive_path, &scratch, &[]).await.unwrap_err();
        assert!(matches!(err, LauncherError::Zip(_)));
    }
}

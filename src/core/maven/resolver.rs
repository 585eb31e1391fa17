// ─── Library Resolver ───
// Maps a manifest library to its location in the on-disk repository.

use std::path::{Path, PathBuf};

use crate::core::error::LauncherResult;
use crate::core::manifest::Library;

use super::artifact::Coordinate;

/// Digest file suffix appended to a native archive path.
pub const DIGEST_SUFFIX: &str = ".sha";

/// A library resolved against the repository root.
///
/// Every library resolves to exactly one kind: an ordinary classpath entry,
/// or a native archive awaiting verification and extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedLibrary {
    Classpath(PathBuf),
    Native(NativeArchive),
}

/// A platform-native archive together with its companion digest file and
/// the entry prefixes excluded from extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeArchive {
    pub archive: PathBuf,
    pub digest: PathBuf,
    pub excludes: Vec<String>,
}

/// Resolve one manifest library for a platform.
///
/// A library is native for the platform iff its natives map carries a
/// non-empty classifier for it; otherwise it is an ordinary classpath
/// dependency.
pub fn resolve_library(
    library: &Library,
    libraries_root: &Path,
    platform: &str,
) -> LauncherResult<ResolvedLibrary> {
    let coordinate = Coordinate::parse(&library.name)?;

    match library.native_classifier(platform) {
        Some(classifier) => {
            let archive = libraries_root.join(coordinate.local_path(Some(classifier)));
            let digest = append_suffix(&archive, DIGEST_SUFFIX);
            Ok(ResolvedLibrary::Native(NativeArchive {
                archive,
                digest,
                excludes: library.extract.exclude.clone(),
            }))
        }
        None => Ok(ResolvedLibrary::Classpath(
            libraries_root.join(coordinate.local_path(None)),
        )),
    }
}

fn append_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(suffix);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::manifest::ExtractOptions;
    use std::collections::HashMap;

    fn plain_library(name: &str) -> Library {
        Library {
            name: name.into(),
            rules: Vec::new(),
            natives: HashMap::new(),
            extract: ExtractOptions::default(),
        }
    }

    #[test]
    fn ordinary_library_resolves_to_classpath_entry() {
        let lib = plain_library("com.example:lib:1.2.3");
        let resolved = resolve_library(&lib, Path::new("/mc/libraries"), "linux").unwrap();

        assert_eq!(
            resolved,
            ResolvedLibrary::Classpath(PathBuf::from(
                "/mc/libraries/com/example/lib/1.2.3/lib-1.2.3.jar"
            ))
        );
    }

    #[test]
    fn native_library_resolves_to_archive_and_digest() {
        let mut lib = plain_library("org.lwjgl.lwjgl:lwjgl-platform:2.9.0");
        lib.natives
            .insert("linux".into(), "natives-linux".into());
        lib.extract.exclude = vec!["META-INF/".into()];

        let resolved = resolve_library(&lib, Path::new("/mc/libraries"), "linux").unwrap();

        let ResolvedLibrary::Native(native) = resolved else {
            panic!("expected a native archive");
        };
        assert_eq!(
            native.archive,
            PathBuf::from(
                "/mc/libraries/org/lwjgl/lwjgl/lwjgl-platform/2.9.0/lwjgl-platform-2.9.0-natives-linux.jar"
            )
        );
        assert_eq!(
            native.digest,
            PathBuf::from(
                "/mc/libraries/org/lwjgl/lwjgl/lwjgl-platform/2.9.0/lwjgl-platform-2.9.0-natives-linux.jar.sha"
            )
        );
        assert_eq!(native.excludes, vec!["META-INF/".to_string()]);
    }

    #[test]
    fn native_mapping_for_another_platform_resolves_as_classpath() {
        let mut lib = plain_library("org.lwjgl.lwjgl:lwjgl-platform:2.9.0");
        lib.natives
            .insert("windows".into(), "natives-windows".into());

        let resolved = resolve_library(&lib, Path::new("/mc/libraries"), "linux").unwrap();
        assert!(matches!(resolved, ResolvedLibrary::Classpath(_)));
    }

    #[test]
    fn malformed_coordinate_fails_resolution() {
        let lib = plain_library("bad-format");
        let err = resolve_library(&lib, Path::new("/mc/libraries"), "linux").unwrap_err();
        assert!(matches!(
            err,
            crate::core::error::LauncherError::InvalidCoordinate(_)
        ));
    }
}

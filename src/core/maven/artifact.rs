use std::fmt;
use std::path::PathBuf;

use crate::core::error::{LauncherError, LauncherResult};

const JAR_EXT: &str = "jar";

/// A parsed library coordinate.
///
/// Supported formats:
///   `groupId:artifactId:version`
///   `groupId:artifactId:version:classifier`
///
/// The group is kept separate; everything after the first `:` is stored as
/// ordered segments because both the repository path and the filename are
/// derived from the full segment list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub group: String,
    pub segments: Vec<String>,
}

impl Coordinate {
    /// Parse a coordinate string by splitting at the first `:`.
    ///
    /// A string without any `:` has no group/artifact boundary and fails.
    pub fn parse(raw: &str) -> LauncherResult<Self> {
        let (group, rest) = raw
            .split_once(':')
            .ok_or_else(|| LauncherError::InvalidCoordinate(raw.to_string()))?;

        Ok(Self {
            group: group.to_string(),
            segments: rest.split(':').map(str::to_string).collect(),
        })
    }

    /// Repository directory for this coordinate: the group's dot-segments
    /// expanded into nested directories, followed by every coordinate
    /// segment (`com/example/lib/1.2.3`).
    pub fn dir_path(&self) -> PathBuf {
        let mut path: PathBuf = self.group.split('.').collect();
        for segment in &self.segments {
            path.push(segment);
        }
        path
    }

    /// Archive filename: segments joined with `-`, an optional native
    /// classifier suffix, and the archive extension
    /// (`lib-1.2.3[-natives-linux].jar`).
    pub fn filename(&self, native_classifier: Option<&str>) -> String {
        let stem = self.segments.join("-");
        match native_classifier {
            Some(classifier) => format!("{}-{}.{}", stem, classifier, JAR_EXT),
            None => format!("{}.{}", stem, JAR_EXT),
        }
    }

    /// Path of the archive relative to the library repository root.
    pub fn local_path(&self, native_classifier: Option<&str>) -> PathBuf {
        self.dir_path().join(self.filename(native_classifier))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.segments.join(":"))
    }
}

// ─── Launcher Configuration ───
// One immutable configuration value, built once from the command line and
// passed by reference into resolution and assembly.

use std::path::{Path, PathBuf};

/// Immutable per-invocation launcher configuration.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Root of the Minecraft installation (the `.minecraft` directory).
    pub game_dir: PathBuf,
    /// Mojang platform name for the running OS (`windows`, `osx`, `linux`).
    pub platform: String,
    /// Log the assembled command line before spawning.
    pub debug: bool,
}

impl LauncherConfig {
    pub fn new(game_dir: PathBuf, debug: bool) -> Self {
        Self {
            game_dir,
            platform: current_platform_name().to_string(),
            debug,
        }
    }

    /// Root of the shared library repository.
    pub fn libraries_dir(&self) -> PathBuf {
        self.game_dir.join("libraries")
    }

    /// Directory of one installed version.
    pub fn version_dir(&self, version_id: &str) -> PathBuf {
        self.game_dir.join("versions").join(version_id)
    }

    /// The version's primary client archive.
    pub fn version_jar(&self, version_id: &str) -> PathBuf {
        self.version_dir(version_id)
            .join(format!("{}.jar", version_id))
    }

    /// The version's launch manifest file.
    pub fn version_json(&self, version_id: &str) -> PathBuf {
        self.version_dir(version_id)
            .join(format!("{}.json", version_id))
    }

    /// Scratch directory natives are extracted into for one launch.
    /// Shared between overlapping launches of the same version; the launcher
    /// assumes a single invocation per installation at a time.
    pub fn natives_dir(&self, version_id: &str) -> PathBuf {
        self.version_dir(version_id).join("natives")
    }

    /// Path to the profile/user database.
    pub fn profiles_path(&self) -> PathBuf {
        self.game_dir.join("launcher_profiles.json")
    }
}

/// Get the Mojang OS name for the current platform.
pub fn current_platform_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "macos") {
        "osx"
    } else {
        "linux"
    }
}

/// Runtime context supplied by the profile/user collaborators.
/// Read-only snapshot for the duration of one launch.
#[derive(Debug, Clone)]
pub struct RuntimeContext {
    pub player_name: String,
    pub session_token: String,
    pub user_id: String,
    pub version_id: String,
    pub game_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl RuntimeContext {
    /// Legacy virtual assets directory (`<assets>/virtual/legacy`).
    pub fn legacy_assets_dir(&self) -> PathBuf {
        self.assets_dir.join("virtual").join("legacy")
    }
}

/// Convert a path to a string for argument assembly.
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

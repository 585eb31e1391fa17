pub mod core;

pub use crate::core::config::{current_platform_name, LauncherConfig, RuntimeContext};
pub use crate::core::error::{LauncherError, LauncherResult};
pub use crate::core::launch::{prepare, run, LaunchCommand};
pub use crate::core::manifest::LaunchManifest;
pub use crate::core::profile::ProfileData;

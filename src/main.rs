// ─── pickaxe ───
// Command-line front end: flag parsing, profile/user selection, version
// manifest loading. The launch itself lives in `core::launch`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pickaxe::core::config::{LauncherConfig, RuntimeContext};
use pickaxe::core::error::{LauncherError, LauncherResult};
use pickaxe::core::launch;
use pickaxe::core::manifest::LaunchManifest;
use pickaxe::core::profile::ProfileData;

/// Minimal command-line Minecraft launcher.
#[derive(Debug, Parser)]
#[command(name = "pickaxe", version, about)]
struct Cli {
    /// Path to the Minecraft directory.
    #[arg(long)]
    minecraft: Option<PathBuf>,

    /// Profile to launch.
    #[arg(long)]
    profile: Option<String>,

    /// User (display name) to launch with.
    #[arg(long)]
    user: Option<String>,

    /// Launch the last used profile.
    #[arg(long)]
    last_profile: bool,

    /// Launch with the last used user.
    #[arg(long)]
    last_user: bool,

    /// Log the assembled command before launching.
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match launch_from_cli(cli).await {
        Ok(status) if status.success() => ExitCode::SUCCESS,
        Ok(status) => {
            info!("Game exited with {}", status);
            ExitCode::from(status.code().unwrap_or(1).clamp(0, 255) as u8)
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn launch_from_cli(cli: Cli) -> LauncherResult<std::process::ExitStatus> {
    let game_dir = match cli.minecraft {
        Some(dir) => dir,
        None => dirs::home_dir()
            .ok_or_else(|| LauncherError::Config("cannot locate home directory".into()))?
            .join(".minecraft"),
    };

    let config = LauncherConfig::new(game_dir, cli.debug);
    let profile_data = ProfileData::load(&config.profiles_path()).await?;

    let (user_id, user) = profile_data.select_user(cli.user.as_deref(), cli.last_user)?;
    let (profile_name, profile) =
        profile_data.select_profile(cli.profile.as_deref(), cli.last_profile)?;

    let manifest = load_manifest(&config, &profile.version_id).await?;

    let context = RuntimeContext {
        player_name: user.display_name.clone(),
        session_token: user.access_token.clone(),
        user_id: user_id.to_string(),
        version_id: profile.version_id.clone(),
        assets_dir: config.game_dir.join("assets"),
        game_dir: config.game_dir.clone(),
    };

    info!(
        "Launching profile {} (version {}) as {}",
        profile_name, context.version_id, context.player_name
    );

    launch::run(&config, &manifest, &context).await
}

async fn load_manifest(config: &LauncherConfig, version_id: &str) -> LauncherResult<LaunchManifest> {
    let path = config.version_json(version_id);
    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| LauncherError::Config(format!("cannot read {:?}: {}", path, e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| LauncherError::Config(format!("cannot decode {:?}: {}", path, e)))
}

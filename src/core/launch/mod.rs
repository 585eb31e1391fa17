// ─── Launch Pipeline ───
// Drives one launch end to end: rule filtering, library resolution, native
// verification and extraction, argument assembly, process supervision.

pub mod args;
pub mod classpath;
pub mod supervise;

use std::path::PathBuf;
use std::process::ExitStatus;

use tracing::{debug, info};

use crate::core::config::{LauncherConfig, RuntimeContext};
use crate::core::error::{LauncherError, LauncherResult};
use crate::core::manifest::LaunchManifest;
use crate::core::maven::{resolve_library, ResolvedLibrary};
use crate::core::natives::{extract_archive, verify_archive};

use self::args::substitute_arguments;
use self::classpath::{assemble_arguments, build_classpath};

const JAVA_BIN: &str = "java";

/// A fully assembled launch command, ready to spawn.
///
/// Kept inspectable so front ends and tests can examine the argument vector
/// without starting a process.
#[derive(Debug, Clone)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Scratch directory the natives were extracted into.
    pub natives_dir: PathBuf,
}

/// Resolve the manifest and assemble the launch command.
///
/// Creates the scratch natives directory, filters each library through its
/// rules, resolves coordinates to repository paths, verifies and extracts
/// native archives, and substitutes the argument template. Every failure is
/// fatal; the caller decides what happens to the scratch directory.
pub async fn prepare(
    config: &LauncherConfig,
    manifest: &LaunchManifest,
    context: &RuntimeContext,
) -> LauncherResult<LaunchCommand> {
    let natives_dir = config.natives_dir(&context.version_id);

    // The scratch directory is created once per launch, before any library
    // is processed, and is owned by this invocation until cleanup.
    tokio::fs::create_dir_all(&natives_dir)
        .await
        .map_err(|e| LauncherError::Io {
            path: natives_dir.clone(),
            source: e,
        })?;

    let libraries_root = config.libraries_dir();
    let mut classpath_entries: Vec<PathBuf> = Vec::new();
    let mut native_count = 0usize;

    for library in &manifest.libraries {
        if !library.is_allowed_on(&config.platform) {
            debug!("Skipping library (OS rule): {}", library.name);
            continue;
        }

        match resolve_library(library, &libraries_root, &config.platform)? {
            ResolvedLibrary::Classpath(path) => classpath_entries.push(path),
            ResolvedLibrary::Native(native) => {
                verify_archive(&native.archive, &native.digest).await?;
                extract_archive(&native.archive, &natives_dir, &native.excludes).await?;
                native_count += 1;
            }
        }
    }

    info!(
        "Resolved {} classpath entries, extracted {} native archives",
        classpath_entries.len(),
        native_count
    );

    let classpath = build_classpath(&classpath_entries, &config.version_jar(&context.version_id));
    let game_args = substitute_arguments(&manifest.argument_template, context);
    let jvm_args = assemble_arguments(
        &natives_dir,
        &classpath,
        &manifest.main_class,
        &game_args,
    );

    Ok(LaunchCommand {
        program: JAVA_BIN.to_string(),
        args: jvm_args,
        natives_dir,
    })
}

/// Run one complete launch: prepare, spawn, supervise, clean up.
///
/// The scratch natives directory is removed on every path after its
/// creation — after a completed run and after any failure during
/// preparation or supervision.
pub async fn run(
    config: &LauncherConfig,
    manifest: &LaunchManifest,
    context: &RuntimeContext,
) -> LauncherResult<ExitStatus> {
    let natives_dir = config.natives_dir(&context.version_id);

    let command = match prepare(config, manifest, context).await {
        Ok(command) => command,
        Err(e) => {
            cleanup_scratch(&natives_dir).await;
            return Err(e);
        }
    };

    info!(
        "Launching {} as {}",
        context.version_id, context.player_name
    );
    if config.debug {
        info!("Command: {}", format_command(&command.program, &command.args));
    }

    let result = supervise::supervise(&command.program, &command.args).await;
    cleanup_scratch(&command.natives_dir).await;
    result
}

/// Best-effort removal of the scratch natives directory.
async fn cleanup_scratch(natives_dir: &std::path::Path) {
    if let Err(e) = tokio::fs::remove_dir_all(natives_dir).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("Could not remove natives directory {:?}: {}", natives_dir, e);
        }
    }
}

/// Copy/paste-friendly rendering of the launch command for debug logs.
fn format_command(program: &str, args: &[String]) -> String {
    let mut rendered = shell_escape(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(&shell_escape(arg));
    }
    rendered
}

fn shell_escape(raw: &str) -> String {
    if raw.is_empty() {
        return "\"\"".to_string();
    }

    if raw.chars().all(|ch| {
        ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '/' | ':' | '\\' | '=')
    }) {
        return raw.to_string();
    }

    format!("\"{}\"", raw.replace('"', "\\\""))
}

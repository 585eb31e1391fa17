// ─── Argument Substitution ───
// Rewrites `${...}` placeholder tokens in the manifest's argument template
// using the runtime context.

use crate::core::config::{path_str, RuntimeContext};

/// Substitute placeholder tokens in the launch argument template.
///
/// The template is split on whitespace; each whole token is either replaced
/// by a recognized value or passed through unchanged. Passing unknown tokens
/// through keeps the launcher forward-compatible with templates written for
/// newer launchers.
pub fn substitute_arguments(template: &str, context: &RuntimeContext) -> Vec<String> {
    template
        .split_whitespace()
        .map(|token| substitute_token(token, context))
        .collect()
}

fn substitute_token(token: &str, context: &RuntimeContext) -> String {
    match token {
        "${auth_player_name}" => context.player_name.clone(),
        "${auth_session}" => format!("token:{}:{}", context.session_token, context.user_id),
        "${version_name}" => context.version_id.clone(),
        "${game_directory}" => path_str(&context.game_dir),
        "${game_assets}" => path_str(&context.legacy_assets_dir()),
        other => other.to_string(),
    }
}

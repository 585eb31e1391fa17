// ─── pickaxe Core ───
// Manifest resolution and launch engine for the command-line launcher.
//
// Architecture:
//   core/
//     config/    — immutable per-invocation configuration + runtime context
//     profile/   — launcher_profiles.json model, user/profile selection
//     manifest/  — version JSON model, OS rule evaluation
//     maven/     — coordinate parsing, library-to-path resolution
//     natives/   — native archive verification + extraction
//     launch/    — argument substitution, command assembly, supervision

pub mod config;
pub mod error;
pub mod launch;
pub mod manifest;
pub mod maven;
pub mod natives;
pub mod profile;

// ─── Profile Database ───
// Model of `launcher_profiles.json` plus user/profile selection. The launch
// core never reads this file itself; the front end loads it and hands the
// selections over as a `RuntimeContext`.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::{LauncherError, LauncherResult};

#[derive(Debug, Deserialize)]
pub struct Profile {
    #[serde(rename = "lastVersionId")]
    pub version_id: String,
    #[serde(rename = "javaArgs", default)]
    pub java_args: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// The launcher's profile/user database.
#[derive(Debug, Deserialize)]
pub struct ProfileData {
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
    #[serde(rename = "selectedProfile", default)]
    pub selected_profile: String,
    #[serde(rename = "authenticationDatabase", default)]
    pub users: HashMap<String, UserAccount>,
    #[serde(rename = "selectedUser", default)]
    pub selected_user: String,
}

impl ProfileData {
    /// Load and decode the profile database.
    pub async fn load(path: &Path) -> LauncherResult<Self> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LauncherError::Config(format!("cannot read {:?}: {}", path, e)))?;
        serde_json::from_str(&raw)
            .map_err(|e| LauncherError::Config(format!("cannot decode {:?}: {}", path, e)))
    }

    /// Select a user by display name, or the last-used user.
    ///
    /// Returns the user id together with the account. An unknown or missing
    /// selection lists the available users, marking the last-used one.
    pub fn select_user(
        &self,
        requested_name: Option<&str>,
        last_user: bool,
    ) -> LauncherResult<(&str, &UserAccount)> {
        let user_id = if last_user {
            Some(self.selected_user.as_str())
        } else {
            requested_name.and_then(|name| {
                self.users
                    .iter()
                    .find(|(_, user)| user.display_name == name)
                    .map(|(id, _)| id.as_str())
            })
        };

        user_id
            .and_then(|id| self.users.get(id).map(|user| (id, user)))
            .ok_or_else(|| LauncherError::Selection(self.describe_users()))
    }

    /// Select a profile by name, or the last-used profile.
    pub fn select_profile(
        &self,
        requested_name: Option<&str>,
        last_profile: bool,
    ) -> LauncherResult<(&str, &Profile)> {
        let name = if last_profile {
            Some(self.selected_profile.as_str())
        } else {
            requested_name
        };

        name.and_then(|n| self.profiles.get_key_value(n))
            .map(|(name, profile)| (name.as_str(), profile))
            .ok_or_else(|| LauncherError::Selection(self.describe_profiles()))
    }

    fn describe_users(&self) -> String {
        let mut msg =
            String::from("incorrect or no user selected, please choose one of the following:");
        for (id, user) in &self.users {
            let marker = if *id == self.selected_user {
                " (--last-user)"
            } else {
                ""
            };
            let _ = write!(msg, "\n\t{}{}", user.display_name, marker);
        }
        msg
    }

    fn describe_profiles(&self) -> String {
        let mut msg =
            String::from("incorrect or no profile selected, please choose one of the following:");
        for name in self.profiles.keys() {
            let marker = if *name == self.selected_profile {
                " (--last-profile)"
            } else {
                ""
            };
            let _ = write!(msg, "\n\t{}{}", name, marker);
        }
        msg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> ProfileData {
        serde_json::from_value(serde_json::json!({
            "profiles": {
                "default": { "lastVersionId": "1.6.4" },
                "snapshot": { "lastVersionId": "13w41b", "javaArgs": "-Xmx2G" }
            },
            "selectedProfile": "default",
            "authenticationDatabase": {
                "uuid-alice": { "displayName": "Alice", "accessToken": "abc123" },
                "uuid-bob": { "displayName": "Bob", "accessToken": "def456" }
            },
            "selectedUser": "uuid-bob"
        }))
        .unwrap()
    }

    #[test]
    fn selects_user_by_display_name() {
        let data = sample_data();
        let (id, user) = data.select_user(Some("Alice"), false).unwrap();
        assert_eq!(id, "uuid-alice");
        assert_eq!(user.access_token, "abc123");
    }

    #[test]
    fn selects_last_used_user() {
        let data = sample_data();
        let (id, user) = data.select_user(None, true).unwrap();
        assert_eq!(id, "uuid-bob");
        assert_eq!(user.display_name, "Bob");
    }

    #[test]
    fn unknown_user_lists_available_accounts() {
        let data = sample_data();
        let err = data.select_user(Some("Mallory"), false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Alice"));
        assert!(message.contains("Bob (--last-user)"));
    }

    #[test]
    fn selects_profile_by_name_and_last_used() {
        let data = sample_data();
        let (name, profile) = data.select_profile(Some("snapshot"), false).unwrap();
        assert_eq!(name, "snapshot");
        assert_eq!(profile.version_id, "13w41b");

        let (name, profile) = data.select_profile(None, true).unwrap();
        assert_eq!(name, "default");
        assert_eq!(profile.version_id, "1.6.4");
    }

    #[test]
    fn missing_profile_lists_choices() {
        let data = sample_data();
        let err = data.select_profile(None, false).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("default (--last-profile)"));
        assert!(message.contains("snapshot"));
    }

    #[tokio::test]
    async fn load_reports_unreadable_database_as_config_error() {
        let err = ProfileData::load(Path::new("/nonexistent/launcher_profiles.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, LauncherError::Config(_)));
    }
}

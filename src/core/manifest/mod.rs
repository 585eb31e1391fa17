// ─── Launch Manifest ───
// Model of a version JSON: argument template, library list with OS rules,
// native classifiers and extraction exclusions, main class.

use std::collections::HashMap;

use serde::Deserialize;

/// A parsed version JSON describing one launchable version.
#[derive(Debug, Deserialize)]
pub struct LaunchManifest {
    /// Legacy space-separated game argument template with `${...}` tokens.
    #[serde(rename = "minecraftArguments", default)]
    pub argument_template: String,
    #[serde(default)]
    pub libraries: Vec<Library>,
    #[serde(rename = "mainClass")]
    pub main_class: String,
}

/// One library dependency with optional OS rules and native variants.
#[derive(Debug, Deserialize)]
pub struct Library {
    /// Maven-style coordinate (`group:artifact:version[:classifier]`).
    pub name: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Platform name → native classifier, for libraries shipping native code.
    #[serde(default)]
    pub natives: HashMap<String, String>,
    #[serde(default)]
    pub extract: ExtractOptions,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExtractOptions {
    /// Entry path prefixes that must not be extracted.
    #[serde(default)]
    pub exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Rule {
    pub action: RuleAction,
    #[serde(default)]
    pub os: OsTarget,
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    #[serde(alias = "deny")]
    Disallow,
}

#[derive(Debug, Default, Deserialize)]
pub struct OsTarget {
    /// Empty string means the rule applies to every platform.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
}

impl Rule {
    /// A rule matches when its OS name equals the platform or is empty
    /// (wildcard).
    fn matches(&self, platform: &str) -> bool {
        self.os.name.is_empty() || self.os.name == platform
    }
}

impl Library {
    /// Evaluate the library's rules against a platform name.
    ///
    /// Rules logic (Mojang spec):
    /// - No rules → allowed.
    /// - Otherwise fold over the rules in manifest order, starting from
    ///   disallowed. Every rule that matches the platform overwrites the
    ///   verdict with its own action; non-matching rules leave it untouched.
    ///
    /// The last matching rule wins. There is no early termination: a later
    /// wildcard rule overrides an earlier platform-specific one.
    pub fn is_allowed_on(&self, platform: &str) -> bool {
        if self.rules.is_empty() {
            return true;
        }

        self.rules.iter().fold(false, |allowed, rule| {
            if rule.matches(platform) {
                rule.action == RuleAction::Allow
            } else {
                allowed
            }
        })
    }

    /// Native classifier for the platform, if this library ships native code
    /// for it. Empty mapping entries are treated as absent.
    pub fn native_classifier(&self, platform: &str) -> Option<&str> {
        self.natives
            .get(platform)
            .map(String::as_str)
            .filter(|classifier| !classifier.is_empty())
    }
}

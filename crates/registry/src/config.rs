//! Toolbox configuration loaded from JSON or YAML.
//!
//! The file lives at `~/.config/toolbox/toolbox.json` on most platforms and
//! can be redirected with `TOOLBOX_CONFIG_PATH`. A missing or unreadable
//! default file yields the default configuration; a path given explicitly
//! must load.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs_next::config_dir;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use toolbox_types::{NotifyClickMode, ThresholdRule};
use tracing::{debug, warn};

use crate::{
    catalog::{default_priority, default_thresholds, default_toolbar_buttons},
    thresholds::{ThresholdError, ThresholdRules, apply_main_toolbar_overrides},
    utils::{expand_tilde, normalize_key},
};

/// Environment variable allowing callers to override the configuration path.
pub const CONFIG_PATH_ENV: &str = "TOOLBOX_CONFIG_PATH";

/// Default filename for the configuration payload.
pub const CONFIG_FILE_NAME: &str = "toolbox.json";

/// Error surfaced when reading an explicitly requested configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read toolbox config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in toolbox config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML in toolbox config {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A button declared by the embedding host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomButtonConfig {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Entry of `buttons_with_notify_click`: a bare key or a key with an explicit
/// execution policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotifyClickConfig {
    Key(String),
    Detailed {
        key: String,
        #[serde(default)]
        prevent_execution: bool,
    },
}

impl NotifyClickConfig {
    pub fn key(&self) -> &str {
        match self {
            Self::Key(key) | Self::Detailed { key, .. } => key,
        }
    }

    pub fn mode(&self) -> NotifyClickMode {
        match self {
            Self::Key(_) => NotifyClickMode::PreventAndNotify,
            Self::Detailed {
                prevent_execution: true, ..
            } => NotifyClickMode::PreventAndNotify,
            Self::Detailed { .. } => NotifyClickMode::OnlyNotify,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    /// Buttons the toolbar may show; every built-in button when absent
    pub toolbar_buttons: Option<Vec<String>>,
    /// Main-bar orders that replace threshold orders with the same length
    pub main_toolbar_buttons: Option<Vec<Vec<String>>>,
    /// Replaces the built-in threshold rules
    pub main_toolbar_buttons_thresholds: Option<Vec<ThresholdRule>>,
    /// Replaces the built-in fallback priority list
    pub main_toolbar_buttons_priority: Option<Vec<String>>,
    pub custom_toolbar_buttons: Vec<CustomButtonConfig>,
    pub buttons_with_notify_click: Vec<NotifyClickConfig>,
    /// Feature claims granted by the access token (e.g. "recording": false)
    pub features: IndexMap<String, bool>,
    pub i_am_recorder: bool,
    pub i_am_sip_gateway: bool,
}

impl ToolboxConfig {
    /// Loads the configuration from the default location, falling back to
    /// defaults when the file is missing or invalid.
    pub fn load() -> Self {
        let path = default_config_path();
        if !path.exists() {
            debug!(path = %path.display(), "no toolbox config found; using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "ignoring unreadable toolbox config");
                Self::default()
            }
        }
    }

    /// Loads the configuration from `path`. Files ending in `.yaml` or `.yml`
    /// are parsed as YAML, everything else as JSON.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_yaml = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case("yaml") || extension.eq_ignore_ascii_case("yml"));

        if is_yaml {
            serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    /// Keys the configuration enables, with every custom button id appended.
    pub fn enabled_buttons(&self) -> Vec<String> {
        let mut buttons = self.toolbar_buttons.clone().unwrap_or_else(default_toolbar_buttons);
        for custom in &self.custom_toolbar_buttons {
            if let Some(id) = normalize_key(&custom.id)
                && !buttons.iter().any(|button| button == id)
            {
                buttons.push(id.to_string());
            }
        }
        buttons
    }

    /// Click notification modes keyed by button. Blank keys are skipped and a
    /// later entry for the same key wins.
    pub fn notify_click_modes(&self) -> IndexMap<String, NotifyClickMode> {
        self.buttons_with_notify_click
            .iter()
            .filter_map(|entry| normalize_key(entry.key()).map(|key| (key.to_string(), entry.mode())))
            .collect()
    }

    /// Effective threshold rules: configured or default rules with the
    /// main-toolbar order overrides applied.
    pub fn threshold_rules(&self) -> Result<ThresholdRules, ThresholdError> {
        let base = self.main_toolbar_buttons_thresholds.clone().unwrap_or_else(default_thresholds);
        let thresholds = match &self.main_toolbar_buttons {
            Some(overrides) => apply_main_toolbar_overrides(base, overrides),
            None => base,
        };
        ThresholdRules::new(thresholds)
    }

    pub fn priority(&self) -> Vec<String> {
        self.main_toolbar_buttons_priority.clone().unwrap_or_else(default_priority)
    }

    /// Recorders and SIP gateways join without a toolbar.
    pub fn is_toolbox_disabled(&self) -> bool {
        self.i_am_recorder || self.i_am_sip_gateway
    }
}

/// Get the default path for the toolbox configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolbox")
        .join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn env_var_overrides_default_path() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/toolbox-test/config.yaml"), || {
            assert_eq!(default_config_path(), PathBuf::from("/tmp/toolbox-test/config.yaml"));
        });
    }

    #[test]
    fn blank_env_var_falls_back_to_config_dir() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("   "), || {
            let path = default_config_path();
            assert!(path.ends_with("toolbox/toolbox.json"), "unexpected path {}", path.display());
        });
    }

    #[test]
    fn load_parses_yaml_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().expect("temp file");
        writeln!(
            file,
            "toolbar_buttons: [microphone, camera, chat]\nfeatures:\n  recording: false\ni_am_recorder: true"
        )
        .expect("write config");

        let config = ToolboxConfig::load_from(file.path()).expect("load yaml");
        assert_eq!(config.toolbar_buttons, Some(vec!["microphone".into(), "camera".into(), "chat".into()]));
        assert_eq!(config.features.get("recording"), Some(&false));
        assert!(config.is_toolbox_disabled());
    }

    #[test]
    fn load_reports_invalid_json_with_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(file, "{{ not json").expect("write config");

        let error = ToolboxConfig::load_from(file.path()).expect_err("invalid json");
        assert!(matches!(error, ConfigError::Json { .. }));
        assert!(error.to_string().contains(&file.path().display().to_string()));
    }

    #[test]
    fn load_falls_back_to_defaults_for_missing_or_invalid_files() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("missing.json");
        temp_env::with_var(CONFIG_PATH_ENV, Some(missing.to_str().expect("utf-8 path")), || {
            assert_eq!(ToolboxConfig::load(), ToolboxConfig::default());
        });

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "{ \"toolbar_buttons\": 42 }").expect("write config");
        temp_env::with_var(CONFIG_PATH_ENV, Some(invalid.to_str().expect("utf-8 path")), || {
            assert_eq!(ToolboxConfig::load(), ToolboxConfig::default());
        });
    }

    #[test]
    fn custom_buttons_are_always_enabled() {
        let config = ToolboxConfig {
            toolbar_buttons: Some(vec!["chat".into(), "poll-export".into()]),
            custom_toolbar_buttons: vec![
                CustomButtonConfig {
                    id: "poll-export".into(),
                    ..Default::default()
                },
                CustomButtonConfig {
                    id: "whiteboard-export".into(),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(config.enabled_buttons(), vec!["chat", "poll-export", "whiteboard-export"]);
    }

    #[test]
    fn default_enabled_buttons_cover_the_catalog_and_hangup() {
        let enabled = ToolboxConfig::default().enabled_buttons();
        assert!(enabled.iter().any(|key| key == "hangup"));
        assert!(enabled.iter().any(|key| key == "participants-pane"));
    }

    #[test]
    fn notify_click_entries_map_to_modes() {
        let config: ToolboxConfig = serde_json::from_str(
            r#"{
                "buttons_with_notify_click": [
                    "camera",
                    { "key": "chat", "prevent_execution": false },
                    { "key": "hangup", "prevent_execution": true },
                    { "key": " " }
                ]
            }"#,
        )
        .expect("parse config");

        let modes = config.notify_click_modes();
        assert_eq!(modes.len(), 3);
        assert_eq!(modes.get("camera"), Some(&NotifyClickMode::PreventAndNotify));
        assert_eq!(modes.get("chat"), Some(&NotifyClickMode::OnlyNotify));
        assert_eq!(modes.get("hangup"), Some(&NotifyClickMode::PreventAndNotify));
    }

    #[test]
    fn threshold_rules_apply_overrides_to_configured_thresholds() {
        let config = ToolboxConfig {
            main_toolbar_buttons_thresholds: Some(vec![
                ThresholdRule::new(400, ["microphone"]),
                ThresholdRule::new(800, ["microphone", "camera"]),
            ]),
            main_toolbar_buttons: Some(vec![vec!["chat".into(), "desktop".into()]]),
            ..Default::default()
        };
        let rules = config.threshold_rules().expect("rules");
        assert_eq!(
            rules.as_slice(),
            &[ThresholdRule::new(400, ["microphone"]), ThresholdRule::new(800, ["chat", "desktop"])]
        );
    }

    #[test]
    fn empty_configured_thresholds_are_an_error() {
        let config = ToolboxConfig {
            main_toolbar_buttons_thresholds: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(config.threshold_rules(), Err(ThresholdError::Empty));
    }
}

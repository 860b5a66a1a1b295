//! Buttons disabled by the local participant's role and token features.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Token features that gate a toolbar button, as `(feature, button)` pairs.
pub const FEATURE_GATED_BUTTONS: &[(&str, &str)] = &[
    ("livestreaming", "livestreaming"),
    ("recording", "recording"),
    ("transcription", "closedcaptions"),
];

/// Role and token claims of the local participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub is_moderator: bool,
    /// Feature claims from the access token; a missing claim falls back to
    /// `is_moderator`.
    #[serde(default)]
    pub features: IndexMap<String, bool>,
}

impl AccessPolicy {
    pub fn new(is_moderator: bool, features: IndexMap<String, bool>) -> Self {
        Self { is_moderator, features }
    }

    pub fn is_feature_enabled(&self, feature: &str) -> bool {
        self.features.get(feature).copied().unwrap_or(self.is_moderator)
    }

    /// Keys of the buttons this participant may not use.
    pub fn disabled_buttons(&self) -> HashSet<String> {
        FEATURE_GATED_BUTTONS
            .iter()
            .filter(|(feature, _)| !self.is_feature_enabled(feature))
            .map(|(_, button)| button.to_string())
            .collect()
    }
}

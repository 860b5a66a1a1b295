use std::{
    any::Any,
    collections::HashMap,
    error::Error,
    fmt,
    str::FromStr,
    sync::Arc,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub mod placement;
pub mod threshold;

pub use placement::{OverflowCluster, PlacementResult};
pub use threshold::ThresholdRule;

/// Group assigned to buttons supplied through configuration rather than the
/// built-in catalog.
pub const CUSTOM_BUTTON_GROUP: u8 = 4;

/// How a button click is reported to an embedding host.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum NotifyClickMode {
    /// The click is reported and the button's own action still runs.
    #[serde(rename = "ONLY_NOTIFY")]
    OnlyNotify,
    /// The click is reported and the button's own action is suppressed.
    #[serde(rename = "PREVENT_AND_NOTIFY")]
    PreventAndNotify,
}

impl NotifyClickMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnlyNotify => "ONLY_NOTIFY",
            Self::PreventAndNotify => "PREVENT_AND_NOTIFY",
        }
    }
}

impl fmt::Display for NotifyClickMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotifyClickMode {
    type Err = ParseNotifyClickModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ONLY_NOTIFY" => Ok(Self::OnlyNotify),
            "PREVENT_AND_NOTIFY" => Ok(Self::PreventAndNotify),
            _ => Err(ParseNotifyClickModeError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseNotifyClickModeError;

impl fmt::Display for ParseNotifyClickModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid notify click mode; expected 'ONLY_NOTIFY' or 'PREVENT_AND_NOTIFY'")
    }
}

impl Error for ParseNotifyClickModeError {}

/// Distinguishes catalog buttons from buttons declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ButtonKind {
    /// A button shipped with the client.
    #[default]
    BuiltIn,
    /// A button declared by the embedding host.
    Custom {
        /// Label shown next to or instead of the icon
        text: String,
        /// Icon reference (URL or data URI)
        icon: String,
        /// Optional background color override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background_color: Option<String>,
    },
}

/// Opaque rendering payload attached to a button.
///
/// Placement never looks inside; the rendering layer stores whatever it needs
/// (a component handle, a closure, a widget id) and downcasts it back.
/// Two payloads compare equal when both are empty or both point at the same
/// allocation.
#[derive(Clone, Default)]
pub struct ButtonPayload(Option<Arc<dyn Any + Send + Sync>>);

impl ButtonPayload {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self(Some(Arc::new(value)))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns the payload as `T` when it holds a value of that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_deref().and_then(|value| value.downcast_ref::<T>())
    }
}

impl fmt::Debug for ButtonPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("ButtonPayload(..)"),
            None => f.write_str("ButtonPayload(empty)"),
        }
    }
}

impl PartialEq for ButtonPayload {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}

/// Describes a single toolbar button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDescriptor {
    /// Unique identifier (e.g., "microphone", "participants-pane")
    pub key: String,
    /// Cluster id; adjacent overflow entries with the same group are rendered
    /// together
    pub group: u8,
    #[serde(default)]
    pub kind: ButtonKind,
    /// Click notification mode requested by the embedding host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify_mode: Option<NotifyClickMode>,
    #[serde(skip)]
    pub payload: ButtonPayload,
}

impl ButtonDescriptor {
    /// Creates a built-in button with no payload.
    pub fn new(key: impl Into<String>, group: u8) -> Self {
        Self {
            key: key.into(),
            group,
            kind: ButtonKind::BuiltIn,
            notify_mode: None,
            payload: ButtonPayload::default(),
        }
    }

    /// Creates a button declared by the embedding host.
    pub fn custom(key: impl Into<String>, text: impl Into<String>, icon: impl Into<String>, background_color: Option<String>) -> Self {
        Self {
            key: key.into(),
            group: CUSTOM_BUTTON_GROUP,
            kind: ButtonKind::Custom {
                text: text.into(),
                icon: icon.into(),
                background_color,
            },
            notify_mode: None,
            payload: ButtonPayload::default(),
        }
    }

    pub fn with_payload(mut self, payload: ButtonPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.kind, ButtonKind::Custom { .. })
    }
}

/// Read-only lookup from button key to descriptor.
pub trait ButtonSource {
    fn button(&self, key: &str) -> Option<&ButtonDescriptor>;
}

impl ButtonSource for IndexMap<String, ButtonDescriptor> {
    fn button(&self, key: &str) -> Option<&ButtonDescriptor> {
        self.get(key)
    }
}

impl ButtonSource for HashMap<String, ButtonDescriptor> {
    fn button(&self, key: &str) -> Option<&ButtonDescriptor> {
        self.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_equality_follows_allocation() {
        let shared = ButtonPayload::new("mic-icon");
        let copy = shared.clone();
        let other = ButtonPayload::new("mic-icon");

        assert_eq!(shared, copy);
        assert_ne!(shared, other);
        assert_eq!(ButtonPayload::default(), ButtonPayload::default());
        assert_ne!(shared, ButtonPayload::default());
        assert_eq!(shared.downcast_ref::<&str>(), Some(&"mic-icon"));
        assert!(shared.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn custom_descriptor_serializes_kind_and_skips_payload() {
        let descriptor = ButtonDescriptor::custom("poll-export", "Export", "data:image/svg+xml;base64,AAAA", None)
            .with_payload(ButtonPayload::new(7_u8));
        let value = serde_json::to_value(&descriptor).expect("serialize descriptor");

        assert_eq!(value["key"], "poll-export");
        assert_eq!(value["group"], CUSTOM_BUTTON_GROUP);
        assert_eq!(value["kind"]["type"], "custom");
        assert_eq!(value["kind"]["text"], "Export");
        assert!(value.get("payload").is_none());
        assert!(value.get("notify_mode").is_none());
    }

    #[test]
    fn descriptor_deserializes_with_defaults() {
        let descriptor: ButtonDescriptor = serde_yaml::from_str("key: chat\ngroup: 2\n").expect("parse descriptor");
        assert_eq!(descriptor, ButtonDescriptor::new("chat", 2));
        assert!(!descriptor.is_custom());
    }

    #[test]
    fn notify_click_mode_round_trips_through_str() {
        assert_eq!("ONLY_NOTIFY".parse::<NotifyClickMode>(), Ok(NotifyClickMode::OnlyNotify));
        assert_eq!(NotifyClickMode::PreventAndNotify.to_string(), "PREVENT_AND_NOTIFY");
        assert!("notify".parse::<NotifyClickMode>().is_err());
    }
}

use indexmap::IndexMap;
use thiserror::Error;
use toolbox_types::{ButtonDescriptor, ButtonSource};
use tracing::{debug, warn};

use crate::{ToolboxConfig, catalog::BUILT_IN_BUTTONS, utils::normalize_key};

/// Errors raised while assembling a button registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two buttons were registered under the same key.
    #[error("duplicate toolbar button key: {key}")]
    DuplicateKey { key: String },
    /// A button was registered with an empty key.
    #[error("toolbar button key must not be blank")]
    BlankKey,
}

/// All toolbar buttons available for one evaluation, keyed by button key in
/// registration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonRegistry {
    buttons: IndexMap<String, ButtonDescriptor>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding only the built-in catalog.
    pub fn built_in() -> Self {
        let buttons = BUILT_IN_BUTTONS
            .iter()
            .map(|(key, group)| (key.to_string(), ButtonDescriptor::new(*key, *group)))
            .collect();
        Self { buttons }
    }

    /// Creates a registry with the built-in catalog followed by the custom
    /// buttons declared in `config`.
    ///
    /// Custom buttons with a blank id are skipped; a custom id colliding with
    /// another button is an error.
    pub fn from_config(config: &ToolboxConfig) -> Result<Self, RegistryError> {
        let mut registry = Self::built_in();
        for custom in &config.custom_toolbar_buttons {
            let Some(id) = normalize_key(&custom.id) else {
                warn!(text = %custom.text, "skipping custom toolbar button without an id");
                continue;
            };
            registry.insert(ButtonDescriptor::custom(
                id,
                custom.text.clone(),
                custom.icon.clone(),
                custom.background_color.clone(),
            ))?;
        }
        debug!(buttons = registry.len(), "toolbar button registry assembled");
        Ok(registry)
    }

    /// Registers a button, rejecting blank and duplicate keys.
    pub fn insert(&mut self, descriptor: ButtonDescriptor) -> Result<(), RegistryError> {
        if descriptor.key.trim().is_empty() {
            return Err(RegistryError::BlankKey);
        }
        if self.buttons.contains_key(&descriptor.key) {
            return Err(RegistryError::DuplicateKey { key: descriptor.key });
        }
        self.buttons.insert(descriptor.key.clone(), descriptor);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&ButtonDescriptor> {
        self.buttons.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.buttons.contains_key(key)
    }

    /// Button keys in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buttons.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ButtonDescriptor> {
        self.buttons.values()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

impl ButtonSource for ButtonRegistry {
    fn button(&self, key: &str) -> Option<&ButtonDescriptor> {
        self.get(key)
    }
}

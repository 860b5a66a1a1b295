//! Registry crate for toolbar button definitions.
//!
//! This crate owns the built-in button catalog, assembles the per-evaluation
//! button registry (built-in plus custom buttons), and loads the toolbox
//! configuration that decides which buttons are enabled and how the main bar
//! is ordered at each viewport width.

pub mod catalog;
pub mod config;
pub mod models;
pub mod thresholds;
pub mod utils;

pub use catalog::{MAIN_TOOLBAR_BUTTONS_PRIORITY, TOOLBAR_BUTTONS, default_priority, default_thresholds};
pub use config::{ConfigError, CustomButtonConfig, NotifyClickConfig, ToolboxConfig, default_config_path};
pub use models::{ButtonRegistry, RegistryError};
pub use thresholds::{ThresholdError, ThresholdRules, apply_main_toolbar_overrides};
pub use toolbox_types::{ButtonDescriptor, ButtonSource, ThresholdRule};
pub use utils::*;

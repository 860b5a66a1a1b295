//! # Toolbox Engine
//!
//! Decides which toolbar buttons sit in the always-visible main bar and which
//! move to the overflow menu, given the viewport width, the enabled buttons,
//! and the local participant's permissions.
//!
//! Every function here is pure: the same inputs always give the same layout,
//! and nothing is cached between calls. Callers re-evaluate whenever the
//! width, configuration, or role changes.
//!
//! ## Usage
//!
//! ```rust
//! use toolbox_engine::{ToolboxInputs, evaluate};
//! use toolbox_registry::ButtonRegistry;
//!
//! let registry = ButtonRegistry::built_in();
//! let inputs = ToolboxInputs { client_width: 480, ..ToolboxInputs::default() };
//! let layout = evaluate(&registry, &inputs)?.expect("toolbox enabled");
//! assert_eq!(layout.threshold_width, 470);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`filter`**: drops disabled and unconfigured keys
//! - **`threshold`**: selects the ordering rule for the current width
//! - **`placement`**: main bar / overflow split and group clustering
//! - **`access`**: buttons disabled by role and token features
//! - **`overflow`**: reactions handling inside the overflow menu
//! - **`toolbox`**: the end-to-end evaluation

pub mod access;
pub mod error;
pub mod filter;
pub mod overflow;
pub mod placement;
pub mod threshold;
pub mod toolbox;

pub use access::AccessPolicy;
pub use error::PlacementError;
pub use filter::{filter_visible_keys, is_button_enabled};
pub use overflow::{DisplayContext, OverflowMenu};
pub use placement::{cluster_overflow, combined_order, place};
pub use threshold::select_threshold;
pub use toolbox::{HangupControl, ToolboxInputs, ToolboxLayout, apply_notify_modes, evaluate};

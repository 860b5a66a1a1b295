use thiserror::Error;

/// Configuration errors that make a toolbar evaluation impossible.
///
/// Both variants point at upstream misconfiguration; evaluation stops rather
/// than rendering a toolbar with missing slots.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// No threshold rule was supplied, so there is no default layout.
    #[error("no main toolbar threshold rules configured")]
    NoThresholds,
    /// A key survived filtering but has no registry entry.
    #[error("toolbar button '{key}' is not registered")]
    UnknownButton { key: String },
}

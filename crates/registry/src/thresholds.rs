//! Threshold rule validation and per-slot-count order overrides.

use std::collections::HashMap;

use thiserror::Error;
use toolbox_types::ThresholdRule;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ThresholdError {
    /// At least one rule is required; the last rule is the narrow-layout default.
    #[error("main toolbar threshold list must not be empty")]
    Empty,
}

/// A validated, non-empty list of threshold rules in configured order.
///
/// Rules are scanned first to last when selecting a layout, so the list is
/// expected to run widest first; the last rule is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdRules {
    rules: Vec<ThresholdRule>,
}

impl ThresholdRules {
    pub fn new(rules: Vec<ThresholdRule>) -> Result<Self, ThresholdError> {
        if rules.is_empty() {
            return Err(ThresholdError::Empty);
        }
        if rules.windows(2).any(|pair| pair[0].width < pair[1].width) {
            let widths: Vec<u32> = rules.iter().map(|rule| rule.width).collect();
            warn!(?widths, "main toolbar thresholds are not in descending width order");
        }
        Ok(Self { rules })
    }

    pub fn as_slice(&self) -> &[ThresholdRule] {
        &self.rules
    }

    pub fn into_inner(self) -> Vec<ThresholdRule> {
        self.rules
    }
}

/// Replaces threshold orders with configured main-toolbar orders of the same
/// length.
///
/// Each non-empty override list is keyed by its length; when several share a
/// length the last one wins. A threshold whose order length has no override
/// keeps its order. Entries are taken verbatim; unknown or blank keys are
/// left for the visibility filter to drop, so they still count as a slot.
pub fn apply_main_toolbar_overrides(thresholds: Vec<ThresholdRule>, overrides: &[Vec<String>]) -> Vec<ThresholdRule> {
    let mut orders_by_length: HashMap<usize, Vec<String>> = HashMap::new();
    for buttons in overrides.iter().filter(|buttons| !buttons.is_empty()) {
        orders_by_length.insert(buttons.len(), buttons.clone());
    }

    if orders_by_length.is_empty() {
        return thresholds;
    }

    thresholds
        .into_iter()
        .map(|ThresholdRule { width, order }| match orders_by_length.get(&order.len()) {
            Some(replacement) => {
                debug!(width, slots = order.len(), "main toolbar order overridden by configuration");
                ThresholdRule {
                    width,
                    order: replacement.clone(),
                }
            }
            None => ThresholdRule { width, order },
        })
        .collect()
}

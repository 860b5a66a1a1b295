use toolbox_types::ThresholdRule;

use crate::PlacementError;

/// Picks the ordering rule for `client_width`.
///
/// Rules are scanned in the given order and the first one the viewport is
/// strictly wider than wins. When none applies, the last rule is the default
/// layout. An empty list has no default and is a configuration error.
pub fn select_threshold(rules: &[ThresholdRule], client_width: u32) -> Result<&ThresholdRule, PlacementError> {
    let default_rule = rules.last().ok_or(PlacementError::NoThresholds)?;
    Ok(rules.iter().find(|rule| rule.applies_to(client_width)).unwrap_or(default_rule))
}

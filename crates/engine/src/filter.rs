//! Visibility filtering of registry keys.

use std::collections::HashSet;

use tracing::debug;

/// Returns the keys that may be placed on the toolbar, in input order.
///
/// A key is kept when it is non-blank, absent from `disabled_keys`, and
/// accepted by `is_enabled`. Blank keys come from loosely validated
/// configuration lists and are skipped rather than reported.
pub fn filter_visible_keys<'a, I, F>(all_keys: I, disabled_keys: &HashSet<String>, is_enabled: F) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> bool,
{
    all_keys
        .into_iter()
        .filter(|key| {
            if key.trim().is_empty() {
                debug!("skipping blank toolbar button key");
                return false;
            }
            !disabled_keys.contains(*key) && is_enabled(*key)
        })
        .map(str::to_string)
        .collect()
}

/// Whether `key` is listed among the configured toolbar buttons.
pub fn is_button_enabled(key: &str, toolbar_buttons: &[String]) -> bool {
    toolbar_buttons.iter().any(|button| button == key)
}

//! Main-bar versus overflow placement.
//!
//! Placement is a single deterministic pass over the filtered keys:
//! 1. Build a combined candidate order from the threshold order, then the
//!    priority fallback, then the remaining keys in filter order.
//! 2. The first `N` candidates fill the main bar, where `N` is the length of
//!    the threshold order.
//! 3. Every other filtered key goes to the overflow menu in filter order.
//! 4. A lone overflow entry is moved to the end of the main bar instead of
//!    opening a one-item menu.
//! 5. Overflow entries are clustered by adjacent equal group.

use std::collections::HashSet;

use toolbox_types::{ButtonDescriptor, ButtonSource, OverflowCluster, PlacementResult};
use tracing::debug;

use crate::PlacementError;

/// Merges the preferred order, the priority fallback and the remaining
/// filtered keys into one candidate order without duplicates.
///
/// Only keys present in `filtered_keys` are returned, borrowed from it.
pub fn combined_order<'a>(filtered_keys: &'a [String], preferred_order: &[String], priority_fallback: &[String]) -> Vec<&'a str> {
    let visible: HashSet<&'a str> = filtered_keys.iter().map(String::as_str).collect();
    let mut placed: HashSet<&'a str> = HashSet::with_capacity(filtered_keys.len());

    preferred_order
        .iter()
        .chain(priority_fallback)
        .chain(filtered_keys)
        .filter_map(|key| visible.get(key.as_str()).copied())
        .filter(|key| placed.insert(*key))
        .collect()
}

/// Groups overflow buttons into runs of adjacent equal `group`.
///
/// A group that reappears after a different one starts a new cluster.
pub fn cluster_overflow(buttons: Vec<ButtonDescriptor>) -> Vec<OverflowCluster> {
    let mut clusters: Vec<OverflowCluster> = Vec::new();
    for button in buttons {
        match clusters.last_mut() {
            Some(cluster) if cluster.group == button.group => cluster.buttons.push(button),
            _ => clusters.push(OverflowCluster {
                group: button.group,
                buttons: vec![button],
            }),
        }
    }
    clusters
}

/// Splits `filtered_keys` between the main bar and the overflow menu.
///
/// `preferred_order` is the order of the selected threshold rule and its
/// length is the main-bar slot budget. Every key is resolved through
/// `registry`; a key without an entry fails the whole evaluation.
pub fn place<S>(
    filtered_keys: &[String],
    preferred_order: &[String],
    priority_fallback: &[String],
    registry: &S,
) -> Result<PlacementResult, PlacementError>
where
    S: ButtonSource + ?Sized,
{
    let slots = preferred_order.len();
    let mut main_keys: Vec<&str> = combined_order(filtered_keys, preferred_order, priority_fallback)
        .into_iter()
        .take(slots)
        .collect();

    let in_main: HashSet<&str> = main_keys.iter().copied().collect();
    let mut overflow_keys: Vec<&str> = filtered_keys
        .iter()
        .map(String::as_str)
        .filter(|key| !in_main.contains(key))
        .collect();

    if overflow_keys.len() == 1 {
        // Show the button itself in place of a one-item "more" menu.
        main_keys.append(&mut overflow_keys);
    }

    let main_menu_buttons = resolve(&main_keys, registry)?;
    let overflow_menu_buttons = cluster_overflow(resolve(&overflow_keys, registry)?);

    debug!(
        slots,
        main = main_menu_buttons.len(),
        overflow = overflow_keys.len(),
        clusters = overflow_menu_buttons.len(),
        "toolbar buttons placed"
    );

    Ok(PlacementResult {
        main_menu_buttons,
        overflow_menu_buttons,
    })
}

fn resolve<S>(keys: &[&str], registry: &S) -> Result<Vec<ButtonDescriptor>, PlacementError>
where
    S: ButtonSource + ?Sized,
{
    keys.iter()
        .map(|key| {
            registry
                .button(key)
                .cloned()
                .ok_or_else(|| PlacementError::UnknownButton { key: key.to_string() })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn keys(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn registry(entries: &[(&str, u8)]) -> IndexMap<String, ButtonDescriptor> {
        entries
            .iter()
            .map(|(key, group)| (key.to_string(), ButtonDescriptor::new(*key, *group)))
            .collect()
    }

    fn abcde() -> IndexMap<String, ButtonDescriptor> {
        registry(&[("a", 0), ("b", 1), ("c", 0), ("d", 2), ("e", 2)])
    }

    #[test]
    fn combined_order_prefers_threshold_then_priority_then_filter_order() {
        let filtered = keys(&["a", "b", "c", "d", "e"]);
        let order = combined_order(&filtered, &keys(&["c", "a"]), &keys(&["b"]));
        assert_eq!(order, vec!["c", "a", "b", "d", "e"]);
    }

    #[test]
    fn combined_order_ignores_unknown_and_repeated_keys() {
        let filtered = keys(&["a", "b", "c"]);
        let order = combined_order(&filtered, &keys(&["x", "c", "c"]), &keys(&["c", "z", "a"]));
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn overflow_keeps_filter_order() {
        let placed = place(&keys(&["a", "b", "c", "d", "e"]), &keys(&["c", "a"]), &keys(&["b"]), &abcde()).expect("placement");

        assert_eq!(placed.main_keys(), vec!["c", "a"]);
        assert_eq!(placed.overflow_keys(), vec!["b", "d", "e"]);
        let groups: Vec<_> = placed.overflow_menu_buttons.iter().map(|cluster| cluster.group).collect();
        assert_eq!(groups, vec![1, 2]);
    }

    #[test]
    fn single_overflow_button_joins_main_bar() {
        let placed = place(&keys(&["a", "b", "c"]), &keys(&["c", "a"]), &[], &abcde()).expect("placement");

        assert_eq!(placed.main_keys(), vec!["c", "a", "b"]);
        assert!(!placed.has_overflow());
    }

    #[test]
    fn collapse_ignores_group_of_moved_button() {
        let registry = registry(&[("mic", 0), ("cam", 0), ("help", 4)]);
        let placed = place(&keys(&["mic", "cam", "help"]), &keys(&["mic", "cam"]), &[], &registry).expect("placement");
        assert_eq!(placed.main_keys(), vec!["mic", "cam", "help"]);
        assert_eq!(placed.main_menu_buttons[2].group, 4);
    }

    #[test]
    fn priority_fills_slots_missing_from_threshold_order() {
        let placed = place(&keys(&["a", "b", "c", "d", "e"]), &keys(&["x", "e", "y"]), &keys(&["d", "a"]), &abcde()).expect("placement");

        assert_eq!(placed.main_keys(), vec!["e", "d", "a"]);
        assert_eq!(placed.overflow_keys(), vec!["b", "c"]);
    }

    #[test]
    fn zero_slots_sends_everything_to_overflow() {
        let placed = place(&keys(&["a", "b"]), &[], &keys(&["a"]), &abcde()).expect("placement");
        assert!(placed.main_menu_buttons.is_empty());
        assert_eq!(placed.overflow_keys(), vec!["a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let placed = place(&[], &keys(&["a", "b"]), &keys(&["c"]), &abcde()).expect("placement");
        assert_eq!(placed, PlacementResult::default());
    }

    #[test]
    fn unregistered_key_is_reported() {
        let error = place(&keys(&["a", "ghost", "b", "c"]), &keys(&["a"]), &[], &abcde()).expect_err("missing key");
        assert_eq!(error, PlacementError::UnknownButton { key: "ghost".into() });
    }

    #[test]
    fn clusters_split_on_group_change_and_reappearance() {
        let registry = registry(&[("a", 2), ("b", 2), ("c", 3), ("d", 2), ("e", 4)]);
        let buttons: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|key| registry.get(*key).cloned().expect("button"))
            .collect();

        let clusters = cluster_overflow(buttons);
        let shape: Vec<(u8, Vec<&str>)> = clusters.iter().map(|cluster| (cluster.group, cluster.keys().collect())).collect();
        assert_eq!(shape, vec![(2, vec!["a", "b"]), (3, vec!["c"]), (2, vec!["d"]), (4, vec!["e"])]);
    }
}

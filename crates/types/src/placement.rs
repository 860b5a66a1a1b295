//! Output of a toolbar placement evaluation.

use serde::{Deserialize, Serialize};

use crate::ButtonDescriptor;

/// A maximal run of adjacent overflow buttons sharing the same group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverflowCluster {
    pub group: u8,
    /// Never empty; every entry carries `group`.
    pub buttons: Vec<ButtonDescriptor>,
}

impl OverflowCluster {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|button| button.key.as_str())
    }
}

/// Buttons shown in the main bar and the overflow menu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementResult {
    /// Main-bar buttons, left to right
    pub main_menu_buttons: Vec<ButtonDescriptor>,
    /// Overflow entries grouped by adjacency of equal `group`
    pub overflow_menu_buttons: Vec<OverflowCluster>,
}

impl PlacementResult {
    pub fn main_keys(&self) -> Vec<&str> {
        self.main_menu_buttons.iter().map(|button| button.key.as_str()).collect()
    }

    /// Overflow keys flattened across clusters, in menu order.
    pub fn overflow_keys(&self) -> Vec<&str> {
        self.overflow_menu_buttons.iter().flat_map(OverflowCluster::keys).collect()
    }

    pub fn overflow_len(&self) -> usize {
        self.overflow_menu_buttons.iter().map(|cluster| cluster.buttons.len()).sum()
    }

    pub fn has_overflow(&self) -> bool {
        !self.overflow_menu_buttons.is_empty()
    }

    pub fn contains_in_overflow(&self, key: &str) -> bool {
        self.overflow_menu_buttons.iter().any(|cluster| cluster.keys().any(|candidate| candidate == key))
    }

    /// Mutable access to every placed button, main bar first.
    pub fn buttons_mut(&mut self) -> impl Iterator<Item = &mut ButtonDescriptor> {
        self.main_menu_buttons
            .iter_mut()
            .chain(self.overflow_menu_buttons.iter_mut().flat_map(|cluster| cluster.buttons.iter_mut()))
    }
}

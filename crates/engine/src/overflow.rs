//! Overflow menu contents, including the reactions sub-menu.

use serde::{Deserialize, Serialize};
use toolbox_types::{OverflowCluster, PlacementResult};

use crate::placement::cluster_overflow;

pub const REACTIONS_BUTTON: &str = "reactions";
pub const RAISE_HAND_BUTTON: &str = "raisehand";

/// Display facts that decide how reactions are offered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayContext {
    pub is_mobile: bool,
    pub is_narrow_layout: bool,
    /// Reactions have a dedicated toolbar button
    pub reactions_button_enabled: bool,
    /// Reactions are available in this conference at all
    pub should_display_reactions_buttons: bool,
}

/// The overflow menu as handed to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverflowMenu {
    /// Whether the "more actions" button is rendered at all
    pub visible: bool,
    pub clusters: Vec<OverflowCluster>,
    /// Render the reactions row at the top of the menu
    pub show_reactions_menu: bool,
    /// Raise hand is offered inside the reactions row instead of as an entry
    pub show_raise_hand_in_reactions_menu: bool,
}

impl OverflowMenu {
    /// Builds the overflow menu for `placement`.
    ///
    /// When the reactions row is shown it hosts the reactions button, and the
    /// raise hand button too if that one overflowed; those entries are removed
    /// from the clusters and the remaining buttons are clustered again.
    pub fn from_placement(placement: &PlacementResult, display: &DisplayContext) -> Self {
        let raise_hand_in_overflow = placement.contains_in_overflow(RAISE_HAND_BUTTON);
        let show_reactions_menu = display.should_display_reactions_buttons
            && ((!display.reactions_button_enabled
                && (raise_hand_in_overflow || display.is_narrow_layout || display.is_mobile))
                || placement.contains_in_overflow(REACTIONS_BUTTON));
        let show_raise_hand_in_reactions_menu = show_reactions_menu && raise_hand_in_overflow;

        let entries = placement
            .overflow_menu_buttons
            .iter()
            .flat_map(|cluster| cluster.buttons.iter())
            .filter(|button| {
                let hosted_by_reactions_row = (button.key == REACTIONS_BUTTON && show_reactions_menu)
                    || (button.key == RAISE_HAND_BUTTON && show_raise_hand_in_reactions_menu);
                !hosted_by_reactions_row
            })
            .cloned()
            .collect();

        Self {
            visible: placement.has_overflow(),
            clusters: cluster_overflow(entries),
            show_reactions_menu,
            show_raise_hand_in_reactions_menu,
        }
    }
}

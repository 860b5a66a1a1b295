//! Full toolbox evaluation: filter, select, place, then decorate.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use toolbox_registry::{ButtonRegistry, ToolboxConfig, default_priority, default_thresholds};
use toolbox_types::{ButtonDescriptor, NotifyClickMode, PlacementResult, ThresholdRule};
use tracing::debug;

use crate::{
    AccessPolicy, DisplayContext, OverflowMenu, PlacementError,
    filter::{filter_visible_keys, is_button_enabled},
    placement::place,
    threshold::select_threshold,
};

pub const HANGUP_BUTTON: &str = "hangup";
pub const HANGUP_MENU_BUTTON: &str = "hangup-menu";
pub const END_MEETING_BUTTON: &str = "end-meeting";

/// Everything a toolbox evaluation depends on besides the registry.
///
/// Role, session and layout facts are passed in explicitly; evaluation never
/// reads ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolboxInputs {
    /// Current viewport width in pixels
    pub client_width: u32,
    /// Threshold rules, scanned in order; the last one is the default
    pub thresholds: Vec<ThresholdRule>,
    /// Fallback used to fill slots the threshold order leaves empty
    pub priority: Vec<String>,
    /// Buttons enabled by configuration
    pub toolbar_buttons: Vec<String>,
    pub access: AccessPolicy,
    pub notify_click_modes: IndexMap<String, NotifyClickMode>,
    pub display: DisplayContext,
    /// The conference can be ended for everyone
    pub end_conference_supported: bool,
    /// Recorder and SIP gateway sessions run without a toolbar
    pub disabled: bool,
}

impl Default for ToolboxInputs {
    fn default() -> Self {
        Self {
            client_width: 0,
            thresholds: default_thresholds(),
            priority: default_priority(),
            toolbar_buttons: ToolboxConfig::default().enabled_buttons(),
            access: AccessPolicy::default(),
            notify_click_modes: IndexMap::new(),
            display: DisplayContext::default(),
            end_conference_supported: false,
            disabled: false,
        }
    }
}

impl ToolboxInputs {
    /// Inputs derived from `config`; width, role and display facts start at
    /// their defaults.
    ///
    /// Threshold rules are taken in configured order with order overrides
    /// applied. An empty configured list is kept so that evaluation reports
    /// it.
    pub fn from_config(config: &ToolboxConfig) -> Self {
        let thresholds = match config.threshold_rules() {
            Ok(rules) => rules.into_inner(),
            Err(_) => Vec::new(),
        };
        Self {
            thresholds,
            priority: config.priority(),
            toolbar_buttons: config.enabled_buttons(),
            access: AccessPolicy::new(false, config.features.clone()),
            notify_click_modes: config.notify_click_modes(),
            disabled: config.is_toolbox_disabled(),
            ..Self::default()
        }
    }
}

/// How the leave-conference control is rendered next to the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HangupControl {
    /// `hangup` is not enabled.
    Hidden,
    /// A single leave button.
    Button { notify_mode: Option<NotifyClickMode> },
    /// A menu offering "end meeting for all" and "leave".
    Menu {
        notify_mode: Option<NotifyClickMode>,
        end_meeting_notify_mode: Option<NotifyClickMode>,
        leave_notify_mode: Option<NotifyClickMode>,
    },
}

impl HangupControl {
    fn resolve(inputs: &ToolboxInputs) -> Self {
        if !is_button_enabled(HANGUP_BUTTON, &inputs.toolbar_buttons) {
            return Self::Hidden;
        }
        let mode = |key: &str| inputs.notify_click_modes.get(key).copied();
        if inputs.end_conference_supported && inputs.access.is_moderator {
            Self::Menu {
                notify_mode: mode(HANGUP_MENU_BUTTON),
                end_meeting_notify_mode: mode(END_MEETING_BUTTON),
                leave_notify_mode: mode(HANGUP_BUTTON),
            }
        } else {
            Self::Button {
                notify_mode: mode(HANGUP_BUTTON),
            }
        }
    }
}

/// A fully evaluated toolbox, ready for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolboxLayout {
    /// Width of the threshold rule that was applied
    pub threshold_width: u32,
    pub main_menu_buttons: Vec<ButtonDescriptor>,
    pub overflow: OverflowMenu,
    pub hangup: HangupControl,
}

/// Runs the whole pipeline for one set of inputs.
///
/// Returns `Ok(None)` when the toolbox is disabled for this session.
pub fn evaluate(registry: &ButtonRegistry, inputs: &ToolboxInputs) -> Result<Option<ToolboxLayout>, PlacementError> {
    if inputs.disabled {
        debug!("toolbox disabled for this session");
        return Ok(None);
    }

    let disabled_keys = inputs.access.disabled_buttons();
    let filtered = filter_visible_keys(registry.keys(), &disabled_keys, |key| {
        is_button_enabled(key, &inputs.toolbar_buttons)
    });
    let rule = select_threshold(&inputs.thresholds, inputs.client_width)?;
    debug!(client_width = inputs.client_width, threshold = rule.width, visible = filtered.len(), "evaluating toolbox");

    let mut placement = place(&filtered, &rule.order, &inputs.priority, registry)?;
    apply_notify_modes(&mut placement, &inputs.notify_click_modes);

    let overflow = OverflowMenu::from_placement(&placement, &inputs.display);
    Ok(Some(ToolboxLayout {
        threshold_width: rule.width,
        main_menu_buttons: placement.main_menu_buttons,
        overflow,
        hangup: HangupControl::resolve(inputs),
    }))
}

/// Stamps the configured click notification mode on every placed button.
pub fn apply_notify_modes(placement: &mut PlacementResult, modes: &IndexMap<String, NotifyClickMode>) {
    if modes.is_empty() {
        return;
    }
    for button in placement.buttons_mut() {
        button.notify_mode = modes.get(&button.key).copied();
    }
}

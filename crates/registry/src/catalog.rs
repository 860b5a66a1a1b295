//! Built-in toolbar buttons and their default ordering rules.

use toolbox_types::ThresholdRule;

/// Every built-in button key with its overflow group, in catalog order.
///
/// Catalog order is the order buttons appear in the overflow menu when no
/// threshold or priority rule moves them.
pub const BUILT_IN_BUTTONS: &[(&str, u8)] = &[
    ("microphone", 0),
    ("camera", 0),
    ("profile", 1),
    ("desktop", 2),
    ("chat", 2),
    ("raisehand", 2),
    ("reactions", 2),
    ("participants-pane", 2),
    ("invite", 2),
    ("tileview", 2),
    ("toggle-camera", 2),
    ("videoquality", 2),
    ("fullscreen", 2),
    ("security", 2),
    ("closedcaptions", 2),
    ("recording", 2),
    ("livestreaming", 2),
    ("linktosalesforce", 2),
    ("sharedvideo", 3),
    ("shareaudio", 3),
    ("noisesuppression", 3),
    ("whiteboard", 3),
    ("etherpad", 3),
    ("select-background", 3),
    ("stats", 3),
    ("settings", 4),
    ("shortcuts", 4),
    ("embedmeeting", 4),
    ("feedback", 4),
    ("download", 4),
    ("help", 4),
];

/// Buttons enabled when configuration does not list any.
///
/// `hangup` is rendered next to the toolbar rather than inside it, so it is
/// enabled here but has no catalog entry.
pub const TOOLBAR_BUTTONS: &[&str] = &[
    "camera",
    "chat",
    "closedcaptions",
    "desktop",
    "download",
    "embedmeeting",
    "etherpad",
    "feedback",
    "fullscreen",
    "hangup",
    "help",
    "invite",
    "linktosalesforce",
    "livestreaming",
    "microphone",
    "noisesuppression",
    "participants-pane",
    "profile",
    "raisehand",
    "reactions",
    "recording",
    "security",
    "select-background",
    "settings",
    "shareaudio",
    "sharedvideo",
    "shortcuts",
    "stats",
    "tileview",
    "toggle-camera",
    "videoquality",
    "whiteboard",
];

/// Fallback ordering used to fill main-bar slots the active threshold rule
/// leaves empty.
pub const MAIN_TOOLBAR_BUTTONS_PRIORITY: &[&str] = &[
    "microphone",
    "camera",
    "desktop",
    "chat",
    "raisehand",
    "reactions",
    "participants-pane",
    "tileview",
    "overflowmenu",
    "hangup",
    "invite",
    "toggle-camera",
    "videoquality",
    "fullscreen",
    "security",
    "closedcaptions",
    "recording",
    "livestreaming",
    "linktosalesforce",
    "sharedvideo",
    "shareaudio",
    "noisesuppression",
    "whiteboard",
    "etherpad",
    "select-background",
    "stats",
    "settings",
    "shortcuts",
    "profile",
    "embedmeeting",
    "feedback",
    "download",
    "help",
];

/// Default threshold rules, widest first. The last rule is the layout used
/// for any width at or below every threshold.
pub fn default_thresholds() -> Vec<ThresholdRule> {
    vec![
        ThresholdRule::new(
            565,
            ["microphone", "camera", "desktop", "chat", "raisehand", "reactions", "participants-pane", "tileview"],
        ),
        ThresholdRule::new(
            520,
            ["microphone", "camera", "desktop", "chat", "raisehand", "participants-pane", "tileview"],
        ),
        ThresholdRule::new(470, ["microphone", "camera", "desktop", "chat", "raisehand", "participants-pane"]),
        ThresholdRule::new(420, ["microphone", "camera", "desktop", "chat", "participants-pane"]),
        ThresholdRule::new(370, ["microphone", "camera", "chat", "participants-pane"]),
        ThresholdRule::new(225, ["microphone", "camera", "chat"]),
        ThresholdRule::new(200, ["microphone", "camera"]),
    ]
}

pub fn default_priority() -> Vec<String> {
    MAIN_TOOLBAR_BUTTONS_PRIORITY.iter().map(|key| key.to_string()).collect()
}

pub fn default_toolbar_buttons() -> Vec<String> {
    TOOLBAR_BUTTONS.iter().map(|key| key.to_string()).collect()
}

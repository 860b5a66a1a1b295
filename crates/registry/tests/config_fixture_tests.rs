use std::path::PathBuf;

use toolbox_registry::{ButtonRegistry, ThresholdRule, ToolboxConfig};
use toolbox_types::{ButtonKind, NotifyClickMode};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data").join(name)
}

fn load_yaml_fixture() -> ToolboxConfig {
    ToolboxConfig::load_from(&fixture("toolbox_fixture.yaml")).expect("load config from fixture")
}

#[test]
fn yaml_fixture_builds_registry_with_custom_button_last() {
    let config = load_yaml_fixture();
    let registry = ButtonRegistry::from_config(&config).expect("registry from fixture");

    assert_eq!(registry.keys().last(), Some("export-notes"));
    let custom = registry.get("export-notes").expect("custom button");
    assert!(
        matches!(&custom.kind, ButtonKind::Custom { text, .. } if text == "Export notes"),
        "unexpected kind {:?}",
        custom.kind
    );
}

#[test]
fn yaml_fixture_enables_custom_button_and_hangup() {
    let enabled = load_yaml_fixture().enabled_buttons();
    assert_eq!(enabled.last().map(String::as_str), Some("export-notes"));
    assert!(enabled.iter().any(|key| key == "hangup"));
    assert!(!enabled.iter().any(|key| key == "participants-pane"));
}

#[test]
fn yaml_fixture_thresholds_keep_configured_order_and_overrides() {
    let rules = load_yaml_fixture().threshold_rules().expect("threshold rules");

    assert_eq!(
        rules.as_slice(),
        &[
            ThresholdRule::new(300, ["camera", "microphone", "chat"]),
            ThresholdRule::new(700, ["microphone", "camera", "desktop", "chat", "raisehand"]),
        ]
    );
}

#[test]
fn yaml_fixture_notify_modes_and_features() {
    let config = load_yaml_fixture();
    let modes = config.notify_click_modes();
    assert_eq!(modes.get("camera"), Some(&NotifyClickMode::PreventAndNotify));
    assert_eq!(modes.get("export-notes"), Some(&NotifyClickMode::OnlyNotify));
    assert_eq!(config.features.get("recording"), Some(&false));
    assert!(!config.is_toolbox_disabled());
}

#[test]
fn json_fixture_disables_toolbox_for_gateways() {
    let config = ToolboxConfig::load_from(&fixture("toolbox_fixture.json")).expect("load json fixture");
    assert!(config.is_toolbox_disabled());
    assert_eq!(config.threshold_rules().expect("default rules").as_slice().len(), 7);
}

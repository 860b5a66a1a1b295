use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use toolbox_engine::{
    AccessPolicy, DisplayContext, HangupControl, ToolboxInputs, ToolboxLayout, evaluate, is_button_enabled,
};
use toolbox_registry::{ButtonRegistry, ToolboxConfig};
use toolbox_types::{ButtonDescriptor, ButtonKind};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect responsive toolbar placement for a toolbox configuration.
#[derive(Parser, Debug)]
#[command(name = "toolbox", version, about)]
struct Cli {
    /// Path to a toolbox configuration file (JSON or YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the toolbox for a viewport width
    Place {
        /// Viewport width in pixels
        #[arg(long)]
        width: u32,

        /// Evaluate as a moderator
        #[arg(long)]
        moderator: bool,

        /// The conference can be ended for everyone
        #[arg(long)]
        end_conference: bool,

        /// Reactions are available in this conference
        #[arg(long)]
        reactions: bool,

        #[arg(long)]
        narrow: bool,

        #[arg(long)]
        mobile: bool,

        /// Print the layout as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective threshold rules
    Thresholds {
        #[arg(long)]
        json: bool,
    },
    /// List registered buttons in registry order
    Buttons {
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let registry = ButtonRegistry::from_config(&config).context("failed to build button registry")?;

    match cli.command {
        Command::Place {
            width,
            moderator,
            end_conference,
            reactions,
            narrow,
            mobile,
            json,
        } => {
            let inputs = ToolboxInputs {
                client_width: width,
                access: AccessPolicy::new(moderator, config.features.clone()),
                display: DisplayContext {
                    is_mobile: mobile,
                    is_narrow_layout: narrow,
                    reactions_button_enabled: reactions && is_button_enabled("reactions", &config.enabled_buttons()),
                    should_display_reactions_buttons: reactions,
                },
                end_conference_supported: end_conference,
                ..ToolboxInputs::from_config(&config)
            };
            let layout = evaluate(&registry, &inputs).context("failed to place toolbar buttons")?;
            if json {
                println!("{}", serde_json::to_string_pretty(&layout)?);
            } else {
                match layout {
                    Some(layout) => print_layout(&layout),
                    None => println!("Toolbox disabled for this session"),
                }
            }
        }
        Command::Thresholds { json } => {
            let rules = config.threshold_rules().context("invalid threshold configuration")?;
            if json {
                println!("{}", serde_json::to_string_pretty(rules.as_slice())?);
            } else {
                for rule in rules.as_slice() {
                    println!("> {:>5}px  {} slots  {}", rule.width, rule.slots(), rule.order.join(", "));
                }
            }
        }
        Command::Buttons { json } => {
            if json {
                let buttons: Vec<&ButtonDescriptor> = registry.iter().collect();
                println!("{}", serde_json::to_string_pretty(&buttons)?);
            } else {
                for button in registry.iter() {
                    println!("{:<24} group {}  {}", button.key, button.group, describe(button));
                }
            }
        }
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Filter from `RUST_LOG`, defaulting to `info` when unset or invalid.
fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn load_config(path: Option<&PathBuf>) -> Result<ToolboxConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading toolbox config");
            ToolboxConfig::load_from(path).with_context(|| format!("failed to load config from {}", path.display()))
        }
        None => Ok(ToolboxConfig::load()),
    }
}

fn describe(button: &ButtonDescriptor) -> String {
    match &button.kind {
        ButtonKind::BuiltIn => "built-in".to_string(),
        ButtonKind::Custom { text, .. } => format!("custom \"{}\"", text),
    }
}

fn print_layout(layout: &ToolboxLayout) {
    println!("threshold: > {}px", layout.threshold_width);
    let main: Vec<&str> = layout.main_menu_buttons.iter().map(|button| button.key.as_str()).collect();
    println!("main: {}", main.join(" "));

    if layout.overflow.visible {
        println!("overflow:");
        if layout.overflow.show_reactions_menu {
            let suffix = if layout.overflow.show_raise_hand_in_reactions_menu { " + raisehand" } else { "" };
            println!("  [reactions{}]", suffix);
        }
        for cluster in &layout.overflow.clusters {
            let keys: Vec<&str> = cluster.keys().collect();
            println!("  group {}: {}", cluster.group, keys.join(" "));
        }
    }

    match layout.hangup {
        HangupControl::Hidden => {}
        HangupControl::Button { .. } => println!("hangup: button"),
        HangupControl::Menu { .. } => println!("hangup: menu (end meeting, leave)"),
    }
}

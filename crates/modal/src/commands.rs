use std::io::Read;

use clap::ArgMatches;
use clap_complete::Shell;
use tracing::{error, warn};

use modal_core::config::ModalConfig;
use modal_core::events;
use modal_core::{CallbackPolicy, DialogPhase, ModalError};

use crate::app::build_cli;
use crate::player::{Player, StepReport};
use crate::script::parse_script;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> ModalConfig {
    match ModalConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.modal/config.toml and ./.modal/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                error_code = e.error_code(),
                "Config load failed, using defaults"
            );
            ModalConfig::default()
        }
    }
}

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("play", sub_matches)) => handle_play_command(sub_matches),
        Some(("config", sub_matches)) => handle_config_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    if let Err(e) = &result {
        events::log_app_error(&**e);
    }
    events::log_app_shutdown();

    result
}

fn read_script(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    std::fs::read_to_string(source)
        .map_err(|e| format!("Failed to read script '{}': {}", source, e).into())
}

fn handle_play_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let source = matches
        .get_one::<String>("script")
        .ok_or("Script argument is required")?;
    let json_output = matches.get_flag("json");

    let mut config = load_config_with_warning();

    // Apply CLI overrides only if provided
    if let Some(policy) = matches.get_one::<String>("policy") {
        config.callbacks.policy = Some(policy.parse::<CallbackPolicy>()?);
    }

    let text = read_script(source)?;
    let script = parse_script(&text).inspect_err(|e| {
        error!(
            event = "cli.play.parse_failed",
            script = source,
            error = %e,
            error_code = e.error_code()
        );
    })?;

    let mut player = Player::new(config.callback_policy(), config.confirm_labels());

    events::log_play_started(source, script.len(), player.policy());

    let mut fired = 0;
    for script_line in &script {
        let report = player.apply(script_line)?;
        fired += report.fired.len();
        if json_output {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_report(&report, DialogPhase::from_visible(player.is_visible(report.target)));
        }
    }

    events::log_play_completed(source, script.len(), fired);

    Ok(())
}

fn print_report(report: &StepReport, phase: DialogPhase) {
    let fired = if report.fired.is_empty() {
        "-".to_string()
    } else {
        report.fired.join(", ")
    };

    println!(
        "{:>4}  {:<14} {:<8} {:<7} fired: {}",
        report.line,
        report.step.name(),
        report.target,
        phase,
        fired
    );
}

fn handle_config_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();

    // Show resolved values, not just what the files set
    let mut effective = config.clone();
    effective.callbacks.policy = Some(config.callback_policy());
    let labels = config.confirm_labels();
    effective.confirm.grant_text = Some(labels.grant);
    effective.confirm.deny_text = Some(labels.deny);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&effective)?);
    } else {
        print!("{}", toml::to_string(&effective)?);
    }

    Ok(())
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = matches
        .get_one::<Shell>("shell")
        .ok_or("Shell argument is required")?;

    let mut cmd = build_cli();
    clap_complete::generate(*shell, &mut cmd, "modal", &mut std::io::stdout());

    Ok(())
}

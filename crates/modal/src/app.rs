use clap::{Arg, ArgAction, Command};
use clap_complete::Shell;

pub fn build_cli() -> Command {
    Command::new("modal")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Replay scripted dialog sessions against alert, confirm and generic dialog controllers")
        .long_about("modal drives one alert, one confirm and one generic dialog controller through a line-based script and prints the state the presentation layer would see after every step, along with the callbacks that fired.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("play")
                .about("Replay a dialog script")
                .arg(
                    Arg::new("script")
                        .help("Path to the script file, or '-' to read from stdin")
                        .required(true)
                        .index(1)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print one JSON object per step")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("policy")
                        .long("policy")
                        .short('p')
                        .help("Callback policy (overrides config)")
                        .value_parser(["retain", "clear_on_fire"])
                )
        )
        .subcommand(
            Command::new("config")
                .about("Show the effective configuration")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(Shell))
                )
        )
}

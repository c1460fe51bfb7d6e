//! upwatch - website uptime dashboard CLI

use clap::Parser;

use upwatch::cli::{Cli, Commands};
use upwatch::config::Config;
use upwatch::error::Result;
use upwatch::logging;

mod commands;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let Some(hint) = e.hint() {
            eprintln!("\n{}", hint);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    // A broken config file must not block the commands that help fix it
    let config = if cli.command.needs_config() {
        Config::load()?
    } else {
        Config::default()
    };
    let level = logging::level_for(cli.verbose, &config.log_level);

    // The TUI owns the terminal, so its logs go to a file
    let _guard = match cli.command {
        Commands::Ui => Some(logging::init_file(&Config::data_dir()?, &level)?),
        _ => {
            logging::init_stderr(&level)?;
            None
        }
    };

    match cli.command {
        Commands::List { search, details, json } => {
            commands::cmd_list(&config, search, details, json)
        }
        Commands::Show { site, json } => commands::cmd_show(&config, &site, json),
        Commands::Chart { json } => commands::cmd_chart(&config, json),
        Commands::Next => commands::cmd_next(&config),
        Commands::Config { init: true, .. } => commands::cmd_config_init(),
        Commands::Config { path, .. } => commands::cmd_config(&config, path),
        Commands::Ui => commands::cmd_ui(config),
        Commands::Completions { shell } => commands::cmd_completions(shell),
    }
}

//! Miscellaneous commands: config, ui, completions

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

use upwatch::cli::{Cli, CompletionShell};
use upwatch::config::Config;
use upwatch::error::Result;

/// Interactive TUI dashboard
#[cfg(feature = "tui")]
pub fn cmd_ui(config: Config) -> Result<()> {
    upwatch::tui::run(config)
}

#[cfg(not(feature = "tui"))]
pub fn cmd_ui(_config: Config) -> Result<()> {
    eprintln!("TUI not available. Rebuild with: cargo build --features tui");
    Ok(())
}

/// Print the effective configuration, or just where it lives
pub fn cmd_config(config: &Config, path_only: bool) -> Result<()> {
    let path = Config::config_path()?;
    if path_only {
        println!("{}", path.display());
        return Ok(());
    }

    if !path.exists() {
        println!("# {} does not exist, showing defaults\n", path.display());
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Write the default configuration to the config path
pub fn cmd_config_init() -> Result<()> {
    let path = Config::config_path()?;
    Config::init_at(&path)?;
    println!("Wrote default configuration to {}", path.display());
    Ok(())
}

/// Generate shell completions
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    generate(shell, &mut cmd, "upwatch", &mut io::stdout());
    Ok(())
}

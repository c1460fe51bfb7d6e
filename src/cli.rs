use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "upwatch")]
#[command(author, version, about = "Website uptime dashboard", long_about = None)]
#[command(after_help = r#"Examples:
  upwatch list                          List monitored sites
  upwatch list --search down            Only sites whose URL contains "down"
  upwatch show https://example.com      Show stats for one site
  upwatch chart                         Downtime per site
  upwatch ui                            Open the dashboard

Sites are read from the config file (see `upwatch config --path`).
"#)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List monitored sites
    #[command(after_help = r#"Examples:
  upwatch list                  Show all sites (compact)
  upwatch list -d               Show status details
  upwatch list --search shop    Case-insensitive URL filter
  upwatch list --json           Output as JSON for scripting
"#)]
    List {
        /// Only show sites whose URL contains this text
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Show status, uptime and response time for each site
        #[arg(short, long)]
        details: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stats for a single site
    Show {
        /// Site ID prefix or exact URL
        #[arg(value_name = "ID_OR_URL")]
        site: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the last downtime of every site
    Chart {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show when the next scheduled check happens
    Next,

    /// Show the effective configuration
    Config {
        /// Only print the config file path
        #[arg(long)]
        path: bool,

        /// Write the default configuration if no config file exists yet
        #[arg(long, conflicts_with = "path")]
        init: bool,
    },

    /// Open the interactive dashboard (TUI)
    Ui,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

impl Commands {
    /// Whether the command reads the config file.
    ///
    /// `config --path`, `config --init` and `completions` must keep working
    /// when the file is malformed.
    pub fn needs_config(&self) -> bool {
        !matches!(
            self,
            Commands::Config { path: true, .. }
                | Commands::Config { init: true, .. }
                | Commands::Completions { .. }
        )
    }
}

//! agent-dashboard: terminal dashboard for the AWS agent system.

use agent_dashboard::{
    cli::{self, OutputFormat, TuiCommandConfig},
    config::{generate_example_config, generate_full_example_config, generate_json_schema},
    PageId,
};
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "agent-dashboard")]
#[command(version)]
#[command(about = "Terminal dashboard for the AWS cost and carbon agent system", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    3  Error occurred

EXAMPLES:
    # Open the dashboard on the Optimize page
    agent-dashboard --page optimize

    # Dump the Settings page as JSON
    agent-dashboard show settings --format json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color theme (dark, light, high-contrast)
    #[arg(long, global = true)]
    theme: Option<String>,

    /// Page to open when no subcommand is given
    #[arg(long)]
    page: Option<PageId>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive dashboard (default)
    Tui {
        /// Page shown at startup (id or shortcut digit)
        #[arg(long)]
        page: Option<PageId>,
    },

    /// List the dashboard pages
    Pages {
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the static content of a page
    Show {
        /// Page id (dashboard, optimize, query, settings) or shortcut digit
        page: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print an example configuration file
    Config {
        /// Include every option with comments
        #[arg(long)]
        full: bool,

        /// Print the JSON Schema of the config format instead
        #[arg(long, conflicts_with = "full")]
        schema: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    // Interactive mode keeps quiet so log lines do not draw over the screen
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));
    let log_level = match (cli.verbose, interactive) {
        (true, _) => "debug",
        (false, true) => "warn",
        (false, false) => "info",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(3);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None => launch(cli.config, cli.theme, cli.page),
        Some(Commands::Tui { page }) => launch(cli.config, cli.theme, page.or(cli.page)),

        Some(Commands::Pages { format }) => {
            let mut stdout = io::stdout().lock();
            cli::run_pages(&mut stdout, format)
        }

        Some(Commands::Show { page, format }) => {
            let mut stdout = io::stdout().lock();
            cli::run_show(&mut stdout, &page, format)
        }

        Some(Commands::Config { full, schema }) => {
            let text = if schema {
                generate_json_schema()
            } else if full {
                generate_full_example_config()
            } else {
                generate_example_config()
            };
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", text.trim_end()).context("failed to write config")?;
            Ok(())
        }

        Some(Commands::Completions { shell }) => {
            generate(
                shell,
                &mut Cli::command(),
                "agent-dashboard",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}

fn launch(config: Option<PathBuf>, theme: Option<String>, page: Option<PageId>) -> Result<()> {
    let (app, loaded_from) = agent_dashboard::config::load_or_default(config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::info!("Loaded config from {}", path.display());
    }
    cli::run_tui_command(TuiCommandConfig { app, page, theme })
}

//! Scaffold CLI
//!
//! The command-line front end for choosing which optional tool
//! integrations a generated project includes.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::{CommandFactory, Parser};
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e.to_string().red());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    scaffold_tools::logging::init(level)
        .map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} tool catalog CLI", "scaffold".green().bold());
            println!();
            println!("Run {} for available commands.", "scaffold --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::ListTools { framework, json } => {
            commands::run_list_tools(framework.as_deref(), json)
        }
        Commands::Resolve {
            tools,
            framework,
            json,
        } => commands::run_resolve(&tools, framework.as_deref(), json),
        Commands::Select { framework } => cmd_select(framework.as_deref()),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "scaffold", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn cmd_select(framework: Option<&str>) -> Result<()> {
    let parsed = commands::parse_framework(framework)?;
    let tools = interactive::interactive_select(parsed)?;
    commands::run_resolve(&tools, framework, false)
}

//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Scaffold - Choose tool integrations for a generated project
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List available tools
    ///
    /// Shows every tool that can be added to a generated project,
    /// in catalog order.
    ///
    /// Examples:
    ///   scaffold list-tools                       # Show all tools
    ///   scaffold list-tools --framework express   # Only tools usable with Express
    ListTools {
        /// Only show tools compatible with this framework (express, fastapi, nextjs)
        #[arg(short, long, env = "SCAFFOLD_FRAMEWORK")]
        framework: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve tool names into their dependencies and configuration
    ///
    /// Fails if any name is not a known tool.
    ///
    /// Examples:
    ///   scaffold resolve wikipedia.WikipediaToolSpec
    ///   scaffold resolve google.GoogleSearchToolSpec --framework fastapi --json
    Resolve {
        /// Tool names (use 'scaffold list-tools' to see options)
        #[arg(required = true)]
        tools: Vec<String>,

        /// Require every tool to support this framework
        #[arg(short, long, env = "SCAFFOLD_FRAMEWORK")]
        framework: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Pick tools interactively
    Select {
        /// Only offer tools compatible with this framework
        #[arg(short, long, env = "SCAFFOLD_FRAMEWORK")]
        framework: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Outputs completion script for your shell.
    ///
    /// Examples:
    ///   scaffold completions bash > ~/.local/share/bash-completion/completions/scaffold
    ///   scaffold completions zsh > ~/.zfunc/_scaffold
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_command() {
        let cli = Cli::parse_from(["scaffold"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_verbose_flag() {
        let cli = Cli::parse_from(["scaffold", "-v", "list-tools"]);
        assert!(cli.verbose);
    }

    #[test]
    fn parse_list_tools_command() {
        let cli = Cli::try_parse_from(["scaffold", "list-tools", "--framework", "express"]).unwrap();
        match cli.command {
            Some(Commands::ListTools { framework, json }) => {
                assert_eq!(framework, Some("express".to_string()));
                assert!(!json);
            }
            _ => panic!("Expected ListTools command"),
        }
    }

    #[test]
    fn parse_resolve_keeps_order() {
        let cli = Cli::parse_from(["scaffold", "resolve", "b.B", "a.A", "b.B", "--json"]);
        match cli.command {
            Some(Commands::Resolve { tools, json, .. }) => {
                assert_eq!(tools, vec!["b.B", "a.A", "b.B"]);
                assert!(json);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn parse_resolve_requires_tools() {
        assert!(Cli::try_parse_from(["scaffold", "resolve"]).is_err());
    }

    #[test]
    fn parse_completions_command() {
        let cli = Cli::parse_from(["scaffold", "completions", "bash"]);
        assert!(matches!(cli.command, Some(Commands::Completions { .. })));
    }
}

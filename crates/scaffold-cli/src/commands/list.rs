//! List command for the tool catalog

use colored::Colorize;
use scaffold_tools::ToolRegistry;

use super::parse_framework;
use crate::error::Result;

/// Run the list-tools command
pub fn run_list_tools(framework: Option<&str>, json: bool) -> Result<()> {
    let registry = ToolRegistry::builtin();
    let framework = parse_framework(framework)?;

    let tools = match framework {
        Some(fw) => registry.supporting(fw),
        None => registry.iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    match framework {
        Some(fw) => println!("{} for {}", "Available Tools".bold(), fw.to_string().cyan()),
        None => println!("{}", "Available Tools".bold()),
    }
    println!();

    for tool in &tools {
        let marker = if tool.requires_config() {
            " [config]".yellow().to_string()
        } else {
            String::new()
        };
        println!("  {:<38} {}{}", tool.name.green(), tool.display, marker);
    }

    println!();
    println!(
        "{} {} tools available. Use {} to check a selection.",
        "Total:".dimmed(),
        tools.len(),
        "scaffold resolve <name>...".cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_tools_runs() {
        assert!(run_list_tools(None, false).is_ok());
    }

    #[test]
    fn test_list_tools_with_framework() {
        assert!(run_list_tools(Some("express"), false).is_ok());
    }

    #[test]
    fn test_list_tools_json() {
        assert!(run_list_tools(None, true).is_ok());
    }

    #[test]
    fn test_list_tools_unknown_framework() {
        assert!(run_list_tools(Some("rails"), false).is_err());
    }
}

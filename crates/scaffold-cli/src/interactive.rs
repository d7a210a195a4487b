//! Interactive tool selection
//!
//! Uses dialoguer for terminal-based multi-select.

use colored::Colorize;
use dialoguer::{Confirm, MultiSelect};
use scaffold_tools::{TemplateFramework, Tool, ToolRegistry};

use crate::error::{CliError, Result};

/// Tools offered to the user, in catalog order.
pub fn selectable_tools(framework: Option<TemplateFramework>) -> Vec<&'static Tool> {
    let registry = ToolRegistry::builtin();
    match framework {
        Some(fw) => registry.supporting(fw),
        None => registry.iter().collect(),
    }
}

/// Prompt for a tool selection and return the chosen names.
pub fn interactive_select(framework: Option<TemplateFramework>) -> Result<Vec<String>> {
    let available = selectable_tools(framework);
    if available.is_empty() {
        return Err(CliError::user("No tools are available for this framework."));
    }

    let labels: Vec<&str> = available.iter().map(|tool| tool.display).collect();
    let indices = MultiSelect::new()
        .with_prompt("Select tools (space to toggle, enter to confirm)")
        .items(&labels)
        .interact()?;
    let tools: Vec<String> = indices
        .iter()
        .map(|&i| available[i].name.to_string())
        .collect();

    println!();
    println!("{}", "Summary:".bold());
    if tools.is_empty() {
        println!("  {}: {}", "Tools".dimmed(), "(none)".dimmed());
    } else {
        println!("  {}: {}", "Tools".dimmed(), tools.join(", ").cyan());
    }
    println!();

    let proceed = Confirm::new()
        .with_prompt("Proceed?")
        .default(true)
        .interact()?;

    if !proceed {
        return Err(CliError::user("Selection cancelled by user."));
    }

    Ok(tools)
}

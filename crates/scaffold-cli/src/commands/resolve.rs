//! Resolve command: turn selected tool names into what the generator needs

use colored::Colorize;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use scaffold_tools::{
    Tool, ToolDependency, check_framework, collect_dependencies, config_document, get_tools,
    tools_require_config,
};

use super::parse_framework;
use crate::error::Result;

/// Machine-readable result of a resolution.
#[derive(Debug, Serialize)]
pub struct ResolveReport<'a> {
    pub tools: Vec<&'a Tool>,
    pub dependencies: Vec<&'a ToolDependency>,
    pub requires_config: bool,
    pub config: Value,
}

/// Resolve names and build the report, without printing.
pub fn build_report(names: &[String], framework: Option<&str>) -> Result<ResolveReport<'static>> {
    let tools = get_tools(names)?;
    if let Some(fw) = parse_framework(framework)? {
        check_framework(&tools, fw)?;
    }
    debug!(count = tools.len(), "Building resolution report");

    Ok(ResolveReport {
        dependencies: collect_dependencies(&tools),
        requires_config: tools_require_config(Some(tools.as_slice())),
        config: config_document(&tools),
        tools,
    })
}

/// Run the resolve command
pub fn run_resolve(names: &[String], framework: Option<&str>, json: bool) -> Result<()> {
    let report = build_report(names, framework)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "Tools:".bold());
    if report.tools.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for tool in &report.tools {
        println!("  {} ({})", tool.display, tool.name.green());
    }

    println!();
    println!("{}", "Dependencies:".bold());
    if report.dependencies.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for dep in &report.dependencies {
        println!("  {}", dep);
    }

    if report.requires_config {
        println!();
        println!(
            "{} these tools need configuration after installation:",
            "note:".yellow().bold()
        );
        for tool in report.tools.iter().filter(|t| t.requires_config()) {
            let keys: Vec<_> = tool.config.iter().map(|entry| entry.key).collect();
            println!("  {}: {}", tool.name.cyan(), keys.join(", "));
        }
    }

    Ok(())
}

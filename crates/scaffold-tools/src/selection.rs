//! Helpers over a resolved tool selection
//!
//! These produce the data the project generator consumes: the package
//! list for the dependency manifest and the placeholder values for the
//! tools config file. Nothing here touches the filesystem.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::framework::TemplateFramework;
use crate::registry::{ConfigValue, Tool, ToolDependency};

/// Fail on the first tool that cannot be used with `framework`.
pub fn check_framework(tools: &[&Tool], framework: TemplateFramework) -> Result<()> {
    match tools.iter().find(|tool| !tool.supports(framework)) {
        Some(tool) => Err(Error::UnsupportedFramework {
            tool: tool.name.to_string(),
            framework: framework.to_string(),
        }),
        None => Ok(()),
    }
}

/// Union of the tools' dependencies.
///
/// Keeps the first occurrence of each package name, in selection order.
pub fn collect_dependencies<'a>(tools: &[&'a Tool]) -> Vec<&'a ToolDependency> {
    let mut seen = HashSet::new();
    tools
        .iter()
        .flat_map(|tool| tool.dependencies.iter())
        .filter(|dep| seen.insert(dep.name))
        .collect()
}

/// JSON object mapping each configurable tool's name to its config.
///
/// Tools without configuration are left out.
pub fn config_document(tools: &[&Tool]) -> Value {
    let mut doc = Map::new();
    for tool in tools.iter().filter(|tool| tool.requires_config()) {
        let config: Map<String, Value> = tool
            .config
            .iter()
            .map(|entry| (entry.key.to_string(), config_value(entry.value)))
            .collect();
        doc.insert(tool.name.to_string(), Value::Object(config));
    }
    Value::Object(doc)
}

fn config_value(value: ConfigValue) -> Value {
    match value {
        ConfigValue::Text(text) => Value::from(text),
        ConfigValue::Integer(n) => Value::from(n),
    }
}

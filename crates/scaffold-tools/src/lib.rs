//! Tool integrations offered by the project scaffolder.
//!
//! This crate holds the catalog of optional tools (web search, Wikipedia,
//! ...) a generated project may include, along with the helpers the CLI
//! uses to resolve a user's selection.
//!
//! # Architecture
//!
//! The catalog is a fixed, ordered table of [`Tool`] records compiled into
//! the binary. [`ToolRegistry`] is a read-only view over such a table and
//! provides lookup, resolution and framework filtering. The free functions
//! ([`get_tool`], [`get_tools`], [`tools_require_config`]) operate on the
//! built-in table.
//!
//! Resolution never terminates the process: unknown names come back as
//! [`Error::UnknownTools`], and the binary decides how to report them.

pub mod error;
pub mod framework;
pub mod logging;
pub mod registry;
pub mod selection;

pub use error::{Error, Result};
pub use framework::TemplateFramework;
pub use registry::{
    BUILTIN_COUNT, ConfigEntry, ConfigValue, Tool, ToolDependency, ToolRegistry, supported_tools,
};
pub use selection::{check_framework, collect_dependencies, config_document};

/// Look up a built-in tool by its exact name.
pub fn get_tool(name: &str) -> Option<&'static Tool> {
    ToolRegistry::builtin().get(name)
}

/// Resolve a list of requested tool names against the built-in catalog.
///
/// The result preserves request order, duplicates included. Every name
/// that does not resolve is reported in the returned error.
pub fn get_tools<S: AsRef<str>>(names: &[S]) -> Result<Vec<&'static Tool>> {
    ToolRegistry::builtin().resolve(names)
}

/// Whether any of the given tools needs configuration after scaffolding.
///
/// `None` and an empty slice both yield `false`.
pub fn tools_require_config(tools: Option<&[&Tool]>) -> bool {
    tools.is_some_and(|tools| tools.iter().any(|tool| tool.requires_config()))
}

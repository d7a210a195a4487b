//! Tool registry lookup

use std::collections::HashSet;

use tracing::debug;

use super::Tool;
use crate::error::{Error, Result};
use crate::framework::TemplateFramework;

/// Read-only, ordered view over a tool table.
///
/// Provides lookup by exact name, resolution of user selections, and
/// filtering by framework. Registry order is always preserved.
#[derive(Debug, Clone, Copy)]
pub struct ToolRegistry<'a> {
    tools: &'a [Tool],
}

impl ToolRegistry<'static> {
    /// Registry over the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            tools: super::builtins::supported_tools(),
        }
    }
}

impl<'a> ToolRegistry<'a> {
    /// Create a registry over a custom table, rejecting duplicate names.
    pub fn try_new(tools: &'a [Tool]) -> Result<Self> {
        let mut seen = HashSet::new();
        for tool in tools {
            if !seen.insert(tool.name) {
                return Err(Error::DuplicateTool {
                    name: tool.name.to_string(),
                });
            }
        }
        Ok(Self { tools })
    }

    /// Get a tool by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&'a Tool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    /// Check if a tool is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Resolve requested names to tools, in request order.
    ///
    /// Duplicates in the request appear twice in the output. If any name
    /// is unknown, the error lists all of them along with every valid name.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&'a Tool>> {
        let mut tools = Vec::with_capacity(names.len());
        let mut unknown: Vec<String> = Vec::new();

        for name in names.iter().map(|name| name.as_ref()) {
            match self.get(name) {
                Some(tool) => tools.push(tool),
                None if unknown.iter().any(|u| u == name) => {}
                None => {
                    debug!(tool = name, "Requested tool is not registered");
                    unknown.push(name.to_string());
                }
            }
        }

        if !unknown.is_empty() {
            return Err(Error::UnknownTools {
                requested: unknown,
                supported: self.names().into_iter().map(String::from).collect(),
            });
        }

        debug!(count = tools.len(), "Resolved tools");
        Ok(tools)
    }

    /// List all tool names in registry order.
    pub fn names(&self) -> Vec<&'a str> {
        self.tools.iter().map(|tool| tool.name).collect()
    }

    /// Tools usable with the given framework, in registry order.
    pub fn supporting(&self, framework: TemplateFramework) -> Vec<&'a Tool> {
        self.tools
            .iter()
            .filter(|tool| tool.supports(framework))
            .collect()
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over all tools in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Tool> + use<'a> {
        self.tools.iter()
    }
}

impl Default for ToolRegistry<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tool(name: &'static str) -> Tool {
        Tool {
            display: "Test",
            name,
            config: &[],
            dependencies: &[],
            supported_frameworks: None,
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::try_new(&[]).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.get("anything").is_none());
    }

    #[test]
    fn test_try_new_rejects_duplicates() {
        let tools = [make_tool("a.A"), make_tool("b.B"), make_tool("a.A")];
        let err = ToolRegistry::try_new(&tools).unwrap_err();
        assert!(matches!(err, Error::DuplicateTool { name } if name == "a.A"));
    }

    #[test]
    fn test_get_and_contains() {
        let tools = [make_tool("a.A"), make_tool("b.B")];
        let registry = ToolRegistry::try_new(&tools).unwrap();

        assert_eq!(registry.get("b.B").map(|t| t.name), Some("b.B"));
        assert!(registry.contains("a.A"));
        assert!(!registry.contains("a.a"));
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let tools = [make_tool("z.Z"), make_tool("a.A"), make_tool("m.M")];
        let registry = ToolRegistry::try_new(&tools).unwrap();
        assert_eq!(registry.names(), vec!["z.Z", "a.A", "m.M"]);
    }

    #[test]
    fn test_resolve_request_order_and_duplicates() {
        let tools = [make_tool("a.A"), make_tool("b.B")];
        let registry = ToolRegistry::try_new(&tools).unwrap();

        let resolved = registry.resolve(&["b.B", "a.A", "b.B"]).unwrap();
        let names: Vec<_> = resolved.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["b.B", "a.A", "b.B"]);
    }

    #[test]
    fn test_resolve_reports_every_unknown_once() {
        let tools = [make_tool("a.A"), make_tool("b.B")];
        let registry = ToolRegistry::try_new(&tools).unwrap();

        let err = registry.resolve(&["x.X", "a.A", "y.Y", "x.X"]).unwrap_err();
        match err {
            Error::UnknownTools {
                requested,
                supported,
            } => {
                assert_eq!(requested, vec!["x.X", "y.Y"]);
                assert_eq!(supported, vec!["a.A", "b.B"]);
            }
            other => panic!("Expected UnknownTools, got {other:?}"),
        }
    }

    #[test]
    fn test_iter() {
        let tools = [make_tool("a.A"), make_tool("b.B")];
        let registry = ToolRegistry::try_new(&tools).unwrap();
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_builtin() {
        let registry = ToolRegistry::builtin();
        assert_eq!(registry.len(), crate::registry::BUILTIN_COUNT);
        assert!(registry.contains("google.GoogleSearchToolSpec"));
        assert!(registry.contains("wikipedia.WikipediaToolSpec"));
    }
}

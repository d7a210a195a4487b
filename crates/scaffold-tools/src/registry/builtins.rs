//! Built-in tool catalog - SINGLE SOURCE OF TRUTH
//!
//! Every tool the scaffolder can add to a generated project is declared
//! here, in the order it is presented to the user.

use super::{ConfigEntry, Tool, ToolDependency};
use crate::framework::TemplateFramework;

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 4;

static SUPPORTED_TOOLS: [Tool; BUILTIN_COUNT] = [
    Tool {
        display: "Google Search (configuration required after installation)",
        name: "google.GoogleSearchToolSpec",
        config: &[
            ConfigEntry::text(
                "engine",
                "Your search engine id, see https://developers.google.com/custom-search/v1/overview#prerequisites",
            ),
            ConfigEntry::text("key", "Your search api key"),
            ConfigEntry::integer("num", 2),
        ],
        dependencies: &[ToolDependency::pinned("llama-index-tools-google", "0.1.2")],
        supported_frameworks: Some(&[TemplateFramework::FastApi]),
    },
    Tool {
        display: "Brave Search (configuration required after installation)",
        name: "brave_search.BraveSearchToolSpec",
        config: &[ConfigEntry::text(
            "api_key",
            "Your Brave search API key, see https://brave.com/search/api",
        )],
        dependencies: &[ToolDependency::pinned(
            "llama-index-tools-brave-search",
            "0.1.0",
        )],
        supported_frameworks: None,
    },
    Tool {
        display: "DuckDuckGo Search",
        name: "duckduckgo.DuckDuckGoSearchToolSpec",
        config: &[],
        dependencies: &[ToolDependency::pinned("llama-index-tools-duckduckgo", "0.1.0")],
        supported_frameworks: None,
    },
    Tool {
        display: "Wikipedia",
        name: "wikipedia.WikipediaToolSpec",
        config: &[],
        dependencies: &[ToolDependency::pinned("llama-index-tools-wikipedia", "0.1.2")],
        supported_frameworks: Some(&[
            TemplateFramework::FastApi,
            TemplateFramework::Express,
            TemplateFramework::NextJs,
        ]),
    },
];

/// Returns the built-in tool catalog in registry order.
///
/// All lookup and listing should ultimately derive from this table.
pub fn supported_tools() -> &'static [Tool] {
    &SUPPORTED_TOOLS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_count() {
        assert_eq!(supported_tools().len(), BUILTIN_COUNT);
    }

    #[test]
    fn test_no_duplicate_names() {
        let names: HashSet<_> = supported_tools().iter().map(|t| t.name).collect();
        assert_eq!(names.len(), BUILTIN_COUNT, "Duplicate names found");
    }

    #[test]
    fn test_registry_order() {
        let names: Vec<_> = supported_tools().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "google.GoogleSearchToolSpec",
                "brave_search.BraveSearchToolSpec",
                "duckduckgo.DuckDuckGoSearchToolSpec",
                "wikipedia.WikipediaToolSpec",
            ]
        );
    }

    #[test]
    fn test_config_marker_in_display() {
        // Tools needing configuration say so in their label
        for tool in supported_tools() {
            assert_eq!(
                tool.requires_config(),
                tool.display.contains("configuration required"),
                "Label mismatch for {}",
                tool.name
            );
        }
    }

    #[test]
    fn test_all_have_pinned_dependencies() {
        for tool in supported_tools() {
            assert!(!tool.dependencies.is_empty(), "{} has no deps", tool.name);
            assert!(tool.dependencies.iter().all(|d| d.version.is_some()));
        }
    }
}

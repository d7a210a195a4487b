//! Record types for the tool catalog

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::framework::TemplateFramework;

/// Example or placeholder value for a configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Description of what the user must fill in
    Text(&'static str),
    /// Usable numeric default
    Integer(i64),
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// One key of a tool's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: &'static str,
    pub value: ConfigValue,
}

impl ConfigEntry {
    pub const fn text(key: &'static str, value: &'static str) -> Self {
        Self {
            key,
            value: ConfigValue::Text(value),
        }
    }

    pub const fn integer(key: &'static str, value: i64) -> Self {
        Self {
            key,
            value: ConfigValue::Integer(value),
        }
    }
}

/// Package a tool needs installed in the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ToolDependency {
    /// Package identifier
    pub name: &'static str,
    /// Pinned version, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<&'static str>,
}

impl ToolDependency {
    pub const fn pinned(name: &'static str, version: &'static str) -> Self {
        Self {
            name,
            version: Some(version),
        }
    }
}

impl fmt::Display for ToolDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.version {
            Some(version) => write!(f, "{} {}", self.name, version),
            None => f.write_str(self.name),
        }
    }
}

/// A tool integration the generated project may include.
///
/// An empty `config` means no configuration is needed after install.
/// `supported_frameworks: None` means the tool works with every framework.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// Label shown to the user
    pub display: &'static str,
    /// Unique identifier, `<module>.<ClassName>`
    pub name: &'static str,
    #[serde(serialize_with = "serialize_config", skip_serializing_if = "is_empty")]
    pub config: &'static [ConfigEntry],
    #[serde(skip_serializing_if = "is_empty")]
    pub dependencies: &'static [ToolDependency],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_frameworks: Option<&'static [TemplateFramework]>,
}

impl Tool {
    /// Check if the user must supply configuration after scaffolding.
    pub fn requires_config(&self) -> bool {
        !self.config.is_empty()
    }

    /// Check if the tool can be used with the given framework.
    pub fn supports(&self, framework: TemplateFramework) -> bool {
        self.supported_frameworks
            .is_none_or(|frameworks| frameworks.contains(&framework))
    }
}

fn is_empty<T>(items: &&[T]) -> bool {
    items.is_empty()
}

fn serialize_config<S: Serializer>(
    entries: &&'static [ConfigEntry],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for entry in entries.iter() {
        map.serialize_entry(entry.key, &entry.value)?;
    }
    map.end()
}

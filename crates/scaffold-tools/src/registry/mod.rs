//! Tool registry - single source of truth for the tool catalog
//!
//! The built-in table lives in `builtins`, the record types in `types`,
//! and lookup over any table in `store`.

mod builtins;
mod store;
mod types;

pub use builtins::{BUILTIN_COUNT, supported_tools};
pub use store::ToolRegistry;
pub use types::{ConfigEntry, ConfigValue, Tool, ToolDependency};

//! Error types for scaffold-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}", unknown_tools_message(.requested, .supported))]
    UnknownTools {
        /// Names that did not resolve, in request order without repeats
        requested: Vec<String>,
        /// Every registered name, in registry order
        supported: Vec<String>,
    },

    #[error("Duplicate tool name in registry: {name}")]
    DuplicateTool { name: String },

    #[error("Unknown framework '{input}'. Supported frameworks are: express, fastapi, nextjs")]
    UnknownFramework { input: String },

    #[error("Tool '{tool}' does not support the {framework} framework")]
    UnsupportedFramework { tool: String, framework: String },
}

fn unknown_tools_message(requested: &[String], supported: &[String]) -> String {
    let quoted: Vec<String> = requested.iter().map(|n| format!("'{n}'")).collect();
    let head = match quoted.as_slice() {
        [single] => format!("Tool {single} is not supported."),
        _ => format!("Tools {} are not supported.", quoted.join(", ")),
    };
    format!("{head} Supported tools are: {}", supported.join(", "))
}

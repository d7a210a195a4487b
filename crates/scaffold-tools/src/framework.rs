//! Host application frameworks a generated project can target

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Framework of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFramework {
    /// Node.js backend on Express
    Express,
    /// Python backend on FastAPI
    FastApi,
    /// Full-stack Next.js application
    NextJs,
}

impl TemplateFramework {
    /// All frameworks, in the order they are offered to the user.
    pub const ALL: [TemplateFramework; 3] = [Self::NextJs, Self::Express, Self::FastApi];

    /// The identifier used on the command line and in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Express => "express",
            Self::FastApi => "fastapi",
            Self::NextJs => "nextjs",
        }
    }
}

impl fmt::Display for TemplateFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "express" => Ok(Self::Express),
            "fastapi" => Ok(Self::FastApi),
            "nextjs" => Ok(Self::NextJs),
            _ => Err(Error::UnknownFramework {
                input: s.to_string(),
            }),
        }
    }
}

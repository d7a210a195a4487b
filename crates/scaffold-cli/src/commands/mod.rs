//! Command implementations for scaffold-cli

pub mod list;
pub mod resolve;

pub use list::run_list_tools;
pub use resolve::run_resolve;

use scaffold_tools::TemplateFramework;

use crate::error::Result;

/// Parse an optional `--framework` value.
pub fn parse_framework(framework: Option<&str>) -> Result<Option<TemplateFramework>> {
    Ok(framework.map(str::parse).transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_framework_none() {
        assert_eq!(parse_framework(None).unwrap(), None);
    }

    #[test]
    fn test_parse_framework_known() {
        assert_eq!(
            parse_framework(Some("nextjs")).unwrap(),
            Some(TemplateFramework::NextJs)
        );
    }

    #[test]
    fn test_parse_framework_unknown() {
        assert!(parse_framework(Some("rails")).is_err());
    }
}

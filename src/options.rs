//! Plugin parameter parsing
//!
//! protoc forwards `--twirp_java_jaxrs_opt=...` to the plugin as the request's
//! `parameter` string: comma separated `key` or `key=value` entries.
//!
//! Supported keys:
//! - `strict_inputs`: fail when a file listed in `file_to_generate` has no
//!   descriptor in the request, instead of skipping it with a warning
//! - `deny_collisions`: fail when two artifacts resolve to the same path,
//!   instead of keeping both with a warning

use crate::GeneratorError;

/// Parameter key for [`Options::strict_inputs`]
const STRICT_INPUTS: &str = "strict_inputs";

/// Parameter key for [`Options::deny_collisions`]
const DENY_COLLISIONS: &str = "deny_collisions";

/// Plugin configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Treat a requested file missing from the request as an error
    pub strict_inputs: bool,
    /// Treat two artifacts with the same output path as an error
    pub deny_collisions: bool,
}

impl Options {
    /// Parse the protoc parameter string
    pub fn parse(parameter: &str) -> Result<Self, GeneratorError> {
        let mut options = Options::default();

        for entry in parameter.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (key, value) = match entry.split_once('=') {
                Some((key, value)) => (key.trim(), Some(value.trim())),
                None => (entry, None),
            };

            match key {
                STRICT_INPUTS => options.strict_inputs = parse_flag(key, value)?,
                DENY_COLLISIONS => options.deny_collisions = parse_flag(key, value)?,
                _ => {
                    return Err(GeneratorError::InvalidConfig(format!(
                        "unknown option `{}`",
                        key
                    )))
                }
            }
        }

        Ok(options)
    }
}

/// A bare key means `true`
fn parse_flag(key: &str, value: Option<&str>) -> Result<bool, GeneratorError> {
    match value {
        None | Some("true") => Ok(true),
        Some("false") => Ok(false),
        Some(other) => Err(GeneratorError::InvalidConfig(format!(
            "option `{}` expects true or false, got `{}`",
            key, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(Options::parse("").unwrap(), Options::default());
        assert_eq!(Options::parse(" , ").unwrap(), Options::default());
    }

    #[test]
    fn test_parse_flags() {
        let opts = Options::parse("strict_inputs,deny_collisions=true").unwrap();
        assert!(opts.strict_inputs);
        assert!(opts.deny_collisions);

        let opts = Options::parse("strict_inputs = false").unwrap();
        assert!(!opts.strict_inputs);
        assert!(!opts.deny_collisions);
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = Options::parse("strict_inputs,java_lite").unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
        assert!(err.to_string().contains("java_lite"));
    }

    #[test]
    fn test_parse_bad_value() {
        let err = Options::parse("deny_collisions=yes").unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }
}

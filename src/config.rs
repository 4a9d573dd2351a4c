//! Parser configuration.
//!
//! Limits are read from `sqltree.toml` in the working directory, then
//! from `<config dir>/sqltree/config.toml`, falling back to defaults.
//!
//! ```toml
//! max_input_len = 1048576
//! max_nesting_depth = 128
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{SqlError, SqlResult};
use crate::parser::scan::nesting_depth;

/// Resource limits applied before any grammar runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// Maximum input size in bytes
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,

    /// Maximum bracket / prefix-minus nesting
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,
}

fn default_max_input_len() -> usize {
    1024 * 1024
}

fn default_max_nesting_depth() -> usize {
    128
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            max_nesting_depth: default_max_nesting_depth(),
        }
    }
}

impl ParserConfig {
    /// Set the input length limit
    pub fn with_max_input_len(mut self, max: usize) -> Self {
        self.max_input_len = max;
        self
    }

    /// Set the nesting limit
    pub fn with_max_nesting_depth(mut self, max: usize) -> Self {
        self.max_nesting_depth = max;
        self
    }

    pub fn from_toml_str(content: &str) -> SqlResult<Self> {
        toml::from_str(content).map_err(|e| SqlError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> SqlResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from the first config file found, or defaults.
    pub fn load() -> SqlResult<Self> {
        match Self::search_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading parser config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("sqltree.toml")];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("sqltree").join("config.toml"));
        }
        paths
    }

    /// Reject input that exceeds the limits.
    pub fn check(&self, input: &str) -> SqlResult<()> {
        if input.len() > self.max_input_len {
            return Err(SqlError::InputTooLarge {
                len: input.len(),
                max: self.max_input_len,
            });
        }

        let depth = nesting_depth(input);
        if depth > self.max_nesting_depth {
            return Err(SqlError::NestingTooDeep {
                depth,
                max: self.max_nesting_depth,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_input_len, 1_048_576);
        assert_eq!(config.max_nesting_depth, 128);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ParserConfig::from_toml_str("max_nesting_depth = 16").unwrap();
        assert_eq!(config.max_nesting_depth, 16);
        assert_eq!(config.max_input_len, 1_048_576);
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        assert!(matches!(
            ParserConfig::from_toml_str("max_input_len = \"big\""),
            Err(SqlError::Config(_))
        ));
    }

    #[test]
    fn test_check() {
        let config = ParserConfig::default()
            .with_max_input_len(10)
            .with_max_nesting_depth(1);
        assert!(config.check("(1)").is_ok());
        assert!(matches!(
            config.check("((1))"),
            Err(SqlError::NestingTooDeep { depth: 2, max: 1 })
        ));
        assert!(matches!(
            config.check("SELECT 1 + 2"),
            Err(SqlError::InputTooLarge { len: 12, max: 10 })
        ));
    }
}

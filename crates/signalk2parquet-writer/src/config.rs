//! Output root configuration
//!
//! One recognized option: the directory partition trees are written under.
//! Resolution order is explicit override, then the `OUTPUT_DIR` environment
//! variable, then the literal default `"output"`.

use std::path::PathBuf;

/// Environment variable overriding the output root
pub const OUTPUT_DIR_ENV: &str = "OUTPUT_DIR";

/// Default output root when no override is present
pub const DEFAULT_OUTPUT_ROOT: &str = "output";

/// Writer configuration
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Directory under which partition directories and files are created
    pub output_root: PathBuf,
}

impl WriterConfig {
    /// Configuration with an explicit output root
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    /// Resolve the output root from the environment, falling back to the
    /// default when `OUTPUT_DIR` is unset or empty.
    pub fn from_env() -> Self {
        let output_root = std::env::var(OUTPUT_DIR_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_ROOT));

        Self { output_root }
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_root() {
        assert_eq!(WriterConfig::default().output_root, PathBuf::from("output"));
    }

    #[test]
    fn test_explicit_root_wins() {
        let config = WriterConfig::new("/tmp/telemetry");
        assert_eq!(config.output_root, PathBuf::from("/tmp/telemetry"));
    }
}

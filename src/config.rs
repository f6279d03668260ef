//! Configuration for a ranking run
//!
//! A [`Config`] is assembled once per run from the embedded defaults, an optional
//! `ts-rank.toml` file and command-line overrides, then passed by reference to the
//! extractor, the filter and the ranker.

use crate::Result;
use crate::filter::GlobFilter;
use crate::trace::CheckKind;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../default_config.toml");

/// Name of the configuration file looked up in the root directory
pub const CONFIG_FILE_NAME: &str = "ts-rank.toml";

const LOG_TARGET: &str = "   config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Execution trace written by the compiler
    #[serde(default = "default_trace_file")]
    pub trace_file: Utf8PathBuf,

    /// Type catalog written next to the trace
    #[serde(default = "default_types_file")]
    pub types_file: Utf8PathBuf,

    /// Glob that declaration paths must match to be ranked
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Maximum number of files in the per-file ranking
    #[serde(default = "default_file_limit")]
    pub file_limit: usize,

    /// Maximum number of symbols listed per file or per origin bucket
    #[serde(default = "default_symbol_limit")]
    pub symbol_limit: usize,

    /// Check operations correlated with catalog symbols
    #[serde(default = "default_check_kinds")]
    pub check_kinds: Vec<CheckKind>,

    /// Path fragment identifying third-party declarations
    #[serde(default = "default_dependency_marker")]
    pub dependency_marker: String,
}

fn default_trace_file() -> Utf8PathBuf {
    Utf8PathBuf::from("./.tsTrace/trace.json")
}

fn default_types_file() -> Utf8PathBuf {
    Utf8PathBuf::from("./.tsTrace/types.json")
}

fn default_pattern() -> String {
    "**/*".to_string()
}

const fn default_file_limit() -> usize {
    50
}

const fn default_symbol_limit() -> usize {
    10
}

fn default_check_kinds() -> Vec<CheckKind> {
    vec![CheckKind::StructuredTypeRelatedTo]
}

fn default_dependency_marker() -> String {
    "/node_modules".to_string()
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// Without an explicit path, `ts-rank.toml` in `root` is used when it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. Values are checked by
    /// [`Config::validate`] once command-line overrides have been applied.
    pub fn load(root: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading ts-rank configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = root.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No configuration file at '{path}', using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading ts-rank configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;

        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if no check kind is selected, the dependency marker is empty, or the pattern is not a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.check_kinds.is_empty() {
            bail!("check_kinds must name at least one check operation");
        }

        if self.dependency_marker.is_empty() {
            bail!("dependency_marker must not be empty");
        }

        let _ = GlobFilter::new(&self.pattern)?;
        Ok(())
    }

    /// Resolve the input paths against `root`. Absolute paths are kept as they are.
    pub fn resolve_paths(&mut self, root: &Utf8Path) {
        self.trace_file = root.join(&self.trace_file);
        self.types_file = root.join(&self.types_file);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trace_file: default_trace_file(),
            types_file: default_types_file(),
            pattern: default_pattern(),
            file_limit: default_file_limit(),
            symbol_limit: default_symbol_limit(),
            check_kinds: default_check_kinds(),
            dependency_marker: default_dependency_marker(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        (dir, root)
    }

    #[test]
    fn test_default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn test_embedded_defaults_match_default_impl() {
        let parsed: Config = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let (_dir, root) = temp_root();
        let config = Config::load(&root, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let (_dir, root) = temp_root();
        fs::write(root.join(CONFIG_FILE_NAME), "file_limit = 5\ncheck_kinds = [\"structuredTypeRelatedTo\", \"checkExpression\"]\n").unwrap();

        let config = Config::load(&root, None).unwrap();
        assert_eq!(config.file_limit, 5);
        assert_eq!(config.symbol_limit, 10);
        assert_eq!(config.check_kinds, vec![CheckKind::StructuredTypeRelatedTo, CheckKind::CheckExpression]);
        assert_eq!(config.pattern, "**/*");
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let (_dir, root) = temp_root();
        let missing = root.join("nope.toml");
        let result = Config::load(&root, Some(&missing));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let (_dir, root) = temp_root();
        let path = root.join("custom.toml");
        fs::write(&path, "unknown_field = 1\n").unwrap();

        let err = Config::load(&root, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("parsing configuration file"));
    }

    #[test]
    fn test_empty_check_kinds_rejected() {
        let config = Config {
            check_kinds: Vec::new(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let config = Config {
            pattern: "src/[".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_leaves_values_unchecked() {
        let (_dir, root) = temp_root();
        fs::write(root.join(CONFIG_FILE_NAME), "pattern = \"src/[\"\n").unwrap();

        let config = Config::load(&root, None).unwrap();
        assert_eq!(config.pattern, "src/[");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_default_round_trips() {
        let (_dir, root) = temp_root();
        let path = root.join(CONFIG_FILE_NAME);
        Config::save_default(&path).unwrap();

        let config = Config::load(&root, None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = Config {
            types_file: Utf8PathBuf::from("/abs/types.json"),
            ..Config::default()
        };
        config.resolve_paths(Utf8Path::new("/work"));
        assert_eq!(config.trace_file, Utf8PathBuf::from("/work/./.tsTrace/trace.json"));
        assert_eq!(config.types_file, Utf8PathBuf::from("/abs/types.json"));
    }
}

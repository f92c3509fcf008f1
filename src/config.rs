//! Configuration loading
//!
//! Settings come from TOML. The built-in defaults are embedded in the binary
//! and parsed once; a user file only needs the keys it changes.

use std::fs;
use std::str::FromStr;
use lazy_static::lazy_static;
use log::LevelFilter;

use crate::errors::{BoxDropError, BoxDropResult};

lazy_static! {
    // Parse the embedded defaults at first use
    static ref DEFAULT_CONFIG: BoxDropConfig = {
        let content = include_str!("../boxdrop_defaults.toml");
        BoxDropConfig::from_str_over(content, BoxDropConfig::fallback()).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
            BoxDropConfig::fallback()
        })
    };
}

/// Runtime settings of the pipeline and its host
#[derive(Debug, Clone, PartialEq)]
pub struct BoxDropConfig {
    /// Default ROI side length in pixels
    pub default_roi_size: u32,
    /// Default description fragment
    pub default_description: String,
    /// Suffix appended to an image path to name its session file
    pub session_suffix: String,
    /// Log file of the host binary
    pub log_file: String,
    /// File the pipeline appends one line per invocation to
    pub audit_log: String,
    /// Maximum log level
    pub log_level: LevelFilter,
}

impl BoxDropConfig {
    /// Values used when even the embedded defaults fail to parse
    fn fallback() -> Self {
        BoxDropConfig {
            default_roi_size: 512,
            default_description: "cellularity(%)".to_string(),
            session_suffix: ".session.xml".to_string(),
            log_file: "boxdrop.log".to_string(),
            audit_log: "boxdrop-audit.log".to_string(),
            log_level: LevelFilter::Info,
        }
    }

    /// Load a configuration file, taking missing keys from the built-in defaults
    pub fn from_file(path: &str) -> BoxDropResult<Self> {
        let content = fs::read_to_string(path)?;
        content.parse()
    }

    /// Parse `content`, overriding values of `base`
    fn from_str_over(content: &str, base: BoxDropConfig) -> BoxDropResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(BoxDropError::Config(format!("Failed to parse TOML: {}", e))),
        };

        let mut config = base;

        if let Some(size) = lookup(&toml_value, "roi", "default_size").and_then(|v| v.as_integer()) {
            if size < 1 || size > u32::MAX as i64 {
                return Err(BoxDropError::Config(format!("roi.default_size must be positive, got {}", size)));
            }
            config.default_roi_size = size as u32;
        }

        if let Some(text) = lookup_str(&toml_value, "roi", "default_description") {
            config.default_description = text;
        }

        if let Some(suffix) = lookup_str(&toml_value, "session", "suffix") {
            if suffix.is_empty() {
                return Err(BoxDropError::Config("session.suffix must not be empty".to_string()));
            }
            config.session_suffix = suffix;
        }

        if let Some(path) = lookup_str(&toml_value, "logging", "log_file") {
            config.log_file = path;
        }

        if let Some(path) = lookup_str(&toml_value, "logging", "audit_log") {
            config.audit_log = path;
        }

        if let Some(level) = lookup_str(&toml_value, "logging", "level") {
            config.log_level = level.parse::<LevelFilter>()
                .map_err(|_| BoxDropError::Config(format!("Unknown log level: {}", level)))?;
        }

        Ok(config)
    }
}

impl FromStr for BoxDropConfig {
    type Err = BoxDropError;

    /// Parse a TOML document, taking missing keys from the built-in defaults
    fn from_str(content: &str) -> BoxDropResult<Self> {
        Self::from_str_over(content, Self::default())
    }
}

impl Default for BoxDropConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

/// Look up `table.key` in a TOML document
fn lookup<'a>(toml_value: &'a toml::Value, table: &str, key: &str) -> Option<&'a toml::Value> {
    toml_value.get(table).and_then(|t| t.get(key))
}

fn lookup_str(toml_value: &toml::Value, table: &str, key: &str) -> Option<String> {
    lookup(toml_value, table, key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
}

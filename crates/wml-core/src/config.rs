//! Configuration types for wml.
//!
//! [`Config::load`] layers a TOML file over the built-in defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests). A typical config:
//!
//! ```text
//! [sources]
//! server1   = "./logs/server1.log"
//! db_server = "./logs/db_server.log"
//!
//! [query]
//! limit        = 100
//! min_severity = "info"
//! last_hours   = 24
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[query]
limit        = 100
min_severity = "info"
last_hours   = 24
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration: the source mapping plus query defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Source key to log file path. Empty when no config file is present.
    #[serde(default)]
    pub sources: HashMap<String, String>,
    #[serde(default)]
    pub query: QueryConfig,
}

/// `[query]` section: defaults applied when the CLI flags are omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Severity floor as a tag name; decoded case-insensitively.
    #[serde(default = "default_min_severity")]
    pub min_severity: String,
    /// Width of the query window when `--since` is not given.
    #[serde(default = "default_last_hours")]
    pub last_hours: i64,
}

fn default_limit() -> usize { 100 }
fn default_min_severity() -> String { "info".to_string() }
fn default_last_hours() -> i64 { 24 }

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            min_severity: default_min_severity(),
            last_hours: default_last_hours(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` layered on top of the built-in defaults. A missing file is
    /// not an error; it simply yields the defaults and an empty source map.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

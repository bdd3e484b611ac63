//! Run configuration.
//!
//! An optional `precheck.toml` at the repository root overrides the
//! external tool commands and the style standard. Every field has a
//! default, so the file may be absent or partial.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::classify::FilePatternRule;
use crate::error::Error;

/// Config file name looked up at the repository root.
const CONFIG_FILE: &str = "precheck.toml";

/// Pipeline configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// External tool commands.
    #[serde(default)]
    pub tools: ToolsConfig,

    /// Style check settings.
    #[serde(default)]
    pub style: StyleConfig,
}

/// Commands used to invoke the external toolchain.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_php")]
    pub php: String,

    #[serde(default = "default_cs_fixer")]
    pub cs_fixer: String,

    #[serde(default = "default_phpcs")]
    pub phpcs: String,

    #[serde(default = "default_phpunit")]
    pub phpunit: String,
}

/// Style check settings.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Coding standard passed to the style fixer and checker.
    #[serde(default = "default_standard")]
    pub standard: String,

    /// Source encoding passed to the style checker.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

// Default value functions
fn default_php() -> String {
    "php".to_string()
}

fn default_cs_fixer() -> String {
    "php-cs-fixer".to_string()
}

fn default_phpcs() -> String {
    "phpcs".to_string()
}

fn default_phpunit() -> String {
    "phpunit".to_string()
}

fn default_standard() -> String {
    "PSR2".to_string()
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            php: default_php(),
            cs_fixer: default_cs_fixer(),
            phpcs: default_phpcs(),
            phpunit: default_phpunit(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            standard: default_standard(),
            encoding: default_encoding(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tools: ToolsConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the repository root, falling back to defaults
    /// when no config file exists.
    pub fn load(repo_root: &Path) -> Result<Self, Error> {
        let config_path = repo_root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: config_path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

/// Forbidden debug statement table, in fixed scan order.
///
/// Built once at startup and shared read-only with the debug-code
/// scanner. An ordered Vec, not a map: group order is part of the
/// output contract.
pub fn debug_rules() -> Vec<FilePatternRule> {
    vec![
        FilePatternRule::new(
            "js/coffee",
            r"\.(js|coffee)(\.\w+)?$",
            &[r"console\.log\(", r"console\.debug\(", r"debugger\;"],
        ),
        FilePatternRule::new(
            "php",
            r"\.php(\.\w+)?$",
            &[r"var_dump\(", r"print_r\(", r"die\(", r"exit\;"],
        ),
        FilePatternRule::new("twig", r"\.twig(\.\w+)?$", &[r"dump\("]),
    ]
}

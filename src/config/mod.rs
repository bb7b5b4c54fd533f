//! Calculator configuration.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! vat_rate = 0.10
//! language = "korean"
//!
//! [labels]
//! vat = "tax"
//! ```
//!
//! Every field is optional. `[labels]` overrides individual words of the
//! chosen language's label set.

pub mod error;
pub mod rules;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{Labels, Language, Settings, DEFAULT_VAT_RATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File name looked up under the user's config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Per-word overrides applied on top of a language's labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelOverrides {
    pub title: Option<String>,
    pub margin: Option<String>,
    pub discount: Option<String>,
    pub vat: Option<String>,
    pub grand_total: Option<String>,
    pub grand_total_vat: Option<String>,
    pub mode: Option<String>,
    pub percent_prompt: Option<String>,
    pub input: Option<String>,
    pub result: Option<String>,
    pub history: Option<String>,
    pub empty_history: Option<String>,
}

impl LabelOverrides {
    /// Apply the overrides to `labels`.
    pub fn apply(&self, labels: Labels) -> Labels {
        fn pick(over: &Option<String>, base: String) -> String {
            over.clone().unwrap_or(base)
        }

        Labels {
            title: pick(&self.title, labels.title),
            margin: pick(&self.margin, labels.margin),
            discount: pick(&self.discount, labels.discount),
            vat: pick(&self.vat, labels.vat),
            grand_total: pick(&self.grand_total, labels.grand_total),
            grand_total_vat: pick(&self.grand_total_vat, labels.grand_total_vat),
            mode: pick(&self.mode, labels.mode),
            percent_prompt: pick(&self.percent_prompt, labels.percent_prompt),
            input: pick(&self.input, labels.input),
            result: pick(&self.result, labels.result),
            history: pick(&self.history, labels.history),
            empty_history: pick(&self.empty_history, labels.empty_history),
        }
    }
}

/// User configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fraction added by VAT (0.10 = 10%)
    pub vat_rate: f64,
    pub language: Language,
    pub labels: LabelOverrides,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vat_rate: DEFAULT_VAT_RATE,
            language: Language::default(),
            labels: LabelOverrides::default(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/shopcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shopcalc").join(CONFIG_FILE))
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validated()
    }

    /// Read configuration from `path`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check every rule, reporting all violations together.
    pub fn validated(self) -> Result<Self, ConfigError> {
        let found = rules::violations(rules::check(&self));
        if found.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Invalid(found))
        }
    }

    /// Labels for the configured language with overrides applied.
    pub fn labels(&self) -> Labels {
        self.labels.apply(Labels::for_language(self.language))
    }

    /// Interpreter settings described by this configuration.
    pub fn settings(&self) -> Settings {
        Settings::new(self.vat_rate, self.labels())
    }
}

//! Configuration management for DocStack.
//!
//! All configuration is driven by environment variables.

use std::fmt;
use std::str::FromStr;

use crate::error::{DocStackError, DocStackResult};

/// Flavor of MongoDB Extended JSON v2 used when rendering documents as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtJsonMode {
    /// Native JSON numbers where they fit; lossy for some BSON types.
    #[default]
    Relaxed,
    /// Every BSON type wrapped explicitly (`{"$numberLong": "1"}`).
    Canonical,
}

impl ExtJsonMode {
    /// Returns the lowercase name used in configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Canonical => "canonical",
        }
    }
}

impl fmt::Display for ExtJsonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtJsonMode {
    type Err = DocStackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "canonical" => Ok(Self::Canonical),
            other => Err(DocStackError::Config(format!(
                "unknown extended JSON mode: {other} (expected relaxed or canonical)"
            ))),
        }
    }
}

/// Global configuration for DocStack.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocStackConfig {
    /// Log level, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Extended JSON flavor for rendered update documents.
    pub extjson_mode: ExtJsonMode,
}

impl Default for DocStackConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            extjson_mode: ExtJsonMode::default(),
        }
    }
}

impl DocStackConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Returns [`DocStackError::Config`] if `DOCSTACK_EXTJSON_MODE` holds an
    /// unrecognized value.
    pub fn from_env() -> DocStackResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DocStackResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("DOCSTACK_EXTJSON_MODE") {
            config.extjson_mode = v.parse()?;
        }

        Ok(config)
    }
}

#![forbid(unsafe_code)]

//! Page configuration as data.
//!
//! [`VitrineConfig`] groups the tunables of every timed component so a site
//! can adjust cadence and copy without recompiling. Every field defaults to
//! the built-in behavior, so a missing file section means "unchanged".
//!
//! # Loading
//!
//! ```toml
//! # vitrine.toml
//! [carousel]
//! auto_advance_interval_ms = 4000
//! wrap_on_manual_retreat = true
//!
//! [contact_form]
//! submit_delay_ms = 1500
//! sending_label = "Sending..."
//! ```
//!
//! ```rust,ignore
//! let config = VitrineConfig::load_toml_file("vitrine.toml")?;
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use vitrine_widgets::carousel::CarouselConfig;
use vitrine_widgets::contact_form::ContactFormConfig;

/// Top-level configuration for a page's components.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct VitrineConfig {
    /// Testimonials carousel.
    pub carousel: CarouselConfig,

    /// Contact form.
    pub contact_form: ContactFormConfig,
}

impl VitrineConfig {
    /// Parse from a TOML string. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Parse from a TOML file on disk. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parse from a JSON string. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Parse from a JSON file on disk. Does not validate.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a TOML string.
    #[cfg(feature = "config")]
    pub fn load_toml_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str(s)?.validated()
    }

    /// Parse and validate a TOML file.
    #[cfg(feature = "config")]
    pub fn load_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)?.validated()
    }

    /// Parse and validate a JSON string.
    #[cfg(feature = "config")]
    pub fn load_json_str(s: &str) -> Result<Self, ConfigError> {
        Self::from_json_str(s)?.validated()
    }

    /// Parse and validate a JSON file.
    #[cfg(feature = "config")]
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_file(path)?.validated()
    }

    /// Serialize to pretty TOML.
    #[cfg(feature = "config")]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::TomlSer)
    }

    /// Check every parameter is within its accepted range.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let carousel = &self.carousel;

        if carousel.auto_advance_interval_ms == 0 {
            errors.push("carousel.auto_advance_interval_ms must be > 0".into());
        }
        if !(carousel.visible_card_breakpoint > 0.0) {
            errors.push(format!(
                "carousel.visible_card_breakpoint must be > 0, got {}",
                carousel.visible_card_breakpoint
            ));
        }
        if carousel.desktop_visible_cards == 0 {
            errors.push("carousel.desktop_visible_cards must be >= 1".into());
        }
        if !(carousel.card_gap >= 0.0) {
            errors.push(format!(
                "carousel.card_gap must be >= 0, got {}",
                carousel.card_gap
            ));
        }

        let form = &self.contact_form;
        if form.submit_delay_ms == 0 {
            errors.push("contact_form.submit_delay_ms must be > 0".into());
        }
        if form.sending_label.trim().is_empty() {
            errors.push("contact_form.sending_label must not be empty".into());
        }

        errors
    }

    /// `self` if valid, otherwise every problem as [`ConfigError::Validation`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(
                target: "vitrine.config",
                count = errors.len(),
                "configuration rejected"
            );
            Err(ConfigError::Validation(errors))
        }
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when loading a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// TOML serialization error.
    #[cfg(feature = "config")]
    TomlSer(toml::ser::Error),
    /// JSON parse error.
    #[cfg(feature = "config")]
    Json(serde_json::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            #[cfg(feature = "config")]
            Self::TomlSer(e) => write!(f, "TOML serialize error: {e}"),
            #[cfg(feature = "config")]
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            #[cfg(feature = "config")]
            Self::TomlSer(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Json(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

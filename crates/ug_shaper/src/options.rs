//! Shaping options
//!
//! Options are plain serde data so callers can keep them next to their other
//! settings and load them from JSON.

use crate::{Result, ShapeError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the alef slot of a lam-alef ligature turns into.
///
/// The ligature glyph replaces the lam slot, which leaves the alef slot
/// without a glyph of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LigaturePlaceholder {
    /// Emit U+0000, keeping output aligned 1:1 with input characters
    #[default]
    Nul,
    /// Drop the slot, so output is one character shorter per ligature
    Omit,
}

impl LigaturePlaceholder {
    /// The character emitted in place of the alef, if any
    pub fn placeholder(self) -> Option<char> {
        match self {
            LigaturePlaceholder::Nul => Some('\0'),
            LigaturePlaceholder::Omit => None,
        }
    }
}

impl std::str::FromStr for LigaturePlaceholder {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nul" => Ok(LigaturePlaceholder::Nul),
            "omit" => Ok(LigaturePlaceholder::Omit),
            other => Err(ShapeError::InvalidOptions(format!(
                "unknown ligature placeholder '{}', expected 'nul' or 'omit'",
                other
            ))),
        }
    }
}

/// Options for a [`ShapingScanner`](crate::ShapingScanner)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    /// Lam-alef placeholder policy
    pub ligature_placeholder: LigaturePlaceholder,
}

impl ShapeOptions {
    /// Parse options from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ShapeError::InvalidOptions(e.to_string()))
    }

    /// Load options from a JSON file. A missing or malformed file is an error.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load options from a JSON file, or return defaults if it is absent or unreadable
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(options) => options,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Failed to load shaping options, using defaults: {}",
                    e
                );
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ShapeError::InvalidOptions(e.to_string()))
    }
}

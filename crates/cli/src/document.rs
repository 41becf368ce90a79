//! Token document as read from disk

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tokenwind_core::{TokenError, TokenGroup};

/// Parsed token tree plus the untouched JSON it came from
///
/// `raw` is what `tokens/index.json` is written from, so values the token
/// model normalizes (numbers, extra fields such as `$extensions`) survive.
#[derive(Debug, Clone)]
pub struct Document {
    pub raw: Value,
    pub tokens: TokenGroup,
}

impl Document {
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(content)
            .map_err(TokenError::from)
            .context("Failed to parse token document")?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        let tokens = TokenGroup::deserialize(&raw)
            .map_err(TokenError::from)
            .context("Failed to parse token document")?;
        Ok(Self { raw, tokens })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid tokens in {}", path.display()))
    }
}

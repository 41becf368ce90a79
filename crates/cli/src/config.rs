//! Build configuration file handling (tokenwind.toml)

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tokenwind_core::naming::to_pascal_case;
use tokenwind_css::{AliasMode, AliasTable};

/// Top-level build configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Token document (relative to the config file)
    #[serde(default = "default_tokens")]
    pub tokens: PathBuf,
    /// Output directory (relative to the config file)
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
    pub scope: ScopeConfig,
    #[serde(default)]
    pub csharp: CSharpConfig,
    #[serde(default)]
    pub typescript: TypeScriptConfig,
    #[serde(default)]
    pub flat: FlatConfig,
}

fn default_tokens() -> PathBuf {
    PathBuf::from("figma-tokens/$tokens.json")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Product scope and its layers
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopeConfig {
    /// Dotted document path, also the scope id placeholders must carry
    pub id: String,
    /// Dotted paths merged left to right into the product tree
    #[serde(default)]
    pub layers: Vec<String>,
    /// File stem for product outputs; defaults to the last segment of `id`
    #[serde(default)]
    pub name: Option<String>,
}

impl ScopeConfig {
    pub fn name(&self) -> &str {
        self.name
            .as_deref()
            .unwrap_or_else(|| self.id.rsplit('.').next().unwrap_or(&self.id))
    }

    /// Layers to merge; the scope itself when none are listed
    pub fn layers(&self) -> Vec<&str> {
        if self.layers.is_empty() {
            vec![self.id.as_str()]
        } else {
            self.layers.iter().map(String::as_str).collect()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CSharpConfig {
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default)]
    pub product_class: Option<String>,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for CSharpConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            product_class: None,
            title: default_title(),
        }
    }
}

impl CSharpConfig {
    /// `ivy-framework` → `IvyFrameworkTokens` unless configured
    pub fn product_class(&self, scope_name: &str) -> String {
        self.product_class
            .clone()
            .unwrap_or_else(|| format!("{}Tokens", to_pascal_case(scope_name)))
    }
}

fn default_namespace() -> String {
    "Ivy.Themes".to_string()
}

fn default_title() -> String {
    "Ivy Design System".to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeScriptConfig {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for TypeScriptConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Flat CSS alias tables; built-in tables are used when none are given
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatConfig {
    #[serde(default)]
    pub mode: AliasMode,
    #[serde(default)]
    pub root: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub dark: Option<IndexMap<String, String>>,
}

impl FlatConfig {
    pub fn root_table(&self) -> AliasTable {
        match &self.root {
            Some(entries) => AliasTable::new(entries.clone(), self.mode),
            None => AliasTable::ivy_root().with_mode(self.mode),
        }
    }

    pub fn dark_table(&self) -> AliasTable {
        match &self.dark {
            Some(entries) => AliasTable::new(entries.clone(), self.mode),
            None => AliasTable::ivy_dark().with_mode(self.mode),
        }
    }
}

impl BuildConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse build configuration")
    }

    /// Load the config and anchor relative paths at its directory
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        if let Some(base) = path.parent() {
            config.tokens = base.join(&config.tokens);
            config.out_dir = base.join(&config.out_dir);
        }

        Ok(config)
    }
}

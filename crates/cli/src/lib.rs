//! Build driver for the tokenwind design-token compiler
//!
//! Reads `tokenwind.toml`, loads the token document, runs every emitter
//! and writes the results with a hash manifest.

pub mod config;
pub mod document;
pub mod output;
pub mod pipeline;

pub use config::BuildConfig;
pub use document::Document;
pub use output::{write_artifacts, Manifest};
pub use pipeline::{build, compose, Artifact, ScopeTrees};

use anyhow::Result;
use tokenwind_core::{check_scope, Diagnostic};

/// Read and parse the token document named by the config
pub fn load_document(config: &BuildConfig) -> Result<Document> {
    Document::load(&config.tokens)
}

/// Structural checks for the product scope
pub fn check(document: &Document, config: &BuildConfig) -> Vec<Diagnostic> {
    check_scope(&document.tokens, &config.scope.id)
}

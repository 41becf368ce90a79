//! Build pipeline: scope composition and emitter orchestration
//!
//! Produces in-memory artifacts; writing them is left to `output`.

use crate::config::BuildConfig;
use crate::document::Document;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokenwind_codegen::{CSharpEmitter, TypeEmitter};
use tokenwind_core::{find_scope, merge_all, theme_tree, SourceScope, TokenGroup};
use tokenwind_css::{emit_css, emit_flat_css, Selector};
use tokenwind_tailwind::emit_tailwind;

/// A generated file, path relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

impl Artifact {
    fn new(path: impl Into<PathBuf>, contents: String) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Trees handed to the emitters for one product
#[derive(Debug, Clone)]
pub struct ScopeTrees {
    pub product: TokenGroup,
    pub source: TokenGroup,
    pub light: TokenGroup,
    pub dark: TokenGroup,
}

/// Merge the configured layers and split out the source and theme trees
pub fn compose(document: &TokenGroup, config: &BuildConfig) -> Result<ScopeTrees> {
    let layers = config
        .scope
        .layers()
        .into_iter()
        .map(|id| find_scope(document, id).cloned())
        .collect::<Result<Vec<_>, _>>()?;

    let product = merge_all(layers);
    let source = product.group("source").cloned().unwrap_or_default();
    let light = theme_tree(&product, "light");
    let dark = theme_tree(&product, "dark");

    Ok(ScopeTrees {
        product,
        source,
        light,
        dark,
    })
}

/// Run every emitter and collect the outputs in write order
pub fn build(
    document: &Document,
    config: &BuildConfig,
    generated_at: Option<&str>,
) -> Result<Vec<Artifact>> {
    let trees = compose(&document.tokens, config)?;
    // the merged source is the union of every layer, so each layer id is a valid target
    let scope = SourceScope::with_ids(
        std::iter::once(config.scope.id.as_str()).chain(config.scope.layers()),
        &trees.source,
    );
    let name = config.scope.name();

    let mut artifacts = Vec::new();

    tracing::info!("Generating CSS...");
    artifacts.push(Artifact::new(
        format!("css/{}.css", name),
        emit_css(&trees.source, Selector::Root, Some(&scope))?,
    ));
    artifacts.push(Artifact::new(
        "css/light.css",
        emit_css(&trees.light, Selector::Root, Some(&scope))?,
    ));
    artifacts.push(Artifact::new(
        "css/dark.css",
        emit_css(&trees.dark, Selector::Dark, Some(&scope))?,
    ));
    artifacts.push(Artifact::new(
        format!("css/{}-flat.css", name),
        emit_flat_css(
            &trees.source,
            Selector::Root,
            &config.flat.root_table(),
            Some(&scope),
        )?,
    ));
    artifacts.push(Artifact::new(
        "css/dark-flat.css",
        emit_flat_css(
            &trees.dark,
            Selector::Dark,
            &config.flat.dark_table(),
            Some(&scope),
        )?,
    ));

    tracing::info!("Generating Tailwind config...");
    artifacts.push(Artifact::new(
        format!("tailwind/{}.js", name),
        emit_tailwind(&trees.source).context("Failed to serialize Tailwind config")?,
    ));

    tracing::info!("Generating TypeScript types...");
    let types = TypeEmitter::new()
        .with_title(config.typescript.title.clone())
        .emit(&trees.source)
        .context("Failed to serialize token exports")?;
    tracing::info!(count = types.names.len(), "Generated token exports");
    artifacts.push(Artifact::new("js/index.d.ts", types.declarations));
    artifacts.push(Artifact::new("js/index.js", types.module));

    tracing::info!("Generating C# classes...");
    let csharp = |class_name: String| {
        let emitter = CSharpEmitter::new()
            .with_class_name(class_name)
            .with_namespace(config.csharp.namespace.clone())
            .with_title(config.csharp.title.clone());
        match generated_at {
            Some(timestamp) => emitter.with_generated_at(timestamp),
            None => emitter,
        }
    };

    let product_class = config.csharp.product_class(name);
    for (class_name, tree) in [
        (product_class, &trees.source),
        ("LightThemeTokens".to_string(), &trees.light),
        ("DarkThemeTokens".to_string(), &trees.dark),
    ] {
        let emitter = csharp(class_name);
        let code = emitter.emit(tree, Some(&scope))?;
        artifacts.push(Artifact::new(
            format!("csharp/{}.cs", emitter.class_name()),
            code,
        ));
    }

    artifacts.push(Artifact::new(
        "tokens/index.json",
        serde_json::to_string_pretty(&document.raw).context("Failed to serialize raw tokens")?,
    ));

    Ok(artifacts)
}

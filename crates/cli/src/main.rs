//! tokenwind - design token compiler
//!
//! Usage:
//!   tokenwind build [-c tokenwind.toml] [--out-dir DIR]
//!   tokenwind check [-c tokenwind.toml]

use anyhow::{bail, Result};
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokenwind_cli::{build, check, load_document, write_artifacts, BuildConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokenwind")]
#[command(about = "Compile design tokens into CSS, Tailwind, TypeScript and C#")]
#[command(version)]
struct Cli {
    /// Build configuration file
    #[arg(short, long, global = true, default_value = "tokenwind.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate every output format
    Build {
        /// Override the configured output directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Validate the token document structure
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = BuildConfig::load(&cli.config)?;

    match cli.command {
        Command::Build { out_dir } => run_build(config, out_dir),
        Command::Check => run_check(&config),
    }
}

fn run_build(config: BuildConfig, out_dir: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building design tokens from {}", config.tokens.display());

    let document = load_document(&config)?;
    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let artifacts = build(&document, &config, Some(&generated_at))?;

    let out_dir = out_dir.unwrap_or_else(|| config.out_dir.clone());
    write_artifacts(&out_dir, &artifacts, Some(&generated_at))?;

    tracing::info!(
        "Build complete: {} files in {}",
        artifacts.len() + 1,
        out_dir.display()
    );
    Ok(())
}

fn run_check(config: &BuildConfig) -> Result<()> {
    let document = load_document(config)?;
    let diagnostics = check(&document, config);

    for diagnostic in &diagnostics {
        if diagnostic.is_error() {
            tracing::error!("{}", diagnostic.message);
        } else {
            tracing::warn!("{}", diagnostic.message);
        }
    }

    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    if errors > 0 {
        bail!("{} structure error(s) in scope `{}`", errors, config.scope.id);
    }

    tracing::info!("Scope `{}` passed all checks", config.scope.id);
    Ok(())
}

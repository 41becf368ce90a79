//! Writing artifacts and the build manifest

use crate::pipeline::Artifact;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json`: content hash per generated file
#[derive(Debug, Serialize)]
pub struct Manifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    pub files: IndexMap<String, String>,
}

impl Manifest {
    pub fn from_artifacts(artifacts: &[Artifact], generated_at: Option<&str>) -> Self {
        let files = artifacts
            .iter()
            .map(|artifact| {
                (
                    manifest_key(&artifact.path),
                    blake3::hash(artifact.contents.as_bytes()).to_hex().to_string(),
                )
            })
            .collect();

        Self {
            generated_at: generated_at.map(str::to_string),
            files,
        }
    }
}

fn manifest_key(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Write every artifact under `out_dir`, then the manifest
pub fn write_artifacts(
    out_dir: &Path,
    artifacts: &[Artifact],
    generated_at: Option<&str>,
) -> Result<Manifest> {
    for artifact in artifacts {
        let target = out_dir.join(&artifact.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&target, &artifact.contents)
            .with_context(|| format!("Failed to write {}", target.display()))?;
        tracing::info!("  ✓ {}", artifact.path.display());
    }

    let manifest = Manifest::from_artifacts(artifacts, generated_at);
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest")?;
    fs::write(&manifest_path, json + "\n")
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;
    tracing::info!("  ✓ {}", MANIFEST_FILE);

    Ok(manifest)
}

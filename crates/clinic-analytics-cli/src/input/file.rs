use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Read a JSON or YAML file (chosen by extension) into a typed struct.
pub fn read_data<T: DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .with_context(|| format!("Failed to read '{}'", resolved.display()))?;

    let is_yaml = matches!(
        resolved.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    tracing::debug!(path = %resolved.display(), is_yaml, bytes = contents.len(), "loading records");

    let value = if is_yaml {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML '{}'", resolved.display()))?
    } else {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON '{}'", resolved.display()))?
    };
    Ok(value)
}

/// Resolve relative paths against the working directory and require a
/// regular file.
fn resolve_path(path: &str) -> anyhow::Result<PathBuf> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.exists() {
        bail!("File not found: {}", resolved.display());
    }
    if !resolved.is_file() {
        bail!("Not a file: {}", resolved.display());
    }
    Ok(resolved)
}

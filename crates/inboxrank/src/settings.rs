//! Classifier table file resolution.

use std::path::{Path, PathBuf};

use anyhow::Context;
use inboxrank_core::ClassifierConfig;
use tracing::{debug, info};

/// `<config_dir>/inboxrank/classifier.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("inboxrank")
        .join("classifier.json")
}

/// Loads tables from `explicit`, else the default file if it exists, else
/// the built-in tables.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<ClassifierConfig> {
    if let Some(path) = explicit {
        return ClassifierConfig::load(path)
            .with_context(|| format!("Failed to load classifier tables from {}", path.display()));
    }

    let path = default_config_path();
    if path.exists() {
        info!(?path, "Using classifier tables");
        return ClassifierConfig::load(&path)
            .with_context(|| format!("Failed to load classifier tables from {}", path.display()));
    }

    debug!("Using built-in classifier tables");
    Ok(ClassifierConfig::default())
}

/// Saves tables as pretty JSON, creating parent directories.
pub fn save_config(config: &ClassifierConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    std::fs::write(path, config.to_json_pretty()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!("Classifier tables saved to {:?}", path);
    Ok(())
}

//! Configuration view and initialization commands — `board-filter config`.

use anyhow::{Context, Result};
use std::path::Path;

use board_filter::config::{CONFIG_FILE_NAME, ViewerConfig};

pub fn cmd_config_show(config: &ViewerConfig) -> Result<()> {
    println!("{}", config.to_toml()?);
    Ok(())
}

/// Write a default config into `working_dir`. Never reads the existing
/// file, so a broken one can be replaced with `--force`.
pub fn cmd_config_init(working_dir: &Path, force: bool) -> Result<()> {
    let path = working_dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite it.",
            path.display()
        );
    }
    let content = ViewerConfig::default().to_toml()?;
    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

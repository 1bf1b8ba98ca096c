//! Configuration module for taskflow.

use anyhow::{Context, Result, anyhow};
use std::io::{self, Write};
use std::path::Path;

pub mod keybindings;

/// Initialize the configuration file with defaults.
///
/// # Errors
/// Returns an error if the target path cannot be determined or written.
pub fn init_config(output: Option<&Path>, force: bool) -> Result<()> {
    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => keybindings::default_config_path()
            .ok_or_else(|| anyhow!("could not determine the config directory"))?,
    };

    write_default_config(&output_path, force)
}

fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force && !confirm_overwrite(path)? {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }

    let content = keybindings::generate_default_config_toml()?;

    std::fs::write(path, content)
        .with_context(|| format!("failed to write config file: {}", path.display()))?;

    println!("✓ Wrote configuration file: {}", path.display());
    println!();
    println!("Edit this file to customize keybindings.");
    println!("Restart taskflow to apply changes.");

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "File already exists: {}\nOverwrite? [y/N]: ",
        path.display()
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(matches!(input.trim().to_lowercase().as_str(), "y" | "yes"))
}

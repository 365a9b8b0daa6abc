//! Config subcommands handler

use std::path::Path;

use anyhow::{Context, Result};

use chatgrab::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    print!("{}", toml_str);
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi'). A missing file is
/// created with default settings first.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        Config::default().save_to(config_path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    println!("Opening {} with {}", config_path.display(), editor);

    let status = std::process::Command::new(&editor)
        .arg(config_path)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;

    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Validate the edited file
    Config::load_from(config_path)?;
    Ok(())
}

/// Print the configuration file path.
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

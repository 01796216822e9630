use std::path::PathBuf;

use anyhow::{Context, Result};

/// Print the configured résumé, or write it to `output`.
pub fn resume(config: &crate::config::Config, output: Option<PathBuf>) -> Result<()> {
    let resume = config
        .resume
        .as_ref()
        .context("No resume configured, add a [resume] section to the config file")?;

    let text = resume.render();

    match output {
        Some(path) => {
            std::fs::write(&path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Resume written");
        }
        None => println!("{text}"),
    }

    Ok(())
}

use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use folio_core::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse `folio init --force` to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save(path)?;
    info!(path = %path.display(), "wrote default config");
    println!("Wrote default config to {}", path.display());
    Ok(())
}

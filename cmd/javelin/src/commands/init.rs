//! Init command implementation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Runs the init command.
pub fn run(path: &str) -> Result<()> {
    let manifest_path = Path::new(path);

    // Parameter values always travel as strings, hence the quoted time.
    let starter_manifest = r#"# Javelin experiment manifest.
# Run `javelin targets` to list every target and its actions, and
# `javelin explain --target HTTP --action delay` for a pair's schema.
target: HTTP
action: delay
flags:
  time: "3000"
matchers:
  uri: /api/orders
"#;

    if manifest_path.exists() {
        info!("Skipped: {} (already exists)", manifest_path.display());
        return Ok(());
    }

    fs::write(manifest_path, starter_manifest)
        .with_context(|| format!("Failed to create {}", manifest_path.display()))?;
    info!("Created: {}", manifest_path.display());

    Ok(())
}

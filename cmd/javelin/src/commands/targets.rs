//! Targets command implementation.

use anyhow::Result;
use javelin_catalog::Catalog;

/// Runs the targets command.
pub fn run() -> Result<()> {
    let catalog = Catalog::builtin();

    for target in catalog.targets() {
        let actions: Vec<&str> = catalog
            .supported_actions(target)
            .iter()
            .map(|action| action.name())
            .collect();
        println!("{target}: {}", actions.join(", "));
    }

    Ok(())
}

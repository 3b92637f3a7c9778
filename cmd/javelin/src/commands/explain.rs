//! Explain command implementation.

use anyhow::Result;
use javelin_catalog::{Action, Catalog, ParamRule, Target};

/// Runs the explain command.
pub fn run(target: &str, action: &str) -> Result<()> {
    let target: Target = target.parse()?;
    let action: Action = action.parse()?;

    let catalog = Catalog::builtin();
    let Some(rules) = catalog.rules(target, action) else {
        let supported: Vec<&str> = catalog
            .supported_actions(target)
            .iter()
            .map(|a| a.name())
            .collect();
        anyhow::bail!(
            "target {target} does not support action {action}; supported actions: [{}]",
            supported.join(", ")
        );
    };

    println!("target: {target}");
    println!("action: {action}");
    print_rules("flags", &rules.flags);
    print_rules("matchers", &rules.matchers);

    Ok(())
}

fn print_rules(kind: &str, rules: &[ParamRule]) {
    if rules.is_empty() {
        println!("{kind}: none");
        return;
    }

    println!("{kind}:");
    for rule in rules {
        let required = if rule.required { " (required)" } else { "" };
        println!("  {} [{}]{required}", rule.name, rule.param_type);
    }
}

//! Validate command implementation.

use anyhow::{Context, Result};
use javelin_verify::{ExperimentRequest, Validator, Verdict};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Runs the validate command.
pub fn run(experiment_path: &str) -> Result<()> {
    info!("Validating experiment: {}", experiment_path);

    let content = fs::read_to_string(experiment_path)
        .with_context(|| format!("Failed to read experiment file: {experiment_path}"))?;
    let request = parse_request(experiment_path, &content)?;

    let verdict = Verdict::from_violations(Validator::builtin().validate(&request));

    for violation in &verdict.violations {
        error!(
            "[{}] {}: {}",
            violation.kind, violation.field, violation.message
        );
    }

    if let Some(summary) = verdict.summary() {
        anyhow::bail!(summary);
    }

    info!(
        "Experiment request is valid: target {}, action {}",
        request.target, request.action
    );
    Ok(())
}

fn parse_request(path: &str, content: &str) -> Result<ExperimentRequest> {
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let request = if is_json {
        ExperimentRequest::from_json_str(content)
    } else {
        ExperimentRequest::from_yaml_str(content)
    };
    request.with_context(|| format!("Failed to parse experiment file: {path}"))
}

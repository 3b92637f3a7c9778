//! The parameter checker.
//!
//! A single pure pass over one rule list. Used identically for flags and
//! for matchers; the caller supplies the field prefix.

use crate::result::{Violation, ViolationKind};
use javelin_catalog::{Action, ParamRule, ParamType, Target};
use std::collections::BTreeMap;

/// Checks submitted values against a rule list.
///
/// Rules are evaluated in list order and every violation is collected;
/// the pass never stops at the first problem. Values submitted under
/// names no rule declares are ignored: the schema constrains known
/// parameters, it does not forbid extras.
///
/// Type conformance is always a parse check on the raw string, with
/// standard `str::parse` semantics for `i64` and `bool`. A required
/// value that is present but malformed reports a type mismatch only,
/// never an additional missing-parameter violation.
pub fn check_parameters(
    values: &BTreeMap<String, String>,
    rules: &[ParamRule],
    prefix: &str,
    target: Target,
    action: Action,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules {
        let field = format!("{prefix}.{}", rule.name);

        let Some(value) = values.get(&rule.name) else {
            if rule.required {
                violations.push(Violation::new(
                    ViolationKind::RequiredMissing,
                    field,
                    String::new(),
                    format!("missing required parameter for target {target}, action {action}"),
                ));
            }
            continue;
        };

        if rule.required && rule.param_type == ParamType::Text && value.is_empty() {
            violations.push(Violation::new(
                ViolationKind::EmptyValue,
                field.clone(),
                value.clone(),
                "required parameter is present but empty",
            ));
        }

        match rule.param_type {
            ParamType::Int if value.parse::<i64>().is_err() => {
                violations.push(Violation::new(
                    ViolationKind::TypeMismatch(ParamType::Int),
                    field,
                    value.clone(),
                    format!("\"{value}\" cannot be parsed as an integer"),
                ));
            }
            ParamType::Bool if value.parse::<bool>().is_err() => {
                violations.push(Violation::new(
                    ViolationKind::TypeMismatch(ParamType::Bool),
                    field,
                    value.clone(),
                    format!("\"{value}\" cannot be parsed as a boolean"),
                ));
            }
            _ => {}
        }
    }

    violations
}

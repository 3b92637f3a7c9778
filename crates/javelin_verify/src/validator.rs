//! The validation orchestrator.
//!
//! Resolves a request's target and action against the rule catalog, then
//! runs the parameter checker over the flags and matcher schemas. All
//! violations are collected in one pass; the engine never fail-fasts and
//! never panics on user input.

use crate::checker::check_parameters;
use crate::request::ExperimentRequest;
use crate::result::{Violation, ViolationKind};
use javelin_catalog::{Action, ActionRules, Catalog, Target};
use tracing::debug;

const TARGET_FIELD: &str = "spec.target";
const ACTION_FIELD: &str = "spec.action";
const FLAGS_PREFIX: &str = "spec.flags";
const MATCHER_PREFIX: &str = "spec.matcher";

/// Validates experiment requests against a rule catalog.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
}

impl<'a> Validator<'a> {
    /// Creates a validator over the given catalog.
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Validates one request.
    ///
    /// Returns every violation found, flags first and matchers second,
    /// each list in rule order. An empty list means the request is
    /// valid. An unknown target or unsupported action short-circuits to
    /// a single structural violation, since the parameter schemas are
    /// meaningless without a resolved (target, action) pair.
    pub fn validate(&self, request: &ExperimentRequest) -> Vec<Violation> {
        let Some(target) = self.resolve_target(&request.target) else {
            debug!("target {} not found in catalog", request.target);
            return vec![Violation::new(
                ViolationKind::TargetUnknown,
                TARGET_FIELD,
                request.target.clone(),
                format!("unknown JVM chaos target: {}", request.target),
            )];
        };

        let Some((action, rules)) = self.resolve_action(target, &request.action) else {
            debug!(
                "action {} not defined for target {target}",
                request.action
            );
            return vec![self.unsupported_action(target, &request.action)];
        };

        let mut violations =
            check_parameters(&request.flags, &rules.flags, FLAGS_PREFIX, target, action);
        violations.extend(check_parameters(
            &request.matchers,
            &rules.matchers,
            MATCHER_PREFIX,
            target,
            action,
        ));
        violations
    }

    fn resolve_target(&self, raw: &str) -> Option<Target> {
        let target = raw.parse::<Target>().ok()?;
        self.catalog.actions(target).map(|_| target)
    }

    fn resolve_action(&self, target: Target, raw: &str) -> Option<(Action, &'a ActionRules)> {
        let action = raw.parse::<Action>().ok()?;
        let rules = self.catalog.rules(target, action)?;
        Some((action, rules))
    }

    fn unsupported_action(&self, target: Target, raw: &str) -> Violation {
        let supported: Vec<&str> = self
            .catalog
            .supported_actions(target)
            .iter()
            .map(|action| action.name())
            .collect();
        Violation::new(
            ViolationKind::ActionUnsupported,
            ACTION_FIELD,
            raw,
            format!(
                "target {target} does not support action {raw}; supported actions: [{}]",
                supported.join(", ")
            ),
        )
    }
}

impl Validator<'static> {
    /// Creates a validator over the process-wide builtin catalog.
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ViolationKind;
    use javelin_catalog::ParamType;

    #[test]
    fn well_formed_http_delay_passes() {
        let request = ExperimentRequest::new("HTTP", "delay")
            .with_flag("time", "100")
            .with_matcher("uri", "/orders");

        assert!(Validator::builtin().validate(&request).is_empty());
    }

    #[test]
    fn http_delay_without_parameters_reports_both_required() {
        let request = ExperimentRequest::new("HTTP", "delay");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].kind, ViolationKind::RequiredMissing);
        assert_eq!(violations[0].field, "spec.flags.time");
        assert_eq!(violations[1].kind, ViolationKind::RequiredMissing);
        assert_eq!(violations[1].field, "spec.matcher.uri");
    }

    #[test]
    fn jvm_cpu_fullload_with_unparsable_count() {
        let request = ExperimentRequest::new("JVM", "cpu-fullload").with_flag("cpu-count", "four");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationKind::TypeMismatch(ParamType::Int)
        );
        assert_eq!(violations[0].field, "spec.flags.cpu-count");
        assert_eq!(violations[0].value, "four");
    }

    #[test]
    fn druid_connection_pool_full_accepts_empty_matchers() {
        let request = ExperimentRequest::new("DRUID", "connection-pool-full");
        assert!(Validator::builtin().validate(&request).is_empty());
    }

    #[test]
    fn unknown_target_is_a_single_structural_violation() {
        let request = ExperimentRequest::new("UNKNOWN", "delay")
            .with_flag("time", "not-an-int")
            .with_matcher("uri", "");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::TargetUnknown);
        assert_eq!(violations[0].field, "spec.target");
        assert_eq!(violations[0].value, "UNKNOWN");
    }

    #[test]
    fn dubbo_exception_with_blank_exception_class() {
        let request = ExperimentRequest::new("DUBBO", "exception").with_flag("exception", "");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::EmptyValue);
        assert_eq!(violations[0].field, "spec.flags.exception");
    }

    #[test]
    fn unsupported_action_message_enumerates_the_target_actions() {
        let request = ExperimentRequest::new("HTTP", "oom");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::ActionUnsupported);
        assert_eq!(violations[0].field, "spec.action");
        assert_eq!(violations[0].value, "oom");
        assert!(violations[0].message.contains("target HTTP"));
        assert!(violations[0]
            .message
            .contains("supported actions: [delay, exception]"));
    }

    #[test]
    fn unparsable_action_literal_is_unsupported() {
        let request = ExperimentRequest::new("JVM", "explode");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::ActionUnsupported);
    }

    #[test]
    fn flags_violations_precede_matcher_violations() {
        let request = ExperimentRequest::new("JVM", "return");
        let violations = Validator::builtin().validate(&request);

        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "spec.flags.value",
                "spec.matcher.classname",
                "spec.matcher.methodname"
            ]
        );
    }

    #[test]
    fn extra_parameters_are_never_flagged() {
        let request = ExperimentRequest::new("HTTP", "delay")
            .with_flag("time", "100")
            .with_flag("bonus", "whatever")
            .with_matcher("uri", "/orders")
            .with_matcher("unlisted", "x");

        assert!(Validator::builtin().validate(&request).is_empty());
    }

    #[test]
    fn oom_requires_area_and_checks_flag_types() {
        let request = ExperimentRequest::new("JVM", "oom")
            .with_flag("wild-mode", "sometimes")
            .with_flag("interval", "10");
        let violations = Validator::builtin().validate(&request);

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].kind, ViolationKind::RequiredMissing);
        assert_eq!(violations[0].field, "spec.flags.area");
        assert_eq!(
            violations[1].kind,
            ViolationKind::TypeMismatch(ParamType::Bool)
        );
        assert_eq!(violations[1].field, "spec.flags.wild-mode");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use std::collections::BTreeMap;

        const TARGET_LITERALS: [&str; 10] = [
            "SERVLET", "PSQL", "MYSQL", "JEDIS", "HTTP", "ROCKETMQ", "TARS", "DUBBO", "JVM",
            "DRUID",
        ];
        const ACTION_LITERALS: [&str; 10] = [
            "delay",
            "exception",
            "return",
            "script",
            "cpu-fullload",
            "oom",
            "code-cache-filling",
            "thread-pool-full",
            "throw-declared-exception",
            "connection-pool-full",
        ];

        fn target_literal() -> impl Strategy<Value = String> {
            prop_oneof![
                prop::sample::select(TARGET_LITERALS.to_vec()).prop_map(str::to_string),
                prop::string::string_regex("[A-Z]{2,10}").expect("valid regex"),
            ]
        }

        fn action_literal() -> impl Strategy<Value = String> {
            prop_oneof![
                prop::sample::select(ACTION_LITERALS.to_vec()).prop_map(str::to_string),
                prop::string::string_regex("[a-z-]{1,14}").expect("valid regex"),
            ]
        }

        fn param_map() -> impl Strategy<Value = BTreeMap<String, String>> {
            prop::collection::btree_map("[a-z-]{1,12}", "[a-zA-Z0-9 -]{0,8}", 0..6)
        }

        proptest! {
            #[test]
            fn unknown_target_always_yields_exactly_one_violation(
                target in "[a-z]{1,12}",
                action in action_literal(),
                flags in param_map(),
                matchers in param_map(),
            ) {
                let mut request = ExperimentRequest::new(target, action);
                request.flags = flags;
                request.matchers = matchers;

                let violations = Validator::builtin().validate(&request);
                prop_assert_eq!(violations.len(), 1);
                prop_assert_eq!(violations[0].kind, ViolationKind::TargetUnknown);
            }

            #[test]
            fn validation_is_idempotent(
                target in target_literal(),
                action in action_literal(),
                flags in param_map(),
                matchers in param_map(),
            ) {
                let mut request = ExperimentRequest::new(target, action);
                request.flags = flags;
                request.matchers = matchers;

                let validator = Validator::builtin();
                let first = validator.validate(&request);
                let second = validator.validate(&request);
                prop_assert_eq!(first, second);
            }

            #[test]
            fn structural_misses_never_inspect_parameters(
                action in action_literal(),
                flags in param_map(),
            ) {
                let mut request = ExperimentRequest::new("NOSUCH", action);
                request.flags = flags;

                let violations = Validator::builtin().validate(&request);
                prop_assert!(violations
                    .iter()
                    .all(|v| v.kind == ViolationKind::TargetUnknown));
            }
        }
    }
}

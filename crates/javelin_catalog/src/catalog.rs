//! The process-wide rule catalog.
//!
//! The catalog is embedded configuration: it is built exactly once, never
//! mutated afterwards, and shared freely across threads. A malformed entry
//! is a defect in this file, not a runtime error.

use crate::model::{Action, ActionRules, ParamRule, Target};
use std::collections::BTreeMap;
use std::sync::OnceLock;
use tracing::debug;

/// Immutable two-level schema registry: target → action → rule set.
#[derive(Debug)]
pub struct Catalog {
    entries: BTreeMap<Target, BTreeMap<Action, ActionRules>>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Returns the process-wide builtin catalog.
    ///
    /// Built on first use and frozen from then on; concurrent readers
    /// need no synchronization.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| {
            let catalog = Self {
                entries: builtin_entries(),
            };
            debug!("built rule catalog with {} targets", catalog.entries.len());
            catalog
        })
    }

    /// Returns the action map for a target, if the target is known.
    pub fn actions(&self, target: Target) -> Option<&BTreeMap<Action, ActionRules>> {
        self.entries.get(&target)
    }

    /// Returns the rule set for a (target, action) pair, if defined.
    pub fn rules(&self, target: Target, action: Action) -> Option<&ActionRules> {
        self.entries.get(&target).and_then(|actions| actions.get(&action))
    }

    /// Returns the actions defined for a target, sorted by wire name.
    ///
    /// The sort keeps diagnostics that enumerate supported actions
    /// deterministic.
    pub fn supported_actions(&self, target: Target) -> Vec<Action> {
        self.actions(target).map_or_else(Vec::new, |actions| {
            let mut supported: Vec<Action> = actions.keys().copied().collect();
            supported.sort_unstable_by_key(|action| action.name());
            supported
        })
    }

    /// Iterates over every target known to the catalog.
    pub fn targets(&self) -> impl Iterator<Item = Target> + '_ {
        self.entries.keys().copied()
    }
}

fn delay_flags() -> Vec<ParamRule> {
    vec![
        ParamRule::integer("time").required(),
        ParamRule::integer("offset"),
    ]
}

fn exception_flags() -> Vec<ParamRule> {
    vec![
        ParamRule::text("exception").required(),
        ParamRule::text("exception-message"),
    ]
}

/// Effect scoping matchers shared by every matcher set.
fn with_effect(extra: Vec<ParamRule>) -> Vec<ParamRule> {
    let mut matchers = vec![
        ParamRule::integer("effect-count"),
        ParamRule::integer("effect-percent"),
    ];
    matchers.extend(extra);
    matchers
}

fn servlet_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::text("method"),
        ParamRule::text("querystring"),
        ParamRule::text("requestpath"),
    ])
}

fn sql_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::text("sqltype"),
        ParamRule::text("database"),
        ParamRule::integer("port"),
        ParamRule::text("host"),
        ParamRule::text("table"),
    ])
}

fn jedis_matchers() -> Vec<ParamRule> {
    with_effect(vec![ParamRule::text("cmd"), ParamRule::text("key")])
}

fn http_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::boolean("httpclient4"),
        ParamRule::boolean("rest"),
        ParamRule::boolean("httpclient3"),
        ParamRule::text("uri").required(),
    ])
}

fn rocketmq_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::text("producerGroup"),
        ParamRule::text("topic"),
        ParamRule::text("consumerGroup"),
    ])
}

fn tars_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::boolean("servant"),
        ParamRule::text("functionname"),
        ParamRule::boolean("client"),
        ParamRule::text("servantname").required(),
    ])
}

fn dubbo_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::text("appname"),
        ParamRule::boolean("provider"),
        ParamRule::text("service"),
        ParamRule::text("version"),
        ParamRule::boolean("consumer"),
        ParamRule::text("group"),
    ])
}

/// Class/method scoping matchers for targets instrumented by signature.
fn method_matchers() -> Vec<ParamRule> {
    with_effect(vec![
        ParamRule::text("classname").required(),
        ParamRule::boolean("after"),
        ParamRule::text("methodname").required(),
    ])
}

fn script_flags() -> Vec<ParamRule> {
    vec![
        ParamRule::text("script-file"),
        ParamRule::text("script-type"),
        ParamRule::text("script-content"),
        ParamRule::text("script-name"),
    ]
}

fn oom_flags() -> Vec<ParamRule> {
    vec![
        ParamRule::text("area").required(),
        ParamRule::boolean("wild-mode"),
        ParamRule::integer("interval"),
        ParamRule::integer("block"),
    ]
}

/// Delay and exception share flags across targets; only matchers differ.
fn delay_and_exception(matchers: fn() -> Vec<ParamRule>) -> BTreeMap<Action, ActionRules> {
    BTreeMap::from([
        (
            Action::Delay,
            ActionRules::new(delay_flags(), matchers()),
        ),
        (
            Action::Exception,
            ActionRules::new(exception_flags(), matchers()),
        ),
    ])
}

fn builtin_entries() -> BTreeMap<Target, BTreeMap<Action, ActionRules>> {
    let mut entries = BTreeMap::new();

    entries.insert(Target::Servlet, delay_and_exception(servlet_matchers));
    entries.insert(Target::Psql, delay_and_exception(sql_matchers));
    entries.insert(Target::Mysql, delay_and_exception(sql_matchers));
    entries.insert(Target::Jedis, delay_and_exception(jedis_matchers));
    entries.insert(Target::Http, delay_and_exception(http_matchers));
    entries.insert(Target::RocketMq, delay_and_exception(rocketmq_matchers));
    entries.insert(Target::Tars, delay_and_exception(tars_matchers));

    let mut dubbo = delay_and_exception(dubbo_matchers);
    dubbo.insert(
        Action::ThreadPoolFull,
        ActionRules::matchers_only(with_effect(vec![ParamRule::boolean("provider")])),
    );
    entries.insert(Target::Dubbo, dubbo);

    let mut jvm = delay_and_exception(method_matchers);
    jvm.insert(Action::CodeCacheFilling, ActionRules::default());
    jvm.insert(
        Action::CpuFullload,
        ActionRules::flags_only(vec![ParamRule::integer("cpu-count")]),
    );
    jvm.insert(
        Action::ThrowDeclaredException,
        ActionRules::matchers_only(method_matchers()),
    );
    jvm.insert(
        Action::Return,
        ActionRules::new(vec![ParamRule::text("value").required()], method_matchers()),
    );
    jvm.insert(
        Action::Script,
        ActionRules::new(script_flags(), method_matchers()),
    );
    jvm.insert(Action::Oom, ActionRules::flags_only(oom_flags()));
    entries.insert(Target::Jvm, jvm);

    entries.insert(
        Target::Druid,
        BTreeMap::from([(
            Action::ConnectionPoolFull,
            ActionRules::matchers_only(with_effect(Vec::new())),
        )]),
    );

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamType;
    use std::collections::BTreeSet;

    #[test]
    fn builtin_covers_every_target() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.targets().count(), 10);
    }

    #[test]
    fn http_delay_schema() {
        let rules = Catalog::builtin()
            .rules(Target::Http, Action::Delay)
            .unwrap();

        let time = rules.flags.iter().find(|r| r.name == "time").unwrap();
        assert!(time.required);
        assert_eq!(time.param_type, ParamType::Int);

        let uri = rules.matchers.iter().find(|r| r.name == "uri").unwrap();
        assert!(uri.required);
        assert_eq!(uri.param_type, ParamType::Text);
    }

    #[test]
    fn jvm_declares_eight_actions() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.supported_actions(Target::Jvm).len(), 8);
    }

    #[test]
    fn supported_actions_are_sorted_by_wire_name() {
        let actions = Catalog::builtin().supported_actions(Target::Jvm);
        let names: Vec<&str> = actions.iter().map(|a| a.name()).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn code_cache_filling_takes_no_parameters() {
        let rules = Catalog::builtin()
            .rules(Target::Jvm, Action::CodeCacheFilling)
            .unwrap();
        assert!(rules.flags.is_empty());
        assert!(rules.matchers.is_empty());
    }

    #[test]
    fn druid_connection_pool_full_matchers_are_optional() {
        let rules = Catalog::builtin()
            .rules(Target::Druid, Action::ConnectionPoolFull)
            .unwrap();
        assert!(rules.flags.is_empty());
        assert!(rules.matchers.iter().all(|r| !r.required));
    }

    #[test]
    fn druid_does_not_support_delay() {
        assert!(Catalog::builtin().rules(Target::Druid, Action::Delay).is_none());
    }

    #[test]
    fn rule_names_are_unique_within_each_list() {
        let catalog = Catalog::builtin();
        for target in catalog.targets() {
            for (action, rules) in catalog.actions(target).unwrap() {
                for list in [&rules.flags, &rules.matchers] {
                    let names: BTreeSet<&str> =
                        list.iter().map(|r| r.name.as_str()).collect();
                    assert_eq!(
                        names.len(),
                        list.len(),
                        "duplicate rule name under {target}/{action}"
                    );
                }
            }
        }
    }

    #[test]
    fn mysql_and_psql_share_the_sql_matcher_set() {
        let catalog = Catalog::builtin();
        let mysql = catalog.rules(Target::Mysql, Action::Delay).unwrap();
        let psql = catalog.rules(Target::Psql, Action::Delay).unwrap();
        assert_eq!(mysql.matchers, psql.matchers);
    }
}

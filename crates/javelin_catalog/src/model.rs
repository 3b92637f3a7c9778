//! Typed catalog model.
//!
//! Targets and actions are closed enumerations with a fixed string wire
//! form; unrecognized literals are resolution failures, not panics.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A JVM integration point that can be faulted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Target {
    /// Servlet container request handling.
    Servlet,
    /// PostgreSQL JDBC driver.
    Psql,
    /// MySQL JDBC driver.
    Mysql,
    /// Jedis Redis client.
    Jedis,
    /// HTTP clients (httpclient3/4, RestTemplate).
    Http,
    /// RocketMQ messaging client.
    RocketMq,
    /// Tars RPC framework.
    Tars,
    /// Dubbo RPC framework.
    Dubbo,
    /// Arbitrary JVM class/method instrumentation.
    Jvm,
    /// Druid connection pool.
    Druid,
}

impl Target {
    /// Returns the wire name of this target.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Servlet => "SERVLET",
            Self::Psql => "PSQL",
            Self::Mysql => "MYSQL",
            Self::Jedis => "JEDIS",
            Self::Http => "HTTP",
            Self::RocketMq => "ROCKETMQ",
            Self::Tars => "TARS",
            Self::Dubbo => "DUBBO",
            Self::Jvm => "JVM",
            Self::Druid => "DRUID",
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Target {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SERVLET" => Ok(Self::Servlet),
            "PSQL" => Ok(Self::Psql),
            "MYSQL" => Ok(Self::Mysql),
            "JEDIS" => Ok(Self::Jedis),
            "HTTP" => Ok(Self::Http),
            "ROCKETMQ" => Ok(Self::RocketMq),
            "TARS" => Ok(Self::Tars),
            "DUBBO" => Ok(Self::Dubbo),
            "JVM" => Ok(Self::Jvm),
            "DRUID" => Ok(Self::Druid),
            other => Err(Error::UnknownTarget(other.to_string())),
        }
    }
}

/// A kind of fault to inject.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Delay the matched call.
    Delay,
    /// Throw an arbitrary exception.
    Exception,
    /// Return a fixed value instead of calling through.
    Return,
    /// Run a user-supplied script.
    Script,
    /// Saturate CPU cores.
    CpuFullload,
    /// Exhaust a heap memory area.
    Oom,
    /// Fill the JIT code cache.
    CodeCacheFilling,
    /// Exhaust the worker thread pool.
    ThreadPoolFull,
    /// Throw the first declared exception of the matched method.
    ThrowDeclaredException,
    /// Exhaust the connection pool.
    ConnectionPoolFull,
}

impl Action {
    /// Returns the wire name of this action.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Delay => "delay",
            Self::Exception => "exception",
            Self::Return => "return",
            Self::Script => "script",
            Self::CpuFullload => "cpu-fullload",
            Self::Oom => "oom",
            Self::CodeCacheFilling => "code-cache-filling",
            Self::ThreadPoolFull => "thread-pool-full",
            Self::ThrowDeclaredException => "throw-declared-exception",
            Self::ConnectionPoolFull => "connection-pool-full",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delay" => Ok(Self::Delay),
            "exception" => Ok(Self::Exception),
            "return" => Ok(Self::Return),
            "script" => Ok(Self::Script),
            "cpu-fullload" => Ok(Self::CpuFullload),
            "oom" => Ok(Self::Oom),
            "code-cache-filling" => Ok(Self::CodeCacheFilling),
            "thread-pool-full" => Ok(Self::ThreadPoolFull),
            "throw-declared-exception" => Ok(Self::ThrowDeclaredException),
            "connection-pool-full" => Ok(Self::ConnectionPoolFull),
            other => Err(Error::UnknownAction(other.to_string())),
        }
    }
}

/// Primitive type tag for a parameter value.
///
/// Values always travel as strings; the tag selects the parse check
/// applied to a present value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    /// Must parse as a signed integer.
    Int,
    /// Must parse as `true` or `false`.
    Bool,
    /// Free text; the implicit default.
    #[default]
    #[serde(rename = "string")]
    Text,
}

impl std::fmt::Display for ParamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Bool => f.write_str("bool"),
            Self::Text => f.write_str("string"),
        }
    }
}

/// One constraint on one named parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamRule {
    /// Parameter name as submitted on the wire.
    pub name: String,
    /// Parse check applied to a present value.
    pub param_type: ParamType,
    /// Whether the parameter must be present.
    pub required: bool,
}

impl ParamRule {
    /// Creates an optional free-text rule.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Text,
            required: false,
        }
    }

    /// Creates an optional integer rule.
    pub fn integer(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Int,
            required: false,
        }
    }

    /// Creates an optional boolean rule.
    pub fn boolean(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: ParamType::Bool,
            required: false,
        }
    }

    /// Marks the rule as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// The full parameter schema for one (target, action) pair.
///
/// Either list may be empty, meaning no parameters of that kind are
/// expected. That is distinct from the pair being absent from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRules {
    /// Rules for action-configuration parameters.
    pub flags: Vec<ParamRule>,
    /// Rules for scope/selection parameters.
    pub matchers: Vec<ParamRule>,
}

impl ActionRules {
    /// Creates a rule set with both flags and matchers.
    pub const fn new(flags: Vec<ParamRule>, matchers: Vec<ParamRule>) -> Self {
        Self { flags, matchers }
    }

    /// Creates a rule set that declares flags only.
    pub const fn flags_only(flags: Vec<ParamRule>) -> Self {
        Self {
            flags,
            matchers: Vec::new(),
        }
    }

    /// Creates a rule set that declares matchers only.
    pub const fn matchers_only(matchers: Vec<ParamRule>) -> Self {
        Self {
            flags: Vec::new(),
            matchers,
        }
    }
}

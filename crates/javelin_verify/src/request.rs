//! Experiment request wire model.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A chaos-experiment request as submitted by the caller.
///
/// `target` and `action` stay raw strings here: unknown literals are
/// expected user input and surface as violations during validation, not
/// as deserialization errors. All parameter values travel as strings
/// regardless of their declared type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentRequest {
    /// Integration point to fault, e.g. `HTTP`.
    pub target: String,
    /// Fault kind to inject, e.g. `delay`.
    pub action: String,
    /// Action-configuration parameters; absent means empty.
    #[serde(default)]
    pub flags: BTreeMap<String, String>,
    /// Scope/selection parameters; absent means empty.
    #[serde(default)]
    pub matchers: BTreeMap<String, String>,
}

impl ExperimentRequest {
    /// Creates a request with no parameters.
    pub fn new(target: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            action: action.into(),
            flags: BTreeMap::new(),
            matchers: BTreeMap::new(),
        }
    }

    /// Adds a flag parameter.
    #[must_use]
    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    /// Adds a matcher parameter.
    #[must_use]
    pub fn with_matcher(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.matchers.insert(name.into(), value.into());
        self
    }

    /// Loads a request from a YAML manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not well-formed YAML for this
    /// shape. Unknown target/action literals are not errors here.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Loads a request from a JSON manifest.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not well-formed JSON for this
    /// shape.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_manifest_round_trip() {
        let input = r#"
target: HTTP
action: delay
flags:
  time: "100"
matchers:
  uri: /orders
"#;
        let request = ExperimentRequest::from_yaml_str(input).unwrap();
        assert_eq!(request.target, "HTTP");
        assert_eq!(request.action, "delay");
        assert_eq!(request.flags.get("time").unwrap(), "100");
        assert_eq!(request.matchers.get("uri").unwrap(), "/orders");
    }

    #[test]
    fn absent_parameter_maps_default_to_empty() {
        let request = ExperimentRequest::from_yaml_str("target: JVM\naction: oom\n").unwrap();
        assert!(request.flags.is_empty());
        assert!(request.matchers.is_empty());
    }

    #[test]
    fn json_manifest_parses() {
        let input = r#"{"target":"DRUID","action":"connection-pool-full","matchers":{}}"#;
        let request = ExperimentRequest::from_json_str(input).unwrap();
        assert_eq!(request.target, "DRUID");
        assert!(request.matchers.is_empty());
    }

    #[test]
    fn unknown_target_literal_still_deserializes() {
        let request = ExperimentRequest::from_yaml_str("target: FOO\naction: bar\n").unwrap();
        assert_eq!(request.target, "FOO");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(ExperimentRequest::from_yaml_str("target: [unclosed").is_err());
    }

    #[test]
    fn builder_populates_maps() {
        let request = ExperimentRequest::new("HTTP", "delay")
            .with_flag("time", "100")
            .with_matcher("uri", "/orders");
        assert_eq!(request.flags.len(), 1);
        assert_eq!(request.matchers.len(), 1);
    }
}

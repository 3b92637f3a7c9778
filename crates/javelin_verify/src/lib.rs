//! Experiment request validation for Javelin.
//!
//! This crate provides:
//! - The [`ExperimentRequest`] wire model and its YAML/JSON loaders
//! - The [`Validator`] that resolves a request against the rule catalog
//! - Field-addressed [`Violation`] reporting with caller-side
//!   aggregation via [`Verdict`]
//!
//! The engine never fails: every problem with a request is reported as a
//! violation value, and an empty violation list means the request is
//! valid.
//!
//! # Example
//!
//! ```rust,ignore
//! use javelin_verify::{ExperimentRequest, Validator};
//!
//! let request = ExperimentRequest::new("HTTP", "delay")
//!     .with_flag("time", "100")
//!     .with_matcher("uri", "/orders");
//!
//! let violations = Validator::builtin().validate(&request);
//! assert!(violations.is_empty());
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod checker;
pub mod error;
pub mod request;
pub mod result;
pub mod validator;

pub use checker::check_parameters;
pub use error::{Error, Result};
pub use request::ExperimentRequest;
pub use result::{Status, Verdict, Violation, ViolationKind};
pub use validator::Validator;

//! Target, action, and parameter-rule catalog for Javelin.
//!
//! This crate provides:
//! - The closed [`Target`] and [`Action`] enumerations with their wire forms
//! - The [`ParamRule`] constraint model for flags and matchers
//! - The process-wide [`Catalog`] mapping every supported (target, action)
//!   pair to its parameter schema
//!
//! # Example
//!
//! ```rust,ignore
//! use javelin_catalog::{Action, Catalog, Target};
//!
//! let catalog = Catalog::builtin();
//! let rules = catalog.rules(Target::Http, Action::Delay).unwrap();
//! assert!(rules.flags.iter().any(|r| r.name == "time" && r.required));
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod catalog;
pub mod error;
pub mod model;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{Action, ActionRules, ParamRule, ParamType, Target};

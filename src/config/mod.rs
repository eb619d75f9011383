// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for conlint.
//!
//! This module handles loading and parsing the rule configuration from an
//! explicit TOML file and turning it into a validated [`RuleConfig`].

pub mod default;
mod loader;
mod rule;
mod schema;

pub use default::example_config;
pub use loader::{load_config_from, parse_config};
pub use rule::*;
pub use schema::*;

//! # TypeDesc Bench
//!
//! Shared fixtures for the TypeDesc benchmark suite.

pub mod fixtures;

pub use fixtures::{deep_ancestry, deep_type, wide_user_defined};

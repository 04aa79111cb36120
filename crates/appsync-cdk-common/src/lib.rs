//! # appsync-cdk-common
//!
//! Shared types, error definitions, configuration model, and constants
//! used across the appsync-cdk workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the primitives every other crate builds upon.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

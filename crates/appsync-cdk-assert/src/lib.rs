//! # appsync-cdk-assert
//!
//! Testing utilities for stacks.
//!
//! Synthesize a stack with [`Template::from_stack`] and compare it against
//! an expected JSON document. A mismatch carries every differing path so a
//! failing test shows a structural diff instead of two opaque blobs.
//!
//! # Example
//!
//! ```rust
//! use appsync_cdk_assert::{MatchStyle, Template};
//! use appsync_cdk_core::app::App;
//! use serde_json::json;
//!
//! let mut app = App::new();
//! let stack = app.add_stack("MyTestStack").expect("valid name");
//! let template = Template::from_stack(stack).expect("synthesizes");
//! template.assert_matches(&json!({ "Resources": {} }), MatchStyle::Exact);
//! ```

pub mod diff;
pub mod template;

pub use diff::{Difference, DifferenceKind, MatchStyle, Mismatch};
pub use template::Template;

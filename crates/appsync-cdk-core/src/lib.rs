//! # appsync-cdk-core
//!
//! Construct model and synthesis engine.
//!
//! Handles:
//! - **App**: Root container owning the stacks of one deployment.
//! - **Stack**: Named deployable unit holding an ordered list of resources.
//! - **Resource**: Immutable resource declarations and their builder.
//! - **Graph**: `DependsOn` resolution and cycle detection.
//! - **Template**: The synthesized document, rendered as JSON or YAML.
//! - **Assembly**: Writing templates and a manifest to the output directory.
//!
//! # Example
//!
//! ```rust
//! use appsync_cdk_core::app::App;
//!
//! let mut app = App::new();
//! let stack = app.add_stack("MyTestStack").expect("valid stack name");
//! let template = stack.synthesize().expect("empty stack synthesizes");
//! assert_eq!(
//!     template.to_json_value().expect("serializable"),
//!     serde_json::json!({ "Resources": {} })
//! );
//! ```

pub mod app;
pub mod assembly;
pub mod graph;
pub mod resource;
pub mod stack;
pub mod template;

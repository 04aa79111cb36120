//! The root container grouping stacks for joint deployment.

use std::path::Path;

use appsync_cdk_common::config::AppConfig;
use appsync_cdk_common::error::{CdkError, Result};
use appsync_cdk_common::types::StackName;

use crate::assembly::{self, Manifest};
use crate::stack::Stack;

/// Root container owning zero or more uniquely named stacks.
#[derive(Debug, Default)]
pub struct App {
    config: AppConfig,
    stacks: Vec<Stack>,
}

impl App {
    /// Creates an app with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an app with the given configuration.
    #[must_use]
    pub const fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            stacks: Vec::new(),
        }
    }

    /// Returns the app configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Registers a new, empty stack and returns it for further declarations.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is not a valid stack name or is already
    /// registered in this app.
    pub fn add_stack(&mut self, name: &str) -> Result<&mut Stack> {
        let name = StackName::parse(name)?;
        if self.stacks.iter().any(|s| *s.name() == name) {
            return Err(CdkError::DuplicateId {
                kind: "stack",
                id: name.to_string(),
                scope: "app".into(),
            });
        }

        tracing::info!(stack = %name, "registering stack");
        let mut stack = Stack::new(name);
        if let Some(description) = &self.config.description {
            let _ = stack.set_description(description.clone());
        }
        self.stacks.push(stack);
        let idx = self.stacks.len() - 1;
        Ok(&mut self.stacks[idx])
    }

    /// Looks up a stack by name.
    #[must_use]
    pub fn stack(&self, name: &str) -> Option<&Stack> {
        self.stacks.iter().find(|s| s.name().as_str() == name)
    }

    /// Looks up a stack by name for further declarations.
    pub fn stack_mut(&mut self, name: &str) -> Option<&mut Stack> {
        self.stacks.iter_mut().find(|s| s.name().as_str() == name)
    }

    /// Returns all stacks in registration order.
    #[must_use]
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Synthesizes every stack into the configured output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if any stack fails to synthesize or the assembly
    /// cannot be written.
    pub fn synth(&self) -> Result<Manifest> {
        self.synth_to(&self.config.output_dir)
    }

    /// Synthesizes every stack into `out_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if any stack fails to synthesize or the assembly
    /// cannot be written.
    pub fn synth_to(&self, out_dir: &Path) -> Result<Manifest> {
        assembly::write_assembly(out_dir, &self.stacks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_has_no_stacks() {
        let app = App::new();
        assert!(app.stacks().is_empty());
        assert!(app.stack("AppSyncCdkStack").is_none());
    }

    #[test]
    fn two_distinct_stacks_coexist() {
        let mut app = App::new();
        let _ = app.add_stack("First").expect("first");
        let _ = app.add_stack("Second").expect("second");

        let names: Vec<&str> = app.stacks().iter().map(|s| s.name().as_str()).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn duplicate_stack_name_is_rejected() {
        let mut app = App::new();
        let _ = app.add_stack("Dup").expect("first");
        let err = app.add_stack("Dup").expect_err("duplicate must fail");
        assert!(matches!(err, CdkError::DuplicateId { kind: "stack", .. }));
        assert_eq!(app.stacks().len(), 1);
    }

    #[test]
    fn invalid_stack_name_is_rejected() {
        let mut app = App::new();
        assert!(matches!(
            app.add_stack("not_valid"),
            Err(CdkError::Validation { .. })
        ));
        assert!(app.stacks().is_empty());
    }

    #[test]
    fn config_description_applies_to_new_stacks() {
        let config = AppConfig {
            description: Some("managed by appsync-cdk".into()),
            ..AppConfig::default()
        };
        let mut app = App::with_config(config);
        let stack = app.add_stack("Described").expect("stack");
        assert_eq!(stack.description(), Some("managed by appsync-cdk"));
    }

    #[test]
    fn stack_mut_allows_later_declarations() {
        let mut app = App::new();
        let _ = app.add_stack("Later").expect("stack");
        let stack = app.stack_mut("Later").expect("registered");
        let _ = stack.set_description("added afterwards");
        assert_eq!(
            app.stack("Later").and_then(Stack::description),
            Some("added afterwards")
        );
    }
}

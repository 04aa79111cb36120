//! # appsync-cdk-stack
//!
//! Definition of the `AppSyncCdkStack` registered by the entry point.
//! The stack currently declares no resources.

use appsync_cdk_common::constants::APP_STACK_NAME;
use appsync_cdk_common::error::Result;
use appsync_cdk_core::app::App;
use appsync_cdk_core::stack::Stack;

/// The AppSync stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppSyncCdkStack;

impl AppSyncCdkStack {
    /// Name the entry point deploys the stack under.
    pub const DEFAULT_ID: &'static str = APP_STACK_NAME;

    /// Registers the stack in `app` under `id` and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a valid stack name or is already
    /// registered in `app`.
    pub fn build<'a>(app: &'a mut App, id: &str) -> Result<&'a mut Stack> {
        let stack = app.add_stack(id)?;
        tracing::debug!(stack = %stack.name(), "defined AppSyncCdkStack");
        Ok(stack)
    }
}

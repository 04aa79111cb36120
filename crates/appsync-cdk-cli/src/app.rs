//! App definition: one app holding the `AppSyncCdkStack`.

use appsync_cdk_common::config::AppConfig;
use appsync_cdk_core::app::App;
use appsync_cdk_stack::AppSyncCdkStack;

/// Builds the app deployed by this binary.
///
/// # Errors
///
/// Returns an error if the stack cannot be constructed.
pub fn build_app(config: AppConfig) -> anyhow::Result<App> {
    let mut app = App::with_config(config);
    let _ = AppSyncCdkStack::build(&mut app, AppSyncCdkStack::DEFAULT_ID)?;
    Ok(app)
}

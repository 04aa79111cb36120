//! `appsync-cdk ls`: list the stacks in the app.

use appsync_cdk_core::app::App;

/// Executes the `ls` command.
///
/// # Errors
///
/// Never fails; returns `Result` for dispatch uniformity.
#[allow(clippy::unnecessary_wraps)]
pub fn execute(app: &App) -> anyhow::Result<()> {
    print!("{}", render(app));
    Ok(())
}

/// Renders stack names, one per line, in registration order.
#[must_use]
pub fn render(app: &App) -> String {
    app.stacks()
        .iter()
        .map(|s| format!("{}\n", s.name()))
        .collect()
}

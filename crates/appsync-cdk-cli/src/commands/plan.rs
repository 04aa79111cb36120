//! `appsync-cdk plan`: display each stack's resources before deploying.

use std::fmt::Write as _;

use appsync_cdk_core::app::App;

/// Executes the `plan` command.
///
/// Resolves each stack's dependency graph and prints its resources in
/// creation order, dependencies first.
///
/// # Errors
///
/// Returns an error if a stack has dangling or cyclic dependencies.
pub fn execute(app: &App) -> anyhow::Result<()> {
    print!("{}", render(app)?);
    Ok(())
}

/// Renders the deployment plan.
///
/// # Errors
///
/// Returns an error if a stack has dangling or cyclic dependencies.
pub fn render(app: &App) -> anyhow::Result<String> {
    let mut out = String::new();
    let rule = "\u{2550}".repeat(35);

    for stack in app.stacks() {
        let order = stack.dependency_order()?;
        writeln!(out, "Stack: {}", stack.name())?;
        writeln!(out, "{rule}")?;

        for id in &order {
            if let Some(resource) = stack.resource(id.as_str()) {
                writeln!(out, "  + {id} ({})", resource.resource_type())?;
                for dep in resource.depends_on() {
                    writeln!(out, "      after: {dep}")?;
                }
            }
        }
        for (id, _) in stack.outputs() {
            writeln!(out, "  > output {id}")?;
        }

        writeln!(out)?;
        writeln!(out, "  {} resource(s) will be deployed.", order.len())?;
        writeln!(out)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use appsync_cdk_core::resource::Resource;

    use super::*;

    #[test]
    fn empty_stack_plans_zero_resources() {
        let mut app = App::new();
        let _ = app.add_stack("AppSyncCdkStack").expect("stack");
        let plan = render(&app).expect("plan");
        assert!(plan.starts_with("Stack: AppSyncCdkStack\n"));
        assert!(plan.contains("0 resource(s) will be deployed."));
    }

    #[test]
    fn dependencies_are_listed_first() {
        let mut app = App::new();
        let stack = app.add_stack("Api").expect("stack");
        let _ = stack
            .add_resource(
                Resource::builder("Resolver", "AWS::AppSync::Resolver")
                    .depends_on("Schema")
                    .build()
                    .expect("resource"),
            )
            .expect("add")
            .add_resource(
                Resource::builder("Schema", "AWS::AppSync::GraphQLSchema")
                    .build()
                    .expect("resource"),
            )
            .expect("add");

        let plan = render(&app).expect("plan");
        let schema = plan.find("+ Schema").expect("schema listed");
        let resolver = plan.find("+ Resolver").expect("resolver listed");
        assert!(schema < resolver, "got:\n{plan}");
        assert!(plan.contains("after: Schema"));
        assert!(plan.contains("2 resource(s) will be deployed."));
    }

    #[test]
    fn cyclic_stack_fails_to_plan() {
        let mut app = App::new();
        let stack = app.add_stack("Cyclic").expect("stack");
        let _ = stack
            .add_resource(
                Resource::builder("A", "AWS::SNS::Topic")
                    .depends_on("B")
                    .build()
                    .expect("resource"),
            )
            .expect("add")
            .add_resource(
                Resource::builder("B", "AWS::SNS::Topic")
                    .depends_on("A")
                    .build()
                    .expect("resource"),
            )
            .expect("add");

        let err = render(&app).expect_err("cycle must fail");
        assert!(err.to_string().contains("cyclic"), "got: {err}");
    }
}

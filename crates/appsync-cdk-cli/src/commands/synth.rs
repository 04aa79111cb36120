//! `appsync-cdk synth`: write the cloud assembly and optionally print a template.

use std::fmt::Write as _;
use std::path::Path;

use appsync_cdk_common::error::CdkError;
use appsync_cdk_core::app::App;
use appsync_cdk_core::assembly::Manifest;
use clap::{Args, ValueEnum};

use crate::output::format_size;

/// Rendering used when printing a template to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    #[default]
    Yaml,
}

/// Arguments for the `synth` command.
#[derive(Args, Debug, Default)]
pub struct SynthArgs {
    /// Stack whose template is printed to stdout.
    pub stack: Option<String>,

    /// Output format for the printed template.
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
}

/// Executes the `synth` command.
///
/// Writes every stack's template and the manifest into the output
/// directory. When a stack is named, its template is printed as well.
///
/// # Errors
///
/// Returns an error if the named stack does not exist, synthesis fails, or
/// the assembly cannot be written.
pub fn execute(app: &App, args: &SynthArgs) -> anyhow::Result<()> {
    let printed = args
        .stack
        .as_deref()
        .map(|name| render_stack(app, name, args.format))
        .transpose()?;

    let out_dir = &app.config().output_dir;
    let manifest = app.synth()?;
    tracing::info!(path = %out_dir.display(), stacks = manifest.artifacts.len(), "synthesis complete");

    match printed {
        Some(template) => print!("{template}"),
        None => eprint!("{}", summarize(out_dir, &manifest)?),
    }
    Ok(())
}

/// Summarizes a written assembly: one line per template with its size.
///
/// # Errors
///
/// Returns an error if a template listed in the manifest cannot be read.
pub fn summarize(out_dir: &Path, manifest: &Manifest) -> anyhow::Result<String> {
    let mut out = String::new();
    for artifact in &manifest.artifacts {
        let path = out_dir.join(&artifact.template_file);
        let size = std::fs::metadata(&path)
            .map_err(|e| CdkError::io(&path, e))?
            .len();
        writeln!(
            out,
            "  {} ({} resource(s), {})",
            artifact.template_file,
            artifact.resource_count,
            format_size(size)
        )?;
    }
    writeln!(out, "Successfully synthesized to {}", out_dir.display())?;
    Ok(out)
}

/// Renders one stack's template in the requested format.
///
/// # Errors
///
/// Returns an error if the stack does not exist or fails to synthesize.
pub fn render_stack(app: &App, name: &str, format: Format) -> anyhow::Result<String> {
    let stack = app.stack(name).ok_or_else(|| CdkError::NotFound {
        kind: "stack",
        id: name.to_string(),
    })?;
    let template = stack.synthesize()?;
    let rendered = match format {
        Format::Json => format!("{}\n", template.to_json_pretty()?),
        Format::Yaml => template.to_yaml()?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use appsync_cdk_common::config::AppConfig;

    use super::*;
    use crate::app::build_app;

    #[test]
    fn renders_empty_stack_as_json() {
        let app = build_app(AppConfig::default()).expect("app");
        let rendered = render_stack(&app, "AppSyncCdkStack", Format::Json).expect("render");
        let value: serde_json::Value = serde_json::from_str(&rendered).expect("json");
        assert_eq!(value, serde_json::json!({ "Resources": {} }));
    }

    #[test]
    fn renders_empty_stack_as_yaml() {
        let app = build_app(AppConfig::default()).expect("app");
        let rendered = render_stack(&app, "AppSyncCdkStack", Format::Yaml).expect("render");
        assert_eq!(rendered.trim(), "Resources: {}");
    }

    #[test]
    fn unknown_stack_is_an_error() {
        let app = build_app(AppConfig::default()).expect("app");
        let err = render_stack(&app, "Nope", Format::Json).expect_err("must fail");
        assert!(err.to_string().contains("stack not found: Nope"), "got: {err}");
    }

    #[test]
    fn execute_writes_assembly_to_configured_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("cdk.out");
        let config = AppConfig {
            output_dir: out.clone(),
            ..AppConfig::default()
        };
        let app = build_app(config).expect("app");

        execute(&app, &SynthArgs::default()).expect("synth");
        assert!(out.join("AppSyncCdkStack.template.json").exists());
        assert!(out.join("manifest.json").exists());
    }

    #[test]
    fn summary_lists_each_template_with_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            output_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let app = build_app(config).expect("app");
        let manifest = app.synth().expect("synth");

        let summary = summarize(dir.path(), &manifest).expect("summary");
        // `{ "Resources": {} }` pretty-printed plus a trailing newline.
        assert!(
            summary.contains("AppSyncCdkStack.template.json (0 resource(s), 22 B)"),
            "got: {summary}"
        );
        assert!(summary.ends_with(&format!("{}\n", dir.path().display())));
    }

    #[test]
    fn summary_reports_missing_template() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig {
            output_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        let app = build_app(config).expect("app");
        let manifest = app.synth().expect("synth");
        std::fs::remove_file(dir.path().join("AppSyncCdkStack.template.json")).expect("remove");

        let err = summarize(dir.path(), &manifest).expect_err("missing template must fail");
        assert!(err.to_string().contains("AppSyncCdkStack.template.json"), "got: {err}");
    }

    #[test]
    fn unknown_stack_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("cdk.out");
        let config = AppConfig {
            output_dir: out.clone(),
            ..AppConfig::default()
        };
        let app = build_app(config).expect("app");

        let args = SynthArgs {
            stack: Some("Missing".into()),
            format: Format::Json,
        };
        assert!(execute(&app, &args).is_err());
        assert!(!out.exists());
    }
}

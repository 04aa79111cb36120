//! Cloud assembly output.
//!
//! Writes one `<StackName>.template.json` per stack plus a `manifest.json`
//! describing them, so deployment tooling can pick the templates up.

use std::collections::HashSet;
use std::path::Path;

use appsync_cdk_common::constants::{ASSEMBLY_VERSION, MANIFEST_FILE, TEMPLATE_SUFFIX};
use appsync_cdk_common::error::{CdkError, Result};
use appsync_cdk_common::types::{Sha256Hash, StackName};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::stack::Stack;

/// Index of a synthesized cloud assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Assembly format version.
    pub version: String,
    /// One entry per stack, in registration order.
    pub artifacts: Vec<StackArtifact>,
}

/// Manifest entry for one synthesized stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackArtifact {
    /// Name of the stack.
    pub stack_name: StackName,
    /// Template file name, relative to the assembly directory.
    pub template_file: String,
    /// Digest of the template file contents.
    pub template_hash: Sha256Hash,
    /// Number of resources in the template.
    pub resource_count: usize,
}

impl Manifest {
    /// Finds the artifact for a stack.
    #[must_use]
    pub fn artifact(&self, stack_name: &str) -> Option<&StackArtifact> {
        self.artifacts
            .iter()
            .find(|a| a.stack_name.as_str() == stack_name)
    }
}

/// Returns the template file name for a stack.
#[must_use]
pub fn template_file_name(stack_name: &StackName) -> String {
    format!("{stack_name}{TEMPLATE_SUFFIX}")
}

/// Synthesizes `stacks` and writes the assembly into `out_dir`.
///
/// Every stack is synthesized before anything is written, so a failing
/// stack leaves the directory untouched.
///
/// # Errors
///
/// Returns an error if a stack fails to synthesize or a file cannot be
/// written.
pub fn write_assembly(out_dir: &Path, stacks: &[Stack]) -> Result<Manifest> {
    let rendered = stacks
        .iter()
        .map(|stack| -> Result<_> {
            let template = stack.synthesize()?;
            let body = format!("{}\n", template.to_json_pretty()?);
            Ok((stack.name(), template.resource_count(), body))
        })
        .collect::<Result<Vec<_>>>()?;

    std::fs::create_dir_all(out_dir).map_err(|e| CdkError::io(out_dir, e))?;
    tracing::info!(path = %out_dir.display(), stacks = rendered.len(), "writing cloud assembly");

    let keep: HashSet<String> = rendered
        .iter()
        .map(|(name, _, _)| template_file_name(name))
        .collect();
    remove_stale_templates(out_dir, &keep)?;

    let mut artifacts = Vec::with_capacity(rendered.len());
    for (name, resource_count, body) in rendered {
        let file_name = template_file_name(name);
        let path = out_dir.join(&file_name);
        std::fs::write(&path, &body).map_err(|e| CdkError::io(&path, e))?;
        tracing::debug!(path = %path.display(), bytes = body.len(), "wrote template");

        artifacts.push(StackArtifact {
            stack_name: name.clone(),
            template_file: file_name,
            template_hash: hash_bytes(body.as_bytes())?,
            resource_count,
        });
    }

    let manifest = Manifest {
        version: ASSEMBLY_VERSION.to_string(),
        artifacts,
    };
    let manifest_path = out_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(&manifest)?;
    std::fs::write(&manifest_path, json).map_err(|e| CdkError::io(&manifest_path, e))?;

    Ok(manifest)
}

/// Reads the manifest of an existing assembly.
///
/// # Errors
///
/// Returns an error if the manifest is missing or malformed.
pub fn read_manifest(out_dir: &Path) -> Result<Manifest> {
    let path = out_dir.join(MANIFEST_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| CdkError::io(&path, e))?;
    Ok(serde_json::from_str(&content)?)
}

/// Deletes templates left in `out_dir` by stacks that are no longer synthesized.
fn remove_stale_templates(out_dir: &Path, keep: &HashSet<String>) -> Result<()> {
    let entries = std::fs::read_dir(out_dir).map_err(|e| CdkError::io(out_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| CdkError::io(out_dir, e))?;
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.ends_with(TEMPLATE_SUFFIX) || keep.contains(&file_name) {
            continue;
        }
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        std::fs::remove_file(&path).map_err(|e| CdkError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "removed stale template");
    }
    Ok(())
}

fn hash_bytes(bytes: &[u8]) -> Result<Sha256Hash> {
    Sha256Hash::from_hex(format!("{:x}", Sha256::digest(bytes)))
}

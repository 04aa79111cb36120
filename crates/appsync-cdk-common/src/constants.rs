//! Workspace-wide constants and default paths.

/// Default cloud assembly output directory.
pub const DEFAULT_OUTPUT_DIR: &str = "cdk.out";

/// Environment variable overriding the output directory.
pub const OUTDIR_ENV: &str = "CDK_OUTDIR";

/// Default project configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "cdk.json";

/// Name of the manifest written into every cloud assembly.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Version tag stamped into assembly manifests.
pub const ASSEMBLY_VERSION: &str = "1.0.0";

/// Suffix appended to a stack name to form its template file name.
pub const TEMPLATE_SUFFIX: &str = ".template.json";

/// Maximum length of a stack name.
pub const MAX_STACK_NAME_LENGTH: usize = 128;

/// Maximum length of a resource or output logical id.
pub const MAX_LOGICAL_ID_LENGTH: usize = 255;

/// Top-level template key holding resource declarations.
pub const RESOURCES_KEY: &str = "Resources";

/// Name of the stack registered by the entry point.
pub const APP_STACK_NAME: &str = "AppSyncCdkStack";

/// SHA-256 digest length in hex characters.
pub const SHA256_HEX_LENGTH: usize = 64;

use std::path::PathBuf;

pub const DEFAULT_RESOURCE_KIND: &str = "cloudflare_dns_record";
pub const DEFAULT_IMPORT_COMMAND: &str = "terraform import";
pub const DEFAULT_OUTPUT_DEFINITION: &str = "cf_canonized.tf";
pub const DEFAULT_OUTPUT_IMPORT: &str = "import_canonized.sh";

/// Controls what is matched and where the outputs land.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CanonizerConfig {
    /// Resource kind whose declarations are canonicalized.
    pub resource_kind: String,
    /// Command prefix of import lines, matched literally at the start of a line.
    pub import_command: String,
    /// Rewritten definition file.
    pub output_definition: PathBuf,
    /// Rewritten import script.
    pub output_import: PathBuf,
    /// Optional TOON mapping report; nothing is written when unset.
    pub report: Option<PathBuf>,
}

impl Default for CanonizerConfig {
    fn default() -> Self {
        Self {
            resource_kind: DEFAULT_RESOURCE_KIND.to_string(),
            import_command: DEFAULT_IMPORT_COMMAND.to_string(),
            output_definition: PathBuf::from(DEFAULT_OUTPUT_DEFINITION),
            output_import: PathBuf::from(DEFAULT_OUTPUT_IMPORT),
            report: None,
        }
    }
}

impl CanonizerConfig {
    /// Same matching rules, outputs placed under `dir` with their default names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            output_definition: dir.join(DEFAULT_OUTPUT_DEFINITION),
            output_import: dir.join(DEFAULT_OUTPUT_IMPORT),
            ..Self::default()
        }
    }
}

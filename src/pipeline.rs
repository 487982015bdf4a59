// end-to-end run: extract -> key -> name -> {definitions, imports}
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::CanonizerConfig;
use crate::core::error::CanonError;
use crate::core::extract::BlockExtractor;
use crate::core::namer::{assign_names, CanonicalSet};
use crate::core::rewrite::{render_definitions, ImportRewrite, ReferenceRewriter};
use crate::mapping::report::MappingReport;

/// Both rewritten artifacts plus what produced them.
#[derive(Debug, Clone)]
pub struct Canonized {
    pub definitions: String,
    pub imports: ImportRewrite,
    pub set: CanonicalSet,
}

impl Canonized {
    pub fn report(&self, resource_kind: &str) -> MappingReport {
        MappingReport::build(resource_kind, &self.set, &self.imports)
    }
}

/// Pure transformation over the two input texts.
pub fn canonize(definitions: &str, imports: &str, config: &CanonizerConfig) -> Result<Canonized, CanonError> {
    let extractor = BlockExtractor::new(&config.resource_kind)?;
    let rewriter = ReferenceRewriter::new(&config.import_command, &config.resource_kind)?;

    let set = assign_names(extractor.blocks(definitions));
    let definitions = render_definitions(extractor.resource_kind(), &set);
    let imports = rewriter.rewrite(imports, &set.mapping);

    Ok(Canonized { definitions, imports, set })
}

/// Paths written by [`run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub definition: PathBuf,
    pub import: PathBuf,
    pub report: Option<PathBuf>,
}

/// Read both inputs fully, transform, then write every output.
pub fn run(definition_path: &Path, import_path: &Path, config: &CanonizerConfig) -> Result<Written, CanonError> {
    let definitions = read(definition_path)?;
    let imports = read(import_path)?;

    let out = canonize(&definitions, &imports, config)?;
    let summary = out.report(&config.resource_kind);
    if out.set.mapping.is_empty() {
        debug!(path = %definition_path.display(), "no keyable blocks found");
    }
    info!(
        blocks = out.set.block_count(),
        mapped = out.set.mapping.len(),
        renamed = summary.changed(),
        dropped = out.set.dropped.len(),
        rewritten_imports = out.imports.rewritten,
        "canonicalized"
    );

    // encode before touching the filesystem so a bad report leaves no partial output
    let report = match &config.report {
        Some(path) => Some((path.clone(), summary.to_toon()?)),
        None => None,
    };

    write(&config.output_definition, &out.definitions)?;
    write(&config.output_import, &out.imports.text)?;
    if let Some((path, text)) = &report {
        write(path, text)?;
    }

    Ok(Written {
        definition: config.output_definition.clone(),
        import: config.output_import.clone(),
        report: report.map(|(path, _)| path),
    })
}

fn read(path: &Path) -> Result<String, CanonError> {
    fs::read_to_string(path).map_err(|source| CanonError::Read { path: path.to_path_buf(), source })
}

fn write(path: &Path, contents: &str) -> Result<(), CanonError> {
    fs::write(path, contents).map_err(|source| CanonError::Write { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

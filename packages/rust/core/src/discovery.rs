//! Source discovery: find the generator's markdown files and read them once.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use clientdocs_shared::{ClientDocsError, GeneratorConfig, Result, SourceDocument};

/// Extension of the files the client generator emits.
const MARKDOWN_EXTENSION: &str = "md";

/// List the markdown files directly inside `config.source_dir`, sorted by name.
///
/// Fails with [`ClientDocsError::SourceMissing`] when the directory is absent
/// and [`ClientDocsError::NoMarkdownFiles`] when it holds no `*.md` files.
#[instrument(skip_all, fields(source = %config.source_dir.display()))]
pub fn discover(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let dir = &config.source_dir;

    if !dir.is_dir() {
        return Err(ClientDocsError::SourceMissing {
            path: dir.clone(),
            prerequisite: config.generate_command.clone(),
        });
    }

    let mut files = markdown_files(dir)?;
    if files.is_empty() {
        return Err(ClientDocsError::NoMarkdownFiles {
            path: dir.clone(),
            prerequisite: config.generate_command.clone(),
        });
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    info!("Found {} markdown files to process", files.len());

    Ok(files)
}

fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ClientDocsError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ClientDocsError::io(dir, e))?.path();
        let is_markdown = path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION);
        if is_markdown && path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

/// Read each discovered file.
///
/// A file that cannot be read is kept with `content: None` after a warning;
/// callers decide how to degrade.
pub fn load_documents(paths: &[PathBuf]) -> Vec<SourceDocument> {
    paths
        .iter()
        .map(|path| {
            let content = match std::fs::read_to_string(path) {
                Ok(text) => {
                    debug!(path = %path.display(), len = text.len(), "read source document");
                    Some(text)
                }
                Err(e) => {
                    warn!("Could not read {}: {e}", path.display());
                    None
                }
            };
            SourceDocument {
                path: path.clone(),
                content,
            }
        })
        .collect()
}

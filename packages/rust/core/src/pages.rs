//! Per-document Jekyll page rendering.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use clientdocs_markdown::{FrontMatter, page_file_name, repair_links};
use clientdocs_shared::{Category, ClientDocsError, GeneratorConfig, Result};

use crate::catalog::{CatalogEntry, CategoryIndex};
use crate::pipeline::ProgressReporter;

/// Footer appended to every rendered page.
const PAGE_FOOTER: &str =
    "*This documentation was automatically generated from the TypeScript API client.*";

/// A page ready to be written into the output directory.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Normalized destination filename (e.g. `address-api.md`).
    pub file_name: String,
    /// Front matter, repaired body and footer.
    pub markdown: String,
}

/// Outcome of writing every page in the index.
#[derive(Debug, Clone, Default)]
pub struct PageReport {
    /// Destination filenames, in write order.
    pub written: Vec<String>,
    /// Source files skipped because their content could not be read.
    pub skipped: Vec<PathBuf>,
    /// Destination filenames written more than once this run; the last write wins.
    pub collisions: Vec<String>,
}

/// Render one document as a Jekyll page.
pub fn render_page(
    entry: &CatalogEntry,
    category: Category,
    body: &str,
    config: &GeneratorConfig,
) -> RenderedPage {
    let front_matter = FrontMatter::new()
        .raw("layout", "default")
        .quoted("title", &entry.title)
        .raw("parent", &config.site_title)
        .raw("nav_order", 1)
        .quoted("category", category.label())
        .render();

    let body = repair_links(body, &config.index_url());

    RenderedPage {
        file_name: page_file_name(&entry.document.stem()),
        markdown: format!("{front_matter}\n{body}\n\n---\n\n{PAGE_FOOTER}\n"),
    }
}

/// Render and write a page for every entry, in section order.
///
/// Entries without content are skipped with a warning. An entry whose filename
/// was already written this run overwrites it, with a warning. Directory creation and
/// write failures abort the run; pages already written stay on disk.
#[instrument(skip_all, fields(output = %config.output_dir.display(), entries = index.len()))]
pub fn write_pages(
    index: &CategoryIndex,
    config: &GeneratorConfig,
    progress: &dyn ProgressReporter,
) -> Result<PageReport> {
    info!("Generating Jekyll pages for client documentation...");

    let out_dir = &config.output_dir;
    std::fs::create_dir_all(out_dir).map_err(|e| ClientDocsError::io(out_dir, e))?;

    let total = index.len();
    let mut report = PageReport::default();

    for (category, entries) in index.iter() {
        for entry in entries {
            let Some(body) = entry.document.content.as_deref() else {
                warn!(
                    "Could not read {}: skipping page",
                    entry.document.path.display()
                );
                report.skipped.push(entry.document.path.clone());
                continue;
            };

            let page = render_page(entry, category, body, config);
            if report.written.contains(&page.file_name) {
                warn!(
                    "{} overwrites an earlier page with the same name: {}",
                    entry.document.path.display(),
                    page.file_name
                );
                report.collisions.push(page.file_name.clone());
            }
            write_page(out_dir, &page)?;

            info!("Generated Jekyll page: {}", page.file_name);
            let done = report.written.len() + report.skipped.len() + 1;
            progress.page_written(&page.file_name, done, total);
            report.written.push(page.file_name);
        }
    }

    Ok(report)
}

fn write_page(out_dir: &Path, page: &RenderedPage) -> Result<()> {
    let path = out_dir.join(&page.file_name);
    std::fs::write(&path, &page.markdown).map_err(|e| ClientDocsError::io(&path, e))
}

//! End-to-end `generate` pipeline: discover → classify → pages → index.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::Local;
use tracing::{info, instrument};

use clientdocs_shared::{Category, GeneratorConfig, Result};

use crate::catalog::CategoryIndex;
use crate::discovery;
use crate::index;
use crate::pages;

/// Result of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    /// Directory the pages and index were written to.
    pub output_dir: PathBuf,
    /// Path of the written `index.md`.
    pub index_path: PathBuf,
    /// Number of pages written (excluding the index).
    pub page_count: usize,
    /// Pages written per non-empty category, in section order.
    pub categories: Vec<(Category, usize)>,
    /// Source files left out because they could not be read.
    pub skipped: Vec<PathBuf>,
    /// Page filenames that more than one source normalized to.
    pub collisions: Vec<String>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each page is written.
    fn page_written(&self, file_name: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &GenerateResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn page_written(&self, _file_name: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &GenerateResult) {}
}

/// Run the full regeneration pass.
///
/// 1. Discover `*.md` files in the source directory (fatal if none)
/// 2. Read, title and classify each document
/// 3. Write one page per readable document
/// 4. Write `index.md` covering the pages that were written
#[instrument(skip_all, fields(source = %config.source_dir.display()))]
pub fn generate(
    config: &GeneratorConfig,
    progress: &dyn ProgressReporter,
) -> Result<GenerateResult> {
    let start = Instant::now();
    info!("Starting client documentation generator...");

    // --- Phase 1: Discovery ---
    progress.phase("Discovering client documentation");
    let paths = discovery::discover(config)?;
    info!("Processing {} markdown files...", paths.len());

    // --- Phase 2: Classification ---
    progress.phase("Classifying documents");
    let documents = discovery::load_documents(&paths);
    let mut catalog = CategoryIndex::build(documents);

    // --- Phase 3: Pages ---
    progress.phase("Writing Jekyll pages");
    let report = pages::write_pages(&catalog, config, progress)?;

    // Unwritten pages must not be linked from the index
    if !report.skipped.is_empty() {
        catalog.retain(|entry| !report.skipped.contains(&entry.document.path));
    }

    // --- Phase 4: Index ---
    progress.phase("Writing index");
    let index_path = index::write_index(&catalog, config, &Local::now())?;

    let result = GenerateResult {
        output_dir: config.output_dir.clone(),
        index_path,
        page_count: report.written.len(),
        categories: catalog.counts(),
        skipped: report.skipped,
        collisions: report.collisions,
        elapsed: start.elapsed(),
    };

    info!("Client documentation generation completed!");
    for (category, count) in &result.categories {
        info!("{category}: {count} pages");
    }
    info!(
        "Generated {} Jekyll pages in: {}",
        result.page_count,
        result.output_dir.display()
    );
    info!("Files are ready for Jekyll to process");

    progress.done(&result);
    Ok(result)
}

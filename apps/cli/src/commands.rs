//! CLI definition, tracing setup, and the generate command.

use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use clientdocs_core::pipeline::{GenerateResult, ProgressReporter};
use clientdocs_shared::GeneratorConfig;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;

/// Fixed filter; the tool reads no environment.
const LOG_FILTER: &str = "info";

/// Timestamp layout for log lines, e.g. `2025-03-14 09:26:53,412`.
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// clientdocs: regenerate the Jekyll API-client subsite from generated docs.
///
/// Reads `api-client/docs/*.md` and writes `docs/api-client/`. Takes no options.
#[derive(Parser)]
#[command(
    name = "clientdocs",
    version,
    about = "Regenerate the Jekyll API-client docs subsite from generated client markdown.",
    long_about = None,
)]
pub(crate) struct Cli {}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing: every line goes to stdout and is appended to the log file.
///
/// Stdout lines are written with `progress`'s spinner suspended. The returned
/// guard flushes the file writer when dropped, so it must be held until the
/// process is done logging.
pub(crate) fn init_tracing(
    config: &GeneratorConfig,
    progress: &CliProgress,
) -> Result<WorkerGuard> {
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::fmt::time::ChronoLocal;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::{EnvFilter, fmt};

    let log_file = &config.log_file;
    let file_name = log_file
        .file_name()
        .ok_or_else(|| eyre!("log file path has no file name: {}", log_file.display()))?;
    let log_dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    // NEVER rotation opens the single file in append mode
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(log_dir)
        .map_err(|e| eyre!("cannot open log file {}: {e}", log_file.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let timer = ChronoLocal::new(LOG_TIME_FORMAT.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(
            fmt::layer()
                .with_target(false)
                .with_timer(timer.clone())
                .with_writer(SpinnerAwareStdout(progress.spinner.clone())),
        )
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        )
        .init();

    Ok(guard)
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Run a full regeneration pass.
///
/// A missing or empty source directory is reported as two error lines and a
/// failing exit code; any other error propagates as an eyre report.
pub(crate) fn run(config: &GeneratorConfig, reporter: &CliProgress) -> Result<ExitCode> {
    match clientdocs_core::pipeline::generate(config, reporter) {
        Ok(result) => {
            info!(
                elapsed_ms = result.elapsed.as_millis() as u64,
                skipped = result.skipped.len(),
                collisions = result.collisions.len(),
                "done"
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            reporter.clear();
            match err.prerequisite() {
                Some(step) => {
                    error!("{err}");
                    error!("Please generate the API client first using: {step}");
                    Ok(ExitCode::FAILURE)
                }
                None => Err(err.into()),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
pub(crate) struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    pub(crate) fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
        spinner.set_style(style);
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }

    fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

/// Stdout log writer that hides the spinner while a line is printed.
#[derive(Clone)]
struct SpinnerAwareStdout(ProgressBar);

impl<'a> MakeWriter<'a> for SpinnerAwareStdout {
    type Writer = SpinnerAwareStdout;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

impl Write for SpinnerAwareStdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stdout().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.suspend(|| io::stdout().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn page_written(&self, file_name: &str, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Writing [{current}/{total}] {file_name}"));
    }

    fn done(&self, _result: &GenerateResult) {
        self.clear();
    }
}

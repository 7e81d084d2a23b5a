//! Batch conversion over an ordered list of files.
//!
//! Each file is converted independently. A missing input is skipped and a
//! failing conversion is recorded; neither stops the remaining jobs.

use std::path::{Path, PathBuf};

use super::{convert_file, default_output_path, ConvertOptions, ConvertReport, OutputFormat};
use crate::error::Error;
use crate::render::ConversionStats;

/// One input/output pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchJob {
    /// Source markdown file
    pub input: PathBuf,
    /// Destination file
    pub output: PathBuf,
}

impl BatchJob {
    /// Create a job.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Create a job writing `<stem>.<ext>` into `out_dir`.
    pub fn into_dir(input: impl Into<PathBuf>, out_dir: &Path, format: OutputFormat) -> Self {
        let input = input.into();
        let output = default_output_path(&input, out_dir, format);
        Self { input, output }
    }
}

/// What happened to one job.
#[derive(Debug)]
pub enum BatchOutcome {
    /// The file was converted and written
    Converted(ConvertReport),

    /// The input file does not exist; nothing was written
    Missing(PathBuf),

    /// Reading, building or writing failed
    Failed {
        /// Source path
        input: PathBuf,
        /// The error that stopped this file
        error: Error,
    },
}

impl BatchOutcome {
    /// Source path of the job.
    pub fn input(&self) -> &Path {
        match self {
            BatchOutcome::Converted(report) => &report.input,
            BatchOutcome::Missing(input) => input,
            BatchOutcome::Failed { input, .. } => input,
        }
    }

    /// Check if the job produced an output file.
    pub fn is_converted(&self) -> bool {
        matches!(self, BatchOutcome::Converted(_))
    }
}

/// Aggregated outcomes of a batch run, in job order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One outcome per job
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Successfully converted files.
    pub fn converted(&self) -> impl Iterator<Item = &ConvertReport> {
        self.outcomes.iter().filter_map(|o| match o {
            BatchOutcome::Converted(report) => Some(report),
            _ => None,
        })
    }

    /// Inputs that did not exist.
    pub fn missing(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            BatchOutcome::Missing(input) => Some(input.as_path()),
            _ => None,
        })
    }

    /// Inputs whose conversion failed, with the error.
    pub fn failed(&self) -> impl Iterator<Item = (&Path, &Error)> {
        self.outcomes.iter().filter_map(|o| match o {
            BatchOutcome::Failed { input, error } => Some((input.as_path(), error)),
            _ => None,
        })
    }

    /// Check if every job was converted.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(BatchOutcome::is_converted)
    }

    /// Statistics summed over converted files.
    pub fn total_stats(&self) -> ConversionStats {
        let mut total = ConversionStats::new();
        for report in self.converted() {
            total.merge(&report.stats);
        }
        total
    }
}

/// Runs conversion jobs one after another.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    options: ConvertOptions,
}

impl Batch {
    /// Create a batch runner with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// Options used for every job.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Jobs whose input file is missing, without converting anything.
    pub fn preflight<'a>(&self, jobs: &'a [BatchJob]) -> Vec<&'a BatchJob> {
        jobs.iter().filter(|job| !job.input.exists()).collect()
    }

    /// Convert every job.
    pub fn run(&self, jobs: &[BatchJob]) -> BatchReport {
        self.run_with(jobs, |_| {})
    }

    /// Convert every job, calling `on_outcome` after each one.
    pub fn run_with<F>(&self, jobs: &[BatchJob], mut on_outcome: F) -> BatchReport
    where
        F: FnMut(&BatchOutcome),
    {
        let mut report = BatchReport::default();
        for job in jobs {
            let outcome = self.run_job(job);
            on_outcome(&outcome);
            report.outcomes.push(outcome);
        }

        log::debug!(
            "batch finished: {} converted, {} missing, {} failed",
            report.converted().count(),
            report.missing().count(),
            report.failed().count()
        );
        report
    }

    /// Convert a single job, capturing any error in the outcome.
    pub fn run_job(&self, job: &BatchJob) -> BatchOutcome {
        match convert_file(&job.input, &job.output, &self.options) {
            Ok(report) => BatchOutcome::Converted(report),
            Err(Error::InputNotFound(input)) => {
                log::warn!("input not found, skipping: {}", input.display());
                BatchOutcome::Missing(input)
            }
            Err(error) => {
                log::error!("failed to convert {}: {}", job.input.display(), error);
                BatchOutcome::Failed {
                    input: job.input.clone(),
                    error,
                }
            }
        }
    }
}

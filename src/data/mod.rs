//! Data module - CSV loading and the per-country reduction pipeline

mod loader;
mod normalizer;
mod processor;
mod record;

pub use loader::{parse_csv_with_metadata, DataLoader, LoaderError};
pub use normalizer::{normalize_row, RejectReason};
pub use processor::DataProcessor;
pub use record::{CountryRecord, RawRow};

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("No valid records found in the CSV file")]
    NoValidRecords,
}

/// Counts gathered while normalizing; informational only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineReport {
    pub rows_read: usize,
    pub observations: usize,
    pub rejected: HashMap<RejectReason, usize>,
}

impl PipelineReport {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<CountryRecord>,
    pub report: PipelineReport,
}

/// Normalize every row and reduce to one record per country.
pub fn build_dataset(rows: &[RawRow]) -> Dataset {
    let mut report = PipelineReport {
        rows_read: rows.len(),
        ..Default::default()
    };

    let mut observations = Vec::with_capacity(rows.len());
    for row in rows {
        match normalize_row(row) {
            Ok(observation) => observations.push(observation),
            Err(reason) => *report.rejected.entry(reason).or_insert(0) += 1,
        }
    }
    report.observations = observations.len();

    for reason in RejectReason::ALL {
        if let Some(count) = report.rejected.get(&reason) {
            debug!(%reason, count, "Rows rejected");
        }
    }

    Dataset {
        records: DataProcessor::reduce(&observations),
        report,
    }
}

/// Tokenize CSV text (metadata line first) and run the pipeline.
pub fn dataset_from_text(text: &str) -> Result<Dataset, PipelineError> {
    let rows = parse_csv_with_metadata(text)?;
    finish(build_dataset(&rows))
}

/// Read the CSV at `path` and run the pipeline from scratch.
pub fn load_dataset(path: &Path) -> Result<Dataset, PipelineError> {
    let text = DataLoader::read_csv_text(path)?;
    dataset_from_text(&text)
}

fn finish(dataset: Dataset) -> Result<Dataset, PipelineError> {
    if dataset.records.is_empty() {
        return Err(PipelineError::NoValidRecords);
    }

    info!(
        rows = dataset.report.rows_read,
        rejected = dataset.report.rejected_total(),
        countries = dataset.records.len(),
        "Built tourism dataset"
    );
    Ok(dataset)
}

use thiserror::Error;

/// Everything that can abort a report run.
///
/// No variant is recovered from: the first error stops the pipeline before
/// any output file is written, so the report set on disk is always complete
/// or absent.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A data line did not split into the four expected columns.
    #[error("{source_name} line {line}: expected `NAMESPACE POD CPU MEMORY`, found {fields} fields")]
    MalformedLine {
        source_name: String,
        line: usize,
        fields: usize,
    },

    /// A usage token was missing its unit suffix or was not a whole number.
    #[error("{source_name} line {line}: cannot parse {token:?} as an integer with `{unit}` suffix")]
    UnitParse {
        source_name: String,
        line: usize,
        token: String,
        unit: &'static str,
    },

    /// An extremum was requested over a namespace with no recorded values.
    #[error("namespace {namespace:?} has no values to aggregate")]
    EmptySeries { namespace: String },

    /// Top-slice threshold outside `(0, 1]`, or one that selects no values.
    #[error("top slice threshold {threshold} must be within (0, 1] and select at least one value")]
    InvalidThreshold { threshold: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

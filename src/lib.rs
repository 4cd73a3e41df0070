// Public modules
pub mod aggregate;
pub mod error;
pub mod ingest;
pub mod output;
pub mod parsing;
pub mod report;
pub mod types;

// Re-export commonly used items
pub use aggregate::{maximum, minimum, namespace_sums, pod_values, weighted_average, ValueSeries};
pub use error::ReportError;
pub use ingest::{ingest_files, ingest_reader};
pub use output::{transpose, write_csv};
pub use parsing::{parse_cpu_millicores, parse_memory_mebibytes, parse_usage_line};
pub use report::{Artifact, UsageReport, TOP_SLICE_THRESHOLD};
pub use types::{MetricKind, PodSample, Snapshot};

use std::path::Path;

use crate::aggregate::{
    maximum, minimum, namespace_sums, pod_values, weighted_average, ValueSeries,
};
use crate::error::ReportError;
use crate::output::{transpose, write_csv};
use crate::types::{MetricKind, Snapshot};

/// Threshold used for the `_top50` report variants: the mean of the top
/// half of each namespace's values.
pub const TOP_SLICE_THRESHOLD: f64 = 0.5;

/// One named CSV artifact, fully materialized in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub rows: Vec<Vec<String>>,
}

impl Artifact {
    fn series(name: &str, series: &ValueSeries) -> Self {
        Self {
            name: name.to_string(),
            rows: series_rows(series),
        }
    }

    fn transposed(name: &str, series: &ValueSeries) -> Self {
        Self {
            name: name.to_string(),
            rows: transpose(&series_rows(series)),
        }
    }

    fn scalars<T: ToString>(name: &str, entries: Vec<(String, T)>) -> Self {
        Self {
            name: name.to_string(),
            rows: entries
                .into_iter()
                .map(|(namespace, value)| vec![namespace, value.to_string()])
                .collect(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}

fn series_rows(series: &ValueSeries) -> Vec<Vec<String>> {
    series
        .iter()
        .map(|(namespace, values)| {
            let mut row = Vec::with_capacity(values.len() + 1);
            row.push(namespace.to_string());
            row.extend(values.iter().map(u64::to_string));
            row
        })
        .collect()
}

/// The full fixed set of usage reports derived from a snapshot run.
pub struct UsageReport {
    artifacts: Vec<Artifact>,
}

impl UsageReport {
    /// Derive every report from the ingested snapshots.
    ///
    /// All artifacts are buffered here and nothing touches the filesystem
    /// until [`UsageReport::write_all`], so a failing aggregation leaves no
    /// partial report set behind.
    pub fn build(snapshots: &[Snapshot]) -> Result<Self, ReportError> {
        let mut artifacts = Vec::new();
        for metric in [MetricKind::Cpu, MetricKind::Memory] {
            let name = metric.as_str();
            let pods = pod_values(snapshots, metric);
            let sums = namespace_sums(snapshots, metric);

            artifacts.push(Artifact::series(&format!("pod_{}_values", name), &pods));
            artifacts.push(Artifact::transposed(
                &format!("pod_{}_values_transposed", name),
                &pods,
            ));
            artifacts.push(Artifact::scalars(
                &format!("pod_{}_average", name),
                weighted_average(&pods, 1.0)?,
            ));
            artifacts.push(Artifact::scalars(
                &format!("pod_{}_average_top50", name),
                weighted_average(&pods, TOP_SLICE_THRESHOLD)?,
            ));

            artifacts.push(Artifact::series(&format!("namespace_{}_sums", name), &sums));
            artifacts.push(Artifact::transposed(
                &format!("namespace_{}_sums_transposed", name),
                &sums,
            ));
            artifacts.push(Artifact::scalars(
                &format!("namespace_{}_average", name),
                weighted_average(&sums, 1.0)?,
            ));
            artifacts.push(Artifact::scalars(
                &format!("namespace_{}_average_top50", name),
                weighted_average(&sums, TOP_SLICE_THRESHOLD)?,
            ));
            artifacts.push(Artifact::scalars(
                &format!("namespace_{}_min", name),
                minimum(&sums)?,
            ));
            artifacts.push(Artifact::scalars(
                &format!("namespace_{}_max", name),
                maximum(&sums)?,
            ));
        }
        Ok(Self { artifacts })
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    /// Write every artifact as `<name>.csv` under `dir`.
    pub fn write_all(&self, dir: &Path) -> Result<(), ReportError> {
        for artifact in &self.artifacts {
            write_csv(&dir.join(artifact.file_name()), &artifact.rows)?;
        }
        Ok(())
    }
}

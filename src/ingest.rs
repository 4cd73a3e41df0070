use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::ReportError;
use crate::parsing::parse_usage_line;
use crate::types::Snapshot;

/// Ingest every snapshot file, in the order given.
///
/// Each file is opened only for the duration of its own ingestion and is
/// closed again on every exit path, including parse failures.
pub fn ingest_files(paths: &[PathBuf]) -> Result<Vec<Snapshot>, ReportError> {
    let mut snapshots = Vec::with_capacity(paths.len());
    for path in paths {
        let file = File::open(path)?;
        snapshots.push(ingest_reader(&source_label(path), BufReader::new(file))?);
    }
    Ok(snapshots)
}

/// Ingest a single capture of `oc adm top pods` output.
///
/// The first line is the column header and is discarded no matter what it
/// contains; every following line must hold exactly
/// `NAMESPACE POD CPUm MEMORYMi`. An empty source yields an empty snapshot.
pub fn ingest_reader<R: BufRead>(label: &str, reader: R) -> Result<Snapshot, ReportError> {
    let mut lines = reader.lines();
    if let Some(header) = lines.next() {
        header?;
    }

    let mut snapshot = Snapshot::new(label);
    for (idx, line) in lines.enumerate() {
        let line = line?;
        // Data starts on line 2, right after the header
        let (namespace, sample) = parse_usage_line(label, idx + 2, &line)?;
        snapshot.upsert(&namespace, sample);
    }
    Ok(snapshot)
}

/// Stable snapshot identifier derived from the source path.
fn source_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

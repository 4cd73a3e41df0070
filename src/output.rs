use std::path::Path;

use crate::error::ReportError;

/// Write rows as comma-delimited text, one record per row.
///
/// Rows may have differing lengths; value tables carry one cell per pod
/// observation or per snapshot.
pub fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Transpose a grid of cells, padding ragged rows with empty cells.
///
/// Wide tables grow one column per pod or per snapshot and can run into
/// spreadsheet column limits; their transposed variants grow downward
/// instead.
pub fn transpose(rows: &[Vec<String>]) -> Vec<Vec<String>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|col| {
            rows.iter()
                .map(|row| row.get(col).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_transpose_square() {
        let rows = grid(&[&["a", "b"], &["c", "d"]]);
        assert_eq!(transpose(&rows), grid(&[&["a", "c"], &["b", "d"]]));
    }

    #[test]
    fn test_transpose_pads_ragged_rows() {
        let rows = grid(&[&["a", "b", "c"], &["d", "e"]]);
        assert_eq!(
            transpose(&rows),
            grid(&[&["a", "d"], &["b", "e"], &["c", ""]])
        );
    }

    #[test]
    fn test_transpose_empty() {
        assert!(transpose(&[]).is_empty());
        assert!(transpose(&[Vec::new()]).is_empty());
    }

    #[test]
    fn test_transpose_round_trips() {
        let rows = grid(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
        assert_eq!(transpose(&transpose(&rows)), rows);
    }

    #[test]
    fn test_write_csv_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.csv");
        let rows = grid(&[&["team-a", "100", "300"], &["team-b", "5"]]);
        write_csv(&path, &rows).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .unwrap();
        let read: Vec<Vec<String>> = reader
            .records()
            .map(|record| record.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(read, rows);
    }
}

//! Writes frames to CSV, JSON, and Excel files, and reads CSV/JSON back.
//!
//! Batch CSV export of `N` frames writes `stem_0.ext ... stem_{N-1}.ext`;
//! batch JSON export writes a single document containing `N` record arrays;
//! batch Excel export writes one worksheet per frame.

use std::fs::File;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use serde_json::{Map, Value};

use crate::error::{FrameError, FrameResult};
use crate::frame::{Cell, Frame};

/// Writes a frame to a CSV file: a header row, then data rows.
///
/// Null cells render as empty fields.
pub fn write_csv(frame: &Frame, path: impl AsRef<Path>) -> FrameResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(frame.headers())?;
    for row in frame.rows() {
        writer.write_record(row.iter().map(|cell| cell.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes each frame to its own numbered CSV file
/// (`data.csv` becomes `data_0.csv`, `data_1.csv`, ...).
pub fn write_csv_batch(frames: &[Frame], path: impl AsRef<Path>) -> FrameResult<()> {
    let path = path.as_ref();
    for (index, frame) in frames.iter().enumerate() {
        write_csv(frame, numbered_path(path, index))?;
    }
    Ok(())
}

/// Reads a CSV file back into a frame. All cells load as strings.
pub fn read_csv(path: impl AsRef<Path>) -> FrameResult<Frame> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let mut frame = Frame::new(headers);
    for record in reader.records() {
        let record = record?;
        frame.push_row(record.iter().map(Cell::from).collect())?;
    }
    Ok(frame)
}

/// Writes a frame to a JSON file in records orientation: an array of
/// objects keyed by column name, with numeric cells as JSON numbers and
/// null cells as `null`.
pub fn write_json(frame: &Frame, path: impl AsRef<Path>) -> FrameResult<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &frame_records(frame))?;
    Ok(())
}

/// Writes several frames to one JSON file as an array of record arrays.
pub fn write_json_batch(frames: &[Frame], path: impl AsRef<Path>) -> FrameResult<()> {
    let documents: Vec<Vec<Map<String, Value>>> = frames.iter().map(frame_records).collect();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &documents)?;
    Ok(())
}

/// Reads a records-orientation JSON file back into a frame, preserving
/// numeric typing. Column order follows the first record.
pub fn read_json(path: impl AsRef<Path>) -> FrameResult<Frame> {
    let file = File::open(path)?;
    let records: Vec<Map<String, Value>> = serde_json::from_reader(file)?;

    let headers: Vec<String> = records
        .first()
        .map(|record| record.keys().cloned().collect())
        .unwrap_or_default();
    let mut frame = Frame::new(headers.clone());

    for record in &records {
        let row = headers
            .iter()
            .map(|header| value_to_cell(record.get(header)))
            .collect();
        frame.push_row(row)?;
    }
    Ok(frame)
}

/// Writes a frame to an Excel workbook with a single `Sheet1` worksheet.
pub fn write_xlsx(frame: &Frame, path: impl AsRef<Path>) -> FrameResult<()> {
    write_xlsx_batch(std::slice::from_ref(frame), path, None)
}

/// Writes several frames to one Excel workbook, one worksheet per frame.
///
/// Sheets are named `Sheet1..SheetN` unless `sheet_names` is given; a name
/// count mismatch fails with [`FrameError::SheetNames`].
pub fn write_xlsx_batch(
    frames: &[Frame],
    path: impl AsRef<Path>,
    sheet_names: Option<&[&str]>,
) -> FrameResult<()> {
    if let Some(names) = sheet_names {
        if names.len() != frames.len() {
            return Err(FrameError::SheetNames {
                expected: frames.len(),
                got: names.len(),
            });
        }
    }

    let mut workbook = Workbook::new();
    for (index, frame) in frames.iter().enumerate() {
        let worksheet = workbook.add_worksheet();
        match sheet_names {
            Some(names) => worksheet.set_name(names[index])?,
            None => worksheet.set_name(format!("Sheet{}", index + 1))?,
        };

        for (col, header) in frame.headers().iter().enumerate() {
            worksheet.write_string(0, col as u16, header.as_str())?;
        }
        for (row_index, row) in frame.rows().iter().enumerate() {
            for (col, cell) in row.iter().enumerate() {
                let row_num = (row_index + 1) as u32;
                let col_num = col as u16;
                match cell {
                    Cell::Str(s) => {
                        worksheet.write_string(row_num, col_num, s.as_str())?;
                    }
                    Cell::Int(v) => {
                        worksheet.write_number(row_num, col_num, *v as f64)?;
                    }
                    Cell::Float(v) => {
                        worksheet.write_number(row_num, col_num, *v)?;
                    }
                    Cell::Null => {}
                }
            }
        }
    }
    workbook.save(path.as_ref())?;
    Ok(())
}

fn frame_records(frame: &Frame) -> Vec<Map<String, Value>> {
    frame
        .rows()
        .iter()
        .map(|row| {
            frame
                .headers()
                .iter()
                .zip(row)
                .map(|(header, cell)| (header.clone(), cell_to_value(cell)))
                .collect()
        })
        .collect()
}

fn cell_to_value(cell: &Cell) -> Value {
    match cell {
        Cell::Str(s) => Value::String(s.clone()),
        Cell::Int(v) => Value::from(*v),
        Cell::Float(v) => serde_json::Number::from_f64(*v)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Cell::Null => Value::Null,
    }
}

fn value_to_cell(value: Option<&Value>) -> Cell {
    match value {
        Some(Value::String(s)) => Cell::Str(s.clone()),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Cell::Int(i)
            } else {
                n.as_f64().map(Cell::Float).unwrap_or(Cell::Null)
            }
        }
        Some(Value::Bool(b)) => Cell::Str(b.to_string()),
        _ => Cell::Null,
    }
}

fn numbered_path(path: &Path, index: usize) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");
    let suffix = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_{index}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_path_inserts_index_before_extension() {
        let path = Path::new("/tmp/data.csv");
        assert_eq!(numbered_path(path, 0), Path::new("/tmp/data_0.csv"));
        assert_eq!(numbered_path(path, 3), Path::new("/tmp/data_3.csv"));
    }

    #[test]
    fn test_numbered_path_without_extension() {
        let path = Path::new("/tmp/data");
        assert_eq!(numbered_path(path, 1), Path::new("/tmp/data_1"));
    }

    #[test]
    fn test_cell_to_value_types() {
        assert_eq!(cell_to_value(&Cell::Str("x".to_string())), Value::from("x"));
        assert_eq!(cell_to_value(&Cell::Int(5)), Value::from(5));
        assert_eq!(cell_to_value(&Cell::Float(0.5)), Value::from(0.5));
        assert_eq!(cell_to_value(&Cell::Null), Value::Null);
    }

    #[test]
    fn test_nan_serializes_as_null() {
        assert_eq!(cell_to_value(&Cell::Float(f64::NAN)), Value::Null);
    }

    #[test]
    fn test_value_to_cell_round_trips_types() {
        assert_eq!(value_to_cell(Some(&Value::from(5))), Cell::Int(5));
        assert_eq!(value_to_cell(Some(&Value::from(0.5))), Cell::Float(0.5));
        assert_eq!(
            value_to_cell(Some(&Value::from("x"))),
            Cell::Str("x".to_string())
        );
        assert_eq!(value_to_cell(Some(&Value::Null)), Cell::Null);
        assert_eq!(value_to_cell(None), Cell::Null);
    }

    #[test]
    fn test_sheet_name_mismatch_is_rejected() {
        let frames = vec![Frame::new(["a"]), Frame::new(["b"])];
        let dir = tempfile::tempdir().unwrap();
        let err = write_xlsx_batch(
            &frames,
            dir.path().join("out.xlsx"),
            Some(&["only-one"]),
        )
        .unwrap_err();
        match err {
            FrameError::SheetNames { expected, got } => {
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            e => panic!("expected SheetNames, got: {e:?}"),
        }
    }
}

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{CellValue, Table};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found at path: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RowTooWide {
        line: u64,
        expected: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV file into a [`Table`].
///
/// A missing file is reported as [`LoadError::NotFound`]; every other failure
/// (permissions, invalid UTF-8, ragged rows) is a generic read error.
pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })?;
    let table = read_table(file)?;
    log::info!(
        "Loaded {} rows with columns {:?} from {}",
        table.len(),
        table.columns,
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// CSV layout: one header row, then data rows.
///
/// * A blank header at position `i` becomes `Unnamed: i`, so a leading index
///   column written without a name shows up as `Unnamed: 0`.
/// * Empty fields and [`NA_TOKENS`] load as [`CellValue::Null`], everything
///   else as text.
/// * Rows shorter than the header are padded with nulls; longer rows are an
///   error.
pub fn read_table<R: Read>(input: R) -> Result<Table, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if h.is_empty() {
                format!("Unnamed: {i}")
            } else {
                h.to_string()
            }
        })
        .collect();

    let width = columns.len();
    let mut table = Table::new(columns);

    for result in reader.records() {
        let record = result?;
        if record.len() > width {
            return Err(LoadError::RowTooWide {
                line: record.position().map(|p| p.line()).unwrap_or(0),
                expected: width,
                found: record.len(),
            });
        }

        let mut row: Vec<CellValue> = record.iter().map(parse_cell).collect();
        row.resize(width, CellValue::Null);
        table.rows.push(row);
    }

    Ok(table)
}

/// Field values read as missing, on top of the empty string.
pub const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn parse_cell(s: &str) -> CellValue {
    if s.is_empty() || NA_TOKENS.contains(&s) {
        CellValue::Null
    } else {
        CellValue::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{COMPANY, UNNAMED_INDEX, VALUATION};
    use std::io::{Cursor, Write};
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn blank_leading_header_becomes_unnamed_index() {
        let csv = ",Company,Valuation ($B)\n0,Stripe,$95B\n1,Klarna,$45.6B\n";
        let table = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(table.columns, vec![UNNAMED_INDEX, COMPANY, VALUATION]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[1][2], CellValue::Text("$45.6B".into()));
    }

    #[test]
    fn empty_fields_and_short_rows_are_null() {
        let csv = "Company,City,Country\nStripe,,United States\nKlarna\n";
        let table = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(table.rows[0][1], CellValue::Null);
        assert_eq!(
            table.rows[1],
            vec![
                CellValue::Text("Klarna".into()),
                CellValue::Null,
                CellValue::Null
            ]
        );
    }

    #[test]
    fn na_tokens_are_null_in_every_column() {
        let csv = "Company,Industry,Valuation ($B)\nStripe,N/A,$95B\nKlarna,Fintech,NaN\nNAB,NA,null\n";
        let table = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(table.rows[0][1], CellValue::Null);
        assert_eq!(table.rows[1][2], CellValue::Null);
        assert_eq!(table.rows[2], vec![CellValue::Text("NAB".into()), CellValue::Null, CellValue::Null]);
        // Only exact tokens count.
        let table = read_table(Cursor::new("Company\nN/A Corp\n")).unwrap();
        assert_eq!(table.rows[0][0], CellValue::Text("N/A Corp".into()));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let csv = "Company,Select Investors\nStripe,\"Khosla Ventures, Sequoia\"\n";
        let table = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(
            table.rows[0][1],
            CellValue::Text("Khosla Ventures, Sequoia".into())
        );
    }

    #[test]
    fn rows_wider_than_header_are_rejected() {
        let csv = "Company,City\nStripe,San Francisco,extra\n";
        let err = read_table(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::RowTooWide {
                expected: 2,
                found: 3,
                ..
            }
        ));
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let mut bytes = b"Company\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let err = read_table(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        let err = load_csv(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().starts_with("File not found at path:"));
    }

    #[test]
    fn load_csv_reads_from_disk() {
        let mut tmp = NamedTempFile::new().unwrap();
        write!(tmp, "Company,Industry\nStripe,Fintech\n").unwrap();
        let table = load_csv(tmp.path()).unwrap();
        assert_eq!(table.columns, vec!["Company", "Industry"]);
        assert_eq!(table.len(), 1);
    }
}

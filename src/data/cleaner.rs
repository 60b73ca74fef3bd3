use thiserror::Error;

use super::model::{CellValue, Table, SERIAL_NO, UNNAMED_INDEX, VALUATION};

#[derive(Error, Debug, PartialEq)]
pub enum CleanError {
    #[error("Warning: '{0}' column not found!")]
    MissingColumn(&'static str),
}

/// Row counts for each cleaning phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CleanReport {
    pub rows_before: usize,
    pub coerced_to_missing: usize,
    pub rows_after: usize,
}

/// Run every cleaning phase in order.
///
/// Coercion and dropping are separate passes: after [`coerce_valuations`]
/// the table still holds every row, with unparseable valuations turned into
/// [`CellValue::Null`], and only [`drop_missing_valuations`] removes them.
pub fn clean(table: &mut Table) -> Result<CleanReport, CleanError> {
    rename_index_column(table);

    let valuation_idx = table
        .column_index(VALUATION)
        .ok_or(CleanError::MissingColumn(VALUATION))?;

    let rows_before = table.len();
    let coerced_to_missing = coerce_valuations(table, valuation_idx);
    let dropped = drop_missing_valuations(table, valuation_idx);

    if dropped > 0 {
        log::warn!("Dropped {dropped} rows without a usable valuation");
    }

    Ok(CleanReport {
        rows_before,
        coerced_to_missing,
        rows_after: table.len(),
    })
}

/// Rename the blank leading index column to `S.No`, if present.
pub fn rename_index_column(table: &mut Table) -> bool {
    let renamed = table.rename_column(UNNAMED_INDEX, SERIAL_NO);
    if renamed {
        log::debug!("Renamed '{UNNAMED_INDEX}' to '{SERIAL_NO}'");
    }
    renamed
}

/// Phase one: replace every valuation cell with `Float` or `Null`.
///
/// Returns how many non-empty cells failed to parse.
pub fn coerce_valuations(table: &mut Table, idx: usize) -> usize {
    let mut failed = 0;
    for row in &mut table.rows {
        let coerced = match &row[idx] {
            CellValue::Text(s) => parse_valuation(s),
            CellValue::Float(v) if !v.is_nan() => Some(*v),
            _ => None,
        };
        if coerced.is_none() && !row[idx].is_null() {
            failed += 1;
        }
        row[idx] = coerced.map_or(CellValue::Null, CellValue::Float);
    }
    failed
}

/// Phase two: remove rows whose valuation is `Null`. Returns the number of
/// rows removed.
pub fn drop_missing_valuations(table: &mut Table, idx: usize) -> usize {
    let before = table.rows.len();
    table.rows.retain(|row| !row[idx].is_null());
    before - table.rows.len()
}

/// Strip every `$` and `B`, then parse what is left. NaN counts as missing.
pub fn parse_valuation(raw: &str) -> Option<f64> {
    let stripped: String = raw.chars().filter(|c| *c != '$' && *c != 'B').collect();
    stripped
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
}

use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::filter::display_columns;
use crate::data::model::{CellValue, Table, VALUATION};

// ---------------------------------------------------------------------------
// Result table (console)
// ---------------------------------------------------------------------------

/// Render the display columns of `table` as a text grid, without a row
/// index. Valuation is shown as a number column, everything else as text.
pub fn render(table: &Table) -> Result<String> {
    let columns = display_columns(table);
    if columns.is_empty() {
        return Ok(String::new());
    }

    let mut fields = Vec::with_capacity(columns.len());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(columns.len());

    for (name, idx) in columns {
        if name == VALUATION {
            let values: Float64Array = table.column_values(idx).map(CellValue::as_f64).collect();
            fields.push(Field::new(name, DataType::Float64, true));
            arrays.push(Arc::new(values));
        } else {
            let values: StringArray = table
                .column_values(idx)
                .map(|cell| match cell {
                    CellValue::Null => None,
                    other => Some(other.to_string()),
                })
                .collect();
            fields.push(Field::new(name, DataType::Utf8, true));
            arrays.push(Arc::new(values));
        }
    }

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)
        .context("building display batch")?;
    let grid = pretty_format_batches(&[batch]).context("formatting display table")?;
    Ok(grid.to_string())
}

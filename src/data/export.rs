use std::path::Path;

use anyhow::{Context, Result};

use super::model::Table;

/// `filtered_<industry>_unicorns.csv`, with spaces in the industry replaced
/// by underscores.
pub fn export_file_name(industry: &str) -> String {
    format!("filtered_{}_unicorns.csv", industry.replace(' ', "_"))
}

/// Write every column of `table` to `path`. No index column is added and
/// null cells become empty fields.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer
        .write_record(&table.columns)
        .context("writing CSV header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row.iter().map(|cell| cell.to_string()))
            .with_context(|| format!("writing CSV row {row_no}"))?;
    }
    writer.flush().context("flushing CSV writer")?;

    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

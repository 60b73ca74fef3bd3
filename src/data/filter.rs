use super::model::{
    Table, CITY, COMPANY, COUNTRY, INDUSTRY, SELECT_INVESTORS, SERIAL_NO, VALUATION,
};

/// Columns shown on screen for the selected industry, in display order.
pub const DISPLAY_COLUMNS: [&str; 6] = [
    SERIAL_NO,
    COMPANY,
    VALUATION,
    COUNTRY,
    CITY,
    SELECT_INVESTORS,
];

/// Rows whose industry equals `industry`, highest valuation first.
///
/// All columns are kept. Returns an empty table with the same header when
/// either the industry or valuation column is missing.
pub fn filter_industry(table: &Table, industry: &str) -> Table {
    let mut out = Table::new(table.columns.clone());
    let (Some(industry_idx), Some(valuation_idx)) =
        (table.column_index(INDUSTRY), table.column_index(VALUATION))
    else {
        return out;
    };

    out.rows = table
        .rows
        .iter()
        .filter(|row| row[industry_idx].as_text() == Some(industry))
        .cloned()
        .collect();

    // Stable, so equal valuations keep file order.
    out.rows.sort_by(|a, b| {
        let a = a[valuation_idx].as_f64().unwrap_or(f64::NEG_INFINITY);
        let b = b[valuation_idx].as_f64().unwrap_or(f64::NEG_INFINITY);
        b.total_cmp(&a)
    });

    log::info!("{} companies in '{industry}'", out.len());
    out
}

/// The subset of [`DISPLAY_COLUMNS`] actually present, as `(name, index)`.
/// Absent columns are skipped silently.
pub fn display_columns(table: &Table) -> Vec<(&'static str, usize)> {
    DISPLAY_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name).map(|idx| (*name, idx)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn sample() -> Table {
        let mut t = Table::new(vec![
            SERIAL_NO.into(),
            COMPANY.into(),
            VALUATION.into(),
            INDUSTRY.into(),
            COUNTRY.into(),
        ]);
        let rows = [
            ("0", "Lowly", 1.0, "AI"),
            ("1", "Banky", 3.0, "Fintech"),
            ("2", "Brainy", 4.0, "AI"),
            ("3", "Same", 1.0, "AI"),
        ];
        for (sno, company, v, industry) in rows {
            t.rows.push(vec![
                CellValue::Text(sno.into()),
                CellValue::Text(company.into()),
                CellValue::Float(v),
                CellValue::Text(industry.into()),
                CellValue::Text("US".into()),
            ]);
        }
        t
    }

    #[test]
    fn keeps_only_the_industry_sorted_descending() {
        let out = filter_industry(&sample(), "AI");
        let companies: Vec<_> = out
            .column_values(1)
            .map(|c| c.to_string())
            .collect();
        assert_eq!(companies, vec!["Brainy", "Lowly", "Same"]);
        assert_eq!(out.columns, sample().columns);
    }

    #[test]
    fn unknown_industry_gives_empty_table() {
        let out = filter_industry(&sample(), "Space");
        assert!(out.is_empty());
        assert_eq!(out.columns.len(), 5);
    }

    #[test]
    fn display_columns_skip_missing_ones() {
        let cols = display_columns(&sample());
        assert_eq!(
            cols,
            vec![(SERIAL_NO, 0), (COMPANY, 1), (VALUATION, 2), (COUNTRY, 4)]
        );
    }
}

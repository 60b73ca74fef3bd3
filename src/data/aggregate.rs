use std::collections::BTreeMap;

use thiserror::Error;

use super::model::{Table, INDUSTRY, VALUATION};

#[derive(Error, Debug, PartialEq)]
pub enum AggregateError {
    #[error("Error: '{0}' column not found!")]
    MissingColumn(&'static str),
}

/// Summed valuation of one industry.
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryTotal {
    pub industry: String,
    pub total: f64,
}

/// Group rows by industry and sum their valuations, largest total first.
///
/// Groups start out sorted by label and the sort is stable, so equal totals
/// stay in alphabetical order. Rows without an industry label, or without a
/// numeric valuation, do not contribute.
pub fn industry_totals(table: &Table) -> Result<Vec<IndustryTotal>, AggregateError> {
    let industry_idx = table
        .column_index(INDUSTRY)
        .ok_or(AggregateError::MissingColumn(INDUSTRY))?;
    let valuation_idx = table
        .column_index(VALUATION)
        .ok_or(AggregateError::MissingColumn(VALUATION))?;

    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for row in &table.rows {
        let (Some(industry), Some(value)) =
            (row[industry_idx].as_text(), row[valuation_idx].as_f64())
        else {
            continue;
        };
        *sums.entry(industry).or_insert(0.0) += value;
    }

    let mut totals: Vec<IndustryTotal> = sums
        .into_iter()
        .map(|(industry, total)| IndustryTotal {
            industry: industry.to_string(),
            total,
        })
        .collect();
    totals.sort_by(|a, b| b.total.total_cmp(&a.total));
    log::info!("Aggregated {} rows into {} industries", table.len(), totals.len());
    Ok(totals)
}

/// One menu line per industry, numbered from 1.
pub fn menu_lines(totals: &[IndustryTotal]) -> Vec<String> {
    totals
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {} — ${:.2}B", i + 1, t.industry, t.total))
        .collect()
}

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::data::aggregate::industry_totals;
use crate::data::cleaner::clean;
use crate::data::export::{export_file_name, write_csv};
use crate::data::filter::filter_industry;
use crate::data::loader::{load_csv, LoadError};
use crate::ui::{menu, table};

const DISCLAIMER: [&str; 3] = [
    "Investment decisions should not be based solely on valuation figures.",
    "This tool is built to assist in identifying high-value companies across industries,",
    "but proper due diligence, financial research, and risk assessment are always recommended.",
];

// ---------------------------------------------------------------------------
// Pipeline runner
// ---------------------------------------------------------------------------

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub industry: String,
    pub rows_exported: usize,
    pub export_path: PathBuf,
}

pub struct UnicornApp {
    pub settings: Settings,
}

impl UnicornApp {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load → clean → aggregate → prompt → filter → export.
    ///
    /// Operator input is read from `input` and everything meant for the
    /// operator goes to `out`. Every fatal condition is returned before the
    /// export file is created.
    pub fn run<R, W>(&self, input: &mut R, out: &mut W) -> Result<RunSummary>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "Loading dataset")?;
        let mut data = match load_csv(&self.settings.input_path) {
            Ok(t) => t,
            Err(e @ LoadError::NotFound { .. }) => return Err(e).context("Error"),
            Err(e) => {
                return Err(e).context("Unexpected error occurred while loading dataset")
            }
        };
        writeln!(out, "Dataset loaded successfully.\n")?;

        writeln!(out, "Cleaning data")?;
        let report = clean(&mut data)?;
        log::info!(
            "Cleaned {} rows: {} unparseable valuations, {} rows kept",
            report.rows_before,
            report.coerced_to_missing,
            report.rows_after
        );
        if data.is_empty() {
            log::warn!("No rows with a valuation left after cleaning");
        }
        writeln!(out, "Cleanup complete.\n")?;

        writeln!(out, "Analyzing industry-wise valuation")?;
        let totals = industry_totals(&data)?;
        menu::print_menu(out, &totals)?;
        let industry = menu::prompt_selection(input, out, &totals)?;

        writeln!(out, "\nFetching top companies in '{industry}' industry\n")?;
        let selected = filter_industry(&data, &industry);
        writeln!(out, "{}", table::render(&selected)?)?;

        let export_path = self.settings.output_dir.join(export_file_name(&industry));
        write_csv(&selected, &export_path)
            .with_context(|| format!("exporting {}", export_path.display()))?;
        writeln!(out, "\nFiltered data exported")?;

        writeln!(out, "\nDisclaimer:")?;
        for line in DISCLAIMER {
            writeln!(out, "{line}")?;
        }

        Ok(RunSummary {
            industry,
            rows_exported: selected.len(),
            export_path,
        })
    }
}

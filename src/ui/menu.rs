use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::data::aggregate::{menu_lines, IndustryTotal};
use crate::state::{SelectError, SelectionState, Selector};

// ---------------------------------------------------------------------------
// Industry menu
// ---------------------------------------------------------------------------

/// Print the numbered industry list.
pub fn print_menu<W: Write>(out: &mut W, totals: &[IndustryTotal]) -> Result<()> {
    writeln!(out, "List of Industries by Total Valuation:\n")?;
    for line in menu_lines(totals) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Prompt loop
// ---------------------------------------------------------------------------

/// Keep prompting until the operator enters a valid menu number and return
/// the chosen industry. There is no retry limit; only end of input stops the
/// loop early.
pub fn prompt_selection<R, W>(input: &mut R, out: &mut W, totals: &[IndustryTotal]) -> Result<String>
where
    R: BufRead,
    W: Write,
{
    let mut selector = Selector::new(totals.len())?;
    let mut line = String::new();

    loop {
        writeln!(out, "\nPlease enter the number of the industry you want to explore:")?;
        write!(out, "Your choice: ")?;
        out.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("reading operator input")?;
        if read == 0 {
            return Err(SelectError::InputClosed.into());
        }

        match selector.feed(&line) {
            SelectionState::Accepted(idx) => {
                let industry = totals[idx].industry.clone();
                writeln!(out, "\nYou selected: {industry}")?;
                log::info!(
                    "Selected '{industry}' after {} attempt(s)",
                    selector.attempts()
                );
                return Ok(industry);
            }
            SelectionState::Rejected(reason) => {
                log::debug!("Rejected input {:?}: {reason:?}", line.trim_end());
                writeln!(out, "{}", reason.message())?;
            }
            // Start state only; feeding a line always leaves it.
            SelectionState::Awaiting => {}
        }
    }
}

use thiserror::Error;

// ---------------------------------------------------------------------------
// Industry selection state machine
// ---------------------------------------------------------------------------

/// Why a line of operator input was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Not an integer at all.
    InvalidInput,
    /// An integer outside `1..=N`.
    InvalidNumber,
}

impl Rejection {
    pub fn message(self) -> &'static str {
        match self {
            Rejection::InvalidInput => "Invalid input. Please enter a valid number.",
            Rejection::InvalidNumber => {
                "Invalid number. Please select a number from the list above."
            }
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectError {
    #[error("No industries available to choose from.")]
    NoIndustries,
    #[error("Input closed before an industry was selected.")]
    InputClosed,
}

/// Where the selection loop currently is.
///
/// `Awaiting` is the start state. Feeding a line moves to `Rejected` (which
/// goes straight back to awaiting on the next line) or to the terminal
/// `Accepted`, holding the zero-based position in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    Awaiting,
    Rejected(Rejection),
    Accepted(usize),
}

/// Tracks the operator's choice among `options` numbered menu entries.
#[derive(Debug)]
pub struct Selector {
    options: usize,
    state: SelectionState,
    attempts: usize,
}

impl Selector {
    pub fn new(options: usize) -> Result<Self, SelectError> {
        if options == 0 {
            return Err(SelectError::NoIndustries);
        }
        Ok(Selector {
            options,
            state: SelectionState::Awaiting,
            attempts: 0,
        })
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Feed one line of input. Once accepted, further input is ignored.
    pub fn feed(&mut self, line: &str) -> SelectionState {
        if let SelectionState::Accepted(_) = self.state {
            return self.state;
        }
        self.attempts += 1;
        self.state = match classify(line.trim()) {
            None => SelectionState::Rejected(Rejection::InvalidInput),
            Some(n) if n >= 1 && n <= self.options as i128 => {
                SelectionState::Accepted(n as usize - 1)
            }
            Some(_) => SelectionState::Rejected(Rejection::InvalidNumber),
        };
        self.state
    }
}

/// Parse an optionally signed run of digits. Integers too large for `i128`
/// are still numbers, just never in range, so they saturate.
fn classify(s: &str) -> Option<i128> {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse::<i128>().unwrap_or(if s.starts_with('-') {
        i128::MIN
    } else {
        i128::MAX
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_one_based_index_in_range() {
        let mut sel = Selector::new(3).unwrap();
        assert_eq!(sel.attempts(), 0);
        assert_eq!(sel.feed("3"), SelectionState::Accepted(2));
        assert_eq!(sel.attempts(), 1);
    }

    #[test]
    fn out_of_range_and_garbage_are_rejected() {
        let mut sel = Selector::new(2).unwrap();
        assert_eq!(sel.feed("0"), SelectionState::Rejected(Rejection::InvalidNumber));
        assert_eq!(sel.feed("99"), SelectionState::Rejected(Rejection::InvalidNumber));
        assert_eq!(sel.feed("-1"), SelectionState::Rejected(Rejection::InvalidNumber));
        assert_eq!(
            sel.feed("99999999999999999999"),
            SelectionState::Rejected(Rejection::InvalidNumber)
        );
        assert_eq!(
            sel.feed("999999999999999999999999999999999999999999"),
            SelectionState::Rejected(Rejection::InvalidNumber)
        );
        assert_eq!(sel.feed("+"), SelectionState::Rejected(Rejection::InvalidInput));
        assert_eq!(sel.feed("abc"), SelectionState::Rejected(Rejection::InvalidInput));
        assert_eq!(sel.feed("1.5"), SelectionState::Rejected(Rejection::InvalidInput));
        assert_eq!(sel.feed(""), SelectionState::Rejected(Rejection::InvalidInput));
        assert_eq!(sel.feed(" 2 \n"), SelectionState::Accepted(1));
        assert_eq!(sel.attempts(), 10);
    }

    #[test]
    fn feeding_always_leaves_awaiting() {
        for line in ["", "x", "0", "1", "5", "-3", "99999999999999999999"] {
            let mut sel = Selector::new(4).unwrap();
            assert_ne!(sel.feed(line), SelectionState::Awaiting, "input {line:?}");
        }
    }

    #[test]
    fn accepted_is_terminal() {
        let mut sel = Selector::new(2).unwrap();
        sel.feed("1");
        assert_eq!(sel.feed("2"), SelectionState::Accepted(0));
        assert_eq!(sel.attempts(), 1);
    }

    #[test]
    fn empty_menu_cannot_be_selected_from() {
        assert_eq!(Selector::new(0).unwrap_err(), SelectError::NoIndustries);
    }
}

use std::fmt;

use crate::game::{Board, COLS, ROWS};

/// Rows top to bottom as ` c ` cells, a rule, then 1-based column labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                write!(f, " {} ", self.get(row, col).symbol())?;
            }
            writeln!(f)?;
        }

        writeln!(f, "{}", "---".repeat(COLS))?;

        for col in 1..=COLS {
            write!(f, " {col} ")?;
        }
        writeln!(f)
    }
}

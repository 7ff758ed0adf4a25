use std::fmt::Display;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No entry is dated on the reference date.
    NotFound(NaiveDate),
    /// There is no entry after the one at `index`.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(date) => write!(f, "No menu found for today's date ({date})"),
            Self::IndexOutOfRange { index, len } => write!(
                f,
                "No menu found after entry {index}, the week only has {len} entries"
            ),
        }
    }
}

impl std::error::Error for Error {}

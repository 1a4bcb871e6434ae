//! Direction of money for categories and transactions.

use std::{fmt, str::FromStr};

use crate::validation::InvalidValue;

/// Whether money comes in (`Pemasukan`) or goes out (`Pengeluaran`).
///
/// The Indonesian spellings are canonical: they are what gets stored and
/// serialized. The English names are accepted as input aliases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryType {
    Income,
    Expense,
}

impl EntryType {
    pub const ACCEPTED: [&'static str; 4] = ["Pemasukan", "Pengeluaran", "Income", "Expense"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Pemasukan",
            Self::Expense => "Pengeluaran",
        }
    }
}

impl FromStr for EntryType {
    type Err = InvalidValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Pemasukan" | "Income" => Ok(Self::Income),
            "Pengeluaran" | "Expense" => Ok(Self::Expense),
            other => Err(InvalidValue(format!("invalid entry type: {other}"))),
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

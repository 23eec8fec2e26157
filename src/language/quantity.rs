//! Recipe-wide quantities and the rounding applied when amounts are shown

use std::fmt;

/// A stated yield for the whole recipe, such as "6 people" or "cake".
///
/// Without a number the description instead names the automatic total, so
/// "quantity cake" turns the computed weight into "300 g. of cake".
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Amount(f64, String),
    Named(String),
}

impl Quantity {
    pub fn description(&self) -> &str {
        match self {
            Quantity::Amount(_, description) => description,
            Quantity::Named(description) => description,
        }
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            Quantity::Amount(amount, _) => Some(*amount),
            Quantity::Named(_) => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Amount(amount, description) if description.is_empty() => {
                write!(f, "{}", display_amount(*amount))
            }
            Quantity::Amount(amount, description) => {
                write!(f, "{} {}", display_amount(*amount), description)
            }
            Quantity::Named(description) => f.write_str(description),
        }
    }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Text for an amount as shown to a reader: one decimal at most, and no
/// trailing ".0" on whole numbers.
pub fn display_amount(value: f64) -> String {
    format!("{}", round1(value))
}

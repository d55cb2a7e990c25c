//! Amount type for transaction magnitudes
//!
//! A transaction amount is a currency-agnostic, non-negative decimal value.
//! The sign of a transaction's effect on the balance comes from its kind,
//! never from its amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative, finite decimal magnitude
///
/// `Display` renders the value with full precision (the shortest text that
/// parses back to the same value), which is what the data file stores.
/// Use [`Amount::format_with_symbol`] for two-decimal currency output.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::Amount;
    /// assert!(Amount::new(12.5).is_ok());
    /// assert!(Amount::new(-1.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, AmountParseError> {
        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(value.to_string()));
        }
        if value < 0.0 {
            return Err(AmountParseError::Negative(value.to_string()));
        }
        // Normalises -0.0
        Ok(Self(value + 0.0))
    }

    /// Parse an amount from text
    ///
    /// Accepts plain decimal numerals such as "200", "12.5" or "0.05".
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        Self::new(value).map_err(|e| match e {
            AmountParseError::Negative(_) => AmountParseError::Negative(s.to_string()),
            AmountParseError::NotFinite(_) => AmountParseError::NotFinite(s.to_string()),
            other => other,
        })
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Format with a currency symbol and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl<'a> std::iter::Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    Negative(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountParseError::Negative(s) => write!(f, "Amount must not be negative: {}", s),
            AmountParseError::NotFinite(s) => write!(f, "Amount must be a finite number: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("200").unwrap().value(), 200.0);
        assert_eq!(Amount::parse("12.5").unwrap().value(), 12.5);
        assert_eq!(Amount::parse(" 0.05 ").unwrap().value(), 0.05);
        assert_eq!(Amount::parse("100.0").unwrap().value(), 100.0);
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat("abc".into()))
        );
        assert_eq!(
            Amount::parse("-5"),
            Err(AmountParseError::Negative("-5".into()))
        );
        assert!(matches!(
            Amount::parse("NaN"),
            Err(AmountParseError::NotFinite(_))
        ));
        assert!(matches!(
            Amount::parse("inf"),
            Err(AmountParseError::NotFinite(_))
        ));
    }

    #[test]
    fn test_negative_zero_is_normalised() {
        let zero = Amount::parse("-0").unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero.to_string(), "0");
    }

    #[test]
    fn test_display_keeps_full_precision() {
        assert_eq!(Amount::parse("1000").unwrap().to_string(), "1000");
        assert_eq!(Amount::parse("12.345").unwrap().to_string(), "12.345");
        assert_eq!(Amount::parse("0.1").unwrap().to_string(), "0.1");
    }

    #[test]
    fn test_format_with_symbol() {
        let a = Amount::parse("12.345").unwrap();
        assert_eq!(a.format_with_symbol("$"), "$12.35");
        assert_eq!(Amount::zero().format_with_symbol("₹"), "₹0.00");
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Amount::parse("200").unwrap(),
            Amount::parse("30").unwrap(),
        ];
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), 230.0);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Amount>("-3.0").is_err());
        let a: Amount = serde_json::from_str("3.5").unwrap();
        assert_eq!(a.value(), 3.5);
    }
}

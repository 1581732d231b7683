//! Money type for representing expense amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums stay exact. Serialized as a plain
//! JSON number to match the on-disk format (`"amount": 120.5`), written with
//! every digit so amounts survive a save and reload unchanged.

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Currency symbols stripped from user input before parsing
const CURRENCY_PREFIXES: [char; 4] = ['₹', '$', '€', '£'];

/// A signed decimal amount
///
/// No sign is enforced: negative amounts are accepted and represent refunds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "+10", "₹10.50", "$10"
    ///
    /// At most one sign is allowed, and only in front of any currency symbol.
    /// Values outside `Decimal`'s range are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.trim_start_matches(CURRENCY_PREFIXES).trim();
        if rest.starts_with(['-', '+']) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let value = Decimal::from_str(rest)
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Convert a JSON number, accepting plain and exponent notation
    ///
    /// Fails with `MoneyParseError::OutOfRange` for well-formed numbers that
    /// do not fit in a `Decimal`.
    pub fn from_json_number(number: &serde_json::Number) -> Result<Self, MoneyParseError> {
        let text = number.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map(Self)
            .map_err(|_| MoneyParseError::OutOfRange(text))
    }

    /// Format with a currency symbol, e.g. `₹120.50` or `-₹3`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let normalized = self.0.normalize();
        if self.is_negative() {
            format!("-{}{}", symbol, normalized.abs())
        } else {
            format!("{}{}", symbol, normalized)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let number = serde_json::Number::deserialize(deserializer)?;
        Money::from_json_number(&number).map_err(D::Error::custom)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_plain_and_decimal() {
        assert_eq!(Money::parse("10").unwrap(), Money::new(dec!(10)));
        assert_eq!(Money::parse("10.50").unwrap(), Money::new(dec!(10.5)));
        assert_eq!(Money::parse("  7.25 ").unwrap(), Money::new(dec!(7.25)));
    }

    #[test]
    fn test_parse_negative_and_symbol() {
        assert_eq!(Money::parse("-3.2").unwrap(), Money::new(dec!(-3.2)));
        assert_eq!(Money::parse("₹120").unwrap(), Money::new(dec!(120)));
        assert_eq!(Money::parse("-$5").unwrap(), Money::new(dec!(-5)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(Money::parse(""), Err(MoneyParseError::Empty));
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_parse_rejects_second_sign() {
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-₹-5").is_err());
        assert!(Money::parse("₹-5").is_err());
        assert!(Money::parse("+-5").is_err());
        assert_eq!(Money::parse("+5").unwrap(), Money::new(dec!(5)));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(Money::parse("1000000000000000000000000000000").is_err());
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(dec!(120.50)).format_with_symbol("₹"), "₹120.5");
        assert_eq!(Money::new(dec!(-3)).format_with_symbol("$"), "-$3");
        assert_eq!(Money::zero().format_with_symbol("₹"), "₹0");
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::new(dec!(100)), Money::new(dec!(50)), Money::new(dec!(30))];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::new(dec!(180)));
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::new(dec!(12.5))).unwrap();
        assert_eq!(json, "12.5");

        let parsed: Money = serde_json::from_str("100").unwrap();
        assert_eq!(parsed, Money::new(dec!(100)));

        let parsed: Money = serde_json::from_str("99.99").unwrap();
        assert_eq!(parsed, Money::new(dec!(99.99)));

        let parsed: Money = serde_json::from_str("2.5e2").unwrap();
        assert_eq!(parsed, Money::new(dec!(250)));
    }

    #[test]
    fn test_json_keeps_every_digit() {
        let amount = Money::parse("12345678901234567.89").unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "12345678901234567.89");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn test_json_out_of_range() {
        let err = serde_json::from_str::<Money>("1e30").unwrap_err();
        assert!(err.to_string().contains("Amount out of range"));
        assert!(serde_json::from_str::<Money>("\"5\"").is_err());
    }
}

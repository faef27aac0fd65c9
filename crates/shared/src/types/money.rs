//! Money type with decimal precision and display formatting.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A monetary amount in the report currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    /// The amount in major currency units (e.g. dollars, not cents).
    pub amount: Decimal,
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Creates a zero amount.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Adds two amounts, returning `None` if the result does not fit in a
    /// `Decimal`.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.amount.checked_add(rhs.amount).map(Self::new)
    }

    /// Formats the amount with a currency symbol, thousands separators
    /// and exactly two decimal places, e.g. `$1,234.50` or `-$12.00`.
    #[must_use]
    pub fn format_with(&self, symbol: &str) -> String {
        let rounded = self
            .amount
            .abs()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let text = format!("{rounded:.2}");
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{sign}{symbol}{grouped}.{fraction}")
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_zero() {
        let money = Money::zero();
        assert_eq!(money.amount, Decimal::ZERO);
        assert!(money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_money_negative() {
        let money = Money::new(dec!(-1.00));
        assert!(money.is_negative());
    }

    #[rstest]
    #[case(dec!(0), "$0.00")]
    #[case(dec!(5), "$5.00")]
    #[case(dec!(999.9), "$999.90")]
    #[case(dec!(1000), "$1,000.00")]
    #[case(dec!(1100), "$1,100.00")]
    #[case(dec!(1234567.891), "$1,234,567.89")]
    #[case(dec!(0.005), "$0.01")]
    #[case(dec!(-1250.5), "-$1,250.50")]
    #[case(dec!(-0.001), "$0.00")]
    fn test_format_with_dollar(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(Money::new(amount).format_with("$"), expected);
    }

    #[test]
    fn test_format_with_other_symbol() {
        assert_eq!(Money::new(dec!(2500)).format_with("₱"), "₱2,500.00");
        assert_eq!(Money::new(dec!(12)).format_with(""), "12.00");
    }

    #[test]
    fn test_checked_add() {
        let total = Money::new(dec!(10.50)).checked_add(Money::new(dec!(0.25)));
        assert_eq!(total, Some(Money::new(dec!(10.75))));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::new(Decimal::ONE)), None);
        assert_eq!(max.checked_add(Money::zero()), Some(max));
    }

    #[test]
    fn test_format_with_largest_amount() {
        let formatted = Money::new(Decimal::MAX).format_with("$");
        assert!(formatted.starts_with("$79,228,162,514,264,337,593,543,950,335"));
    }
}

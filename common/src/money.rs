//! [`Money`]-related definitions.

use std::{cmp::Ordering, fmt, ops, str::FromStr};

use rust_decimal::{prelude::ToPrimitive as _, Decimal};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new zero [`Money`] amount in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Adds the `other` [`Money`] to this one.
    ///
    /// [`None`] is returned if the [`Currency`]ies differ: amounts in
    /// different currencies are never coerced.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        (self.currency == other.currency).then(|| Self {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }
}

impl PartialOrd for Money {
    /// Compares two [`Money`] amounts.
    ///
    /// Amounts in different [`Currency`]ies are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency)
            .then(|| self.amount.cmp(&other.amount))
    }
}

impl ops::Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        Self {
            amount: self.amount * Decimal::from(rhs),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self;
        if amount.is_integer() {
            write!(f, "{}{currency}", amount.to_i128().expect("integer"))
        } else {
            write!(f, "{amount}{currency}")
        }
    }
}

impl FromStr for Money {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() < 4 {
            return Err("too short");
        }

        let (amount, currency) =
            s.split_at_checked(s.len() - 3).ok_or("invalid currency")?;
        let amount = Decimal::from_str(amount).map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

impl TryFrom<String> for Money {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_str(&s)
    }
}

impl From<Money> for String {
    fn from(money: Money) -> Self {
        money.to_string()
    }
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Moroccan Dirham."]
        Mad = 1,

        #[doc = "US Dollar."]
        Usd = 2,

        #[doc = "Euro."]
        Eur = 3,
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn mad(s: &str) -> Money {
        Money {
            amount: decimal(s),
            currency: Currency::Mad,
        }
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("123.45USD").unwrap(),
            Money {
                amount: decimal("123.45"),
                currency: Currency::Usd,
            },
        );
        assert_eq!(Money::from_str("1200MAD").unwrap(), mad("1200"));
        assert!(Money::from_str("12").is_err());
        assert!(Money::from_str("12XYZ").is_err());
        // Multibyte input must not split inside a character.
        assert!(Money::from_str("1€2").is_err());
        assert!(Money::from_str("€€€€").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(mad("1200").to_string(), "1200MAD");
        assert_eq!(mad("1200.50").to_string(), "1200.50MAD");
    }

    #[test]
    fn scales_by_nights() {
        assert_eq!(mad("1200") * 3, mad("3600"));
    }

    #[test]
    fn refuses_mixed_currency_addition() {
        let usd = Money {
            amount: decimal("1"),
            currency: Currency::Usd,
        };
        assert_eq!(mad("1").checked_add(mad("2")), Some(mad("3")));
        assert_eq!(mad("1").checked_add(usd), None);
    }

    #[test]
    fn refuses_mixed_currency_comparison() {
        let usd = Money {
            amount: decimal("1"),
            currency: Currency::Usd,
        };
        assert!(mad("1") < mad("2"));
        assert_eq!(mad("1").partial_cmp(&usd), None);
    }
}

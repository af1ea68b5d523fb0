use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::StatementError;

/// Monetary amount with exact decimal arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_decimal(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn add(&self, other: Amount) -> Self {
        Self(self.0 + other.0)
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

// Trailing zeros are dropped: 6.0 prints as "6", 7.50 as "7.5".
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// Serialized as the displayed decimal string so JSON output matches text output.
impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Pricing category of a rented title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Regular,
    Children,
    NewRelease,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Regular, Category::Children, Category::NewRelease];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Regular => "regular",
            Category::Children => "children",
            Category::NewRelease => "new_release",
        }
    }

    pub fn tariff(&self) -> Tariff {
        match self {
            Category::Regular => PricingRules::REGULAR,
            Category::Children => PricingRules::CHILDREN,
            Category::NewRelease => PricingRules::NEW_RELEASE,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "regular" => Ok(Category::Regular),
            "children" => Ok(Category::Children),
            "newrelease" => Ok(Category::NewRelease),
            _ => {
                let expected: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
                Err(StatementError::invalid_argument(format!(
                    "unknown rental category '{}', expected one of: {}",
                    s,
                    expected.join(", ")
                )))
            }
        }
    }
}

/// Price rule for one category: `base + max(0, days - free_days) * per_extra_day`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub base: Decimal,
    pub free_days: u32,
    pub per_extra_day: Decimal,
}

impl Tariff {
    pub fn price(&self, days_rented: u32) -> Amount {
        let extra_days = Decimal::from(days_rented.saturating_sub(self.free_days));
        Amount::from_decimal(self.base).add(Amount::from_decimal(self.per_extra_day * extra_days))
    }
}

/// Pricing constants and business rules
pub struct PricingRules;

impl PricingRules {
    pub const REGULAR: Tariff = Tariff {
        base: dec!(2),
        free_days: 2,
        per_extra_day: dec!(1.5),
    };

    pub const CHILDREN: Tariff = Tariff {
        base: dec!(1.5),
        free_days: 3,
        per_extra_day: dec!(1.5),
    };

    // No base charge; every day is billed.
    pub const NEW_RELEASE: Tariff = Tariff {
        base: dec!(0),
        free_days: 0,
        per_extra_day: dec!(3),
    };

    pub const BASE_POINTS: u32 = 1;
    pub const NEW_RELEASE_BONUS_POINTS: u32 = 1;
    /// A new release earns the bonus when rented for more than this many days.
    pub const NEW_RELEASE_BONUS_AFTER_DAYS: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_display_is_normalized() {
        assert_eq!(Amount::from_decimal(dec!(6.0)).to_string(), "6");
        assert_eq!(Amount::from_decimal(dec!(7.50)).to_string(), "7.5");
        assert_eq!(Amount::zero().to_string(), "0");
    }

    #[test]
    fn test_amount_arithmetic() {
        let sum = Amount::from_decimal(dec!(1.5)).add(Amount::from_decimal(dec!(6)));
        assert_eq!(sum.as_decimal(), dec!(7.5));
    }

    #[test]
    fn test_amount_serializes_as_display_string() {
        let json = serde_json::to_string(&Amount::from_decimal(dec!(6.0))).unwrap();
        assert_eq!(json, "\"6\"");
        let json = serde_json::to_string(&Amount::from_decimal(dec!(7.50))).unwrap();
        assert_eq!(json, "\"7.5\"");
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("regular".parse::<Category>().unwrap(), Category::Regular);
        assert_eq!("Children".parse::<Category>().unwrap(), Category::Children);
        assert_eq!("new_release".parse::<Category>().unwrap(), Category::NewRelease);
        assert_eq!("New Release".parse::<Category>().unwrap(), Category::NewRelease);
        assert_eq!("new-release".parse::<Category>().unwrap(), Category::NewRelease);
    }

    #[test]
    fn test_unknown_category_is_invalid_argument() {
        let err = "documentary".parse::<Category>().unwrap_err();
        assert!(matches!(err, StatementError::InvalidArgument { .. }));
        assert!(err
            .to_string()
            .contains("expected one of: regular, children, new_release"));
    }

    #[test]
    fn test_category_round_trips_through_as_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_tariff_thresholds() {
        assert_eq!(PricingRules::REGULAR.price(2).as_decimal(), dec!(2));
        assert_eq!(PricingRules::REGULAR.price(3).as_decimal(), dec!(3.5));
        assert_eq!(PricingRules::CHILDREN.price(3).as_decimal(), dec!(1.5));
        assert_eq!(PricingRules::CHILDREN.price(4).as_decimal(), dec!(3));
        assert_eq!(PricingRules::NEW_RELEASE.price(0).as_decimal(), dec!(0));
        assert_eq!(PricingRules::NEW_RELEASE.price(4).as_decimal(), dec!(12));
    }
}

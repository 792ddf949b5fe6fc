//! Non-negative decimal value objects (price, weight).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use depot_core::{DomainError, ValueObject};

/// Product price in the catalog's currency unit (non-negative).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

/// Heaviest accepted shipping weight, in kilograms.
const MAX_WEIGHT_KG: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Shipping weight in kilograms (non-negative, at most [`Weight::MAX`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Weight(Decimal);

macro_rules! impl_non_negative_decimal {
    ($t:ty, $what:literal, $max:expr) => {
        impl $t {
            /// Validate and wrap an amount. Negative or over-limit amounts are rejected.
            pub fn new(amount: Decimal) -> Result<Self, DomainError> {
                if amount.is_sign_negative() && !amount.is_zero() {
                    return Err(DomainError::invalid_argument(format!(
                        "{} cannot be negative (got {amount})",
                        $what
                    )));
                }
                let max: Option<Decimal> = $max;
                if let Some(max) = max.filter(|max| amount > *max) {
                    return Err(DomainError::invalid_argument(format!(
                        "{} cannot exceed {max} (got {amount})",
                        $what
                    )));
                }
                Ok(Self(amount))
            }

            pub fn amount(&self) -> Decimal {
                self.0
            }
        }

        impl ValueObject for $t {}

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl TryFrom<Decimal> for $t {
            type Error = DomainError;

            fn try_from(value: Decimal) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_non_negative_decimal!(Price, "price", None);
impl_non_negative_decimal!(Weight, "weight", Some(MAX_WEIGHT_KG));

impl Weight {
    pub const MAX: Weight = Weight(MAX_WEIGHT_KG);
}

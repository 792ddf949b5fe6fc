//! Product capabilities.
//!
//! A capability is a behavior a product variant opts into. Callers ask a
//! product for a capability (`Product::shippable`, `Product::perishable`)
//! instead of inspecting its concrete variant.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Weight;

/// Can be physically shipped.
pub trait Shippable: Send + Sync {
    fn weight(&self) -> Weight;

    /// Shipping cost in the catalog's currency unit.
    fn shipping_cost(&self) -> Decimal;
}

/// Goes bad (or lapses) after a given date.
pub trait Perishable: Send + Sync {
    /// Last day on which the product is still good.
    fn expires_on(&self) -> NaiveDate;

    /// Expired once `today` is strictly after the expiry date.
    fn is_expired_on(&self, today: NaiveDate) -> bool {
        today > self.expires_on()
    }

    /// Expiry check against the current UTC date.
    fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }
}

/// Which capabilities a product satisfies.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub shippable: bool,
    pub perishable: bool,
}

use std::sync::{PoisonError, RwLock};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use depot_core::{DomainError, DomainResult, ProductId};

use crate::capability::{Capabilities, Perishable, Shippable};
use crate::category::Category;
use crate::money::{Price, Weight};

const ELECTRONICS_BASE_SHIPPING: Decimal = Decimal::from_parts(79, 0, 0, false, 0);
const ELECTRONICS_HEAVY_SURCHARGE: Decimal = Decimal::from_parts(49, 0, 0, false, 0);
/// Strictly above this weight (kg) electronics pay the surcharge.
const ELECTRONICS_HEAVY_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 1);
const FOOD_SHIPPING_PER_KG: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// Electronics: warrantied, shippable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Electronics {
    warranty_months: u32,
    weight: Weight,
}

impl Electronics {
    pub fn new(warranty_months: u32, weight: Decimal) -> DomainResult<Self> {
        Ok(Self {
            warranty_months,
            weight: Weight::new(weight)?,
        })
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl Shippable for Electronics {
    fn weight(&self) -> Weight {
        self.weight
    }

    fn shipping_cost(&self) -> Decimal {
        if self.weight.amount() > ELECTRONICS_HEAVY_THRESHOLD {
            ELECTRONICS_BASE_SHIPPING + ELECTRONICS_HEAVY_SURCHARGE
        } else {
            ELECTRONICS_BASE_SHIPPING
        }
    }
}

/// Food: shippable and perishable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Food {
    expires_on: NaiveDate,
    weight: Weight,
}

impl Food {
    pub fn new(expires_on: NaiveDate, weight: Decimal) -> DomainResult<Self> {
        Ok(Self {
            expires_on,
            weight: Weight::new(weight)?,
        })
    }
}

impl Shippable for Food {
    fn weight(&self) -> Weight {
        self.weight
    }

    fn shipping_cost(&self) -> Decimal {
        self.weight.amount() * FOOD_SHIPPING_PER_KG
    }
}

impl Perishable for Food {
    fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }
}

/// Gift voucher: lapses, never shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Voucher {
    valid_until: NaiveDate,
}

impl Voucher {
    pub fn new(valid_until: NaiveDate) -> Self {
        Self { valid_until }
    }
}

impl Perishable for Voucher {
    fn expires_on(&self) -> NaiveDate {
        self.valid_until
    }
}

/// Downloadable good: no capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Digital {
    download_url: String,
}

impl Digital {
    pub fn new(download_url: impl Into<String>) -> DomainResult<Self> {
        let download_url = download_url.into();
        if download_url.trim().is_empty() {
            return Err(DomainError::invalid_argument("download URL cannot be empty"));
        }
        Ok(Self { download_url })
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }
}

/// Variant-specific data. Shared fields live on [`Product`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProductKind {
    Electronics(Electronics),
    Food(Food),
    Voucher(Voucher),
    Digital(Digital),
}

impl From<Electronics> for ProductKind {
    fn from(value: Electronics) -> Self {
        ProductKind::Electronics(value)
    }
}

impl From<Food> for ProductKind {
    fn from(value: Food) -> Self {
        ProductKind::Food(value)
    }
}

impl From<Voucher> for ProductKind {
    fn from(value: Voucher) -> Self {
        ProductKind::Voucher(value)
    }
}

impl From<Digital> for ProductKind {
    fn from(value: Digital) -> Self {
        ProductKind::Digital(value)
    }
}

/// Input for [`Product::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub kind: ProductKind,
}

/// Catalog product.
///
/// Identity, name, category and variant data are fixed at creation. The price
/// sits behind its own lock so a product shared as `Arc<Product>` can be
/// repriced in place; concurrent writers race and the last one wins.
#[derive(Debug)]
pub struct Product {
    id: ProductId,
    name: String,
    category: Category,
    price: RwLock<Price>,
    kind: ProductKind,
}

impl Product {
    pub fn create(new: NewProduct) -> DomainResult<Self> {
        if new.name.trim().is_empty() {
            return Err(DomainError::invalid_argument("name cannot be empty"));
        }
        let price = Price::new(new.price)?;

        Ok(Self {
            id: new.id,
            name: new.name,
            category: new.category,
            price: RwLock::new(price),
            kind: new.kind,
        })
    }

    /// Stable for the product's lifetime.
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn price(&self) -> Price {
        *self.price.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reprice the product. Negative amounts fail and leave the price as is.
    pub fn set_price(&self, amount: Decimal) -> DomainResult<()> {
        let price = Price::new(amount)?;
        *self.price.write().unwrap_or_else(PoisonError::into_inner) = price;
        Ok(())
    }

    pub fn shippable(&self) -> Option<&dyn Shippable> {
        match &self.kind {
            ProductKind::Electronics(e) => Some(e),
            ProductKind::Food(f) => Some(f),
            ProductKind::Voucher(_) | ProductKind::Digital(_) => None,
        }
    }

    pub fn perishable(&self) -> Option<&dyn Perishable> {
        match &self.kind {
            ProductKind::Food(f) => Some(f),
            ProductKind::Voucher(v) => Some(v),
            ProductKind::Electronics(_) | ProductKind::Digital(_) => None,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            shippable: self.shippable().is_some(),
            perishable: self.perishable().is_some(),
        }
    }

    /// One-line, variant-specific description.
    pub fn details(&self) -> String {
        match &self.kind {
            ProductKind::Electronics(e) => format!(
                "Electronics: {}, Warranty: {} months",
                self.name,
                e.warranty_months()
            ),
            ProductKind::Food(f) => format!("Food: {}, Expires: {}", self.name, f.expires_on),
            ProductKind::Voucher(v) => {
                format!("Voucher: {}, Valid until: {}", self.name, v.valid_until)
            }
            ProductKind::Digital(d) => {
                format!("Digital: {}, Download: {}", self.name, d.download_url())
            }
        }
    }

    /// Point-in-time copy of the product's fields, for reports.
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            price: self.price(),
            details: self.details(),
            capabilities: self.capabilities(),
            kind: self.kind.clone(),
        }
    }
}

/// Serializable view of a [`Product`] at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    pub details: String,
    pub capabilities: Capabilities,
    pub kind: ProductKind,
}

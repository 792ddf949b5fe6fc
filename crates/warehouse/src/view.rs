//! Capability views returned by the warehouse's filtering queries.
//!
//! A view pairs the shared product with the capability data read at the time
//! the view was built. Capability data is immutable per variant, so the copy
//! never goes stale; the price still reads through to the live product.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use depot_core::ProductId;
use depot_products::{Perishable, Product, Shippable, Weight};

/// A product known to be shippable.
#[derive(Debug, Clone)]
pub struct ShippableItem {
    product: Arc<Product>,
    weight: Weight,
    shipping_cost: Decimal,
}

impl ShippableItem {
    /// `None` when the product has no shippable capability.
    pub fn from_product(product: Arc<Product>) -> Option<Self> {
        let (weight, shipping_cost) = {
            let shippable = product.shippable()?;
            (shippable.weight(), shippable.shipping_cost())
        };
        Some(Self {
            product,
            weight,
            shipping_cost,
        })
    }

    pub fn id(&self) -> ProductId {
        self.product.id()
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }
}

impl Shippable for ShippableItem {
    fn weight(&self) -> Weight {
        self.weight
    }

    fn shipping_cost(&self) -> Decimal {
        self.shipping_cost
    }
}

/// A product known to be perishable.
#[derive(Debug, Clone)]
pub struct PerishableItem {
    product: Arc<Product>,
    expires_on: NaiveDate,
}

impl PerishableItem {
    /// `None` when the product has no perishable capability.
    pub fn from_product(product: Arc<Product>) -> Option<Self> {
        let expires_on = product.perishable()?.expires_on();
        Some(Self {
            product,
            expires_on,
        })
    }

    pub fn id(&self) -> ProductId {
        self.product.id()
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }
}

impl Perishable for PerishableItem {
    fn expires_on(&self) -> NaiveDate {
        self.expires_on
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_products::{Category, Digital, Electronics, NewProduct, Voucher};

    fn product(kind: depot_products::ProductKind) -> Arc<Product> {
        Arc::new(
            Product::create(NewProduct {
                id: ProductId::new(),
                name: "Item".to_string(),
                category: Category::Toys,
                price: Decimal::TEN,
                kind,
            })
            .unwrap(),
        )
    }

    #[test]
    fn shippable_view_copies_capability_data() {
        let laptop = product(Electronics::new(12, Decimal::new(70, 1)).unwrap().into());
        let view = ShippableItem::from_product(laptop.clone()).unwrap();

        assert_eq!(view.id(), laptop.id());
        assert_eq!(view.weight().amount(), Decimal::new(70, 1));
        assert_eq!(view.shipping_cost(), Decimal::from(128));
        assert!(Arc::ptr_eq(view.product(), &laptop));
    }

    #[test]
    fn views_reject_products_without_the_capability() {
        let ebook = product(Digital::new("https://example.com/book").unwrap().into());
        assert!(ShippableItem::from_product(ebook.clone()).is_none());
        assert!(PerishableItem::from_product(ebook).is_none());
    }

    #[test]
    fn perishable_view_reports_expiry() {
        let until = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        let voucher = product(Voucher::new(until).into());
        let view = PerishableItem::from_product(voucher).unwrap();

        assert_eq!(view.expires_on(), until);
        assert!(view.is_expired_on(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()));
    }
}

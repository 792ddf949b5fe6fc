//! Stocks a warehouse with a small sample catalog, exercises the warehouse
//! operations and prints a JSON report of the resulting state.
//!
//! Configuration (environment):
//! - `DEPOT_WAREHOUSE`: warehouse name (default `main`)
//! - `DEPOT_LOG_FORMAT`: `json` or `text` (default `json`)
//! - `RUST_LOG`: log filter (default `info`)

use std::collections::BTreeMap;

use anyhow::Context;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use depot_core::ProductId;
use depot_observability::{LogConfig, LogFormat};
use depot_products::{
    Category, Digital, Electronics, Food, NewProduct, Perishable, Product, ProductSnapshot,
    Shippable, Voucher,
};
use depot_warehouse::get_instance;

const DEFAULT_WAREHOUSE: &str = "main";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
struct DemoConfig {
    warehouse: String,
    log: LogConfig,
}

impl DemoConfig {
    fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let format = match lookup("DEPOT_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(anyhow::Error::msg)
                .context("invalid DEPOT_LOG_FORMAT")?,
            None => LogFormat::default(),
        };
        Ok(Self {
            warehouse: lookup("DEPOT_WAREHOUSE").unwrap_or_else(|| DEFAULT_WAREHOUSE.to_string()),
            log: LogConfig {
                default_filter: DEFAULT_LOG_FILTER.to_string(),
                format,
            },
        })
    }
}

#[derive(Debug, Serialize)]
struct ShippingLine {
    id: ProductId,
    weight: Decimal,
    cost: Decimal,
}

#[derive(Debug, Serialize)]
struct ExpiredLine {
    id: ProductId,
    expires_on: NaiveDate,
}

#[derive(Debug, Serialize)]
struct Report {
    warehouse: String,
    products: Vec<ProductSnapshot>,
    changed: Vec<ProductId>,
    by_category: BTreeMap<Category, Vec<String>>,
    shipping: Vec<ShippingLine>,
    expired: Vec<ExpiredLine>,
}

fn sample_catalog() -> anyhow::Result<Vec<Product>> {
    let today = Utc::now().date_naive();

    let catalog = vec![
        NewProduct {
            id: ProductId::new(),
            name: "Workstation".to_string(),
            category: Category::Electronics,
            price: Decimal::from(100),
            kind: Electronics::new(24, Decimal::new(60, 1))?.into(),
        },
        NewProduct {
            id: ProductId::new(),
            name: "Headphones".to_string(),
            category: Category::Electronics,
            price: Decimal::from(60),
            kind: Electronics::new(12, Decimal::new(30, 1))?.into(),
        },
        NewProduct {
            id: ProductId::new(),
            name: "Yoghurt".to_string(),
            category: Category::Food,
            price: Decimal::new(249, 2),
            kind: Food::new(today - Duration::days(2), Decimal::new(5, 1))?.into(),
        },
        NewProduct {
            id: ProductId::new(),
            name: "Toy store voucher".to_string(),
            category: Category::Toys,
            price: Decimal::from(25),
            kind: Voucher::new(today + Duration::days(90)).into(),
        },
        NewProduct {
            id: ProductId::new(),
            name: "The Rust Book".to_string(),
            category: Category::Books,
            price: Decimal::from(30),
            kind: Digital::new("https://example.com/rust-book.epub")?.into(),
        },
    ];

    catalog
        .into_iter()
        .map(|p| Product::create(p).context("invalid sample product"))
        .collect()
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env()?;
    depot_observability::init(&config.log);
    tracing::info!(warehouse = %config.warehouse, format = ?config.log.format, "starting");

    let warehouse = get_instance(&config.warehouse).context("failed to open warehouse")?;

    let catalog = sample_catalog()?;
    let ids: Vec<ProductId> = catalog.iter().map(Product::id).collect();
    for product in catalog {
        warehouse.add_product(product);
    }

    // Reprice the workstation, drop the headphones.
    warehouse.update_product_price(&ids[0], Decimal::from(150))?;
    warehouse.remove(&ids[1]);

    let by_category = warehouse
        .products_grouped_by_category()
        .into_iter()
        .map(|(category, products)| {
            let names = products.iter().map(|p| p.name().to_string()).collect();
            (category, names)
        })
        .collect();

    let report = Report {
        warehouse: warehouse.name().to_string(),
        products: warehouse.products().iter().map(|p| p.snapshot()).collect(),
        changed: warehouse
            .changed_products()
            .iter()
            .map(|p| p.id())
            .collect(),
        by_category,
        shipping: warehouse
            .shippable_products()
            .iter()
            .map(|item| ShippingLine {
                id: item.id(),
                weight: item.weight().amount(),
                cost: item.shipping_cost(),
            })
            .collect(),
        expired: warehouse
            .expired_products()
            .iter()
            .map(|item| ExpiredLine {
                id: item.id(),
                expires_on: item.expires_on(),
            })
            .collect(),
    };

    tracing::info!(
        warehouse = %report.warehouse,
        products = report.products.len(),
        expired = report.expired.len(),
        "report ready"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

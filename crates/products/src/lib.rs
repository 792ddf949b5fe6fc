//! Products domain module.
//!
//! The catalog's product variant set: shared identity/pricing fields, the
//! per-variant data, and the `Shippable` / `Perishable` capabilities that the
//! warehouse filters on. Pure domain logic (no IO, no storage).

pub mod capability;
pub mod category;
pub mod money;
pub mod product;

pub use capability::{Capabilities, Perishable, Shippable};
pub use category::Category;
pub use money::{Price, Weight};
pub use product::{
    Digital, Electronics, Food, NewProduct, Product, ProductKind, ProductSnapshot, Voucher,
};

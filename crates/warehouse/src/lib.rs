//! Warehouse module: named, process-wide product stores with change tracking.
//!
//! Callers obtain a [`Warehouse`] by name through [`get_instance`]; every
//! lookup with the same name returns the same shared instance for the
//! lifetime of the process.

pub mod registry;
pub mod view;
pub mod warehouse;

pub use registry::{WarehouseRegistry, get_instance};
pub use view::{PerishableItem, ShippableItem};
pub use warehouse::Warehouse;

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use depot_core::{DomainError, DomainResult, ProductId};
use depot_products::{Category, Perishable, Product};

use crate::registry::WarehouseRegistry;
use crate::view::{PerishableItem, ShippableItem};

/// Named in-memory product store with change tracking.
///
/// `inventory` and `changed_items` are locked independently and never held
/// together, so an observer can see an id in one but not yet (or no longer)
/// in the other. [`Warehouse::changed_products`] only reports ids that are
/// still in the inventory.
#[derive(Debug)]
pub struct Warehouse {
    name: String,
    inventory: RwLock<HashMap<ProductId, Arc<Product>>>,
    changed_items: RwLock<HashSet<ProductId>>,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl Warehouse {
    /// Only the registry creates warehouses.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            inventory: RwLock::new(HashMap::new()),
            changed_items: RwLock::new(HashSet::new()),
        }
    }

    /// Registry lookup; see [`WarehouseRegistry::get_instance`].
    pub fn get_instance(name: &str) -> DomainResult<Arc<Warehouse>> {
        WarehouseRegistry::global().get_instance(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert `product` unless its id is already stocked (first writer wins).
    ///
    /// Returns `true` when the product was inserted. A duplicate id leaves both
    /// the inventory and the change set untouched.
    pub fn add_product(&self, product: impl Into<Arc<Product>>) -> bool {
        let product = product.into();
        let id = product.id();

        let inserted = match write(&self.inventory).entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(product);
                true
            }
        };

        if inserted {
            write(&self.changed_items).insert(id);
            tracing::debug!(warehouse = %self.name, product_id = %id, "product added");
        } else {
            tracing::debug!(warehouse = %self.name, product_id = %id, "duplicate product ignored");
        }

        inserted
    }

    pub fn products(&self) -> Vec<Arc<Product>> {
        read(&self.inventory).values().cloned().collect()
    }

    pub fn product_by_id(&self, id: &ProductId) -> Option<Arc<Product>> {
        read(&self.inventory).get(id).cloned()
    }

    /// Group the current inventory by category. Computed fresh on every call.
    pub fn products_grouped_by_category(&self) -> BTreeMap<Category, Vec<Arc<Product>>> {
        let mut groups: BTreeMap<Category, Vec<Arc<Product>>> = BTreeMap::new();
        for product in read(&self.inventory).values() {
            groups
                .entry(product.category())
                .or_default()
                .push(Arc::clone(product));
        }
        groups
    }

    /// Empty the inventory and the change set of the registered instance
    /// for this warehouse's name. The warehouse stays registered.
    pub fn clear_products(&self) {
        match WarehouseRegistry::global().lookup(&self.name) {
            Some(registered) => registered.clear_containers(),
            None => self.clear_containers(),
        }
    }

    fn clear_containers(&self) {
        write(&self.inventory).clear();
        write(&self.changed_items).clear();
        tracing::debug!(warehouse = %self.name, "products cleared");
    }

    pub fn is_empty(&self) -> bool {
        read(&self.inventory).is_empty()
    }

    pub fn len(&self) -> usize {
        read(&self.inventory).len()
    }

    /// Reprice a stocked product and mark it changed.
    ///
    /// Fails with `NotFound` before touching anything if `id` is not stocked.
    /// A negative price fails in the product's own setter; the id is then not
    /// marked.
    pub fn update_product_price(&self, id: &ProductId, new_price: Decimal) -> DomainResult<()> {
        let product = self
            .product_by_id(id)
            .ok_or_else(|| DomainError::not_found(format!("product with id {id}")))?;

        product.set_price(new_price)?;
        write(&self.changed_items).insert(*id);

        tracing::debug!(
            warehouse = %self.name,
            product_id = %id,
            price = %new_price,
            "product price updated"
        );
        Ok(())
    }

    /// Products added or repriced since the last clear that are still stocked.
    pub fn changed_products(&self) -> Vec<Arc<Product>> {
        let changed: Vec<ProductId> = read(&self.changed_items).iter().copied().collect();
        let inventory = read(&self.inventory);
        changed
            .iter()
            .filter_map(|id| inventory.get(id).cloned())
            .collect()
    }

    /// Perishable products that are expired as of today (UTC).
    pub fn expired_products(&self) -> Vec<PerishableItem> {
        self.expired_products_on(Utc::now().date_naive())
    }

    pub fn expired_products_on(&self, today: NaiveDate) -> Vec<PerishableItem> {
        read(&self.inventory)
            .values()
            .filter_map(|p| PerishableItem::from_product(Arc::clone(p)))
            .filter(|item| item.is_expired_on(today))
            .collect()
    }

    pub fn shippable_products(&self) -> Vec<ShippableItem> {
        read(&self.inventory)
            .values()
            .filter_map(|p| ShippableItem::from_product(Arc::clone(p)))
            .collect()
    }

    /// Remove `id` from the inventory and, unconditionally, from the change set.
    pub fn remove(&self, id: &ProductId) -> Option<Arc<Product>> {
        let removed = write(&self.inventory).remove(id);
        write(&self.changed_items).remove(id);

        if removed.is_some() {
            tracing::debug!(warehouse = %self.name, product_id = %id, "product removed");
        }
        removed
    }
}

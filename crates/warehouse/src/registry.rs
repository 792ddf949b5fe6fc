use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use depot_core::{DomainError, DomainResult};

use crate::warehouse::Warehouse;

static REGISTRY: LazyLock<WarehouseRegistry> = LazyLock::new(WarehouseRegistry::new);

/// Process-wide name → warehouse mapping.
///
/// Starts empty, grows lazily on first lookup of each name and never shrinks:
/// an entry, once created, is the only instance for that name until the
/// process exits.
#[derive(Debug)]
pub struct WarehouseRegistry {
    warehouses: RwLock<HashMap<String, Arc<Warehouse>>>,
}

impl WarehouseRegistry {
    fn new() -> Self {
        Self {
            warehouses: RwLock::new(HashMap::new()),
        }
    }

    pub fn global() -> &'static WarehouseRegistry {
        &REGISTRY
    }

    /// Return the warehouse registered under `name`, creating it if absent.
    pub fn get_instance(&self, name: &str) -> DomainResult<Arc<Warehouse>> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("warehouse name must be provided"));
        }

        if let Some(existing) = self.lookup(name) {
            return Ok(existing);
        }

        // Re-check under the write lock: another thread may have won the race.
        let mut warehouses = self
            .warehouses
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let warehouse = warehouses
            .entry(name.to_string())
            .or_insert_with(|| {
                tracing::info!(warehouse = %name, "warehouse created");
                Arc::new(Warehouse::new(name))
            })
            .clone();

        Ok(warehouse)
    }

    /// Registered warehouse for `name`, without creating one.
    pub fn lookup(&self, name: &str) -> Option<Arc<Warehouse>> {
        self.warehouses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.warehouses
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

/// Shorthand for `WarehouseRegistry::global().get_instance(name)`.
pub fn get_instance(name: &str) -> DomainResult<Arc<Warehouse>> {
    WarehouseRegistry::global().get_instance(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depot_core::ProductId;

    fn unique_name(prefix: &str) -> String {
        format!("{prefix}-{}", ProductId::new())
    }

    #[test]
    fn same_name_returns_same_instance() {
        let name = unique_name("same");
        let first = get_instance(&name).unwrap();
        let second = get_instance(&name).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), name);
    }

    #[test]
    fn different_names_return_different_instances() {
        let a = get_instance(&unique_name("a")).unwrap();
        let b = get_instance(&unique_name("b")).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn blank_names_are_rejected() {
        for name in ["", "   ", "\t\n"] {
            match get_instance(name) {
                Err(DomainError::InvalidArgument(_)) => {}
                other => panic!("Expected InvalidArgument for {name:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn lookup_does_not_create() {
        let name = unique_name("lookup");
        assert!(WarehouseRegistry::global().lookup(&name).is_none());
        assert!(!WarehouseRegistry::global().names().contains(&name));

        let created = get_instance(&name).unwrap();
        let found = WarehouseRegistry::global().lookup(&name).unwrap();
        assert!(Arc::ptr_eq(&created, &found));
        assert!(WarehouseRegistry::global().names().contains(&name));
    }

    #[test]
    fn concurrent_first_access_creates_one_instance() {
        let name = unique_name("race");

        let instances: Vec<Arc<Warehouse>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| get_instance(&name).unwrap()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let first = &instances[0];
        assert!(instances.iter().all(|w| Arc::ptr_eq(w, first)));
    }
}

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use stockdesk_core::{DomainError, DomainResult, EntityId, Money};
use stockdesk_products::{NewProduct, Product, ProductId};
use stockdesk_sales::{Catalog, CommitError, SaleCommitter, SaleId, SaleItem, SaleRecord};

/// In-memory catalog + sales store.
///
/// Intended for tests/dev. One instance per process, created at startup and
/// passed down explicitly; it is never an ambient global.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    products: RwLock<HashMap<ProductId, Product>>,
    sales: RwLock<Vec<SaleRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new product under a fresh id.
    pub fn create_product(&self, input: NewProduct) -> DomainResult<Product> {
        let product = Product {
            id: ProductId::new(EntityId::new()),
            name: input.name,
            unit_price: input.unit_price,
            stock: input.stock,
        };

        let mut products = self.write_products()?;
        products.insert(product.id, product.clone());
        tracing::info!(product_id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replace the data of an existing product.
    pub fn update_product(&self, id: ProductId, input: NewProduct) -> DomainResult<Product> {
        let mut products = self.write_products()?;
        let slot = products.get_mut(&id).ok_or(DomainError::NotFound)?;
        slot.name = input.name;
        slot.unit_price = input.unit_price;
        slot.stock = input.stock;
        let updated = slot.clone();
        tracing::info!(product_id = %id, "product updated");
        Ok(updated)
    }

    /// Delete a product. Deleting an unknown id is `NotFound`.
    pub fn delete_product(&self, id: ProductId) -> DomainResult<()> {
        let mut products = self.write_products()?;
        if products.remove(&id).is_none() {
            return Err(DomainError::NotFound);
        }
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    pub fn get_product(&self, id: ProductId) -> Option<Product> {
        self.products.read().ok()?.get(&id).cloned()
    }

    /// Committed sales, oldest first.
    pub fn sales(&self) -> Vec<SaleRecord> {
        self.sales.read().map(|s| s.clone()).unwrap_or_default()
    }

    fn write_products(
        &self,
    ) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<ProductId, Product>>> {
        self.products
            .write()
            .map_err(|_| DomainError::conflict("product lock poisoned"))
    }
}

impl Catalog for InMemoryStore {
    /// Name-ordered product listing (id as tie-break for determinism).
    fn list(&self) -> Vec<Product> {
        let products = match self.products.read() {
            Ok(p) => p,
            Err(_) => return vec![],
        };
        let mut all: Vec<Product> = products.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        all
    }
}

impl SaleCommitter for InMemoryStore {
    /// All-or-nothing commit: every line is re-checked against current stock
    /// under one write lock before anything is decremented. Totals are priced
    /// from the store's own catalog, never from the client.
    async fn commit(&self, items: &[SaleItem]) -> Result<SaleRecord, CommitError> {
        if items.is_empty() {
            return Err(CommitError::EmptySale);
        }

        let mut products = self
            .products
            .write()
            .map_err(|_| CommitError::Storage("product lock poisoned".to_string()))?;

        // Validate against a scratch view so repeated product ids in the
        // payload cannot slip past the per-line check.
        let mut remaining: HashMap<ProductId, i64> = HashMap::new();
        let mut total = Money::ZERO;
        for item in items {
            let product = products
                .get(&item.product_id)
                .ok_or(CommitError::UnknownProduct(item.product_id))?;
            let available = remaining.entry(item.product_id).or_insert(product.stock);
            if item.quantity > (*available).max(0) as u64 {
                return Err(CommitError::OutOfStock {
                    product_id: item.product_id,
                    requested: item.quantity,
                    available: *available,
                });
            }
            *available -= item.quantity as i64;
            total = total + product.unit_price.times(item.quantity);
        }

        for item in items {
            if let Some(product) = products.get_mut(&item.product_id) {
                product.stock -= item.quantity as i64;
            }
        }

        let record = SaleRecord {
            id: SaleId::new(EntityId::new()),
            items: items.to_vec(),
            total,
            occurred_at: Utc::now(),
        };

        self.sales
            .write()
            .map_err(|_| CommitError::Storage("sales lock poisoned".to_string()))?
            .push(record.clone());

        tracing::info!(
            sale_id = %record.id,
            total = %record.total,
            lines = record.items.len(),
            "sale committed"
        );
        Ok(record)
    }
}

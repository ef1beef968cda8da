use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockdesk_core::Money;
use stockdesk_products::{Product, ProductId};

use crate::committer::SaleItem;

/// Draft line: a product snapshot plus the quantity being sold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    /// Unit price snapshotted when the product was first added.
    pub unit_price: Money,
    pub quantity: u64,
}

impl LineItem {
    /// Line total at the snapshotted unit price.
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// Failure modes of the draft itself (pre-submission, recoverable).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SaleDraftError {
    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    #[error("quantity must be positive")]
    InvalidQuantity,

    /// The merged quantity would exceed the stock listed in the catalog
    /// snapshot. The committer re-checks against live stock at submit time.
    #[error("requested {requested} of product {product_id}, {available} in stock")]
    InsufficientStock {
        product_id: ProductId,
        requested: u64,
        available: i64,
    },
}

/// In-memory draft of a pending sale.
///
/// Keyed by product id - adding a product that already has a line merges
/// quantities rather than duplicating. Insertion order is preserved for
/// display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDraft {
    lines: Vec<LineItem>,
}

impl SaleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn has_items(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Add `quantity` units of a product, merging with any existing line.
    ///
    /// The merged quantity is checked against the product's stock as listed
    /// in `catalog`; on any failure the draft is left untouched. Merging
    /// keeps the unit price snapshotted by the first add.
    pub fn add_line(
        &mut self,
        catalog: &[Product],
        product_id: ProductId,
        quantity: u64,
    ) -> Result<(), SaleDraftError> {
        if quantity == 0 {
            return Err(SaleDraftError::InvalidQuantity);
        }

        let product = catalog
            .iter()
            .find(|p| p.id == product_id)
            .ok_or(SaleDraftError::UnknownProduct(product_id))?;

        let existing = self.lines.iter().position(|l| l.product_id == product_id);
        let current = existing.map(|i| self.lines[i].quantity).unwrap_or(0);
        let requested = current.saturating_add(quantity);

        if requested > product.stock.max(0) as u64 {
            return Err(SaleDraftError::InsufficientStock {
                product_id,
                requested,
                available: product.stock,
            });
        }

        match existing {
            Some(i) => self.lines[i].quantity = requested,
            None => self.lines.push(LineItem {
                product_id,
                name: product.name.clone(),
                unit_price: product.unit_price,
                quantity,
            }),
        }

        Ok(())
    }

    /// Remove the line for `product_id`; removing an absent line is a no-op.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// `Σ unit_price × quantity` over all lines, recomputed on demand.
    pub fn total(&self) -> Money {
        self.lines.iter().map(LineItem::subtotal).sum()
    }

    /// Project the draft to the commit payload (product + quantity only).
    pub fn items(&self) -> Vec<SaleItem> {
        self.lines
            .iter()
            .map(|l| SaleItem {
                product_id: l.product_id,
                quantity: l.quantity,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

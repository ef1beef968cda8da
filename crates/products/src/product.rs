use serde::{Deserialize, Serialize};

use stockdesk_core::{EntityId, Money};

/// Product identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Stock-derived availability.
///
/// Recomputed from `stock` on every read and never stored, so it cannot
/// drift from the count it is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Pure derivation from a stock count.
    pub fn from_stock(stock: i64) -> Self {
        if stock <= 0 {
            StockStatus::OutOfStock
        } else {
            StockStatus::InStock
        }
    }

    /// Label for catalog views.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in stock",
            StockStatus::OutOfStock => "sold out",
        }
    }
}

/// Catalog entry: what the sale flow reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in smallest currency unit (e.g., cents).
    pub unit_price: Money,
    pub stock: i64,
}

impl Product {
    pub fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }

    /// Check if the product can be offered for sale.
    pub fn in_stock(&self) -> bool {
        self.status() == StockStatus::InStock
    }
}

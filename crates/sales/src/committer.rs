//! Collaborator seams of the sale flow.
//!
//! The draft builder only ever sees these traits. The authoritative stock and
//! price checks live on the other side of [`SaleCommitter::commit`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockdesk_core::{EntityId, Money};
use stockdesk_products::{Product, ProductId};

/// Sale identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaleId(pub EntityId);

impl SaleId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SaleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One sale position: product + quantity.
///
/// Prices are deliberately absent; the committer re-prices from its own
/// catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleItem {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// A sale accepted by the committer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: SaleId,
    pub items: Vec<SaleItem>,
    /// Total at the committer's (authoritative) prices.
    pub total: Money,
    pub occurred_at: DateTime<Utc>,
}

/// Commit failure, surfaced to the user as a retryable notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommitError {
    #[error("sale must contain at least one item")]
    EmptySale,

    #[error("product {0} is not in the catalog")]
    UnknownProduct(ProductId),

    /// Stock changed since the draft was built.
    #[error("requested {requested} of product {product_id}, {available} available")]
    OutOfStock {
        product_id: ProductId,
        requested: u64,
        available: i64,
    },

    #[error("storage failure: {0}")]
    Storage(String),
}

/// Read-only product listing, fetched once when a checkout session opens.
pub trait Catalog {
    fn list(&self) -> Vec<Product>;
}

impl<C> Catalog for Arc<C>
where
    C: Catalog + ?Sized,
{
    fn list(&self) -> Vec<Product> {
        (**self).list()
    }
}

/// The sole mutation boundary of the sale flow.
///
/// A commit is all-or-nothing: either every line is decremented and a record
/// is returned, or nothing changes and an error comes back.
#[allow(async_fn_in_trait)]
pub trait SaleCommitter {
    async fn commit(&self, items: &[SaleItem]) -> Result<SaleRecord, CommitError>;
}

impl<S> SaleCommitter for Arc<S>
where
    S: SaleCommitter + ?Sized,
{
    async fn commit(&self, items: &[SaleItem]) -> Result<SaleRecord, CommitError> {
        (**self).commit(items).await
    }
}

use thiserror::Error;

use stockdesk_core::Money;
use stockdesk_products::{Product, ProductId};

use crate::committer::{Catalog, CommitError, SaleCommitter, SaleRecord};
use crate::draft::{LineItem, SaleDraft, SaleDraftError};

/// Failure modes of [`CheckoutSession::submit`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The disabled submit action was bypassed; nothing was sent.
    #[error("draft is empty")]
    EmptyDraft,

    /// A previous submission has not completed.
    #[error("a commit is already in flight")]
    InFlight,

    #[error(transparent)]
    Commit(#[from] CommitError),
}

/// One sale-entry session: a catalog snapshot plus the draft being built.
///
/// The catalog is read once when the session opens and never re-fetched;
/// stock that changes afterwards is caught by the committer, not here. The
/// session is owned by a single logical thread of control and is discarded
/// when the entry UI closes or a submission succeeds.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    catalog: Vec<Product>,
    draft: SaleDraft,
    in_flight: bool,
}

impl CheckoutSession {
    pub fn open(catalog: &impl Catalog) -> Self {
        Self {
            catalog: catalog.list(),
            draft: SaleDraft::new(),
            in_flight: false,
        }
    }

    /// The catalog snapshot this session was opened with.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn line_items(&self) -> &[LineItem] {
        self.draft.lines()
    }

    pub fn total(&self) -> Money {
        self.draft.total()
    }

    /// Whether the submit action should be offered.
    pub fn can_commit(&self) -> bool {
        self.draft.has_items() && !self.in_flight
    }

    /// Whether a submission is outstanding.
    pub fn is_committing(&self) -> bool {
        self.in_flight
    }

    pub fn add_line(&mut self, product_id: ProductId, quantity: u64) -> Result<(), SaleDraftError> {
        self.draft.add_line(&self.catalog, product_id, quantity)
    }

    pub fn remove_line(&mut self, product_id: ProductId) {
        self.draft.remove_line(product_id);
    }

    /// Commit the draft as one atomic sale.
    ///
    /// Success clears the draft; failure leaves it intact so the user can
    /// retry without re-entering line items. Retrying is an explicit caller
    /// action; nothing here retries automatically. The returned future must
    /// be driven to completion - there is no cancellation, and a session
    /// whose submission was abandoned stays locked.
    pub async fn submit<S: SaleCommitter>(
        &mut self,
        committer: &S,
    ) -> Result<SaleRecord, SubmitError> {
        if self.in_flight {
            return Err(SubmitError::InFlight);
        }
        if self.draft.is_empty() {
            return Err(SubmitError::EmptyDraft);
        }

        self.in_flight = true;
        let result = committer.commit(&self.draft.items()).await;
        self.in_flight = false;

        match result {
            Ok(record) => {
                self.draft.clear();
                Ok(record)
            }
            Err(err) => Err(err.into()),
        }
    }
}

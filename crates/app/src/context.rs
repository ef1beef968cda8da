use std::sync::Arc;

use stockdesk_sales::CheckoutSession;
use stockdesk_store::InMemoryStore;

/// Process-wide application context.
///
/// Built once at startup and handed down by reference; nothing reaches for
/// an ambient global. Cloning shares the same underlying store.
#[derive(Debug, Clone)]
pub struct AppContext {
    store: Arc<InMemoryStore>,
}

impl AppContext {
    /// Initialize observability and construct the context.
    ///
    /// Call once per process; repeated calls are harmless but create
    /// independent stores.
    pub fn bootstrap() -> Self {
        stockdesk_observability::init();
        let context = Self {
            store: Arc::new(InMemoryStore::new()),
        };
        tracing::info!("application context initialized");
        context
    }

    /// The store behind both collaborator seams.
    pub fn store(&self) -> &Arc<InMemoryStore> {
        &self.store
    }

    /// Open a sale-entry session over the current catalog.
    pub fn open_checkout(&self) -> CheckoutSession {
        CheckoutSession::open(&self.store)
    }
}

//! Sales domain module.
//!
//! The sale draft builder and its checkout session live here, implemented
//! purely as deterministic domain logic behind collaborator seams (no IO,
//! no HTTP, no storage).

pub mod committer;
pub mod draft;
pub mod form;
pub mod session;

pub use committer::{Catalog, CommitError, SaleCommitter, SaleId, SaleItem, SaleRecord};
pub use draft::{LineItem, SaleDraft, SaleDraftError};
pub use form::{SaleEntry, SaleEntryForm, validate_sale_entry};
pub use session::{CheckoutSession, SubmitError};

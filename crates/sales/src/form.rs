//! Sale entry form validation (UI-agnostic).
//!
//! Malformed input is rejected here, before it ever reaches the draft; the
//! rendering layer maps [`FieldError`]s to whatever feedback it draws.

use stockdesk_core::{EntityId, FieldError};
use stockdesk_products::ProductId;

use crate::draft::SaleDraftError;

/// Raw input captured from the sale entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleEntryForm {
    pub product_id: String,
    pub quantity: String,
}

/// Validated sale entry, safe to hand to the draft.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SaleEntry {
    pub product_id: ProductId,
    pub quantity: u64,
}

/// Validate raw form input into a typed entry.
pub fn validate_sale_entry(form: &SaleEntryForm) -> Result<SaleEntry, FieldError> {
    let product_id = form
        .product_id
        .trim()
        .parse::<EntityId>()
        .map(ProductId::new)
        .map_err(|_| FieldError::new("productId", "a product must be selected"))?;

    let quantity: i64 = form
        .quantity
        .trim()
        .parse()
        .map_err(|_| FieldError::new("quantity", "quantity must be a whole number"))?;
    if quantity <= 0 {
        return Err(FieldError::new("quantity", "quantity must be positive"));
    }

    Ok(SaleEntry {
        product_id,
        quantity: quantity as u64,
    })
}

impl SaleDraftError {
    /// Map a draft failure to the form field it belongs to.
    pub fn into_field_error(self) -> FieldError {
        match self {
            SaleDraftError::UnknownProduct(_) => {
                FieldError::new("productId", "a product must be selected")
            }
            SaleDraftError::InvalidQuantity => {
                FieldError::new("quantity", "quantity must be positive")
            }
            SaleDraftError::InsufficientStock { .. } => {
                FieldError::new("quantity", "quantity unavailable in stock")
            }
        }
    }
}

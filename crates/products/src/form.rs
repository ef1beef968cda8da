//! Product form validation (UI-agnostic).

use stockdesk_core::{FieldError, Money};

/// Raw input captured from the product dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    /// Decimal currency text, e.g. `"49.90"`.
    pub unit_price: String,
    pub stock: String,
}

/// Validated product data, ready for the catalog store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub unit_price: Money,
    pub stock: i64,
}

/// Validate raw form input into typed product data.
///
/// The first failing field wins; the caller attaches the error to that field.
pub fn validate_product(form: &ProductForm) -> Result<NewProduct, FieldError> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err(FieldError::new("name", "name is required"));
    }

    let unit_price = Money::parse(form.unit_price.trim())
        .ok_or_else(|| FieldError::new("unitPrice", "price must be a decimal amount"))?;
    if unit_price.is_zero() {
        return Err(FieldError::new("unitPrice", "price must be positive"));
    }

    let stock: i64 = form
        .stock
        .trim()
        .parse()
        .map_err(|_| FieldError::new("stock", "stock must be a whole number"))?;
    if stock < 0 {
        return Err(FieldError::new("stock", "stock cannot be negative"));
    }

    Ok(NewProduct {
        name: name.to_string(),
        unit_price,
        stock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, unit_price: &str, stock: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            unit_price: unit_price.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        let validated = validate_product(&form("  Widget ", "49.90", "12")).unwrap();
        assert_eq!(validated.name, "Widget");
        assert_eq!(validated.unit_price, Money::from_cents(4990));
        assert_eq!(validated.stock, 12);
    }

    #[test]
    fn zero_stock_is_allowed() {
        let validated = validate_product(&form("Widget", "1.00", "0")).unwrap();
        assert_eq!(validated.stock, 0);
    }

    #[test]
    fn rejects_blank_name() {
        let err = validate_product(&form("   ", "1.00", "1")).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn rejects_malformed_price() {
        let err = validate_product(&form("Widget", "1,50", "1")).unwrap_err();
        assert_eq!(err.field, "unitPrice");
    }

    #[test]
    fn rejects_zero_price() {
        let err = validate_product(&form("Widget", "0.00", "1")).unwrap_err();
        assert_eq!(err.field, "unitPrice");
        assert_eq!(err.message, "price must be positive");
    }

    #[test]
    fn rejects_fractional_or_negative_stock() {
        let err = validate_product(&form("Widget", "1.00", "1.5")).unwrap_err();
        assert_eq!(err.field, "stock");
        let err = validate_product(&form("Widget", "1.00", "-1")).unwrap_err();
        assert_eq!(err.field, "stock");
        assert_eq!(err.message, "stock cannot be negative");
    }
}

//! Black-box checkout flow tests: product forms in, committed sales out.

use anyhow::Result;

use stockdesk_app::AppContext;
use stockdesk_core::Money;
use stockdesk_products::{ProductForm, StockStatus, validate_product};
use stockdesk_sales::{
    Catalog, CommitError, SaleEntryForm, SubmitError, validate_sale_entry,
};

fn product_form(name: &str, unit_price: &str, stock: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        unit_price: unit_price.to_string(),
        stock: stock.to_string(),
    }
}

fn seeded_context() -> Result<AppContext> {
    let context = AppContext::bootstrap();
    for (name, price, stock) in [("Widget", "10.00", "5"), ("Gadget", "2.50", "4")] {
        let input = validate_product(&product_form(name, price, stock))?;
        context.store().create_product(input)?;
    }
    Ok(context)
}

#[tokio::test]
async fn full_checkout_flow() -> Result<()> {
    let context = seeded_context()?;
    let mut session = context.open_checkout();

    // Catalog listing is name-ordered: Gadget before Widget.
    let catalog = session.catalog().to_vec();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].name, "Gadget");
    let widget = catalog[1].clone();

    // Form input goes through validation before touching the draft.
    let entry = validate_sale_entry(&SaleEntryForm {
        product_id: widget.id.to_string(),
        quantity: "3".to_string(),
    })?;
    session.add_line(entry.product_id, entry.quantity)?;

    assert_eq!(session.total(), Money::from_cents(3000));
    assert!(session.can_commit());

    let record = session.submit(context.store()).await?;

    assert_eq!(record.total, Money::from_cents(3000));
    assert!(session.line_items().is_empty());
    assert!(!session.can_commit());
    assert_eq!(context.store().sales(), vec![record]);
    assert_eq!(
        context.store().get_product(widget.id).unwrap().stock,
        2
    );
    Ok(())
}

#[tokio::test]
async fn draft_survives_a_commit_that_loses_the_stock_race() -> Result<()> {
    let context = seeded_context()?;

    // Two sessions share one catalog; the second buys the Widget stock out
    // from under the first.
    let mut first = context.open_checkout();
    let mut second = context.open_checkout();
    let widget = first.catalog()[1].clone();
    let gadget = first.catalog()[0].clone();

    first.add_line(widget.id, 4)?;
    first.add_line(gadget.id, 1)?;

    second.add_line(widget.id, 3)?;
    second.submit(context.store()).await?;

    let lines_before = first.line_items().to_vec();
    let err = first.submit(context.store()).await.unwrap_err();
    assert!(matches!(
        err,
        SubmitError::Commit(CommitError::OutOfStock { .. })
    ));

    // Nothing was decremented for the losing session and its draft is
    // intact, so retrying after dropping the stale line succeeds.
    assert_eq!(first.line_items(), lines_before.as_slice());
    assert_eq!(context.store().get_product(gadget.id).unwrap().stock, 4);

    first.remove_line(widget.id);
    let record = first.submit(context.store()).await?;
    assert_eq!(record.total, Money::from_cents(250));
    Ok(())
}

#[tokio::test]
async fn sold_out_products_read_as_out_of_stock() -> Result<()> {
    let context = seeded_context()?;
    let mut session = context.open_checkout();
    let gadget = session.catalog()[0].clone();

    session.add_line(gadget.id, 4)?;
    session.submit(context.store()).await?;

    let listed = context
        .store()
        .list()
        .into_iter()
        .find(|p| p.id == gadget.id)
        .unwrap();
    assert_eq!(listed.stock, 0);
    assert_eq!(listed.status(), StockStatus::OutOfStock);
    Ok(())
}

#[test]
fn insufficient_stock_surfaces_on_the_quantity_field() {
    let context = AppContext::bootstrap();
    let input = validate_product(&product_form("Widget", "10.00", "5")).unwrap();
    let widget = context.store().create_product(input).unwrap();

    let mut session = context.open_checkout();
    session.add_line(widget.id, 3).unwrap();

    let field = session
        .add_line(widget.id, 3)
        .unwrap_err()
        .into_field_error();
    assert_eq!(field.field, "quantity");
    assert_eq!(field.message, "quantity unavailable in stock");
}

#[test]
fn deleting_a_product_removes_it_from_later_sessions() {
    let context = AppContext::bootstrap();
    let input = validate_product(&product_form("Widget", "10.00", "5")).unwrap();
    let widget = context.store().create_product(input).unwrap();
    assert_eq!(context.store().list().len(), 1);

    context.store().delete_product(widget.id).unwrap();

    let session = context.open_checkout();
    assert!(session.catalog().is_empty());
}

//! End-to-end ordering through a session.

use pizza_commerce::prelude::*;

fn add(session: &mut Session, name: &str, size: Size, quantity: &str) -> LineItemId {
    session.select(name).unwrap();
    session.set_size(size);
    session.set_quantity(quantity);
    session.commit().unwrap()
}

#[test]
fn test_full_order_flow() {
    let mut session = Session::default();

    let small = add(&mut session, "BBQ Chicken", Size::Small, "1");
    add(&mut session, "BBQ Chicken", Size::Large, "1");
    assert_eq!(session.cart().total().unwrap(), Amount::new(1000));

    let order = session.checkout("Cash on Delivery").unwrap();

    assert_eq!(order.total(), Amount::new(1000));
    assert_eq!(order.payment_method(), "Cash on Delivery");
    assert_eq!(order.items()[0].id(), &small);
    assert!(session.cart().items().is_empty());
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.history().all()[0], order);
}

#[test]
fn test_history_is_isolated_from_cart() {
    let mut session = Session::default();
    add(&mut session, "Margherita", Size::Small, "2");
    let order = session.checkout("GCash").unwrap();
    let snapshot = session.history().all()[0].items().to_vec();

    let new_line = add(&mut session, "Pepperoni", Size::Large, "5");
    session.edit(&new_line).unwrap();
    session.set_quantity("6");
    session.commit().unwrap();

    let recorded = session.history().get(order.id()).unwrap();
    assert_eq!(recorded.items(), snapshot.as_slice());
    assert_eq!(recorded.items().len(), 1);
    assert_eq!(recorded.items()[0].item_name(), "Margherita");
    assert_eq!(recorded.total(), Amount::new(400));
}

#[test]
fn test_empty_checkout_leaves_history() {
    let mut session = Session::default();
    add(&mut session, "Hawaiian", Size::Medium, "1");
    session.checkout("GCash").unwrap();

    let err = session.checkout("GCash").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::EmptyCart);
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_history_is_chronological() {
    let mut session = Session::default();
    add(&mut session, "Hawaiian", Size::Small, "1");
    let first = session.checkout("GCash").unwrap();
    add(&mut session, "Spinach Dip", Size::Large, "2");
    let second = session.checkout("Cash on Delivery").unwrap();

    let ids: Vec<&OrderId> = session.history().all().iter().map(|o| o.id()).collect();
    assert_eq!(ids, vec![first.id(), second.id()]);
    assert!(first.placed_at() <= second.placed_at());
    assert_eq!(session.history().lifetime_total().unwrap(), Amount::new(1270));
}

#[test]
fn test_invalid_quantities_are_validation_errors() {
    let mut session = Session::default();
    for raw in ["0", "-3", "abc"] {
        session.select("Veggie Delight").unwrap();
        session.set_size(Size::Small);
        session.set_quantity(raw);
        let err = session.commit().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation, "{raw:?}");
        assert_eq!(err, ShopError::InvalidQuantity(raw.to_string()));
    }

    session.select("Veggie Delight").unwrap();
    session.set_quantity("1");
    assert_eq!(session.commit().unwrap_err(), ShopError::MissingSize);
    assert!(session.cart().is_empty());
}

#[test]
fn test_delete_then_delete_again() {
    let mut session = Session::default();
    let id = add(&mut session, "Pepperoni", Size::Small, "1");
    add(&mut session, "Hawaiian", Size::Small, "1");

    assert!(session.remove(&id));
    assert!(!session.remove(&id));
    assert_eq!(session.cart().len(), 1);
}

#[test]
fn test_custom_menu_session() {
    let catalog = Catalog::new(vec![CatalogEntry::new(
        "Quattro Formaggi",
        SizePrices::new(280, 420, 640),
    )])
    .unwrap();
    let mut session = Session::with_policy(catalog, CheckoutPolicy::permissive());

    add(&mut session, "Quattro Formaggi", Size::Medium, "2");
    assert!(session.select("Margherita").is_err());

    let order = session.checkout("").unwrap();
    assert_eq!(order.total(), Amount::new(840));
}

#[test]
fn test_cart_lines_are_priced_from_catalog() {
    let catalog = Catalog::new(vec![
        CatalogEntry::new("Quattro Formaggi", SizePrices::new(280, 420, 640)),
        CatalogEntry::new("Marinara", SizePrices::new(150, 250, 350)),
    ])
    .unwrap();
    let mut session = Session::new(catalog.clone());

    add(&mut session, "Quattro Formaggi", Size::Large, "1");
    add(&mut session, "Marinara", Size::Small, "3");
    assert!(session.select("Calzone").is_err());

    for line in session.cart().items() {
        let listed = catalog.price_of(line.item_name(), line.size()).unwrap();
        assert_eq!(line.unit_price(), listed);
    }

    let order = session.checkout("GCash").unwrap();
    assert_eq!(order.total(), Amount::new(1090));
}

//! Property-based tests for line item pricing and cart mutation.

use std::collections::HashSet;

use proptest::prelude::*;

use pizza_commerce::prelude::*;

fn size_strategy() -> impl Strategy<Value = Size> {
    prop_oneof![Just(Size::Small), Just(Size::Medium), Just(Size::Large)]
}

fn item_strategy() -> impl Strategy<Value = (usize, Size, u32)> {
    (0usize..6, size_strategy(), 1u32..=MAX_QUANTITY_PER_ITEM)
}

fn build(catalog: &Catalog, index: usize, size: Size, quantity: u32) -> LineItem {
    let mut builder = LineItemBuilder::new();
    builder.select(&catalog.all()[index]);
    builder.set_size(size);
    builder.set_quantity(quantity.to_string());
    builder.build(catalog).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn total_is_unit_price_times_quantity((index, size, quantity) in item_strategy()) {
        let catalog = Catalog::builtin();
        let item = build(&catalog, index, size, quantity);

        let unit = catalog.all()[index].price_for(size);
        prop_assert_eq!(item.unit_price(), unit);
        prop_assert_eq!(item.total_price().value(), unit.value() * u64::from(quantity));
    }

    #[test]
    fn add_grows_cart_with_unique_ids(items in prop::collection::vec(item_strategy(), 1..20)) {
        let catalog = Catalog::builtin();
        let mut cart = CartStore::new();

        for (index, size, quantity) in items {
            let before: HashSet<LineItemId> = cart.items().iter().map(|i| i.id().clone()).collect();
            let len = cart.len();

            let id = cart.add_or_update(build(&catalog, index, size, quantity), None).unwrap();

            prop_assert_eq!(cart.len(), len + 1);
            prop_assert!(!before.contains(&id));
        }
    }

    #[test]
    fn update_keeps_length_and_position(
        items in prop::collection::vec(item_strategy(), 1..10),
        pick in any::<prop::sample::Index>(),
        (index, size, quantity) in item_strategy(),
    ) {
        let catalog = Catalog::builtin();
        let mut cart = CartStore::new();
        for (i, s, q) in items {
            cart.add_or_update(build(&catalog, i, s, q), None).unwrap();
        }

        let position = pick.index(cart.len());
        let target = cart.items()[position].id().clone();
        let len = cart.len();

        cart.add_or_update(build(&catalog, index, size, quantity), Some(&target)).unwrap();

        prop_assert_eq!(cart.len(), len);
        let line = &cart.items()[position];
        prop_assert_eq!(line.id(), &target);
        prop_assert_eq!(line.size(), size);
        prop_assert_eq!(line.quantity(), quantity);
        prop_assert_eq!(line.unit_price(), catalog.all()[index].price_for(size));
    }

    #[test]
    fn cart_total_is_sum_of_lines(items in prop::collection::vec(item_strategy(), 0..20)) {
        let catalog = Catalog::builtin();
        let mut cart = CartStore::new();
        let mut expected = 0u64;
        for (index, size, quantity) in items {
            let item = build(&catalog, index, size, quantity);
            expected += item.total_price().value();
            cart.add_or_update(item, None).unwrap();
        }

        prop_assert_eq!(cart.total().unwrap(), Amount::new(expected));
    }

    #[test]
    fn non_positive_quantities_rejected(quantity in i64::MIN..=0) {
        prop_assert_eq!(
            parse_quantity(&quantity.to_string()),
            Err(ShopError::InvalidQuantity(quantity.to_string()))
        );
    }
}

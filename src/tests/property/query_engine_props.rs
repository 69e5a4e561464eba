//! Property-based tests for the query engine
//!
//! Tests invariants:
//! - Every derived item matches, and every matching item is derived
//! - Items that compare equal under the sort keep catalog order
//! - Distinct prices make the two price sorts mirror images
//! - Name order never contradicts `compare_names`
//! - Deriving twice gives the same list

use std::cmp::Ordering;
use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::catalog::{Catalog, Category, Item, Price};
use crate::core::query::{compare_names, derive, matches};
use crate::core::view_state::{SortMode, ViewState};

// ============================================================================
// Strategies
// ============================================================================

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Ui),
        Just(Category::Web),
        Just(Category::Tools),
    ]
}

fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    prop::sample::select(SortMode::ALL.to_vec())
}

/// Catalogs with ids 1..=n, so catalog order is id order.
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(
        (
            "[A-Za-zÉéü -]{0,12}",
            arb_category(),
            0u64..5_000,
            prop::option::of(0u32..100),
        ),
        0..16,
    )
    .prop_map(|rows| {
        let items = rows
            .into_iter()
            .enumerate()
            .map(|(idx, (name, category, cents, popularity))| {
                Item::new(
                    idx as u32 + 1,
                    name,
                    category,
                    Price::from_cents(cents),
                    popularity,
                    format!("key-{idx}"),
                )
            })
            .collect();
        Catalog::new(items).expect("generated ids are unique and non-zero")
    })
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        "[a-zé -]{0,3}",
        prop_oneof![
            Just(String::new()),
            Just("UI".to_string()),
            Just("Web".to_string()),
            Just("Tools".to_string()),
            Just("Nope".to_string()),
        ],
        arb_sort_mode(),
    )
        .prop_map(|(query, category, sort_mode)| {
            let mut state = ViewState::new("", category, sort_mode);
            state.set_query(&query);
            state
        })
}

/// Sort key comparison for the given mode, as the engine defines it.
fn key_order(mode: SortMode, a: &Item, b: &Item) -> Ordering {
    match mode {
        SortMode::PriceAsc => a.price.cmp(&b.price),
        SortMode::PriceDesc => b.price.cmp(&a.price),
        SortMode::NameAsc => compare_names(&a.name, &b.name),
        SortMode::Popularity => b.rank().cmp(&a.rank()),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The derived list holds exactly the items passing both filters.
    #[test]
    fn prop_derive_is_matching_subset(catalog in arb_catalog(), state in arb_state()) {
        let list = derive(&catalog, &state);

        for item in &list {
            prop_assert!(matches(item, &state));
        }

        let derived: HashSet<_> = list.iter().map(|item| item.id).collect();
        let expected: HashSet<_> = catalog
            .iter()
            .filter(|item| matches(item, &state))
            .map(|item| item.id)
            .collect();
        prop_assert_eq!(derived.len(), list.len(), "no item appears twice");
        prop_assert_eq!(derived, expected);
    }

    /// Adjacent items are in key order, and equal keys keep catalog order.
    #[test]
    fn prop_sort_is_ordered_and_stable(catalog in arb_catalog(), state in arb_state()) {
        let list = derive(&catalog, &state);
        for pair in list.windows(2) {
            let order = key_order(state.sort_mode, pair[0], pair[1]);
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(pair[0].id.0 < pair[1].id.0);
            }
        }
    }

    /// With no price ties, ascending is descending reversed.
    #[test]
    fn prop_price_sorts_mirror(catalog in arb_catalog(), query in "[a-z]{0,1}") {
        let prices: HashSet<_> = catalog.iter().map(|item| item.price).collect();
        prop_assume!(prices.len() == catalog.len());

        let asc = derive(&catalog, &ViewState::new(query.clone(), "", SortMode::PriceAsc));
        let desc = derive(&catalog, &ViewState::new(query, "", SortMode::PriceDesc));

        let asc_ids: Vec<_> = asc.iter().map(|item| item.id).collect();
        let mut desc_ids: Vec<_> = desc.iter().map(|item| item.id).collect();
        desc_ids.reverse();
        prop_assert_eq!(asc_ids, desc_ids);
    }

    /// Empty query and empty category return the whole catalog.
    #[test]
    fn prop_default_filters_keep_everything(catalog in arb_catalog(), mode in arb_sort_mode()) {
        let list = derive(&catalog, &ViewState::new("", "", mode));
        prop_assert_eq!(list.len(), catalog.len());
    }

    /// Deriving is a pure function of its inputs.
    #[test]
    fn prop_derive_is_deterministic(catalog in arb_catalog(), state in arb_state()) {
        let first: Vec<_> = derive(&catalog, &state).iter().map(|item| item.id).collect();
        let second: Vec<_> = derive(&catalog, &state).iter().map(|item| item.id).collect();
        prop_assert_eq!(first, second);
    }

    /// The collation is a total order: antisymmetric and consistent with equality.
    #[test]
    fn prop_compare_names_antisymmetric(a in "[A-Za-zÉéü ]{0,8}", b in "[A-Za-zÉéü ]{0,8}") {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
        prop_assert_eq!(compare_names(&a, &b) == Ordering::Equal, a == b);
    }
}

//! Controller Scenarios
//!
//! Search, filter, sort, add, contact and restore flows against the
//! builtin catalog.

use rstest::{fixture, rstest};

use crate::core::catalog::{Catalog, ItemId};
use crate::core::contact::WARNING_MESSAGE;
use crate::core::controller::{Controller, Effect};
use crate::core::store::{KeyValueStore, MemoryStore, STATE_KEY};
use crate::core::view_state::SortMode;
use crate::tests::common::{create_controller_with_saved, create_test_controller, names, popularities};

#[fixture]
fn controller() -> Controller<MemoryStore> {
    create_test_controller()
}

// =============================================================================
// Search and filter
// =============================================================================

#[rstest]
fn test_search_is_case_insensitive_substring(mut controller: Controller<MemoryStore>) {
    controller.on_search_input("e-c");
    assert_eq!(names(&controller.derived()), ["E-Commerce Template"]);
    assert_eq!(controller.rendered().count_label, "1 item shown");
}

#[rstest]
#[case("", 8)]
#[case("  ", 8)]
#[case("LIB", 1)]
#[case("in", 2)]
#[case("zzz", 0)]
fn test_search_counts(
    mut controller: Controller<MemoryStore>,
    #[case] query: &str,
    #[case] expected: usize,
) {
    controller.on_search_input(query);
    assert_eq!(controller.rendered().count, expected);
}

#[rstest]
#[case("UI", &[95, 65, 60])]
#[case("Web", &[93, 88, 70])]
#[case("Tools", &[80, 75])]
fn test_category_by_popularity(
    mut controller: Controller<MemoryStore>,
    #[case] category: &str,
    #[case] expected: &[u32],
) {
    controller.on_category_change(category);
    controller.on_sort_change("pop");
    assert_eq!(popularities(&controller.derived()), expected);
}

#[rstest]
fn test_unknown_category_matches_nothing(mut controller: Controller<MemoryStore>) {
    controller.on_category_change("Games");
    assert!(controller.derived().is_empty());
    assert_eq!(controller.rendered().count_label, "0 items shown");
}

#[rstest]
fn test_filters_combine(mut controller: Controller<MemoryStore>) {
    controller.on_category_change("Web");
    controller.on_search_input("page");
    assert_eq!(names(&controller.derived()), ["Landing Page"]);
}

// =============================================================================
// Sorting
// =============================================================================

#[rstest]
#[case("asc", "Portfolio UI Kit", "E-Commerce Template")]
#[case("desc", "E-Commerce Template", "Portfolio UI Kit")]
#[case("az", "Button Library", "Portfolio UI Kit")]
#[case("pop", "Portfolio UI Kit", "Button Library")]
fn test_sort_modes(
    mut controller: Controller<MemoryStore>,
    #[case] token: &str,
    #[case] first: &str,
    #[case] last: &str,
) {
    controller.on_sort_change(token);
    let list = controller.derived();
    assert_eq!(list.first().map(|item| item.name.as_str()), Some(first));
    assert_eq!(list.last().map(|item| item.name.as_str()), Some(last));
}

#[rstest]
fn test_unknown_sort_token_falls_back(mut controller: Controller<MemoryStore>) {
    controller.on_sort_change("price-by-weight");
    assert_eq!(controller.state().sort_mode, SortMode::Popularity);
}

// =============================================================================
// Reset
// =============================================================================

#[rstest]
fn test_reset_clears_controls_and_persists(mut controller: Controller<MemoryStore>) {
    controller.on_search_input("blog");
    controller.on_category_change("Web");
    controller.on_sort_change("desc");
    controller.on_reset();

    assert_eq!(controller.state().query, "");
    assert_eq!(controller.state().category, "");
    assert_eq!(controller.state().sort_mode, SortMode::Popularity);
    assert_eq!(controller.controls().query, "");
    assert_eq!(controller.rendered().count, 8);

    let stored = controller.store().inner().get(STATE_KEY).unwrap().unwrap();
    assert_eq!(stored, r#"{"query":"","category":"","sortMode":"pop"}"#);
}

// =============================================================================
// Add control
// =============================================================================

#[rstest]
fn test_add_pending_then_reverts(mut controller: Controller<MemoryStore>) {
    let id = ItemId(2);
    let effect = controller.on_add(id).expect("first activation schedules a revert");
    assert_eq!(
        effect,
        Effect::RevertAdd {
            id,
            after: controller.pending_window()
        }
    );
    assert!(controller.add_buttons().is_disabled(id));
    assert!(controller.add_buttons().is_pressed(id));
    assert!(controller.rendered().markup.contains("Added \u{2713}"));

    // Activations inside the window are ignored.
    assert_eq!(controller.on_add(id), None);

    controller.on_add_window_elapsed(id);
    assert!(!controller.add_buttons().is_pending(id));
    assert_eq!(controller.add_buttons().label(id), "Add");
    assert!(!controller.rendered().markup.contains("aria-pressed"));
}

#[rstest]
fn test_add_survives_redraw(mut controller: Controller<MemoryStore>) {
    controller.on_add(ItemId(4));
    controller.on_search_input("commerce");
    assert!(controller.rendered().markup.contains("disabled aria-pressed=\"true\""));
}

#[rstest]
fn test_add_unknown_item(mut controller: Controller<MemoryStore>) {
    assert_eq!(controller.on_add(ItemId(99)), None);
    assert_eq!(controller.add_buttons().pending_count(), 0);
}

// =============================================================================
// Contact form
// =============================================================================

#[rstest]
fn test_contact_rejects_then_accepts(mut controller: Controller<MemoryStore>) {
    {
        let form = controller.contact_mut();
        form.name = "Ann".to_string();
        form.email = "not-an-email".to_string();
    }
    let note = controller.on_contact_submit().clone();
    assert!(note.is_warning());
    assert_eq!(note.message(), WARNING_MESSAGE);
    assert_eq!(controller.contact().name, "Ann");

    controller.contact_mut().email = "ann@example.com".to_string();
    let note = controller.on_contact_submit().clone();
    assert!(!note.is_warning());
    assert_eq!(
        note.message(),
        "Thanks, Ann! We will get back to ann@example.com."
    );
    assert_eq!(controller.contact().name, "");
    assert_eq!(controller.contact().email, "");
}

#[rstest]
fn test_contact_blank_name(mut controller: Controller<MemoryStore>) {
    {
        let form = controller.contact_mut();
        form.name = "   ".to_string();
        form.email = "ann@example.com".to_string();
    }
    assert!(controller.on_contact_submit().is_warning());
}

// =============================================================================
// Persistence
// =============================================================================

#[rstest]
fn test_state_round_trips_through_store(mut controller: Controller<MemoryStore>) {
    controller.on_search_input("shop");
    controller.on_category_change("Web");
    controller.on_sort_change("asc");

    let store = controller.into_store();
    let restored = Controller::new(Catalog::builtin(), store);
    assert_eq!(restored.state().query, "shop");
    assert_eq!(restored.state().category, "Web");
    assert_eq!(restored.state().sort_mode, SortMode::PriceAsc);
    assert_eq!(restored.controls().query, "shop");
}

#[rstest]
#[case("not json")]
#[case("[1, 2, 3]")]
#[case("null")]
fn test_unreadable_saved_state_uses_defaults(#[case] saved: &str) {
    let controller = create_controller_with_saved(saved);
    assert_eq!(controller.state().query, "");
    assert_eq!(controller.state().sort_mode, SortMode::Popularity);
    assert_eq!(controller.rendered().count, 8);
}

#[rstest]
fn test_partial_saved_state_keeps_good_fields() {
    let controller = create_controller_with_saved(r#"{"query":"kit","sortMode":42}"#);
    assert_eq!(controller.state().query, "kit");
    assert_eq!(controller.state().sort_mode, SortMode::Popularity);
    assert_eq!(names(&controller.derived()), ["Portfolio UI Kit"]);
}

#[rstest]
fn test_disabled_store_is_harmless() {
    let mut controller = Controller::new(
        Catalog::builtin(),
        MemoryStore::disabled(),
    );
    controller.on_search_input("blog");
    assert_eq!(controller.rendered().count, 1);
}

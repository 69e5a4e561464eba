//! Property-based tests for view state edits and storage decoding
//!
//! Tests invariants:
//! - Reset always yields the defaults
//! - Stored queries are trimmed
//! - Unknown sort tokens fall back to popularity
//! - Decoding arbitrary stored text never fails
//! - A saved state comes back whole

use proptest::prelude::*;

use crate::core::view_state::{PartialViewState, SortMode, ViewState};

fn arb_sort_mode() -> impl Strategy<Value = SortMode> {
    prop::sample::select(SortMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_reset_restores_defaults(
        query in ".{0,20}",
        category in "[A-Za-z]{0,8}",
        mode in arb_sort_mode(),
    ) {
        let mut state = ViewState::new(query, category, mode);
        state.reset();
        prop_assert_eq!(state.query.as_str(), "");
        prop_assert_eq!(state.category.as_str(), "");
        prop_assert_eq!(state.sort_mode, SortMode::Popularity);
    }

    #[test]
    fn prop_query_is_trimmed(raw in "[ \t]{0,3}[a-z ]{0,10}[ \t]{0,3}") {
        let mut state = ViewState::default();
        state.set_query(&raw);
        prop_assert_eq!(state.query.as_str(), raw.trim());
    }

    #[test]
    fn prop_unknown_sort_token_is_popularity(token in "[a-z]{0,6}") {
        prop_assume!(SortMode::from_token(&token).is_none());
        let mut state = ViewState::default();
        state.set_sort(&token);
        prop_assert_eq!(state.sort_mode, SortMode::Popularity);
    }

    /// Whatever the store hands back, decoding yields some partial state.
    #[test]
    fn prop_lenient_decode_never_fails(raw in ".{0,64}") {
        let partial = PartialViewState::from_json(&raw);
        let mut state = ViewState::default();
        state.overlay(partial);
    }

    #[test]
    fn prop_saved_state_restores(
        query in "[a-z ]{0,10}",
        category in prop_oneof![Just(""), Just("UI"), Just("Web"), Just("Tools")],
        mode in arb_sort_mode(),
    ) {
        let saved = ViewState::new(query, category, mode);
        let json = saved.to_json().expect("view state serializes");

        let mut restored = ViewState::default();
        restored.overlay(PartialViewState::from_json(&json));
        prop_assert_eq!(restored, saved);
    }
}

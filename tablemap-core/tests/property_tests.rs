//! Property tests for the filter contract and the store.
//!
//! Uses proptest to verify:
//! 1. Membership — a record passes `Only(c)` iff its cuisine is `c`
//! 2. `All` is the identity selection, order preserved
//! 3. Filtering is idempotent across repeated selections
//! 4. The cursor never escapes the filtered list under any action sequence
//! 5. Detail navigation always snapshots the wider span

use proptest::prelude::*;
use tablemap_core::directory::Directory;
use tablemap_core::domain::{Cuisine, CuisineFilter};
use tablemap_core::store::{update, Action, Model, Screen, DETAIL_SPAN, LISTING_SPAN};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_cuisine() -> impl Strategy<Value = Cuisine> {
    prop_oneof![
        Just(Cuisine::Mexican),
        Just(Cuisine::Asian),
        Just(Cuisine::Southern),
    ]
}

fn arb_filter() -> impl Strategy<Value = CuisineFilter> {
    prop_oneof![
        Just(CuisineFilter::All),
        arb_cuisine().prop_map(CuisineFilter::Only),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_filter().prop_map(Action::SetFilter),
        Just(Action::CursorUp),
        Just(Action::CursorDown),
        Just(Action::Open),
        Just(Action::Back),
        Just(Action::FitViewport),
    ]
}

// ── 1-3. Filter contract ─────────────────────────────────────────────

proptest! {
    /// A record appears in the filtered set iff its cuisine matches.
    #[test]
    fn membership_iff_cuisine_matches(cuisine in arb_cuisine()) {
        let dir = Directory::san_marcos();
        let filter = CuisineFilter::Only(cuisine);
        let filtered = dir.filtered(filter);

        for r in dir.iter() {
            let in_filtered = filtered.iter().any(|f| f.id == r.id);
            prop_assert_eq!(in_filtered, r.cuisine == cuisine);
        }
    }

    /// `All` returns the full dataset in original order.
    #[test]
    fn all_is_identity(_seed in any::<u8>()) {
        let dir = Directory::san_marcos();
        let filtered = dir.filtered(CuisineFilter::All);
        prop_assert_eq!(filtered.len(), dir.len());
        for (got, want) in filtered.iter().zip(dir.iter()) {
            prop_assert_eq!(&got.id, &want.id);
        }
    }

    /// The same selection twice yields the same set.
    #[test]
    fn filtering_is_idempotent(filter in arb_filter()) {
        let dir = Directory::san_marcos();
        let once: Vec<_> = dir.filtered(filter).iter().map(|r| r.id.clone()).collect();
        let twice: Vec<_> = dir.filtered(filter).iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(once, twice);
    }
}

// ── 4-5. Store invariants ────────────────────────────────────────────

proptest! {
    /// Whatever the user does, the cursor stays inside the filtered list
    /// (or at 0 when the list is empty).
    #[test]
    fn cursor_never_escapes_filtered_list(actions in prop::collection::vec(arb_action(), 0..40)) {
        let dir = Directory::san_marcos();
        let mut model = Model::new();
        for action in actions {
            model = update(model, action, &dir);
            let row_count = dir.filtered(model.filter).len();
            prop_assert!(model.cursor == 0 || model.cursor < row_count);
        }
    }

    /// Every detail screen reached through the store carries the wider
    /// span, centered on a real record.
    #[test]
    fn detail_screens_use_the_wide_span(actions in prop::collection::vec(arb_action(), 0..40)) {
        let dir = Directory::san_marcos();
        let mut model = Model::new();
        for action in actions {
            model = update(model, action, &dir);
            if let Screen::Detail { id, region } = &model.screen {
                let restaurant = dir.get(id);
                prop_assert!(restaurant.is_some());
                prop_assert_eq!(region.span, DETAIL_SPAN);
                prop_assert_eq!(region.center, restaurant.unwrap().coordinate());
                prop_assert!(region.span.lat_delta > LISTING_SPAN.lat_delta);
            }
        }
    }
}

//! Property-based tests for page identifiers and the selector.

use agent_dashboard::{PageId, ViewSelector};
use proptest::prelude::*;

fn any_page() -> impl Strategy<Value = PageId> {
    prop::sample::select(PageId::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_never_panics(s in "\\PC{0,64}") {
        let _ = s.parse::<PageId>();
    }

    #[test]
    fn select_then_current_page(pages in prop::collection::vec(any_page(), 1..20)) {
        let mut selector = ViewSelector::new();
        for page in &pages {
            selector.select(*page);
            prop_assert_eq!(selector.current_page(), *page);
            prop_assert_eq!(selector.current_title(), page.label());
        }
    }

    #[test]
    fn unknown_ids_leave_state_unchanged(start in any_page(), id in "[a-z]{5,12}") {
        prop_assume!(PageId::ALL.iter().all(|p| p.id() != id));

        let mut selector = ViewSelector::starting_at(start);
        prop_assert!(selector.select_id(&id).is_err());
        prop_assert_eq!(selector.current_page(), start);
    }

    #[test]
    fn next_undoes_prev(start in any_page()) {
        let mut selector = ViewSelector::starting_at(start);
        selector.prev();
        selector.next();
        prop_assert_eq!(selector.current_page(), start);
    }
}

use house_hisab::state::swipe::{MAX_DRAG, OPEN_REST, OPEN_THRESHOLD};
use house_hisab::state::{SwipeAction, SwipeState};
use proptest::prelude::*;

fn arb_action() -> impl Strategy<Value = SwipeAction> {
    prop_oneof![
        (-2000.0f64..2000.0).prop_map(SwipeAction::Begin),
        (-2000.0f64..2000.0).prop_map(SwipeAction::Update),
        Just(SwipeAction::End),
        Just(SwipeAction::Cancel),
        Just(SwipeAction::Close),
    ]
}

proptest! {
    /// Property: offset never leaves [MAX_DRAG, 0] whatever events arrive
    #[test]
    fn prop_offset_stays_clamped(actions in prop::collection::vec(arb_action(), 0..64)) {
        let mut s = SwipeState::default();
        for a in actions {
            s = s.apply(a);
            prop_assert!(s.offset >= MAX_DRAG && s.offset <= 0.0, "offset {} after {:?}", s.offset, a);
        }
    }

    /// Property: once released, a row rests either closed or at the open rest
    #[test]
    fn prop_release_snaps_to_rest(
        start in -500.0f64..500.0,
        moves in prop::collection::vec(-1000.0f64..1000.0, 0..16),
    ) {
        let mut s = SwipeState::default().begin(start);
        for x in &moves {
            s = s.update(*x);
        }
        let dragged = s.offset;
        let s = s.end();
        prop_assert!(!s.is_dragging());
        prop_assert_eq!(s.is_open, dragged < OPEN_THRESHOLD);
        prop_assert_eq!(s.offset, if s.is_open { OPEN_REST } else { 0.0 });
    }

    /// Property: close always wins, and stale moves afterwards do nothing
    #[test]
    fn prop_close_resets(actions in prop::collection::vec(arb_action(), 0..32), stale in -500.0f64..500.0) {
        let mut s = SwipeState::default();
        for a in actions {
            s = s.apply(a);
        }
        let closed = s.close();
        prop_assert_eq!((closed.offset, closed.is_open, closed.origin_x), (0.0, false, None));
        prop_assert_eq!(closed.update(stale), closed);
    }

    /// Property: the only difference between cancel and end is the name
    #[test]
    fn prop_cancel_matches_end(actions in prop::collection::vec(arb_action(), 0..32)) {
        let mut s = SwipeState::default();
        for a in actions {
            s = s.apply(a);
        }
        prop_assert_eq!(s.apply(SwipeAction::Cancel), s.apply(SwipeAction::End));
    }
}

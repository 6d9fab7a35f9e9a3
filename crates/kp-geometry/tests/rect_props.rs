use kp_geometry::Rect;
use proptest::prelude::*;

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -100.0f64..100.0,
        -100.0f64..100.0,
        0.1f64..50.0,
        0.1f64..50.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn prop_rect_overlaps_itself(a in rect_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn prop_edge_adjacent_rects_do_not_overlap(a in rect_strategy(), dy in -10.0f64..10.0) {
        // b sits flush against a's right edge; only the x axis separates them.
        let b = Rect::new(a.x + a.w, a.y + dy, a.w, a.h);
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
    }

    #[test]
    fn prop_translation_far_away_never_overlaps(a in rect_strategy()) {
        let b = Rect::new(a.x + a.w + 1000.0, a.y, a.w, a.h);
        prop_assert!(!a.overlaps(&b));
    }
}

#![forbid(unsafe_code)]

//! Property tests for rectangle arithmetic.

use proptest::prelude::*;
use tagpick_core::geometry::{Rect, Sides};

fn rect() -> impl Strategy<Value = Rect> {
    (0u16..200, 0u16..200, 0u16..200, 0u16..200).prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

proptest! {
    #[test]
    fn intersection_is_inside_both(a in rect(), b in rect()) {
        let i = a.intersection(&b);
        if !i.is_empty() {
            prop_assert!(i.x >= a.x && i.right() <= a.right());
            prop_assert!(i.x >= b.x && i.right() <= b.right());
            prop_assert!(i.y >= a.y && i.bottom() <= a.bottom());
            prop_assert!(i.y >= b.y && i.bottom() <= b.bottom());
        }
    }

    #[test]
    fn intersection_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(a.intersection_opt(&b), b.intersection_opt(&a));
    }

    #[test]
    fn inner_never_grows(r in rect(), m in 0u16..10) {
        let inner = r.inner(Sides::all(m));
        prop_assert!(inner.width <= r.width);
        prop_assert!(inner.height <= r.height);
    }

    #[test]
    fn rows_stay_inside(r in rect(), offset in 0u16..250) {
        let row = r.row(offset);
        if offset < r.height {
            prop_assert_eq!(row.height, 1);
            prop_assert!(r.contains(row.x, row.y) || r.width == 0);
        } else {
            prop_assert!(row.is_empty());
        }
    }
}

use dashboard_plot::antialias::WuLine;
use embedded_graphics::prelude::*;
use proptest::prelude::*;

fn endpoint() -> impl Strategy<Value = Point> { (-200i32..200, -200i32..200).prop_map(|(x, y)| Point::new(x, y)) }

proptest! {
    #[test]
    fn endpoints_drawn_at_full_intensity(a in endpoint(), b in endpoint()) {
        let Some(walker) = WuLine::new(a, b) else {
            return Ok(());
        };
        let pixels: Vec<_> = walker.collect();
        let first = pixels[0];
        let last = pixels[pixels.len() - 1];
        prop_assert_eq!(first.weight, 0);
        prop_assert_eq!(last.weight, 0);
        prop_assert!((first.point == a && last.point == b) || (first.point == b && last.point == a));
    }

    #[test]
    fn interior_pair_weights_sum_to_255(a in endpoint(), b in endpoint()) {
        let Some(walker) = WuLine::new(a, b) else {
            return Ok(());
        };
        let pixels: Vec<_> = walker.collect();
        let interior = &pixels[1..pixels.len() - 1];
        prop_assert_eq!(interior.len() % 2, 0);
        for pair in interior.chunks(2) {
            prop_assert_eq!(u16::from(pair[0].weight) + u16::from(pair[1].weight), 255);
        }
    }

    #[test]
    fn pixels_stay_inside_segment_box(a in endpoint(), b in endpoint()) {
        let Some(walker) = WuLine::new(a, b) else {
            return Ok(());
        };
        let (lo_x, hi_x) = (a.x.min(b.x), a.x.max(b.x));
        let (lo_y, hi_y) = (a.y.min(b.y), a.y.max(b.y));
        for p in walker {
            prop_assert!((lo_x..=hi_x).contains(&p.point.x));
            prop_assert!((lo_y..=hi_y).contains(&p.point.y));
        }
    }
}

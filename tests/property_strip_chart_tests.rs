mod support;

use dashboard_plot::{Domain, LineMode, StripChart};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use proptest::prelude::*;
use support::Framebuffer;

const SWEEP_MS: u64 = 5_500;

fn chart() -> StripChart {
    StripChart::new(
        Rectangle::new(Point::new(50, 0), Size::new(271, 40)),
        Domain::new(0.0, 5.5, -1.0, 1.0),
    )
    .expect("valid chart")
}

fn line_mode() -> impl Strategy<Value = LineMode> { prop_oneof![Just(LineMode::Crisp), Just(LineMode::AntiAliased)] }

proptest! {
    #[test]
    fn projected_row_stays_inside_plot(value in -1.0e30f32..1.0e30) {
        let area = *chart().area();
        let row = area.row(value);
        prop_assert!(row >= area.min_y());
        prop_assert!(row <= area.max_y());
    }

    #[test]
    fn in_domain_values_need_no_clamping(value in -1.0f32..=1.0) {
        let area = *chart().area();
        let row = area.raw_row(value);
        prop_assert!(row >= area.min_y());
        prop_assert!(row <= area.max_y());
    }

    #[test]
    fn column_advances_and_wraps_on_sweep_crossings(
        start_ms in 0u64..100_000,
        steps in prop::collection::vec(10u64..1_800, 1..80)
    ) {
        let mut chart = chart();
        let mut fb = Framebuffer::new(330, 50);
        chart.redraw_axis(&mut fb).unwrap();

        let mut ms = start_ms;
        chart.add_data_millis(&mut fb, ms, 0.0).unwrap();
        let mut column = chart.cursor().position.expect("first sample drawn").x;
        let mut expected_sweeps = 0u32;

        for step in steps {
            let crossed = (ms + step) / SWEEP_MS > ms / SWEEP_MS;
            ms += step;
            chart.add_data_millis(&mut fb, ms, 0.0).unwrap();
            let next = chart.cursor().position.expect("cursor set").x;

            if crossed {
                expected_sweeps += 1;
                prop_assert!(next < column, "wrap expected at {} ms", ms);
            } else {
                prop_assert!(next >= column, "column went back at {} ms", ms);
            }
            column = next;
        }
        prop_assert_eq!(chart.sweeps(), expected_sweeps);
    }

    #[test]
    fn repeated_sample_draws_nothing(
        time in 0.0f32..1_000.0,
        value in -2.0f32..2.0,
        warmup in prop::collection::vec((0.0f32..1_000.0, -2.0f32..2.0), 0..10),
        cursor in any::<bool>(),
        mode in line_mode()
    ) {
        let mut chart = chart();
        chart.set_cursor(cursor);
        chart.set_line_mode(mode);
        chart.set_x_grid_interval(0.5);
        chart.set_y_grid_interval(0.5);
        let mut fb = Framebuffer::new(330, 50);
        for (t, v) in warmup {
            chart.add_data(&mut fb, t, v).unwrap();
        }

        chart.add_data(&mut fb, time, value).unwrap();
        fb.calls = 0;
        chart.add_data(&mut fb, time, value).unwrap();
        prop_assert_eq!(fb.calls, 0);
    }

    #[test]
    fn drawing_never_leaves_plot_interior(
        samples in prop::collection::vec((0.001f32..3.0, -5.0f32..5.0), 1..60),
        eraser in 0u32..120,
        cursor in any::<bool>(),
        mode in line_mode(),
        x_grid in prop_oneof![Just(0.0f32), 0.1f32..2.0],
        y_grid in prop_oneof![Just(0.0f32), 0.1f32..1.0]
    ) {
        let mut chart = chart();
        chart.set_eraser_width(eraser);
        chart.set_cursor(cursor);
        chart.set_line_mode(mode);
        chart.set_x_grid_interval(x_grid);
        chart.set_y_grid_interval(y_grid);

        let mut fb = Framebuffer::new(330, 50);
        chart.redraw_axis(&mut fb).unwrap();
        let before = fb.clone();

        let mut t = 0.0f32;
        for (dt, v) in samples {
            t += dt;
            chart.add_data(&mut fb, t, v).unwrap();
        }

        let (tl, br) = chart.area().interior();
        let changed = fb.changed_outside(&before, &Rectangle::with_corners(tl, br));
        prop_assert!(changed.is_empty(), "pixels outside the plot changed: {:?}", changed);
    }
}

mod common;

use common::{NullSurface, fixed_line, standard_line};
use proptest::prelude::*;
use runner_horizon::horizon::{SeededRandom, scroll_increment};

proptest! {
    #[test]
    fn segments_stay_adjacent(
        frames in prop::collection::vec((0.0f64..100.0, 0.0f64..20.0), 1..200),
        seed in any::<u64>(),
    ) {
        let (mut line, atlas) = standard_line(SeededRandom::new(seed));
        let width = line.dimensions().width;
        for (delta, speed) in frames {
            line.update(&mut NullSurface, &atlas, delta, speed);
            let [a, b] = line.x_positions();
            prop_assert_eq!((a - b).abs(), width);
        }
    }

    #[test]
    fn leading_segment_stays_within_one_width_of_origin(
        frames in prop::collection::vec((0.0f64..100.0, 0.0f64..20.0), 1..200),
    ) {
        let (mut line, atlas) = fixed_line(&[0.3, 0.8]);
        let width = line.dimensions().width;
        for (delta, speed) in frames {
            line.update(&mut NullSurface, &atlas, delta, speed);
            let [a, b] = line.x_positions();
            let lead = a.min(b);
            prop_assert!(lead > -width && lead <= 0, "lead {} out of range", lead);
        }
    }

    #[test]
    fn split_frames_lose_at_most_one_pixel_per_step(
        speed in 0u32..=13,
        steps in prop::sample::select(vec![
            1u32, 2, 4, 5, 8, 10, 20, 25, 40, 50, 100, 125, 200, 250, 500, 1000,
        ]),
    ) {
        let speed = f64::from(speed);
        let step_ms = f64::from(1000 / steps);
        let whole = scroll_increment(1000.0, speed, 60);
        let split: i32 = (0..steps).map(|_| scroll_increment(step_ms, speed, 60)).sum();
        prop_assert!(split <= whole);
        prop_assert!(whole - split <= i32::try_from(steps).unwrap_or(i32::MAX));
    }

    #[test]
    fn reset_always_returns_to_start(
        frames in prop::collection::vec((0.0f64..100.0, 0.0f64..20.0), 0..50),
    ) {
        let (mut line, atlas) = fixed_line(&[0.9]);
        for (delta, speed) in frames {
            line.update(&mut NullSurface, &atlas, delta, speed);
        }
        let offsets = line.source_offsets();
        line.reset();
        prop_assert_eq!(line.x_positions(), [0, 600]);
        prop_assert_eq!(line.source_offsets(), offsets);
    }
}

#[test]
fn one_second_in_fifty_frames_matches_one_second_at_once() {
    let (mut stepped, atlas) = fixed_line(&[0.0]);
    let (mut jumped, _) = fixed_line(&[0.0]);

    for _ in 0..50 {
        stepped.update(&mut NullSurface, &atlas, 20.0, 5.0);
    }
    jumped.update(&mut NullSurface, &atlas, 1000.0, 5.0);

    assert_eq!(stepped.x_positions(), jumped.x_positions());
    assert_eq!(jumped.x_positions(), [-300, 300]);
}

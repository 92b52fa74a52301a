use proptest::prelude::*;

use robo_eyes::config::MIN_EYE_HEIGHT;
use robo_eyes::ports::RecordingSurface;
use robo_eyes::{EngineConfig, ManualClock, RoboEyes, StdRandom};

fn log2_floor(value: i32) -> usize {
    (31 - value.leading_zeros()) as usize
}

proptest! {
    #[test]
    fn idle_wander_respects_travel_range(
        seed in any::<u64>(),
        screen_width in 100i32..320,
        screen_height in 100i32..320,
        eye_size in 10i32..40,
    ) {
        let config = EngineConfig {
            screen_width,
            screen_height,
            eye_width: eye_size,
            eye_height: eye_size,
            ..EngineConfig::default()
        };
        let clock = ManualClock::new(0);
        let mut eyes = RoboEyes::with_config(config, RecordingSurface::new(), clock.clone(), StdRandom::seeded(seed));
        eyes.begin(50);
        eyes.set_idle_mode(true, 1, 2);

        for _ in 0..50 {
            eyes.update();
            let left = eyes.face().eyes.left;
            prop_assert!(left.x.next >= 0 && left.x.next <= eyes.screen_constraint_x().max(0));
            prop_assert!(left.y.next >= 0 && left.y.next <= eyes.screen_constraint_y().max(0));
            clock.advance(500);
        }
    }

    #[test]
    fn reopening_reaches_any_default_height(height in 2i32..200) {
        let config = EngineConfig {
            eye_height: height,
            ..EngineConfig::default()
        };
        let clock = ManualClock::new(0);
        let mut eyes = RoboEyes::with_config(config, RecordingSurface::new(), clock.clone(), StdRandom::seeded(0));
        eyes.begin(50);
        prop_assert_eq!(eyes.face().eyes.left.height.current, MIN_EYE_HEIGHT);

        for _ in 0..=log2_floor(height) {
            eyes.update();
            clock.advance(20);
        }
        prop_assert_eq!(eyes.face().eyes.left.height.current, height);
        prop_assert_eq!(eyes.face().eyes.right.height.current, height);
    }
}

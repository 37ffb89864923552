mod tests {
    use led_effects::{BrightnessEval, Led, PwmSink, StopMode};

    /// Records the last written value and the number of writes
    #[derive(Default)]
    struct MockSink {
        last: u8,
        writes: u32,
    }

    impl PwmSink for MockSink {
        fn write(&mut self, value: u8) {
            self.last = value;
            self.writes += 1;
        }
    }

    /// Returns fixed values per tick and counts evaluations
    struct TableEval {
        values: &'static [u8],
        calls: u32,
    }

    impl TableEval {
        fn new(values: &'static [u8]) -> Self {
            Self { values, calls: 0 }
        }
    }

    impl BrightnessEval for TableEval {
        fn period(&self) -> u16 {
            self.values.len() as u16
        }

        fn eval(&mut self, t: u32) -> u8 {
            self.calls += 1;
            self.values[t as usize]
        }
    }

    #[test]
    fn test_no_effect_set_is_inactive() {
        let mut led = Led::new(MockSink::default());
        assert!(!led.update(0));
        assert_eq!(led.sink().writes, 0);
    }

    #[test]
    fn test_on_writes_full_brightness() {
        let mut led = Led::new(MockSink::default()).on();
        led.update(0);
        assert_eq!(led.sink().last, 255);
        let mut led = Led::new(MockSink::default()).off();
        led.update(0);
        assert_eq!(led.sink().last, 0);
    }

    #[test]
    fn test_blink_repeat_produces_expected_trace() {
        let mut led = Led::new(MockSink::default()).blink(1, 2).repeat(2);
        let expected = [255, 0, 0, 255, 0, 0];
        for (t, want) in expected.iter().enumerate() {
            led.update(t as u32);
            assert_eq!(led.sink().last, *want, "t={t}");
        }
        assert!(!led.is_running());
        // finished is terminal; output stays at the terminal value
        for t in 6..20 {
            assert!(!led.update(t));
            assert_eq!(led.sink().last, 0);
        }
    }

    #[test]
    fn test_blink_with_delays() {
        // 1 ms on, 2 ms off, 1 ms delay after each repetition, 5 ms before
        let mut led = Led::new(MockSink::default())
            .blink(1, 2)
            .delay_after(1)
            .repeat(2)
            .delay_before(5);
        let expected = [
            0, 0, 0, 0, 0, // delay before
            255, 0, 0, 0, // first repetition + delay after
            255, 0, 0, 0, // second repetition + delay after
            0, // stays off
        ];
        for (t, want) in expected.iter().enumerate() {
            led.update(t as u32);
            assert_eq!(led.sink().last, *want, "t={t}");
        }
        assert!(!led.is_running());
    }

    #[test]
    fn test_delay_before_holds_output() {
        let mut led = Led::new(MockSink::default()).on().delay_before(5);
        for t in 0..5 {
            assert!(led.update(t));
            assert_eq!(led.sink().writes, 0, "wrote during delay-before");
        }
        led.update(5);
        assert_eq!(led.sink().last, 255);
    }

    #[test]
    fn test_forever_never_finishes() {
        let mut led = Led::new(MockSink::default()).blink(5, 10).forever();
        assert!(led.is_forever());
        for t in 0..1000 {
            assert!(led.update(t), "t={t}");
            let want = if t % 15 < 5 { 255 } else { 0 };
            assert_eq!(led.sink().last, want, "t={t}");
        }
    }

    #[test]
    fn test_update_is_idempotent_per_tick() {
        let mut eval = TableEval::new(&[10, 20, 30, 40, 50]);
        let mut led = Led::new(MockSink::default()).user_func(&mut eval);
        assert!(led.update(1000));
        assert!(led.update(1000));
        assert!(led.update(1000));
        assert_eq!(led.sink().writes, 1);
        drop(led);
        assert_eq!(eval.calls, 1);
    }

    #[test]
    fn test_user_func_trace() {
        let mut eval = TableEval::new(&[0, 1, 2, 3, 99]);
        let mut led = Led::new(MockSink::default()).user_func(&mut eval);
        for (t, want) in [0, 1, 2, 3, 99].iter().enumerate() {
            led.update(t as u32);
            assert_eq!(led.sink().last, *want, "t={t}");
        }
        assert!(!led.update(5));
    }

    #[test]
    fn test_brightness_range_scaling() {
        let mut led = Led::new(MockSink::default())
            .on()
            .min_brightness(100)
            .max_brightness(200);
        led.update(0);
        assert_eq!(led.sink().last, 200);

        let mut led = Led::new(MockSink::default())
            .off()
            .min_brightness(100)
            .max_brightness(200);
        led.update(0);
        assert_eq!(led.sink().last, 100);
    }

    #[test]
    fn test_low_active_inverts_output() {
        let mut led = Led::new(MockSink::default()).on().low_active();
        assert!(led.is_low_active());
        led.update(0);
        assert_eq!(led.sink().last, 0);
    }

    #[test]
    fn test_stop_writes_zero_and_is_terminal() {
        let mut led = Led::new(MockSink::default()).fade_off(1000);
        led.update(0);
        assert!(led.sink().last > 0);
        led.stop();
        assert_eq!(led.sink().last, 0);
        assert!(!led.is_running());
        // updates after stop are no-ops
        let writes = led.sink().writes;
        assert!(!led.update(500));
        assert_eq!(led.sink().writes, writes);
    }

    #[test]
    fn test_stop_modes() {
        let mut led = Led::new(MockSink::default()).on().min_brightness(40);
        led.update(0);
        led.stop_with(StopMode::ToMin);
        assert_eq!(led.sink().last, 40);

        let mut led = Led::new(MockSink::default()).on();
        led.update(0);
        let writes = led.sink().writes;
        led.stop_with(StopMode::KeepCurrent);
        assert_eq!(led.sink().last, 255);
        assert_eq!(led.sink().writes, writes);
    }

    #[test]
    fn test_reset_restarts_effect() {
        let mut led = Led::new(MockSink::default()).blink(1, 2).repeat(1);
        for t in 0..3 {
            led.update(t);
        }
        assert!(!led.is_running());
        led.reset();
        assert!(led.is_running());
        // restarts from t = 0, anchored at the next update
        led.update(100);
        assert_eq!(led.sink().last, 255);
    }

    #[test]
    fn test_pause_resume_continues_from_position() {
        let mut paused_led = Led::new(MockSink::default()).fade_on(1000);
        let mut control = Led::new(MockSink::default()).fade_on(1000);

        paused_led.update(0);
        control.update(0);
        paused_led.update(500);
        control.update(500);

        let captured = paused_led.pause(600);
        assert!(!paused_led.is_running());
        // a long break, then continue
        paused_led.resume(captured, 10_600);
        assert!(paused_led.is_running());

        paused_led.update(10_700);
        control.update(700);
        assert_eq!(paused_led.sink().last, control.sink().last);

        paused_led.update(10_999);
        control.update(999);
        assert_eq!(paused_led.sink().last, 255);
        assert_eq!(control.sink().last, 255);
    }

    #[test]
    fn test_pause_before_start_keeps_delay() {
        let mut led = Led::new(MockSink::default()).on().delay_before(10);
        let captured = led.pause(0);
        led.resume(captured, 1000);
        // delay-before still applies relative to the first update
        for t in 1000..1010 {
            assert!(led.update(t));
            assert_eq!(led.sink().writes, 0);
        }
        led.update(1010);
        assert_eq!(led.sink().last, 255);
    }

    #[test]
    fn test_clock_wraparound_is_transparent() {
        let start = u32::MAX - 25;
        let mut wrapping = Led::new(MockSink::default()).fade_on(100);
        let mut plain = Led::new(MockSink::default()).fade_on(100);

        assert!(wrapping.update(start));
        assert!(plain.update(1000));

        // +50 crosses the wraparound boundary
        assert!(wrapping.update(start.wrapping_add(50)));
        assert!(plain.update(1050));
        assert_eq!(wrapping.sink().last, plain.sink().last);

        // +150 is past the end in both cases
        assert!(!wrapping.update(start.wrapping_add(150)));
        assert!(!plain.update(1150));
        assert_eq!(wrapping.sink().last, 255);
        assert_eq!(plain.sink().last, 255);
    }

    #[test]
    fn test_candle_with_oversized_speed_runs() {
        let mut led = Led::new(MockSink::default()).candle(32, 100, 1000).forever();
        for t in 0..100 {
            assert!(led.update(t));
        }
    }

    #[test]
    fn test_set_effect_resets_timing() {
        let mut led = Led::new(MockSink::default()).blink(1, 2).repeat(1);
        for t in 0..3 {
            led.update(t);
        }
        assert!(!led.is_running());
        // configuring a new effect restarts the controller
        led.set_effect(led_effects::EvalSlot::Constant(
            led_effects::ConstantEval::new(77),
        ));
        assert!(led.is_running());
        led.update(50);
        assert_eq!(led.sink().last, 77);
    }
}

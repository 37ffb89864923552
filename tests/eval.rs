mod tests {
    use led_effects::{
        BlinkEval, BreatheEval, BrightnessEval, CandleEval, ConstantEval, FadeOffEval, FadeOnEval,
        Rand8,
    };

    #[test]
    fn test_constant() {
        let mut eval = ConstantEval::new(99);
        assert_eq!(eval.period(), 1);
        assert_eq!(eval.eval(0), 99);
        assert_eq!(eval.eval(12345), 99);
    }

    #[test]
    fn test_blink() {
        let mut eval = BlinkEval::new(500, 1500);
        assert_eq!(eval.period(), 2000);
        assert_eq!(eval.eval(0), 255);
        assert_eq!(eval.eval(499), 255);
        assert_eq!(eval.eval(500), 0);
        assert_eq!(eval.eval(1999), 0);
    }

    #[test]
    fn test_fade_on_terminal_value() {
        let mut eval = FadeOnEval::new(2000);
        assert_eq!(eval.eval(0), 0);
        assert_eq!(eval.eval(1999), 255);
    }

    #[test]
    fn test_fade_off_terminal_value() {
        let mut eval = FadeOffEval::new(2000);
        assert_eq!(eval.eval(0), 255);
        assert_eq!(eval.eval(1999), 0);
    }

    #[test]
    fn test_fade_on_off_are_mirrors() {
        let period = 2000;
        let mut on = FadeOnEval::new(period);
        let mut off = FadeOffEval::new(period);
        for t in 0..u32::from(period) {
            assert_eq!(on.eval(t), off.eval(u32::from(period) - t), "t={t}");
        }
    }

    #[test]
    fn test_breathe_symmetric() {
        let mut eval = BreatheEval::new(2000);
        assert_eq!(eval.period(), 2000);
        assert_eq!(eval.eval(0), 0);
        assert_eq!(eval.eval(500), 68);
        assert_eq!(eval.eval(1000), 255);
        assert_eq!(eval.eval(1500), 68);
        // terminal value
        assert_eq!(eval.eval(1999), 0);
    }

    #[test]
    fn test_breathe_plateau_and_range() {
        let mut eval = BreatheEval::with_segments(500, 1000, 500).with_range(10, 250);
        assert_eq!(eval.period(), 2000);
        // rising edge starts at the bottom of the range
        assert_eq!(eval.eval(0), 10);
        // plateau holds the top of the range
        assert_eq!(eval.eval(500), 250);
        assert_eq!(eval.eval(1499), 250);
        // terminal value returns to the bottom
        assert_eq!(eval.eval(1999), 10);
    }

    #[test]
    fn test_candle_memoizes_per_bucket() {
        let mut eval = CandleEval::new(4, 255, 1000).with_seed(7);
        // mirror the generator to predict the value of each single draw
        let mut mirror = Rand8::new(7);
        for bucket in 0..4u32 {
            let r = mirror.next_u8();
            let want = if r >= 255 { 255 } else { r.saturating_mul(2) };
            // same bucket (t >> 4), same value; a second draw inside the
            // bucket would desync the evaluator from the mirrored stream
            for t in bucket * 16..(bucket + 1) * 16 {
                assert_eq!(eval.eval(t), want, "t={t}");
            }
        }
    }

    #[test]
    fn test_candle_oversized_speed_is_total() {
        // speeds at or beyond the width of t collapse into a single bucket
        let mut eval = CandleEval::new(32, 100, 1000).with_seed(7);
        let first = eval.eval(0);
        for t in 1..1000 {
            assert_eq!(eval.eval(t), first);
        }
        let mut eval = CandleEval::new(255, 100, 1000);
        let first = eval.eval(0);
        assert_eq!(eval.eval(999), first);
    }

    #[test]
    fn test_candle_deterministic_for_seed() {
        let mut a = CandleEval::new(2, 100, 1000).with_seed(42);
        let mut b = CandleEval::new(2, 100, 1000).with_seed(42);
        for t in 0..256 {
            assert_eq!(a.eval(t), b.eval(t));
        }
    }

    #[test]
    fn test_candle_zero_jitter_is_steady() {
        let mut eval = CandleEval::new(4, 0, 1000);
        for t in 0..256 {
            assert_eq!(eval.eval(t), 255);
        }
    }
}

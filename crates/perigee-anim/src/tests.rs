#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use crate::scheduler::Scheduler;
    use crate::tween::{linear, quad_in_out, Tween, TweenEngine};

    // ---- Scheduler ----

    #[test]
    fn test_callbacks_run_in_registration_order() {
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        scheduler.register(|order, _| order.push(1));
        scheduler.register(|order, _| order.push(2));
        scheduler.register(|order, _| order.push(3));

        let mut order = Vec::new();
        scheduler.tick(&mut order, 0.0);
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_unregister_removes_by_identity() {
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        scheduler.register(|order, _| order.push(1));
        let second = scheduler.register(|order, _| order.push(2));
        scheduler.register(|order, _| order.push(3));

        assert!(scheduler.unregister(second));
        assert!(!scheduler.unregister(second), "already removed");
        assert_eq!(scheduler.len(), 2);

        let mut order = Vec::new();
        scheduler.tick(&mut order, 0.0);
        assert_eq!(order, vec![1, 3]);
    }

    #[test]
    fn test_delta_derived_from_consecutive_times() {
        let mut scheduler: Scheduler<Vec<f64>> = Scheduler::new();
        scheduler.register(|deltas, frame| deltas.push(frame.delta));

        let mut deltas = Vec::new();
        scheduler.tick(&mut deltas, 100.0);
        scheduler.tick(&mut deltas, 116.7);
        scheduler.tick(&mut deltas, 150.0);

        assert_eq!(deltas.len(), 3);
        assert_eq!(deltas[0], 0.0, "first tick has no previous time");
        assert!((deltas[1] - 16.7).abs() < 1e-10);
        assert!((deltas[2] - 33.3).abs() < 1e-10);
    }

    #[test]
    fn test_callback_receives_absolute_time() {
        let mut scheduler: Scheduler<Vec<f64>> = Scheduler::new();
        scheduler.register(|times, frame| times.push(frame.time));

        let mut times = Vec::new();
        scheduler.tick(&mut times, 250.0);
        scheduler.tick(&mut times, 500.0);
        assert_eq!(times, vec![250.0, 500.0]);
    }

    /// A panicking callback unwinds through tick and skips the rest of the
    /// tick's callbacks; no partial-failure isolation.
    #[test]
    fn test_panic_halts_remaining_callbacks() {
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        scheduler.register(|order, _| order.push(1));
        scheduler.register(|_, _| panic!("callback failure"));
        scheduler.register(|order, _| order.push(3));

        let mut order = Vec::new();
        let result = catch_unwind(AssertUnwindSafe(|| {
            scheduler.tick(&mut order, 0.0);
        }));
        assert!(result.is_err());
        assert_eq!(order, vec![1], "third callback must not run");
    }

    // ---- Tween engine ----

    #[test]
    fn test_tween_reports_start_value_at_t0() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        engine.start(
            Tween::new(1000.0).channel("x", 0.0, 10.0),
            |values, step| values.push(step.value("x")),
        );

        let mut values = Vec::new();
        engine.advance(&mut values, 0.0);
        assert_eq!(values, vec![0.0]);
    }

    #[test]
    fn test_tween_reaches_exact_target_and_self_removes() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        engine.start(
            Tween::new(1000.0).channel("x", 0.0, 10.0),
            |values, step| values.push(step.value("x")),
        );

        let mut values = Vec::new();
        engine.advance(&mut values, 0.0);
        engine.advance(&mut values, 500.0);
        engine.advance(&mut values, 1000.0);
        assert_eq!(*values.last().unwrap(), 10.0, "exact target, no rounding");
        assert!(engine.is_empty(), "completed tween leaves the active set");

        // No further updates after completion
        engine.advance(&mut values, 2000.0);
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_tween_midpoint_under_quad_easing() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        engine.start(
            Tween::new(1000.0).channel("x", 0.0, 10.0),
            |values, step| values.push(step.value("x")),
        );

        let mut values = Vec::new();
        engine.advance(&mut values, 0.0);
        engine.advance(&mut values, 500.0);
        // quad ease-in-out is exactly 0.5 at the midpoint
        assert!((values[1] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_tween_values_monotonic() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        engine.start(
            Tween::new(1000.0).channel("x", 0.0, 10.0),
            |values, step| values.push(step.value("x")),
        );

        let mut values = Vec::new();
        for i in 0..=10 {
            engine.advance(&mut values, i as f64 * 100.0);
        }
        for pair in values.windows(2) {
            assert!(pair[1] > pair[0], "expected strict increase: {pair:?}");
        }
    }

    #[test]
    fn test_channels_interpolate_independently_with_shared_progress() {
        let mut engine: TweenEngine<Vec<(f64, f64)>> = TweenEngine::new();
        engine.start(
            Tween::new(1000.0)
                .channel("x", 0.0, 10.0)
                .channel("y", 100.0, 0.0),
            |values, step| values.push((step.value("x"), step.value("y"))),
        );

        let mut values = Vec::new();
        engine.advance(&mut values, 0.0);
        engine.advance(&mut values, 500.0);
        engine.advance(&mut values, 1000.0);

        let (x, y) = values[1];
        assert!((x - 5.0).abs() < 1e-10);
        assert!((y - 50.0).abs() < 1e-10);
        assert_eq!(values[2], (10.0, 0.0));
    }

    #[test]
    fn test_cancel_skips_final_update() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        let id = engine.start(
            Tween::new(1000.0).channel("x", 0.0, 10.0),
            |values, step| values.push(step.value("x")),
        );

        let mut values = Vec::new();
        engine.advance(&mut values, 0.0);
        engine.advance(&mut values, 300.0);
        assert!(engine.cancel(id));
        assert!(!engine.cancel(id), "already removed");

        engine.advance(&mut values, 1000.0);
        assert_eq!(values.len(), 2, "no update after cancel");
        assert!(values.iter().all(|v| *v != 10.0), "target never reported");
    }

    #[test]
    fn test_manual_start_waits_for_begin() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        let id = engine.start(
            Tween::new(1000.0).channel("x", 0.0, 10.0).manual_start(),
            |values, step| values.push(step.value("x")),
        );

        let mut values = Vec::new();
        engine.advance(&mut values, 100.0);
        assert!(values.is_empty(), "inactive until begin");
        assert_eq!(engine.len(), 1);

        assert!(engine.begin(id));
        assert!(!engine.begin(id), "already running");

        // Clock starts at the first advance after begin, not at creation.
        engine.advance(&mut values, 200.0);
        assert_eq!(values, vec![0.0]);
        engine.advance(&mut values, 700.0);
        assert!((values[1] - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_duration_completes_on_first_advance() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        engine.start(Tween::new(0.0).channel("x", 3.0, 7.0), |values, step| {
            values.push(step.value("x"))
        });

        let mut values = Vec::new();
        engine.advance(&mut values, 123.0);
        assert_eq!(values, vec![7.0]);
        assert!(engine.is_empty());
    }

    #[test]
    fn test_concurrent_tweens_are_independent() {
        let mut engine: TweenEngine<Vec<(u32, f64)>> = TweenEngine::new();
        engine.start(Tween::new(1000.0).channel("a", 0.0, 1.0), |values, step| {
            values.push((1, step.value("a")))
        });
        engine.start(Tween::new(500.0).channel("b", 0.0, 1.0), |values, step| {
            values.push((2, step.value("b")))
        });

        let mut values = Vec::new();
        engine.advance(&mut values, 0.0);
        engine.advance(&mut values, 500.0);
        // The short tween finished and removed itself; the long one continues.
        assert_eq!(engine.len(), 1);
        engine.advance(&mut values, 1000.0);
        assert!(engine.is_empty());

        let finished: Vec<&(u32, f64)> = values.iter().filter(|(_, v)| *v == 1.0).collect();
        assert_eq!(finished.len(), 2, "each tween completes exactly once");
    }

    #[test]
    #[should_panic(expected = "no channel named")]
    fn test_unknown_channel_name_panics() {
        let mut engine: TweenEngine<()> = TweenEngine::new();
        engine.start(Tween::new(1000.0).channel("x", 0.0, 1.0), |_, step| {
            step.value("missing");
        });
        engine.advance(&mut (), 0.0);
    }

    #[test]
    fn test_progress_is_normalized_time() {
        let mut engine: TweenEngine<Vec<f64>> = TweenEngine::new();
        engine.start(
            Tween::new(1000.0).channel("x", 0.0, 1.0).easing(linear),
            |progress, step| progress.push(step.progress()),
        );

        let mut progress = Vec::new();
        engine.advance(&mut progress, 0.0);
        engine.advance(&mut progress, 250.0);
        engine.advance(&mut progress, 1000.0);
        assert_eq!(progress, vec![0.0, 0.25, 1.0]);
    }

    // ---- Easing curves ----

    #[test]
    fn test_quad_in_out_curve() {
        assert_eq!(quad_in_out(0.0), 0.0);
        assert!((quad_in_out(0.25) - 0.125).abs() < 1e-12);
        assert!((quad_in_out(0.5) - 0.5).abs() < 1e-12);
        assert!((quad_in_out(0.75) - 0.875).abs() < 1e-12);
        assert_eq!(quad_in_out(1.0), 1.0);
    }

    #[test]
    fn test_linear_curve() {
        assert_eq!(linear(0.0), 0.0);
        assert_eq!(linear(0.3), 0.3);
        assert_eq!(linear(1.0), 1.0);
    }
}

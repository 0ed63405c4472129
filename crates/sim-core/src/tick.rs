use tracing::trace;
use types::{fallback_fps, DisplayState};

use crate::waveform::true_position;
use crate::{FpsSource, FrameSimulation};

impl FrameSimulation {
    /// Advances the simulation to `timestamp` (milliseconds, monotonic host clock)
    /// and returns the state to display. Called once per display refresh,
    /// paused or not.
    pub fn tick(&mut self, timestamp: f64) -> DisplayState {
        // 1. Clamp regressions so the effective clock never runs backwards;
        // non-finite timestamps repeat the previous tick
        let now = match self.last_tick {
            Some(last) if !timestamp.is_finite() => last,
            Some(last) => timestamp.max(last),
            None if timestamp.is_finite() => timestamp,
            None => 0.0,
        };

        if !self.config.playing {
            self.last_tick = Some(now);
            return self.display;
        }

        // 2. Advance physics
        let raw_delta = self.last_tick.map_or(0.0, |last| now - last);
        self.last_tick = Some(now);

        let time_scale = self.config.time_scale(&self.params);
        self.physics_phase += raw_delta * time_scale;
        let true_pos = true_position(self.physics_phase, &self.params);

        // 3. Native layer captures at its own cadence
        let interval = self.params.native_interval_ms(time_scale);
        if self.native.update(now, interval, true_pos) {
            trace!(now, position = true_pos, "native capture");
        }
        let native_pos = self.native.position();

        // 4. Display
        let (display_position, is_generated_frame) = if self.config.frame_gen_enabled {
            let diverged = (true_pos - native_pos).abs() > self.params.generated_threshold;
            (true_pos, diverged)
        } else {
            (native_pos, false)
        };

        // 5. FPS readout; native mode reports its apparent capture rate
        let source = if self.config.frame_gen_enabled {
            FpsSource::Measured
        } else {
            FpsSource::Synthetic(self.params.native_display_fps(time_scale))
        };
        self.fps.record(now, self.params.fps_window_ms, source);

        self.display = DisplayState {
            display_position,
            ghost_position: native_pos,
            is_generated_frame,
            display_fps: self
                .fps
                .measured()
                .unwrap_or_else(|| fallback_fps(&self.params, &self.config)),
        };
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use types::{DemoConfig, SimParams};

    fn sim_with(frame_gen_enabled: bool, slow_motion: bool) -> FrameSimulation {
        let mut sim = FrameSimulation::new(SimParams::default());
        sim.configure(DemoConfig {
            frame_gen_enabled,
            slow_motion,
            playing: true,
        });
        sim
    }

    /// Ticks every `step` ms over `[0, until]`, returning the timestamps of native captures.
    fn run(sim: &mut FrameSimulation, step: u32, until: u32) -> Vec<f64> {
        let mut captures = Vec::new();
        let mut t = 0;
        while t <= until {
            sim.tick(t as f64);
            if sim.last_native_update() == Some(t as f64) {
                captures.push(t as f64);
            }
            t += step;
        }
        captures
    }

    #[test]
    fn first_tick_has_zero_delta() {
        let mut sim = sim_with(false, false);
        sim.tick(12_345.0);
        assert_eq!(sim.physics_phase(), 0.0);
        assert_eq!(sim.last_tick(), Some(12_345.0));
    }

    #[test]
    fn regressing_timestamp_is_clamped() {
        let mut sim = sim_with(true, false);
        sim.tick(100.0);
        sim.tick(200.0);
        let phase = sim.physics_phase();
        sim.tick(150.0);
        assert_eq!(sim.physics_phase(), phase);
        assert_eq!(sim.last_tick(), Some(200.0));
        sim.tick(216.0);
        assert_eq!(sim.physics_phase(), phase + 16.0);
    }

    #[test]
    fn non_finite_timestamp_repeats_previous_tick() {
        let mut sim = sim_with(true, false);
        sim.tick(100.0);
        sim.tick(116.0);
        let phase = sim.physics_phase();

        sim.tick(f64::NAN);
        sim.tick(f64::INFINITY);
        assert_eq!(sim.physics_phase(), phase);
        assert_eq!(sim.last_tick(), Some(116.0));

        let d = sim.tick(132.0);
        assert_eq!(sim.physics_phase(), phase + 16.0);
        assert!(d.display_position.is_finite());
        assert!((10.0..=90.0).contains(&d.display_position));
    }

    #[test]
    fn non_finite_first_tick_starts_at_zero() {
        let mut sim = sim_with(false, false);
        sim.tick(f64::NAN);
        assert_eq!(sim.last_tick(), Some(0.0));
        assert_eq!(sim.physics_phase(), 0.0);
        sim.tick(16.0);
        assert_eq!(sim.physics_phase(), 16.0);
    }

    #[test]
    fn native_mode_settles_at_twelve_fps() {
        let mut sim = sim_with(false, false);
        let captures = run(&mut sim, 16, 2000);

        assert!(captures.len() >= 20, "only {} captures", captures.len());
        for pair in captures.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap > 83.0 && gap <= 100.0, "gap {gap}");
        }
        assert_eq!(sim.display().display_fps, 12);
    }

    #[test]
    fn slow_motion_stretches_native_interval() {
        let mut sim = sim_with(false, true);
        let captures = run(&mut sim, 16, 2000);

        assert!(captures.len() >= 4, "only {} captures", captures.len());
        for pair in captures.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap > 416.0 && gap <= 433.0, "gap {gap}");
        }
        assert_eq!(sim.display().display_fps, 2);
    }

    #[test]
    fn frame_gen_measures_tick_rate_and_flags_generated_frames() {
        let mut sim = sim_with(true, false);
        let params = SimParams::default();
        let mut generated = 0;
        let mut native = 0;

        let mut t = 0;
        while t <= 1100 {
            let d = sim.tick(t as f64);
            let true_pos = true_position(sim.physics_phase(), &params);
            assert_eq!(d.display_position, true_pos);
            assert_eq!(d.ghost_position, sim.native_position());
            assert_eq!(
                d.is_generated_frame,
                (true_pos - sim.native_position()).abs() > 0.5
            );
            if d.is_generated_frame {
                generated += 1;
            } else {
                native += 1;
            }
            t += 16;
        }

        let fps = sim.display().display_fps;
        assert!((55..=65).contains(&fps), "fps {fps}");
        assert!(generated > 0);
        assert!(native > 0);
    }

    #[test]
    fn fallback_fps_shown_before_first_window() {
        let mut sim = sim_with(true, false);
        assert_eq!(sim.tick(0.0).display_fps, 60);
        assert_eq!(sim.tick(500.0).display_fps, 60);

        sim.configure(DemoConfig {
            frame_gen_enabled: false,
            slow_motion: true,
            playing: true,
        });
        assert_eq!(sim.tick(600.0).display_fps, 2);
    }

    #[test]
    fn pause_freezes_everything_but_the_clock() {
        let mut sim = sim_with(true, false);
        run(&mut sim, 16, 320);
        let phase = sim.physics_phase();
        let native = sim.native_position();
        let display = sim.display();

        let mut cfg = sim.config();
        cfg.playing = false;
        sim.configure(cfg);
        for t in [400.0, 900.0, 5000.0] {
            assert_eq!(sim.tick(t), display);
            assert_eq!(sim.physics_phase(), phase);
            assert_eq!(sim.native_position(), native);
            assert_eq!(sim.last_tick(), Some(t));
        }

        // Resuming does not replay the paused time.
        cfg.playing = true;
        sim.configure(cfg);
        sim.tick(5016.0);
        assert_eq!(sim.physics_phase(), phase + 16.0);
    }

    #[test]
    fn config_change_applies_on_next_tick() {
        let mut sim = sim_with(false, false);
        sim.tick(0.0);
        sim.tick(16.0);
        assert_eq!(sim.physics_phase(), 16.0);

        sim.configure(DemoConfig {
            frame_gen_enabled: false,
            slow_motion: true,
            playing: true,
        });
        sim.tick(32.0);
        assert!((sim.physics_phase() - 19.2).abs() < 1e-9);
    }

    #[test]
    fn native_position_held_within_interval() {
        let mut sim = sim_with(false, false);
        sim.tick(0.0);
        let held = sim.native_position();
        for t in (1..=83).map(f64::from) {
            let d = sim.tick(t);
            assert_eq!(sim.native_position(), held);
            assert_eq!(d.display_position, held);
        }
        sim.tick(84.0);
        assert_ne!(sim.native_position(), held);
    }

    proptest! {
        #[test]
        fn phase_advances_by_scaled_delta(
            steps in prop::collection::vec((0u32..100, any::<bool>()), 1..200)
        ) {
            let mut sim = sim_with(true, false);
            let params = SimParams::default();
            let mut now = 1_000u32;
            sim.tick(now as f64);
            let mut expected = 0.0f64;

            for (delta, slow) in steps {
                let mut cfg = sim.config();
                cfg.slow_motion = slow;
                sim.configure(cfg);

                let before = sim.physics_phase();
                now += delta;
                sim.tick(now as f64);
                expected += delta as f64 * cfg.time_scale(&params);

                prop_assert!(sim.physics_phase() >= before);
                prop_assert!((sim.physics_phase() - expected).abs() < 1e-6);
            }
        }

        #[test]
        fn native_mode_shows_native_position(
            deltas in prop::collection::vec(0u32..200, 1..300),
            slow in any::<bool>()
        ) {
            let mut sim = sim_with(false, slow);
            let mut now = 0u32;
            for delta in deltas {
                now += delta;
                let d = sim.tick(now as f64);
                prop_assert!(!d.is_generated_frame);
                prop_assert_eq!(d.display_position, sim.native_position());
                let (low, high) = sim.params().position_range();
                prop_assert!((low..=high).contains(&d.display_position));
            }
        }
    }
}

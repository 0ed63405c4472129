/// Host-side frame clock: counts frames and keeps timestamps monotonic
/// before they reach the simulation.
pub struct FrameTiming {
    pub frame_count: u64,
    /// Frames whose timestamp went backwards or was not finite.
    pub regressions: u64,
    last_timestamp: Option<f64>,
}

impl FrameTiming {
    pub fn new() -> Self {
        Self {
            frame_count: 0,
            regressions: 0,
            last_timestamp: None,
        }
    }

    /// Records a frame at `timestamp` (ms) and returns it clamped so it never
    /// falls behind the previous frame. Non-finite values repeat the previous one.
    pub fn update(&mut self, timestamp: f64) -> f64 {
        self.frame_count += 1;

        let previous = self.last_timestamp.unwrap_or(0.0);
        let now = if !timestamp.is_finite() || (self.last_timestamp.is_some() && timestamp < previous) {
            self.regressions += 1;
            previous
        } else {
            timestamp
        };

        self.last_timestamp = Some(now);
        now
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

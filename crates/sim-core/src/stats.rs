use tracing::debug;

/// Rolling FPS measurement over fixed windows.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    frame_counter: u32,
    window_start: Option<f64>,
    measured: Option<u32>,
}

/// How a completed window turns into the FPS readout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FpsSource {
    /// Count ticks over the window.
    Measured,
    /// Report a fixed rate instead of counting.
    Synthetic(u32),
}

impl FpsMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last completed measurement. `None` until the first window closes,
    /// or when the window counted no frames.
    pub fn measured(&self) -> Option<u32> {
        self.measured.filter(|&fps| fps > 0)
    }

    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Counts one frame at `now` and closes the window once `window_ms` has elapsed.
    /// Returns true when a window closed on this frame.
    pub fn record(&mut self, now: f64, window_ms: f64, source: FpsSource) -> bool {
        let start = *self.window_start.get_or_insert(now);
        self.frame_counter += 1;

        let elapsed = now - start;
        if elapsed < window_ms {
            return false;
        }

        let fps = match source {
            FpsSource::Measured => (self.frame_counter as f64 * 1000.0 / elapsed).round() as u32,
            FpsSource::Synthetic(fps) => fps,
        };
        debug!(fps, frames = self.frame_counter, elapsed_ms = elapsed, "fps window closed");

        self.measured = Some(fps);
        self.frame_counter = 0;
        self.window_start = Some(now);
        true
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("{field} must be positive and finite, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Tunable constants of the frame-generation demo.
/// Every field has a default, so a partial JSON object is a valid override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SimParams {
    /// Rate at which the "native" layer captures frames, per simulated second.
    pub native_fps: f64,
    /// Physics clock multiplier while slow motion is on.
    pub slow_motion_scale: f64,
    /// Angular frequency of the position waveform, per phase millisecond.
    pub phase_frequency: f64,
    /// Waveform centre, in percent of the screen width.
    pub center: f64,
    /// Waveform amplitude, in percent of the screen width.
    pub amplitude: f64,
    /// Minimum divergence from the native snapshot for a tick to count as generated.
    pub generated_threshold: f64,
    /// Length of the FPS measurement window.
    pub fps_window_ms: f64,
    /// FPS shown in frame-gen mode before the first window completes.
    pub generated_fallback_fps: u32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            native_fps: 12.0,
            slow_motion_scale: 0.2,
            phase_frequency: 0.002,
            center: 50.0,
            amplitude: 40.0,
            generated_threshold: 0.5,
            fps_window_ms: 1000.0,
            generated_fallback_fps: 60,
        }
    }
}

impl SimParams {
    /// Wall-clock milliseconds between native captures.
    /// Stretched under slow motion so captures per unit of motion stay constant.
    pub fn native_interval_ms(&self, time_scale: f64) -> f64 {
        (1000.0 / self.native_fps) / time_scale
    }

    /// The apparent native rate shown when frame generation is off.
    pub fn native_display_fps(&self, time_scale: f64) -> u32 {
        (self.native_fps * time_scale).round().max(0.0) as u32
    }

    /// Rejects values that would stall the native layer or divide by zero.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let positive = [
            ("nativeFps", self.native_fps),
            ("slowMotionScale", self.slow_motion_scale),
            ("fpsWindowMs", self.fps_window_ms),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NotPositive { field, value });
            }
        }
        Ok(())
    }

    /// Lowest and highest position the waveform can reach.
    pub fn position_range(&self) -> (f64, f64) {
        (self.center - self.amplitude, self.center + self.amplitude)
    }
}

use serde::Serialize;

use crate::{DemoConfig, SimParams};

/// Snapshot handed to the presentation layer after every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    /// Marker position in percent of the screen width, within the waveform range.
    pub display_position: f64,
    /// Last native capture, drawn as a reference only when frame generation is on.
    pub ghost_position: f64,
    pub is_generated_frame: bool,
    pub display_fps: u32,
}

impl DisplayState {
    /// State shown before the first tick: marker at rest in the centre.
    pub fn initial(params: &SimParams, config: &DemoConfig) -> Self {
        Self {
            display_position: params.center,
            ghost_position: params.center,
            is_generated_frame: false,
            display_fps: fallback_fps(params, config),
        }
    }
}

/// FPS shown until a measurement window has completed.
pub fn fallback_fps(params: &SimParams, config: &DemoConfig) -> u32 {
    if config.frame_gen_enabled {
        params.generated_fallback_fps
    } else {
        params.native_display_fps(config.time_scale(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_depends_on_mode() {
        let p = SimParams::default();
        let mut c = DemoConfig::default();
        assert_eq!(fallback_fps(&p, &c), 12);
        c.slow_motion = true;
        assert_eq!(fallback_fps(&p, &c), 2);
        c.frame_gen_enabled = true;
        assert_eq!(fallback_fps(&p, &c), 60);
    }

    #[test]
    fn serializes_camel_case() {
        let s = DisplayState::initial(&SimParams::default(), &DemoConfig::default());
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"displayPosition\":50.0"));
        assert!(json.contains("\"isGeneratedFrame\":false"));
        assert!(json.contains("\"displayFps\":12"));
    }
}

use serde::{Deserialize, Serialize};

use crate::{Command, SimParams};

/// User-facing switches of the demo. Read by the simulation on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DemoConfig {
    pub frame_gen_enabled: bool,
    pub slow_motion: bool,
    pub playing: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_gen_enabled: false,
            slow_motion: false,
            playing: true,
        }
    }
}

impl DemoConfig {
    /// Physics clock multiplier for the current slow-motion setting.
    pub fn time_scale(&self, params: &SimParams) -> f64 {
        if self.slow_motion {
            params.slow_motion_scale
        } else {
            1.0
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetFrameGen(on) => self.frame_gen_enabled = on,
            Command::SetSlowMotion(on) => self.slow_motion = on,
            Command::SetPlaying(on) => self.playing = on,
            Command::ToggleFrameGen => self.frame_gen_enabled = !self.frame_gen_enabled,
            Command::ToggleSlowMotion => self.slow_motion = !self.slow_motion,
            Command::TogglePlaying => self.playing = !self.playing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_playing_native_full_speed() {
        let c = DemoConfig::default();
        assert!(c.playing);
        assert!(!c.frame_gen_enabled);
        assert!(!c.slow_motion);
    }

    #[test]
    fn toggles_negate_and_setters_are_idempotent() {
        let mut c = DemoConfig::default();
        c.apply(Command::ToggleFrameGen);
        assert!(c.frame_gen_enabled);
        c.apply(Command::ToggleFrameGen);
        assert!(!c.frame_gen_enabled);

        c.apply(Command::SetSlowMotion(true));
        c.apply(Command::SetSlowMotion(true));
        assert!(c.slow_motion);

        c.apply(Command::TogglePlaying);
        assert!(!c.playing);
    }

    #[test]
    fn time_scale_follows_slow_motion() {
        let p = SimParams::default();
        let mut c = DemoConfig::default();
        assert_eq!(c.time_scale(&p), 1.0);
        c.slow_motion = true;
        assert_eq!(c.time_scale(&p), 0.2);
    }
}

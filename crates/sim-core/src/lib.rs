//! Frame-generation demo simulation.
//!
//! A sine-wave "physics" position is sampled by a low-rate native layer; with
//! frame generation enabled the display follows the continuous position and
//! flags every tick that diverges from the last native capture.

pub mod capture;
pub mod stats;
pub mod tick;
pub mod waveform;

pub use stats::{FpsMeter, FpsSource};

use capture::NativeCapture;
use tracing::debug;
use types::{DemoConfig, DisplayState, SimParams};

pub struct FrameSimulation {
    params: SimParams,
    config: DemoConfig,
    last_tick: Option<f64>,
    physics_phase: f64,
    native: NativeCapture,
    fps: FpsMeter,
    display: DisplayState,
}

impl FrameSimulation {
    pub fn new(params: SimParams) -> Self {
        let config = DemoConfig::default();
        Self {
            params,
            config,
            last_tick: None,
            physics_phase: 0.0,
            native: NativeCapture::new(params.center),
            fps: FpsMeter::new(),
            display: DisplayState::initial(&params, &config),
        }
    }

    /// Replaces the configuration snapshot read by the next tick.
    pub fn configure(&mut self, config: DemoConfig) {
        if config != self.config {
            debug!(
                frame_gen = config.frame_gen_enabled,
                slow_motion = config.slow_motion,
                playing = config.playing,
                "simulation reconfigured"
            );
            self.config = config;
        }
    }

    pub fn config(&self) -> DemoConfig {
        self.config
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Most recently emitted display state.
    pub fn display(&self) -> DisplayState {
        self.display
    }

    pub fn physics_phase(&self) -> f64 {
        self.physics_phase
    }

    pub fn native_position(&self) -> f64 {
        self.native.position()
    }

    pub fn last_native_update(&self) -> Option<f64> {
        self.native.last_update()
    }

    pub fn last_tick(&self) -> Option<f64> {
        self.last_tick
    }
}

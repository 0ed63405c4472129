use serde::Deserialize;
use types::{DemoConfig, SimParams};
use wasm_bindgen::JsValue;

use crate::error::HostError;

/// Options accepted by `init`. Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostOptions {
    pub canvas_id: String,
    /// Prefix of the HUD element ids, e.g. `demo-fps`.
    pub hud_prefix: String,
    /// `trace`, `debug`, `info`, `warn`, `error` or `off`.
    pub log_level: String,
    pub params: SimParams,
    pub config: DemoConfig,
}

impl Default for HostOptions {
    fn default() -> Self {
        Self {
            canvas_id: "demo-canvas".to_string(),
            hud_prefix: "demo".to_string(),
            log_level: "info".to_string(),
            params: SimParams::default(),
            config: DemoConfig::default(),
        }
    }
}

impl HostOptions {
    /// `undefined` and `null` select the defaults.
    pub fn from_js(value: JsValue) -> Result<Self, HostError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let options: Self =
            serde_wasm_bindgen::from_value(value).map_err(|e| HostError::Options(e.to_string()))?;
        options.validated()
    }

    pub fn validated(self) -> Result<Self, HostError> {
        self.params
            .validate()
            .map_err(|e| HostError::Options(e.to_string()))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let opts: HostOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, HostOptions::default());
    }

    #[test]
    fn zero_fps_window_is_rejected() {
        let opts: HostOptions =
            serde_json::from_str(r#"{ "params": { "fpsWindowMs": 0 } }"#).unwrap();
        match opts.validated() {
            Err(HostError::Options(msg)) => assert!(msg.contains("fpsWindowMs"), "{msg}"),
            other => panic!("expected options error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(HostOptions::default().validated().is_ok());
    }

    #[test]
    fn nested_overrides() {
        let opts: HostOptions = serde_json::from_str(
            r#"{
                "canvasId": "lsfg",
                "logLevel": "debug",
                "params": { "nativeFps": 15 },
                "config": { "frameGenEnabled": true }
            }"#,
        )
        .unwrap();
        assert_eq!(opts.canvas_id, "lsfg");
        assert_eq!(opts.hud_prefix, "demo");
        assert_eq!(opts.log_level, "debug");
        assert_eq!(opts.params.native_fps, 15.0);
        assert_eq!(opts.params.slow_motion_scale, 0.2);
        assert!(opts.config.frame_gen_enabled);
        assert!(opts.config.playing);
    }
}

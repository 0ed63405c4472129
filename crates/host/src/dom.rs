use renderer::HudText;
use tracing::{debug, warn};
use types::DemoConfig;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// HUD nodes around the canvas. Any of them may be absent from the page.
pub struct HudElements {
    mode: Option<Element>,
    fps: Option<Element>,
    frame_gen_toggle: Option<Element>,
    frame_gen_caption: Option<Element>,
    slow_motion_toggle: Option<Element>,
    slow_motion_caption: Option<Element>,
    play: Option<Element>,
    badge: Option<Element>,
    legend_generated: Option<Element>,
    explanation: Option<Element>,
}

impl HudElements {
    /// Looks up `{prefix}-mode`, `{prefix}-fps`, ... in `document`.
    pub fn find(document: &Document, prefix: &str) -> Self {
        let get = |suffix: &str| {
            let id = format!("{prefix}-{suffix}");
            let el = document.get_element_by_id(&id);
            if el.is_none() {
                debug!(%id, "hud element not found");
            }
            el
        };
        Self {
            mode: get("mode"),
            fps: get("fps"),
            frame_gen_toggle: get("frame-gen-toggle"),
            frame_gen_caption: get("frame-gen-caption"),
            slow_motion_toggle: get("slow-motion-toggle"),
            slow_motion_caption: get("slow-motion-caption"),
            play: get("play"),
            badge: get("badge"),
            legend_generated: get("legend-generated"),
            explanation: get("explanation"),
        }
    }

    pub fn apply(&self, hud: &HudText, config: &DemoConfig) {
        set_text(&self.mode, hud.mode_label);
        set_text(&self.fps, &hud.fps_readout);
        set_text(&self.frame_gen_caption, &hud.frame_gen_caption);
        set_text(&self.slow_motion_caption, &hud.slow_motion_caption);
        set_text(&self.badge, hud.marker_badge);
        set_text(&self.explanation, hud.explanation);

        let result = (|| -> Result<(), JsValue> {
            set_attr(&self.fps, "data-accent", hud.accent.as_str())?;
            set_attr(&self.mode, "data-accent", hud.accent.as_str())?;
            set_attr(&self.play, "data-glyph", hud.play_glyph.as_str())?;
            set_attr(&self.frame_gen_toggle, "data-active", flag(config.frame_gen_enabled))?;
            set_attr(&self.slow_motion_toggle, "data-active", flag(config.slow_motion))?;
            if let Some(el) = &self.legend_generated {
                el.toggle_attribute_with_force("hidden", !hud.generated_legend_visible)?;
            }
            Ok(())
        })();
        if let Err(e) = result {
            warn!(?e, "hud update failed");
        }
    }
}

fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

fn set_text(el: &Option<Element>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

fn set_attr(el: &Option<Element>, name: &str, value: &str) -> Result<(), JsValue> {
    match el {
        Some(el) => el.set_attribute(name, value),
        None => Ok(()),
    }
}

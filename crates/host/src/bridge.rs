use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use types::Command;

use crate::App;

thread_local! {
    pub static APP: RefCell<Option<App>> = RefCell::new(None);
}

pub(crate) fn is_mounted() -> bool {
    APP.with(|app| app.borrow().is_some())
}

/// Stores `value` unless the slot is occupied, handing it back in that case.
pub(crate) fn store_if_empty<T>(slot: &RefCell<Option<T>>, value: T) -> Result<(), T> {
    let mut slot = slot.borrow_mut();
    if slot.is_some() {
        return Err(value);
    }
    *slot = Some(value);
    Ok(())
}

/// Queues `command` for the next frame. Ignored when the demo is not mounted.
fn queue(command: Command) {
    APP.with(|app| {
        if let Some(ref mut app) = *app.borrow_mut() {
            app.pending_commands.push(command);
        }
    });
}

#[wasm_bindgen]
pub fn toggle_frame_gen() {
    queue(Command::ToggleFrameGen);
}

#[wasm_bindgen]
pub fn set_frame_gen(enabled: bool) {
    queue(Command::SetFrameGen(enabled));
}

#[wasm_bindgen]
pub fn toggle_slow_motion() {
    queue(Command::ToggleSlowMotion);
}

#[wasm_bindgen]
pub fn set_slow_motion(enabled: bool) {
    queue(Command::SetSlowMotion(enabled));
}

#[wasm_bindgen]
pub fn toggle_playing() {
    queue(Command::TogglePlaying);
}

#[wasm_bindgen]
pub fn set_playing(playing: bool) {
    queue(Command::SetPlaying(playing));
}

#[wasm_bindgen]
pub fn on_key_down(key: String) {
    if let Some(command) = Command::from_key(&key) {
        queue(command);
    }
}

/// Latest `DisplayState` as a plain object, or `null` when not mounted.
#[wasm_bindgen]
pub fn display_state() -> Result<JsValue, JsValue> {
    APP.with(|app| match app.borrow().as_ref() {
        Some(app) => serde_wasm_bindgen::to_value(&app.sim.display()).map_err(JsValue::from),
        None => Ok(JsValue::NULL),
    })
}

/// Configuration including toggles not yet applied by a frame, or `null` when not mounted.
#[wasm_bindgen]
pub fn config() -> Result<JsValue, JsValue> {
    APP.with(|app| match app.borrow().as_ref() {
        Some(app) => serde_wasm_bindgen::to_value(&app.effective_config()).map_err(JsValue::from),
        None => Ok(JsValue::NULL),
    })
}

/// Stops the frame loop and releases the app. Safe to call repeatedly.
#[wasm_bindgen]
pub fn unmount() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if let Some(app) = app {
        app.teardown();
    }
}

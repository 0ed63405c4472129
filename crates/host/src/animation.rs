use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, error, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::error::HostError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A recurring `requestAnimationFrame` registration.
///
/// The callback reschedules itself after every frame until `stop` is called or
/// the loop is dropped, both of which cancel the pending request.
pub struct AnimationLoop {
    window: web_sys::Window,
    handle: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
    // Owns the closure; the closure only holds a weak reference back.
    _callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let handle = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let tick = {
            let window = window.clone();
            let handle = handle.clone();
            let stopped = stopped.clone();
            let weak = Rc::downgrade(&callback);
            Closure::wrap(Box::new(move |timestamp: f64| {
                handle.set(None);
                if stopped.get() {
                    return;
                }
                on_frame(timestamp);
                if stopped.get() {
                    return;
                }
                let Some(callback) = weak.upgrade() else {
                    return;
                };
                let borrow = callback.borrow();
                if let Some(cb) = borrow.as_ref() {
                    match request(&window, cb) {
                        Ok(id) => handle.set(Some(id)),
                        Err(e) => error!(%e, "animation loop stalled"),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let first = request(&window, &tick)?;
        handle.set(Some(first));
        *callback.borrow_mut() = Some(tick);
        debug!("animation loop started");

        Ok(Self {
            window,
            handle,
            stopped,
            _callback: callback,
        })
    }

    /// Cancels the pending frame request. Idempotent.
    pub fn stop(&mut self) {
        if self.stopped.replace(true) {
            return;
        }
        if let Some(id) = self.handle.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                warn!(?e, "cancelAnimationFrame failed");
            }
        }
        debug!("animation loop stopped");
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(window: &web_sys::Window, callback: &FrameCallback) -> Result<i32, HostError> {
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    window
        .request_animation_frame(function)
        .map_err(|e| HostError::AnimationFrame(format!("{e:?}")))
}

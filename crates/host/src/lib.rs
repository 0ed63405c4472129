pub mod animation;
pub mod bridge;
pub mod dom;
pub mod error;
pub mod gpu;
pub mod logging;
pub mod options;
pub mod timing;

use animation::AnimationLoop;
use dom::HudElements;
use error::HostError;
use options::HostOptions;
use renderer::{HudText, Renderer, SceneLayout};
use sim_core::FrameSimulation;
use timing::FrameTiming;
use tracing::{error, info, warn};
use types::Command;
use wasm_bindgen::prelude::*;

pub struct App {
    pub gpu: gpu::GpuContext,
    pub sim: FrameSimulation,
    pub renderer: Renderer,
    pub timing: FrameTiming,
    pub pending_commands: Vec<Command>,
    pub hud: HudElements,
    pub last_hud: Option<HudText>,
    pub pixel_ratio: f32,
    animation: Option<AnimationLoop>,
}

impl App {
    /// Configuration the next tick will see, including queued commands.
    pub fn effective_config(&self) -> types::DemoConfig {
        let mut config = self.sim.config();
        for &cmd in &self.pending_commands {
            config.apply(cmd);
        }
        config
    }

    /// Cancels the frame loop. The app must not be ticked afterwards.
    pub fn teardown(mut self) {
        if let Some(mut animation) = self.animation.take() {
            animation.stop();
        }
        info!(
            frames = self.timing.frame_count,
            clock_regressions = self.timing.regressions,
            "demo unmounted"
        );
    }
}

/// Mounts the demo on the page and starts the frame loop.
/// `options` may be `undefined`; see `HostOptions` for the accepted fields.
#[wasm_bindgen]
pub async fn init(options: JsValue) -> Result<(), JsValue> {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();

    let options = HostOptions::from_js(options)?;
    logging::init(&options.log_level);

    mount(options).await.map_err(|e| {
        error!(%e, "mount failed");
        JsValue::from(e)
    })
}

async fn mount(options: HostOptions) -> Result<(), HostError> {
    if bridge::is_mounted() {
        return Err(HostError::AlreadyMounted);
    }

    // Get canvas from DOM
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;
    let canvas = document
        .get_element_by_id(&options.canvas_id)
        .ok_or_else(|| HostError::CanvasNotFound(options.canvas_id.clone()))?;
    let canvas: web_sys::HtmlCanvasElement = canvas
        .dyn_into()
        .map_err(|_| HostError::NotACanvas(options.canvas_id.clone()))?;

    // Set canvas size to match CSS layout
    let dpr = window.device_pixel_ratio();
    let width = (canvas.client_width() as f64 * dpr) as u32;
    let height = (canvas.client_height() as f64 * dpr) as u32;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
    info!(width, height, dpr, "canvas sized");

    let gpu = gpu::init_gpu(canvas).await?;
    let renderer = Renderer::new(&gpu.device, &gpu.surface_config);

    let mut sim = FrameSimulation::new(options.params);
    sim.configure(options.config);

    let app = App {
        gpu,
        sim,
        renderer,
        timing: FrameTiming::new(),
        pending_commands: Vec::new(),
        hud: HudElements::find(&document, &options.hud_prefix),
        last_hud: None,
        pixel_ratio: dpr as f32,
        animation: None,
    };

    // A concurrent init may have mounted while the GPU was initialising
    if bridge::APP.with(|cell| bridge::store_if_empty(cell, app)).is_err() {
        return Err(HostError::AlreadyMounted);
    }

    let animation = match AnimationLoop::start(frame) {
        Ok(animation) => animation,
        Err(e) => {
            bridge::APP.with(|cell| cell.borrow_mut().take());
            return Err(e);
        }
    };
    bridge::APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            app.animation = Some(animation);
        }
    });

    info!(config = ?options.config, "frame generation demo mounted");
    Ok(())
}

/// One display refresh: apply queued input, tick the simulation, update the HUD and draw.
pub fn frame(timestamp: f64) {
    bridge::APP.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let app = match borrow.as_mut() {
            Some(app) => app,
            None => return,
        };

        let now = app.timing.update(timestamp);

        if !app.pending_commands.is_empty() {
            let config = app.effective_config();
            app.pending_commands.clear();
            app.sim.configure(config);
        }
        let config = app.sim.config();
        let display = app.sim.tick(now);

        let hud = HudText::new(&display, &config, app.sim.params());
        if app.last_hud.as_ref() != Some(&hud) {
            app.hud.apply(&hud, &config);
            app.last_hud = Some(hud);
        }

        // Get surface texture — don't panic on error
        let surface_texture = match app.gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                warn!("surface lost, reconfiguring");
                app.gpu.reconfigure();
                return;
            }
            Err(_) => return,
        };

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = app
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame_encoder"),
            });

        let layout = SceneLayout::build(&display, &config, app.gpu.viewport(), app.pixel_ratio);
        app.renderer
            .render_frame(&mut encoder, &surface_view, &app.gpu.queue, &layout);

        app.gpu.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    });
}

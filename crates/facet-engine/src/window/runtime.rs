use std::sync::Arc;

use anyhow::{Context, Result, anyhow};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::device::{FramePresenter, Gpu, GpuInit, SurfaceErrorAction};
use crate::input::{InputEvent, translate_window_event};
use crate::scene::Scene;

/// Entry point for the runtime.
///
/// Runs the scene's one-frame lifecycle: open the window, render, present,
/// wait for an exit trigger, tear down.
pub struct Runtime;

impl Runtime {
    /// Blocks until the user exits. Executes once per process.
    pub fn run(scene: Scene) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(scene);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.into_result()
    }
}

/// Live window-bound resources.
///
/// Field order is teardown order: presenter resources drop before the GPU
/// device/surface, and the surface drops before the window it is bound to.
struct Display {
    presenter: FramePresenter,
    gpu: Gpu,
    window: Arc<Window>,
}

struct AppState {
    scene: Scene,
    display: Option<Display>,

    /// The scene rasterizes exactly one frame; re-presents reuse it.
    rendered: bool,

    /// Carried out of the event loop and returned from [`Runtime::run`].
    fatal: Option<anyhow::Error>,
}

impl AppState {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            display: None,
            rendered: false,
            fatal: None,
        }
    }

    fn into_result(self) -> Result<()> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("fatal runtime error: {err:#}");
        self.fatal = Some(err);
        event_loop.exit();
    }

    fn create_display(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let config = self.scene.config();
        let attrs = Window::default_attributes()
            .with_title(config.title.clone())
            .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let gpu = pollster::block_on(Gpu::new(window.clone(), GpuInit::default()))
            .context("GPU initialization failed")?;

        log::info!(
            "window open: {}×{} logical, surface {:?}",
            config.width,
            config.height,
            gpu.surface_format()
        );

        self.display = Some(Display {
            presenter: FramePresenter::new(),
            gpu,
            window,
        });

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(display) = self.display.as_mut() else {
            return;
        };

        if !self.rendered {
            self.scene.render();
            self.rendered = true;
        }

        match display.presenter.present(&display.gpu, self.scene.canvas()) {
            Ok(()) => {}
            Err(err) => match display.gpu.handle_surface_error(err) {
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                    display.window.request_redraw();
                }
                SurfaceErrorAction::Fatal => {
                    self.fail(event_loop, anyhow!("surface error while presenting"));
                }
            },
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }

        if let Err(err) = self.create_display(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        if let Some(display) = self.display.as_ref() {
            display.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if translate_window_event(&event) == Some(InputEvent::Exit) {
            log::info!("exit requested");
            event_loop.exit();
            return;
        }

        match event {
            WindowEvent::Resized(new_size) => {
                if let Some(display) = self.display.as_mut() {
                    display.gpu.resize(new_size);
                    display.window.request_redraw();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Nothing animates: one frame, then park until an event arrives.
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}

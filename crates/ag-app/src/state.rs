use std::sync::Arc;
use egui_wgpu::wgpu;
use log::info;
use tokio::runtime::Handle;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use crate::backend::AdBackend;
use crate::clipboard::SystemClipboard;
use crate::config::AppConfig;
use crate::controller::Controller;
use crate::events::AgEvent;
use crate::gfx::GfxState;
use crate::runtime::EffectRunner;
use crate::ui::UiState;
use crate::view;

pub struct AppState {
    pub(crate) window: Arc<Window>,

    pub gfx: GfxState,
    pub ui: UiState,

    controller: Controller,
    runner: EffectRunner,
}

impl AppState {
    pub async fn new(
        window: Arc<Window>,
        event_loop_proxy: Arc<EventLoopProxy<AgEvent>>,
        config: &AppConfig,
        runtime: Handle,
    ) -> anyhow::Result<Self> {
        let backend = AdBackend::new(config)?;
        info!("Ad generator endpoint: {}", config.endpoint());

        let runner = EffectRunner::new(
            runtime,
            event_loop_proxy.clone(),
            Arc::new(backend),
            Arc::new(SystemClipboard::new()),
        );

        let gfx = GfxState::new(window.clone()).await?;
        let ui_state = UiState::new(&gfx, &window, event_loop_proxy);

        Ok(Self {
            window,
            gfx,
            ui: ui_state,
            controller: Controller::new(),
            runner,
        })
    }

    /// Feeds one event through the controller and starts the resulting
    /// effects. Returns true when the window needs a redraw.
    pub fn on_event(&mut self, event: AgEvent) -> bool {
        for effect in self.controller.dispatch(event) {
            self.runner.run(effect);
        }
        self.ui.set_view(view::render(&self.controller))
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.gfx.resize(new_size);
    }

    /// Returns true when egui wants another frame right away (spinner).
    pub fn render(&mut self) -> anyhow::Result<bool> {
        let size = self.window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(false);
        }

        let frame = self.ui.run_frame(&self.window);

        let output = self.gfx.surface.get_current_texture()?;
        let target = output.texture.create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self.gfx.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Render Encoder")
        });

        self.ui.paint(&self.gfx, &mut encoder, &target, [size.width, size.height], &frame);

        self.gfx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(frame.repaint_now)
    }
}

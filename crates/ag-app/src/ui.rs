mod banner_panel;
mod form_panel;
mod results_panel;

use banner_panel::BannerPanel;
use form_panel::FormPanel;
use results_panel::ResultsPanel;

use std::sync::Arc;
use egui::Context;
use egui_wgpu::wgpu;
use log::error;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use crate::events::{AgEvent, UiEvent};
use crate::gfx::GfxState;
use crate::view::ViewTree;

pub struct UiContext {
    pub view: ViewTree,
    pub event_loop_proxy: Arc<EventLoopProxy<AgEvent>>,
}

impl UiContext {
    pub fn new(event_loop_proxy: Arc<EventLoopProxy<AgEvent>>) -> Self {
        Self {
            view: ViewTree::default(),
            event_loop_proxy,
        }
    }

    pub fn send_event(&self, event: UiEvent) {
        if self.event_loop_proxy.send_event(AgEvent::Ui(event)).is_err() {
            error!("Event loop closed, dropping UI event");
        }
    }
}

/// Tessellated output of one egui pass
pub struct UiFrame {
    pub paint_jobs: Vec<egui::ClippedPrimitive>,
    pub textures_delta: egui::TexturesDelta,
    pub pixels_per_point: f32,
    /// egui asked for the next frame immediately (spinner, hover fade)
    pub repaint_now: bool,
}

pub struct UiState {
    pub(crate) egui_state: egui_winit::State,
    egui_ctx: egui::Context,
    renderer: egui_wgpu::Renderer,

    panels: Vec<Box<dyn UiComponent>>,
    ui_ctx: UiContext,
}

impl UiState {
    pub fn new(gfx: &GfxState, window: &Window, event_loop_proxy: Arc<EventLoopProxy<AgEvent>>) -> Self {
        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer = egui_wgpu::Renderer::new(
            &gfx.device,
            gfx.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        Self {
            egui_state,
            egui_ctx,
            renderer,
            panels: vec![
                Box::new(BannerPanel::default()),
                Box::new(FormPanel::default()),
                Box::new(ResultsPanel::default()),
            ],
            ui_ctx: UiContext::new(event_loop_proxy),
        }
    }

    /// Swaps in a freshly rendered view. Returns false when nothing the
    /// panels draw has changed, so the caller can skip the redraw.
    pub fn set_view(&mut self, view: ViewTree) -> bool {
        if self.ui_ctx.view == view {
            return false;
        }
        self.ui_ctx.view = view;
        true
    }

    /// Runs the panels against the current view and hands clipboard,
    /// cursor and IME output back to winit.
    pub fn run_frame(&mut self, window: &Window) -> UiFrame {
        let raw_input = self.egui_state.take_egui_input(window);
        let output = self.egui_ctx.run(raw_input, |ctx| {
            for panel in self.panels.iter_mut() {
                panel.show(ctx, &self.ui_ctx);
            }
        });

        self.egui_state.handle_platform_output(window, output.platform_output);

        let repaint_now = output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());

        UiFrame {
            paint_jobs: self.egui_ctx.tessellate(output.shapes, output.pixels_per_point),
            textures_delta: output.textures_delta,
            pixels_per_point: output.pixels_per_point,
            repaint_now,
        }
    }

    /// Uploads textures and records the egui pass into `encoder`.
    pub fn paint(
        &mut self,
        gfx: &GfxState,
        encoder: &mut wgpu::CommandEncoder,
        target: &wgpu::TextureView,
        size_in_pixels: [u32; 2],
        frame: &UiFrame,
    ) {
        let screen = egui_wgpu::ScreenDescriptor {
            size_in_pixels,
            pixels_per_point: frame.pixels_per_point,
        };

        for (id, delta) in &frame.textures_delta.set {
            self.renderer.update_texture(&gfx.device, &gfx.queue, *id, delta);
        }
        self.renderer.update_buffers(&gfx.device, &gfx.queue, encoder, &frame.paint_jobs, &screen);

        {
            let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("ad copy ui"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: None,
                    depth_slice: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color { r: 0.1, g: 0.1, b: 0.1, a: 1.0 }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
            self.renderer.render(&mut pass.forget_lifetime(), &frame.paint_jobs, &screen);
        }

        for id in &frame.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

/// A piece of the window. Panels must be added in egui's order:
/// top/side panels before the central panel.
pub trait UiComponent: Send + Sync {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext);
}

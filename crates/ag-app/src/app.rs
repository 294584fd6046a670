use std::sync::Arc;
use log::error;
use tokio::runtime::Handle;
use winit::{
    event::*,
    event_loop::ActiveEventLoop,
};
use winit::application::ApplicationHandler;
use winit::event_loop::{EventLoop, EventLoopProxy};
use winit::window::{WindowAttributes, WindowId};
use crate::config::AppConfig;
use crate::events::AgEvent;
use crate::state::AppState;

pub struct App {
    event_loop_proxy: Arc<EventLoopProxy<AgEvent>>,
    config: AppConfig,
    runtime: Handle,
    state: Option<AppState>,
}

impl App {
    pub fn new(event_loop: &EventLoop<AgEvent>, config: AppConfig, runtime: Handle) -> Self {
        let event_loop_proxy = Arc::new(event_loop.create_proxy());

        Self {
            event_loop_proxy,
            config,
            runtime,
            state: None,
        }
    }

    fn init_state(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<AppState> {
        let window_attributes = WindowAttributes::default()
            .with_title("Social Ad Copy Generator")
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window_width,
                self.config.window_height,
            ));

        let window = Arc::new(event_loop.create_window(window_attributes)?);

        pollster::block_on(AppState::new(
            window,
            self.event_loop_proxy.clone(),
            &self.config,
            self.runtime.clone(),
        ))
    }
}

impl ApplicationHandler<AgEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.init_state(event_loop) {
            Ok(state) => {
                state.window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                error!("Failed to start: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AgEvent) {
        if let Some(state) = &mut self.state {
            if state.on_event(event) {
                state.window.request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        if state.window.id() != window_id {
            return;
        }

        // Let egui handle the event first
        let response = state.ui.egui_state.on_window_event(&state.window, &event);

        if response.repaint {
            state.window.request_redraw();
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                state.resize(physical_size);
                state.window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                match state.render() {
                    Ok(true) => state.window.request_redraw(),
                    Ok(false) => {}
                    Err(e) => error!("Render failed: {:#}", e),
                }
            }
            _ => {}
        }
    }
}

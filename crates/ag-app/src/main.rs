mod app;
mod backend;
mod clipboard;
mod config;
mod controller;
mod error;
mod events;
mod gfx;
mod runtime;
mod state;
mod ui;
mod view;

use tokio::runtime::Handle;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};
use crate::config::AppConfig;
use crate::events::AgEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    let event_loop: EventLoop<AgEvent> = EventLoop::with_user_event().build()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = app::App::new(&event_loop, config, Handle::current());
    event_loop.run_app(&mut app)?;

    Ok(())
}

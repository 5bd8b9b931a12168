mod animation;
mod app;
mod config;
mod error;
mod gpu;

use env_logger::Env;
use winit::event_loop::{ControlFlow, EventLoop};

use app::App;
use error::AppError;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    error::install_panic_hook();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;

    match app.take_startup_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

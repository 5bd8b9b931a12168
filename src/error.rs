use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe, Location};

/// Failures while bringing up the GPU
#[derive(thiserror::Error, Debug)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found")]
    NoAdapter,

    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface is not supported by the adapter")]
    UnsupportedSurface,
}

/// Failures that stop the application from starting
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    #[error(transparent)]
    Gpu(#[from] GpuError),
}

/// Last run-time error, shown to the user while the app keeps running
#[derive(Debug, Default)]
pub struct ErrorBanner {
    message: Option<String>,
    /// Reports of the same message after the first one
    repeats: u32,
}

impl ErrorBanner {
    /// Record an error together with the caller's location and log it
    #[track_caller]
    pub fn report(&mut self, error: impl Display) {
        let location = Location::caller();
        let message = format!("{} ({}:{})", error, location.file(), location.line());
        if self.message.as_deref() == Some(message.as_str()) {
            self.repeats += 1;
            return;
        }
        log::error!("{}", message);
        self.message = Some(message);
        self.repeats = 0;
    }

    pub fn clear(&mut self) {
        if self.repeats > 0 {
            log::info!("Recovered after {} repeated errors", self.repeats);
        }
        self.message = None;
        self.repeats = 0;
    }

    /// Run `f`, turning a panic into a banner report instead of unwinding
    /// further. Returns `None` if `f` panicked.
    #[track_caller]
    pub fn guard<T>(&mut self, f: impl FnOnce() -> T) -> Option<T> {
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Some(value),
            Err(payload) => {
                self.report(format!("panic: {}", panic_message(payload.as_ref())));
                None
            }
        }
    }

    /// Decorate a window title with the banner, if any
    pub fn decorate(&self, title: &str) -> String {
        match &self.message {
            Some(message) if self.repeats > 0 => {
                format!("{} | ERROR: {} (x{})", title, message, self.repeats + 1)
            }
            Some(message) => format!("{} | ERROR: {}", title, message),
            None => title.to_string(),
        }
    }
}

/// Text of a panic payload (`panic!` with a literal or a formatted message)
pub fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}

/// Log panics with their location before the default hook runs
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        log::error!("Panic at {}: {}", location, info);
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_records_location() {
        let mut banner = ErrorBanner::default();
        assert_eq!(banner.message, None);
        banner.report("surface lost");
        let message = banner.message.as_deref().unwrap();
        assert!(message.starts_with("surface lost ("));
        assert!(message.contains("error.rs:"));
    }

    #[test]
    fn test_decorate_title() {
        let mut banner = ErrorBanner::default();
        assert_eq!(banner.decorate("Kinetic Waves"), "Kinetic Waves");
        banner.report("oops");
        assert!(banner.decorate("Kinetic Waves").starts_with("Kinetic Waves | ERROR: oops"));
        banner.clear();
        assert_eq!(banner.decorate("Kinetic Waves"), "Kinetic Waves");
    }

    #[test]
    fn test_repeated_report_is_counted_once() {
        let mut banner = ErrorBanner::default();
        for _ in 0..3 {
            banner.report("surface timeout");
        }
        assert_eq!(banner.repeats, 2);
        assert!(banner.decorate("Kinetic Waves").ends_with("(x3)"));

        banner.report("out of memory");
        assert_eq!(banner.repeats, 0);
        assert!(banner.decorate("Kinetic Waves").contains("out of memory"));

        banner.clear();
        assert_eq!(banner.repeats, 0);
    }

    #[test]
    fn test_guard_reports_panic_and_continues() {
        let mut banner = ErrorBanner::default();
        assert_eq!(banner.guard(|| 7), Some(7));
        assert_eq!(banner.message, None);

        let frame: Option<()> = banner.guard(|| panic!("frame {} failed", 3));
        assert_eq!(frame, None);
        let title = banner.decorate("Kinetic Waves");
        assert!(title.starts_with("Kinetic Waves | ERROR: panic: frame 3 failed ("));

        // The banner keeps working after the panic
        assert_eq!(banner.guard(|| "next frame"), Some("next frame"));
    }

    #[test]
    fn test_panic_message_payloads() {
        let literal: Box<dyn Any + Send> = Box::new("boom");
        assert_eq!(panic_message(literal.as_ref()), "boom");
        let formatted: Box<dyn Any + Send> = Box::new(String::from("bad frame"));
        assert_eq!(panic_message(formatted.as_ref()), "bad frame");
        let other: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(other.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_gpu_error_display() {
        assert_eq!(GpuError::NoAdapter.to_string(), "no suitable GPU adapter found");
        let app: AppError = GpuError::UnsupportedSurface.into();
        assert_eq!(app.to_string(), "surface is not supported by the adapter");
    }
}

#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod schedule;
pub mod session_timer;
pub mod theme_service;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use error::ThemeServiceError;
pub use schedule::{CancelToken, ScheduledTick};
pub use session_timer::{DEFAULT_TICK_PERIOD, RunSnapshot, SessionTimer};
pub use theme_service::ThemeService;

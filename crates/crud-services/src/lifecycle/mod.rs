//! Startup and shutdown of the three resource services.

pub mod service_system;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use service_system::{Service, ServiceSystem};

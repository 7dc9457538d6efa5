//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber::fmt` subscriber. The filter
//! comes from `RUST_LOG` when it parses, otherwise from the configured level.
//!
//! Module paths are hidden (`with_target(false)`); every log line from the engine carries a
//! `resource` field instead.
//!
//! ```text
//! INFO Seeded resource="usuarios" backend="memory" size=2
//! INFO Loaded resource="pedidos" backend="json-file" size=3
//! INFO Listening service="usuarios" addr=0.0.0.0:5002
//! INFO Created resource="pedidos" id=4 size=4
//! WARN Not found resource="usuarios" id=999
//! ```
//!
//! `RUST_LOG=debug` adds the full payload of every request to the engine and the route
//! chosen for every HTTP request; `RUST_LOG=tower_http=debug` adds request/response spans.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

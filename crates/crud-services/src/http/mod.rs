//! # HTTP Layer
//!
//! One axum [`Router`] per resource. Every path goes to the generic [`dispatch()`] handler,
//! which classifies it with [`Route::parse`], validates the body and calls the resource's
//! [`ResourceClient`]. The client is the only state the router holds.
//!
//! Layers, outermost first: permissive CORS (answers preflight itself), request tracing,
//! and a panic catcher that turns a handler panic into the standard 500 body.

pub mod dispatch;
pub mod resource;
pub mod response;
pub mod route;

pub use dispatch::dispatch;
pub use resource::RestResource;
pub use response::ApiError;
pub use route::Route;

use axum::Router;
use crud_framework::ResourceClient;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

/// Per-service handler state.
pub struct ServiceState<T: RestResource> {
    pub client: ResourceClient<T>,
    /// Path prefix of the collection, e.g. `/api/usuarios`.
    pub base_path: Arc<str>,
}

impl<T: RestResource> Clone for ServiceState<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_path: self.base_path.clone(),
        }
    }
}

impl<T: RestResource> ServiceState<T> {
    pub fn new(client: ResourceClient<T>, base_path: &str) -> Self {
        Self {
            client,
            base_path: Arc::from(base_path),
        }
    }
}

/// Builds the router serving resource `T` under `state.base_path`.
pub fn router<T: RestResource>(state: ServiceState<T>) -> Router {
    Router::new()
        .fallback(dispatch::<T>)
        .with_state(state)
        .layer(CatchPanicLayer::custom(response::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

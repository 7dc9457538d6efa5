//! # CRUD Services
//!
//! Three HTTP resource services (`usuarios`, `pedidos`, `productos`) built on
//! [`crud_framework`]. Each one is a [`ResourceActor`](crud_framework::ResourceActor) that
//! owns its collection plus an axum router that talks to it through a
//! [`ResourceClient`](crud_framework::ResourceClient).
//!
//! ## Module Tour
//!
//! - [`model`]: the entities and their create/update/filter payloads
//! - [`user_actor`], [`order_actor`], [`product_actor`]: the [`ActorEntity`](crud_framework::ActorEntity)
//!   and [`RestResource`](http::RestResource) implementations, plus seed data
//! - [`validation`]: JSON body checks that run before anything reaches a store
//! - [`http`]: path routing, the generic dispatcher and the response formatter
//! - [`config`], [`lifecycle`]: environment settings, tracing and the [`ServiceSystem`](lifecycle::ServiceSystem)
//!
//! ## Request flow
//!
//! ```text
//! PUT /api/pedidos/1 {"estado":"entregado"}
//!   -> Route::parse          Item(1)
//!   -> Order::update_from_json  OrderUpdate { status: Some("entregado"), .. }
//!   -> ResourceClient::update   (actor merges, persists, replies)
//!   -> 200 + updated order
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
pub mod user_actor;
pub mod validation;

pub const USUARIOS_BASE: &str = "/api/usuarios";
pub const PEDIDOS_BASE: &str = "/api/pedidos";
pub const PRODUCTOS_BASE: &str = "/productos";

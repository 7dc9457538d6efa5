use crate::config::Config;
use crate::http::{router, ServiceState};
use crate::model::{Order, Product, User};
use crate::{order_actor, product_actor, user_actor, PEDIDOS_BASE, PRODUCTOS_BASE, USUARIOS_BASE};
use axum::Router;
use crud_framework::{
    ActorEntity, FrameworkError, JsonFileStorage, MemoryStorage, ResourceClient, Storage,
};
use std::net::SocketAddr;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running resource actors.
///
/// `ServiceSystem` is responsible for:
/// - **Storage selection**: each resource is file-backed or in-memory per [`Config`]
/// - **Lifecycle Management**: opening, spawning and stopping the three actors
/// - **Wiring**: handing each actor's client to its HTTP router
///
/// # Example
///
/// ```ignore
/// let system = ServiceSystem::start(&config).await?;
/// for service in system.services(&config) {
///     // bind service.addr and serve service.router
/// }
/// system.shutdown().await?;
/// ```
pub struct ServiceSystem {
    pub users: ResourceClient<User>,
    pub orders: ResourceClient<Order>,
    pub products: ResourceClient<Product>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

/// One HTTP service ready to be bound.
pub struct Service {
    pub name: &'static str,
    pub addr: SocketAddr,
    pub router: Router,
}

fn storage_for<T: ActorEntity>(config: &Config) -> Box<dyn Storage<T>> {
    if config.is_file_backed(T::RESOURCE) {
        Box::new(JsonFileStorage::new(&config.data_dir, T::RESOURCE))
    } else {
        Box::new(MemoryStorage)
    }
}

impl ServiceSystem {
    /// Opens every collection and spawns its actor.
    ///
    /// Fails if a persisted collection cannot be read, or a fresh one cannot be written.
    pub async fn start(config: &Config) -> Result<Self, FrameworkError> {
        let (user_actor, users) = user_actor::new(storage_for(config)).await?;
        let (order_actor, orders) = order_actor::new(storage_for(config)).await?;
        let (product_actor, products) = product_actor::new(storage_for(config)).await?;

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(order_actor.run()),
            tokio::spawn(product_actor.run()),
        ];

        info!(file_backed = ?config.file_backed, data_dir = %config.data_dir.display(), "System started");
        Ok(Self {
            users,
            orders,
            products,
            handles,
        })
    }

    /// The three HTTP services, each with its own clone of the matching client.
    pub fn services(&self, config: &Config) -> Vec<Service> {
        vec![
            Service {
                name: User::RESOURCE,
                addr: config.addr(config.usuarios_port),
                router: router(ServiceState::new(self.users.clone(), USUARIOS_BASE)),
            },
            Service {
                name: Order::RESOURCE,
                addr: config.addr(config.pedidos_port),
                router: router(ServiceState::new(self.orders.clone(), PEDIDOS_BASE)),
            },
            Service {
                name: Product::RESOURCE,
                addr: config.addr(config.productos_port),
                router: router(ServiceState::new(self.products.clone(), PRODUCTOS_BASE)),
            },
        ]
    }

    /// Gracefully shuts down every actor.
    ///
    /// Drops the system's clients and waits for each actor to drain its queue. Actors only
    /// stop once every other clone (e.g. inside a router) is gone too.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.users);
        drop(self.orders);
        drop(self.products);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

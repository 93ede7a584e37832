//! Item registry feature slice.
//!
//! Holds the ordered in-memory item collection and, with the `server` feature, exposes it as
//! a small CRUD API under `/api/items`.

mod error;
#[cfg(feature = "server")]
mod handlers;
mod model;
mod store;

pub use error::{ItemsError, Result};
#[cfg(feature = "server")]
pub use handlers::{ItemListResponse, ItemPayload, ItemResponse};
pub use model::{DEFAULT_KIND, DEFAULT_NAME, Item, ItemId, NewItem, seed_items};
pub use store::ItemStore;

use ihub_kernel::domain::config::ItemsConfig;
use ihub_kernel::domain::registry::{FeatureSlice, InitializedSlice};
use std::any::Any;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct ItemsInner {
    pub store: ItemStore,
}

/// Item registry feature state. Clones share the same store.
#[derive(Debug, Clone)]
pub struct Items {
    inner: Arc<ItemsInner>,
}

impl Items {
    pub fn new(inner: ItemsInner) -> Self {
        Self { inner: Arc::new(inner) }
    }
}

impl Deref for Items {
    type Target = ItemsInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FeatureSlice for Items {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Initialize the item registry feature.
///
/// # Errors
/// Currently infallible; the signature matches the other slice initializers.
pub fn init(config: &ItemsConfig) -> Result<InitializedSlice> {
    let store = if config.seed {
        ItemStore::seeded(config.id_strategy)
    } else {
        ItemStore::new(config.id_strategy)
    };

    tracing::info!(
        items = store.len(),
        id_strategy = ?config.id_strategy,
        "Items slice initialized"
    );

    Ok(InitializedSlice::new(Items::new(ItemsInner { store })))
}

/// Routes of the item registry, generic over any state that can yield an
/// [`ApiState`](ihub_kernel::server::ApiState).
#[cfg(feature = "server")]
pub fn router<S>() -> utoipa_axum::router::OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
    ihub_kernel::server::ApiState: axum::extract::FromRef<S>,
{
    use utoipa_axum::routes;

    utoipa_axum::router::OpenApiRouter::<S>::new()
        .routes(routes!(handlers::list_items, handlers::create_item))
        .routes(routes!(handlers::get_item, handlers::delete_item))
}

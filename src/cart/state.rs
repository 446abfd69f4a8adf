//! Storefront Application State
//!
//! This module owns the cart store for the running storefront and knows
//! where the page assets live.

use super::store::CartStore;
use super::view::TracingObserver;
use crate::config::{ChannelConfig, Config, StorageBackend};
use crate::error::AppError;
use crate::storage::{DisabledStorage, FileStorage, KeyValueStore, MemoryStorage};
use std::{
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the cart and asset information
pub struct AppState {
    /// The one cart this storefront serves. Never locked across an `.await`.
    cart: Mutex<CartStore>,

    /// Outbound channel settings for checkout.
    pub channels: ChannelConfig,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Builds the state from configuration, restoring any persisted cart.
    pub fn new(config: &Config) -> Self {
        let storage: Arc<dyn KeyValueStore> = match &config.storage {
            StorageBackend::File(dir) => Arc::new(FileStorage::new(dir.clone())),
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
            StorageBackend::Disabled => Arc::new(DisabledStorage),
        };

        tracing::info!(assets_dir = ?config.assets_dir, storage = ?config.storage, "initializing storefront state");

        Self::with_storage(storage, config.channels.clone(), config.assets_dir.clone())
    }

    /// Builds the state around an explicit storage backend.
    pub fn with_storage(
        storage: Arc<dyn KeyValueStore>,
        channels: ChannelConfig,
        assets_dir: PathBuf,
    ) -> Self {
        let mut cart = CartStore::load(storage);
        cart.subscribe(Box::new(TracingObserver));

        Self {
            cart: Mutex::new(cart),
            channels,
            assets_dir,
        }
    }

    /// Locks the cart. A poisoned lock is recovered: every cart operation
    /// leaves the store valid even if a panic interrupted the holder.
    ///
    /// Mutations write through the storage backend synchronously while the
    /// guard is held. With `FileStorage` that is a blocking write of one small
    /// file on the async worker; move persistence to `spawn_blocking` if a
    /// slower backend is ever added.
    pub fn cart(&self) -> MutexGuard<'_, CartStore> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reads the storefront page (`index.html`) from the assets directory
    pub async fn load_storefront_html(&self) -> Result<String, AppError> {
        let page_path = self.assets_dir.join("index.html");
        tokio::fs::read_to_string(&page_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(page_path.display().to_string())
            } else {
                AppError::Internal(e.to_string())
            }
        })
    }
}

//! Application state for the quote engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::TaxConstants;
use crate::storage::AssetStore;

/// Shared application state.
///
/// Contains the loaded tax constants and the asset inventory. The
/// constants are immutable after startup; the inventory sits behind a
/// read-write lock because the asset endpoints mutate it.
#[derive(Clone)]
pub struct AppState {
    constants: Arc<TaxConstants>,
    assets: Arc<RwLock<AssetStore>>,
}

impl AppState {
    /// Creates a new application state with the given tax constants and
    /// an empty asset inventory.
    pub fn new(constants: TaxConstants) -> Self {
        Self {
            constants: Arc::new(constants),
            assets: Arc::new(RwLock::new(AssetStore::new())),
        }
    }

    /// Returns a reference to the tax constants.
    pub fn constants(&self) -> &TaxConstants {
        &self.constants
    }

    /// Returns the shared asset inventory.
    pub fn assets(&self) -> &RwLock<AssetStore> {
        &self.assets
    }
}

//! Asset inventory storage.

mod store;

pub use store::{AssetPatch, AssetRecord, AssetStore, StoreSummary};

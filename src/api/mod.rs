//! HTTP API module for the quote engine.
//!
//! This module provides the REST API endpoints for salary breakdowns,
//! post costing, full quotes, and the asset inventory.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AssetSelectionRequest, BreakdownRequest, CreateAssetRequest, PostRequest, QuoteRequest,
    StaffGroupRequest, UpdateAssetRequest,
};
pub use response::{ApiError, QuoteResponse};
pub use state::AppState;

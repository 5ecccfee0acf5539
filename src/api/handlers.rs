//! HTTP request handlers for the quote engine API.
//!
//! This module contains the handler functions for the calculation
//! endpoints and the asset inventory endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_quote, post_cost, salary_breakdown};
use crate::error::EngineError;
use crate::models::{AssetAllocation, Post};

use super::request::{
    AssetSelectionRequest, BreakdownRequest, CreateAssetRequest, PostRequest, QuoteRequest,
    UpdateAssetRequest,
};
use super::response::{ApiError, ApiErrorResponse, QuoteResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/breakdown", post(breakdown_handler))
        .route("/post-cost", post(post_cost_handler))
        .route("/quote", post(quote_handler))
        .route("/assets", post(create_asset_handler).get(list_assets_handler))
        .route("/assets/summary", get(asset_summary_handler))
        .route(
            "/assets/:id",
            get(get_asset_handler)
                .patch(update_asset_handler)
                .delete(delete_asset_handler),
        )
        .with_state(state)
}

/// Handler for the POST /breakdown endpoint.
///
/// Accepts a desired net salary and returns the full salary breakdown.
async fn breakdown_handler(
    State(state): State<AppState>,
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing breakdown request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match salary_breakdown(request.net_salary, request.deduction_applied, state.constants()) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                net_salary = %request.net_salary,
                gross_salary = %breakdown.gross_salary,
                "Breakdown completed"
            );
            json_ok(StatusCode::OK, Json(breakdown))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /post-cost endpoint.
///
/// Prices a single post's monthly labor cost.
async fn post_cost_handler(
    State(state): State<AppState>,
    payload: Result<Json<PostRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing post cost request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let duty_post: Post = request.into();
    match post_cost(&duty_post, state.constants()) {
        Ok(cost) => {
            info!(
                correlation_id = %correlation_id,
                post_number = cost.post_number,
                total_labor_cost = %cost.total_labor_cost,
                "Post cost completed"
            );
            json_ok(StatusCode::OK, Json(cost))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /quote endpoint.
///
/// Prices a full quote: posts, asset allocations resolved against the
/// inventory, and markup.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let posts: Vec<Post> = request.posts.into_iter().map(Into::into).collect();

    let allocations = {
        let store = state.assets().read().await;
        match resolve_allocations(&request.assets, &store) {
            Ok(allocations) => allocations,
            Err(err) => return engine_error_response(correlation_id, err),
        }
    };

    let start_time = Instant::now();
    match aggregate_quote(&posts, &allocations, request.markup_percent, state.constants()) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                posts_count = result.summary.total_posts,
                final_price = %result.summary.final_price,
                duration_us = start_time.elapsed().as_micros(),
                "Quote completed"
            );
            let response = QuoteResponse {
                quote_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                result,
            };
            json_ok(StatusCode::OK, Json(response))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the POST /assets endpoint.
async fn create_asset_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateAssetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing asset create request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let mut store = state.assets().write().await;
    match store.create(
        request.name,
        request.unit_price,
        request.quantity,
        request.amortization_months,
    ) {
        Ok(record) => {
            info!(correlation_id = %correlation_id, asset_id = record.id, "Asset created");
            json_ok(StatusCode::CREATED, Json(record))
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the GET /assets endpoint.
async fn list_assets_handler(State(state): State<AppState>) -> Response {
    let store = state.assets().read().await;
    let records: Vec<_> = store.list().into_iter().cloned().collect();
    json_ok(StatusCode::OK, Json(records))
}

/// Handler for the GET /assets/summary endpoint.
async fn asset_summary_handler(State(state): State<AppState>) -> Response {
    let store = state.assets().read().await;
    json_ok(StatusCode::OK, Json(store.summary()))
}

/// Handler for the GET /assets/:id endpoint.
async fn get_asset_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    let store = state.assets().read().await;
    match store.get(id) {
        Ok(record) => json_ok(StatusCode::OK, Json(record.clone())),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the PATCH /assets/:id endpoint.
async fn update_asset_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<UpdateAssetRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, asset_id = id, "Processing asset update request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let mut store = state.assets().write().await;
    match store.update(id, request.into()) {
        Ok(record) => json_ok(StatusCode::OK, Json(record)),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for the DELETE /assets/:id endpoint.
async fn delete_asset_handler(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, asset_id = id, "Processing asset delete request");

    let mut store = state.assets().write().await;
    match store.delete(id) {
        Ok(record) => json_ok(StatusCode::OK, Json(record)),
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Resolves asset selections against the inventory into allocations.
fn resolve_allocations(
    selections: &[AssetSelectionRequest],
    store: &crate::storage::AssetStore,
) -> Result<Vec<AssetAllocation>, EngineError> {
    let mut allocations = Vec::with_capacity(selections.len());
    for (index, selection) in selections.iter().enumerate() {
        if selection.quantity == 0 {
            return Err(EngineError::invalid_input(
                format!("assets[{}].quantity", index),
                "must be greater than zero",
            ));
        }
        let record = store.get(selection.asset_id)?;
        allocations.push(AssetAllocation {
            name: record.name.clone(),
            unit_price: record.unit_price,
            amortization_months: record.amortization_months,
            quantity: selection.quantity,
        });
    }
    Ok(allocations)
}

/// Unwraps a JSON payload, converting extraction failures into an error
/// response.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(req)) => Ok(req),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response())
        }
    }
}

fn json_ok<T: serde::Serialize>(status: StatusCode, body: Json<T>) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

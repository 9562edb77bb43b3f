//! Axum route handlers for the Weights API: re-ranking score, persisted user
//! weights and the weight-triangle geometry.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::MatchBreakdown;
use crate::ranking::geometry::Point;
use crate::ranking::reranker::calculate_weighted_score;
use crate::ranking::stepping::step_weights;
use crate::ranking::weights::{MatchWeights, WeightAxis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WeightedScoreRequest {
    pub breakdown: MatchBreakdown,
    pub weights: MatchWeights,
}

#[derive(Debug, Serialize)]
pub struct WeightedScoreResponse {
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct WeightsRequest {
    pub weights: MatchWeights,
}

#[derive(Debug, Deserialize)]
pub struct FromPointRequest {
    pub point: Point,
    /// Pointer released: snap before converting.
    #[serde(default)]
    pub release: bool,
}

#[derive(Debug, Deserialize)]
pub struct StepRequest {
    pub weights: MatchWeights,
    pub axis: WeightAxis,
    pub delta: i32,
}

#[derive(Debug, Serialize)]
pub struct UserWeightsResponse {
    pub user_id: Uuid,
    pub weights: MatchWeights,
    pub point: Point,
    /// `None` when the user has never saved weights.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct WeightsPointResponse {
    pub weights: MatchWeights,
    pub point: Point,
}

#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub skills: Point,
    pub compensation: Point,
    pub culture: Point,
    pub centroid: Point,
    pub centroid_snap_radius: f64,
    pub vertex_snap_radius: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/weights/score
pub async fn handle_weighted_score(
    Json(request): Json<WeightedScoreRequest>,
) -> Result<Json<WeightedScoreResponse>, AppError> {
    request.weights.validate()?;
    let score = calculate_weighted_score(&request.breakdown, &request.weights);
    Ok(Json(WeightedScoreResponse { score }))
}

/// GET /api/v1/weights/:user_id
///
/// Users without saved weights get the centroid split.
pub async fn handle_get_weights(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserWeightsResponse>, AppError> {
    let stored = state.weight_store.load(user_id).await?;
    let (weights, updated_at) = match stored {
        Some(stored) => (stored.weights, Some(stored.updated_at)),
        None => (MatchWeights::default(), None),
    };

    Ok(Json(UserWeightsResponse {
        user_id,
        weights,
        point: state.layout.weights_to_point(&weights),
        updated_at,
    }))
}

/// PUT /api/v1/weights/:user_id
///
/// Persists the weights as whole percentages summing to 100.
pub async fn handle_put_weights(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<WeightsRequest>,
) -> Result<Json<UserWeightsResponse>, AppError> {
    request.weights.validate()?;
    let stored = state
        .weight_store
        .save(user_id, request.weights.rounded())
        .await?;

    tracing::info!(%user_id, weights = ?stored.weights, "match weights updated");

    Ok(Json(UserWeightsResponse {
        user_id,
        weights: stored.weights,
        point: state.layout.weights_to_point(&stored.weights),
        updated_at: Some(stored.updated_at),
    }))
}

/// POST /api/v1/weights/point
pub async fn handle_weights_to_point(
    State(state): State<AppState>,
    Json(request): Json<WeightsRequest>,
) -> Result<Json<WeightsPointResponse>, AppError> {
    request.weights.validate()?;
    Ok(Json(WeightsPointResponse {
        weights: request.weights,
        point: state.layout.weights_to_point(&request.weights),
    }))
}

/// POST /api/v1/weights/from-point
///
/// Clamps a dragged point into the triangle (and snaps it on release), then
/// returns the point together with its weight split.
pub async fn handle_point_to_weights(
    State(state): State<AppState>,
    Json(request): Json<FromPointRequest>,
) -> Result<Json<WeightsPointResponse>, AppError> {
    let point = request.point.ensure_finite()?;
    let mut point = state.layout.clamp_to_triangle(point);
    if request.release {
        point = state.layout.apply_snap(point);
    }

    Ok(Json(WeightsPointResponse {
        weights: state.layout.point_to_weights(point),
        point,
    }))
}

/// POST /api/v1/weights/step
pub async fn handle_step_weights(
    State(state): State<AppState>,
    Json(request): Json<StepRequest>,
) -> Result<Json<WeightsPointResponse>, AppError> {
    request.weights.validate()?;
    let weights = step_weights(&request.weights, request.axis, request.delta);
    Ok(Json(WeightsPointResponse {
        weights,
        point: state.layout.weights_to_point(&weights),
    }))
}

/// GET /api/v1/weights/layout
pub async fn handle_layout(State(state): State<AppState>) -> Json<LayoutResponse> {
    let layout = state.layout.as_ref();
    Json(LayoutResponse {
        skills: layout.vertex(WeightAxis::Skills),
        compensation: layout.vertex(WeightAxis::Compensation),
        culture: layout.vertex(WeightAxis::Culture),
        centroid: layout.centroid(),
        centroid_snap_radius: layout.centroid_snap_radius(),
        vertex_snap_radius: layout.vertex_snap_radius(),
    })
}

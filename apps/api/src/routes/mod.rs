pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ranking::handlers as weights;
use crate::scoring::handlers as matches;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matches API
        .route("/api/v1/matches", post(matches::handle_match))
        .route(
            "/api/v1/matches/candidate",
            post(matches::handle_candidate_match),
        )
        .route("/api/v1/matches/rank", post(matches::handle_rank))
        // Weights API
        .route("/api/v1/weights/score", post(weights::handle_weighted_score))
        .route("/api/v1/weights/point", post(weights::handle_weights_to_point))
        .route(
            "/api/v1/weights/from-point",
            post(weights::handle_point_to_weights),
        )
        .route("/api/v1/weights/step", post(weights::handle_step_weights))
        .route("/api/v1/weights/layout", get(weights::handle_layout))
        .route(
            "/api/v1/weights/:user_id",
            get(weights::handle_get_weights).put(weights::handle_put_weights),
        )
        .with_state(state)
}

//! Axum route handlers for the Matches API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    CandidateProfile, CompanyProfile, HiringManagerPreferences, JobPosting, MatchBreakdown,
};
use crate::ranking::reranker::{rank_candidates, CandidateInput, RankedCandidate};
use crate::ranking::weights::MatchWeights;
use crate::scoring::SearchCriteria;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Every field is optional so that missing input reaches the engine and comes
/// back as the "Invalid data" breakdown instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MatchRequest {
    pub job: Option<JobPosting>,
    pub candidate: Option<CandidateProfile>,
    pub company: Option<CompanyProfile>,
    pub candidate_cert_ids: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateMatchRequest {
    pub criteria: Option<SearchCriteria>,
    pub candidate: Option<CandidateProfile>,
    pub company: Option<CompanyProfile>,
    pub candidate_cert_ids: Option<Vec<String>>,
    pub hiring_manager: Option<HiringManagerPreferences>,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub job: JobPosting,
    #[serde(default)]
    pub company: Option<CompanyProfile>,
    pub candidates: Vec<CandidateInput>,
    /// Explicit weights win over the user's stored ones.
    #[serde(default)]
    pub weights: Option<MatchWeights>,
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub weights: MatchWeights,
    pub ranked: Vec<RankedCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches
///
/// Scores one candidate against one job posting.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchBreakdown>, AppError> {
    let breakdown = state.engine.calculate_match(
        request.job.as_ref(),
        request.candidate.as_ref(),
        request.company.as_ref(),
        request.candidate_cert_ids.as_deref(),
    );
    Ok(Json(breakdown))
}

/// POST /api/v1/matches/candidate
///
/// Scores a candidate against free-form search criteria, with optional
/// hiring-manager preferences for management fit.
pub async fn handle_candidate_match(
    State(state): State<AppState>,
    Json(request): Json<CandidateMatchRequest>,
) -> Result<Json<MatchBreakdown>, AppError> {
    let breakdown = state.engine.calculate_candidate_match(
        request.criteria.as_ref(),
        request.candidate.as_ref(),
        request.company.as_ref(),
        request.candidate_cert_ids.as_deref(),
        request.hiring_manager.as_ref(),
    );
    Ok(Json(breakdown))
}

/// POST /api/v1/matches/rank
///
/// Scores many candidates against one job and orders them by the weighted
/// re-ranking score. Weights come from the request, else the user's stored
/// weights, else the centroid split.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation(
            "candidates cannot be empty".to_string(),
        ));
    }

    let weights = match (request.weights, request.user_id) {
        (Some(weights), _) => {
            weights.validate()?;
            weights
        }
        (None, Some(user_id)) => state.weight_store.load_or_default(user_id).await?,
        (None, None) => MatchWeights::default(),
    };

    let engine = state.engine.clone();
    let RankRequest {
        job,
        company,
        candidates,
        ..
    } = request;

    // Scoring fans out over rayon; keep it off the async workers.
    let ranked = tokio::task::spawn_blocking(move || {
        rank_candidates(&engine, &job, company.as_ref(), &candidates, &weights)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(RankResponse { weights, ranked }))
}

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::analysis::Analyst;
use crate::embedding::Embedder;
use crate::engine::MatchResult;
use crate::profile::{FieldEmbeddings, Profile, ProfileId};
use crate::store::{ProfileStore, ProfileUpdate};

use super::error::ApiError;
use super::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    #[serde(default)]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
    #[serde(default)]
    pub needs: String,
    #[serde(default)]
    pub looking_for: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub major: Option<String>,
    pub skills: Option<String>,
    pub interests: Option<String>,
    pub needs: Option<String>,
    pub looking_for: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    /// Overrides the configured result count.
    pub limit: Option<usize>,
    /// `false` disables deep analysis for this request.
    pub deep: Option<bool>,
}

#[derive(Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchResult>,
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn create_profile<E, A>(
    State(state): State<Arc<AppState<E, A>>>,
    Json(request): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<Profile>), ApiError>
where
    E: Embedder + Clone + 'static,
    A: Analyst,
{
    if request.name.trim().is_empty() {
        return Err(ApiError::InvalidRequest("name must not be empty".to_string()));
    }

    let profile = Profile {
        id: Uuid::new_v4(),
        name: request.name,
        institution: request.institution,
        degree: request.degree,
        major: request.major,
        skills: request.skills,
        interests: request.interests,
        needs: request.needs,
        looking_for: request.looking_for,
        embeddings: FieldEmbeddings::default(),
    };

    state.store.insert(profile.clone())?;
    info!(profile_id = %profile.id, name = %profile.name, "profile created");

    state.schedule_embedding_refresh(profile.clone());

    Ok((StatusCode::CREATED, Json(profile)))
}

pub async fn get_profile<E, A>(
    State(state): State<Arc<AppState<E, A>>>,
    Path(id): Path<ProfileId>,
) -> Result<Json<Profile>, ApiError>
where
    E: Embedder + Clone + 'static,
    A: Analyst,
{
    Ok(Json(state.store.get(id)?))
}

pub async fn update_profile<E, A>(
    State(state): State<Arc<AppState<E, A>>>,
    Path(id): Path<ProfileId>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, ApiError>
where
    E: Embedder + Clone + 'static,
    A: Analyst,
{
    let update = ProfileUpdate {
        name: request.name,
        institution: request.institution,
        degree: request.degree,
        major: request.major,
        skills: request.skills,
        interests: request.interests,
        needs: request.needs,
        looking_for: request.looking_for,
    };

    let updated = state.store.update(id, update)?;
    info!(profile_id = %id, "profile updated, scheduling embedding refresh");

    state.schedule_embedding_refresh(updated.clone());

    Ok(Json(updated))
}

pub async fn get_matches<E, A>(
    State(state): State<Arc<AppState<E, A>>>,
    Path(id): Path<ProfileId>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchesResponse>, ApiError>
where
    E: Embedder + Clone + 'static,
    A: Analyst,
{
    let subject = state.store.get(id)?;
    let pool = state.store.candidates(id)?;

    let mut options = state.engine.options().clone();
    if let Some(limit) = query.limit {
        if limit == 0 {
            return Err(ApiError::InvalidRequest("limit must be positive".to_string()));
        }
        options.result_count = limit;
    }
    // Deep analysis can be disabled per request, never force-enabled.
    if query.deep == Some(false) {
        options.use_deep_analysis = false;
    }

    let matches = state
        .engine
        .find_matches_with(&subject, &pool, &options)
        .await;

    info!(
        profile_id = %id,
        pool_size = pool.len(),
        returned = matches.len(),
        "matching request served"
    );

    Ok(Json(MatchesResponse { matches }))
}

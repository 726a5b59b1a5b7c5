use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    models::{Rating, RatingRequest},
    services::ratings::parse_id,
    state::AppState,
};

type HandlerError = (StatusCode, String);

// Path ids are taken as text so a malformed id answers 422 like a malformed body id
pub async fn get_all_ratings_handler(
    Path(music_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Rating>>, HandlerError> {
    let music_id = parse_id(&music_id).map_err(|e| e.to_response())?;

    let ratings = state
        .ratings
        .get_all_ratings_for_a_music(music_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(ratings))
}

pub async fn get_music_rating_handler(
    Path((music_id, rating_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<Rating>, HandlerError> {
    let music_id = parse_id(&music_id).map_err(|e| e.to_response())?;
    let rating_id = parse_id(&rating_id).map_err(|e| e.to_response())?;

    let rating = state
        .ratings
        .get_music_rating(music_id, rating_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(rating))
}

pub async fn add_music_rating_handler(
    Path(music_id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<RatingRequest>,
) -> Result<(StatusCode, Json<Rating>), HandlerError> {
    let music_id = parse_id(&music_id).map_err(|e| e.to_response())?;

    let rating = state
        .ratings
        .add_music_rating(music_id, payload)
        .await
        .map_err(|e| e.to_response())?;

    Ok((StatusCode::CREATED, Json(rating)))
}

pub async fn modify_music_rating_handler(
    Path((music_id, rating_id)): Path<(String, String)>,
    State(state): State<AppState>,
    Json(payload): Json<RatingRequest>,
) -> Result<Json<Rating>, HandlerError> {
    let music_id = parse_id(&music_id).map_err(|e| e.to_response())?;
    let rating_id = parse_id(&rating_id).map_err(|e| e.to_response())?;

    let rating = state
        .ratings
        .modify_music_rating(music_id, rating_id, payload)
        .await
        .map_err(|e| e.to_response())?;

    Ok(Json(rating))
}

pub async fn delete_music_rating_handler(
    Path((music_id, rating_id)): Path<(String, String)>,
    State(state): State<AppState>,
) -> Result<StatusCode, HandlerError> {
    let music_id = parse_id(&music_id).map_err(|e| e.to_response())?;
    let rating_id = parse_id(&rating_id).map_err(|e| e.to_response())?;

    state
        .ratings
        .delete_music_rating(music_id, rating_id)
        .await
        .map_err(|e| e.to_response())?;

    Ok(StatusCode::NO_CONTENT)
}

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    db::{RatingRepository, RepositoryError},
    errors::CustomError,
    models::{
        Rating, RatingRequest, RatingUpdate,
        rating::{MAX_SCORE, MIN_SCORE, is_valid_score},
    },
};

/// Validates rating requests and hands them to the repository, turning
/// storage failures into caller-safe [`CustomError`]s.
#[derive(Clone)]
pub struct RatingService {
    repository: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(repository: Arc<dyn RatingRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all_ratings_for_a_music(
        &self,
        music_id: Uuid,
    ) -> Result<Vec<Rating>, CustomError> {
        self.repository
            .get_all_ratings_for_a_music(music_id)
            .await
            .map_err(|e| {
                tracing::error!("error retrieving ratings : {}", e);
                CustomError::internal()
            })
    }

    pub async fn get_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<Rating, CustomError> {
        self.repository
            .get_music_rating(music_id, rating_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NoRows => CustomError::not_found("rating not found"),
                other => {
                    tracing::error!("error retrieving rating : {}", other);
                    CustomError::internal()
                }
            })
    }

    pub async fn add_music_rating(
        &self,
        music_id: Uuid,
        request: RatingRequest,
    ) -> Result<Rating, CustomError> {
        let (Some(comment), Some(score), Some(raw_user_id)) =
            (request.comment, request.rating, request.user_id)
        else {
            return Err(CustomError::unprocessable("missing fields"));
        };

        validate_score(score)?;
        let user_id = parse_id(&raw_user_id)?;

        let rating = Rating {
            id: Uuid::new_v4(),
            comment,
            rating: score,
            rating_date: Utc::now(),
            music_id,
            user_id,
        };

        self.repository
            .add_music_rating(&rating)
            .await
            .map_err(|e| {
                tracing::error!("Error adding rating : {}", e);
                CustomError::internal()
            })?;

        tracing::info!("Added rating {} to music {}", rating.id, music_id);
        Ok(rating)
    }

    pub async fn modify_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
        request: RatingRequest,
    ) -> Result<Rating, CustomError> {
        if let Some(score) = request.rating {
            validate_score(score)?;
        }

        let user_id = request.user_id.as_deref().map(parse_id).transpose()?;

        let update = RatingUpdate {
            comment: request.comment,
            rating: request.rating,
            user_id,
        };

        let rating = self
            .repository
            .modify_music_rating(music_id, rating_id, update)
            .await
            .map_err(|e| match e {
                RepositoryError::NoRows => CustomError::not_found("rating not found"),
                other => {
                    tracing::error!("Error modifying rating : {}", other);
                    CustomError::internal()
                }
            })?;

        tracing::info!("Modified rating {} of music {}", rating_id, music_id);
        Ok(rating)
    }

    pub async fn delete_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<(), CustomError> {
        self.repository
            .delete_music_rating(music_id, rating_id)
            .await
            .map_err(|e| {
                tracing::error!("Error deleting rating : {}", e);
                CustomError::internal()
            })
    }
}

fn validate_score(score: i32) -> Result<(), CustomError> {
    if !is_valid_score(score) {
        return Err(CustomError::unprocessable(format!(
            "rating must be between {} and {}",
            MIN_SCORE, MAX_SCORE
        )));
    }
    Ok(())
}

/// Parses a UUID coming from user input. Also used for path segments.
pub fn parse_id(raw: &str) -> Result<Uuid, CustomError> {
    Uuid::parse_str(raw).map_err(|e| {
        tracing::error!("parsing error : {}", e);
        CustomError::invalid_id(raw)
    })
}

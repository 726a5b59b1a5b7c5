pub mod rating;

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Rating, RatingUpdate};

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("no rows in result set")]
    NoRows,

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepositoryError::NoRows,
            other => RepositoryError::Database(other),
        }
    }
}

/// Persistence for ratings. Every lookup is scoped to the owning music, so a
/// rating id paired with the wrong music id behaves as absent.
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn get_all_ratings_for_a_music(
        &self,
        music_id: Uuid,
    ) -> Result<Vec<Rating>, RepositoryError>;

    /// Returns [`RepositoryError::NoRows`] when the rating does not exist.
    async fn get_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<Rating, RepositoryError>;

    async fn add_music_rating(&self, rating: &Rating) -> Result<(), RepositoryError>;

    /// Applies the set fields of `update` and returns the stored row.
    async fn modify_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
        update: RatingUpdate,
    ) -> Result<Rating, RepositoryError>;

    /// Deleting a rating that does not exist is not an error.
    async fn delete_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<(), RepositoryError>;
}

#[derive(Clone)]
pub struct PgRatingRepository {
    postgres: PgPool,
}

impl PgRatingRepository {
    pub fn new(postgres: PgPool) -> Self {
        Self { postgres }
    }
}

#[async_trait]
impl RatingRepository for PgRatingRepository {
    async fn get_all_ratings_for_a_music(
        &self,
        music_id: Uuid,
    ) -> Result<Vec<Rating>, RepositoryError> {
        rating::get::get_all_ratings_for_a_music(music_id, &self.postgres).await
    }

    async fn get_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<Rating, RepositoryError> {
        rating::get::get_music_rating(music_id, rating_id, &self.postgres).await
    }

    async fn add_music_rating(&self, rating: &Rating) -> Result<(), RepositoryError> {
        rating::post::add_music_rating(rating, &self.postgres).await
    }

    async fn modify_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
        update: RatingUpdate,
    ) -> Result<Rating, RepositoryError> {
        rating::patch::modify_music_rating(music_id, rating_id, update, &self.postgres).await
    }

    async fn delete_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<(), RepositoryError> {
        rating::delete::delete_music_rating(music_id, rating_id, &self.postgres).await
    }
}

use sqlx::PgPool;
use uuid::Uuid;

use crate::{db::RepositoryError, models::Rating};

pub async fn get_all_ratings_for_a_music(
    music_id: Uuid,
    postgres: &PgPool,
) -> Result<Vec<Rating>, RepositoryError> {
    let ratings = sqlx::query_as::<_, Rating>(
        "SELECT id, comment, rating, rating_date, music_id, user_id
			FROM ratings
			WHERE music_id = $1
			ORDER BY rating_date ASC",
    )
    .bind(music_id)
    .fetch_all(postgres)
    .await?;

    Ok(ratings)
}

pub async fn get_music_rating(
    music_id: Uuid,
    rating_id: Uuid,
    postgres: &PgPool,
) -> Result<Rating, RepositoryError> {
    let rating = sqlx::query_as::<_, Rating>(
        "SELECT id, comment, rating, rating_date, music_id, user_id
			FROM ratings
			WHERE music_id = $1 AND id = $2",
    )
    .bind(music_id)
    .bind(rating_id)
    .fetch_one(postgres)
    .await?;

    Ok(rating)
}

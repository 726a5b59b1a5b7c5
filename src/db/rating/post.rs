use sqlx::PgPool;

use crate::{db::RepositoryError, models::Rating};

pub async fn add_music_rating(rating: &Rating, postgres: &PgPool) -> Result<(), RepositoryError> {
    sqlx::query(
        "INSERT INTO ratings (id, comment, rating, rating_date, music_id, user_id)
        VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(rating.id)
    .bind(&rating.comment)
    .bind(rating.rating)
    .bind(rating.rating_date)
    .bind(rating.music_id)
    .bind(rating.user_id)
    .execute(postgres)
    .await?;

    Ok(())
}

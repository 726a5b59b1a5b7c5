use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::RepositoryError,
    models::{Rating, RatingUpdate},
};

pub async fn modify_music_rating(
    music_id: Uuid,
    rating_id: Uuid,
    update: RatingUpdate,
    postgres: &PgPool,
) -> Result<Rating, RepositoryError> {
    // Unset fields bind as NULL and COALESCE keeps the stored value
    let rating = sqlx::query_as::<_, Rating>(
        "UPDATE ratings
        SET comment = COALESCE($3, comment),
            rating = COALESCE($4, rating),
            user_id = COALESCE($5, user_id)
        WHERE music_id = $1 AND id = $2
        RETURNING id, comment, rating, rating_date, music_id, user_id",
    )
    .bind(music_id)
    .bind(rating_id)
    .bind(update.comment)
    .bind(update.rating)
    .bind(update.user_id)
    .fetch_one(postgres)
    .await?;

    Ok(rating)
}

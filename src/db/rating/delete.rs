use sqlx::PgPool;
use uuid::Uuid;

use crate::db::RepositoryError;

pub async fn delete_music_rating(
    music_id: Uuid,
    rating_id: Uuid,
    postgres: &PgPool,
) -> Result<(), RepositoryError> {
    let result = sqlx::query("DELETE FROM ratings WHERE music_id = $1 AND id = $2")
        .bind(music_id)
        .bind(rating_id)
        .execute(postgres)
        .await?;

    if result.rows_affected() > 0 {
        tracing::info!("Deleted rating {} of music {}", rating_id, music_id);
    } else {
        tracing::debug!("No rating {} found for music {} to delete", rating_id, music_id);
    }

    Ok(())
}

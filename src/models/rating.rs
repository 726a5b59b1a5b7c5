use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Rating {
    pub id: Uuid,
    pub comment: String,
    pub rating: i32,
    pub rating_date: DateTime<Utc>,
    pub music_id: Uuid,
    pub user_id: Uuid,
}

/// Body of a create or update call. Every field is optional so an update can
/// tell "not sent" apart from an empty value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingRequest {
    pub comment: Option<String>,
    pub rating: Option<i32>,
    pub user_id: Option<String>,
}

/// A [`RatingRequest`] that passed validation. `None` leaves the stored column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RatingUpdate {
    pub comment: Option<String>,
    pub rating: Option<i32>,
    pub user_id: Option<Uuid>,
}

pub fn is_valid_score(score: i32) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

use crate::services::RatingService;

#[derive(Clone)]
pub struct AppState {
    pub ratings: RatingService,
}

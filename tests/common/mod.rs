#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::Utc;
use ratings_api::{
    db::{RatingRepository, RepositoryError},
    models::{Rating, RatingUpdate},
    services::RatingService,
};
use uuid::Uuid;

/// Vec-backed repository. `set_failing(true)` makes every call fail the way a
/// dropped database connection would.
#[derive(Default)]
pub struct InMemoryRatingRepository {
    ratings: Mutex<Vec<Rating>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryRatingRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_ratings(ratings: Vec<Rating>) -> Arc<Self> {
        let repo = Self::default();
        *repo.ratings.lock().unwrap() = ratings;
        Arc::new(repo)
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Rating> {
        self.ratings.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn get_all_ratings_for_a_music(
        &self,
        music_id: Uuid,
    ) -> Result<Vec<Rating>, RepositoryError> {
        self.enter()?;
        Ok(self
            .ratings
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.music_id == music_id)
            .cloned()
            .collect())
    }

    async fn get_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<Rating, RepositoryError> {
        self.enter()?;
        self.ratings
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.music_id == music_id && r.id == rating_id)
            .cloned()
            .ok_or(RepositoryError::NoRows)
    }

    async fn add_music_rating(&self, rating: &Rating) -> Result<(), RepositoryError> {
        self.enter()?;
        self.ratings.lock().unwrap().push(rating.clone());
        Ok(())
    }

    async fn modify_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
        update: RatingUpdate,
    ) -> Result<Rating, RepositoryError> {
        self.enter()?;
        let mut ratings = self.ratings.lock().unwrap();
        let rating = ratings
            .iter_mut()
            .find(|r| r.music_id == music_id && r.id == rating_id)
            .ok_or(RepositoryError::NoRows)?;

        if let Some(comment) = update.comment {
            rating.comment = comment;
        }
        if let Some(score) = update.rating {
            rating.rating = score;
        }
        if let Some(user_id) = update.user_id {
            rating.user_id = user_id;
        }
        Ok(rating.clone())
    }

    async fn delete_music_rating(
        &self,
        music_id: Uuid,
        rating_id: Uuid,
    ) -> Result<(), RepositoryError> {
        self.enter()?;
        self.ratings
            .lock()
            .unwrap()
            .retain(|r| !(r.music_id == music_id && r.id == rating_id));
        Ok(())
    }
}

pub fn sample_rating(music_id: Uuid) -> Rating {
    Rating {
        id: Uuid::new_v4(),
        comment: "Nice groove".to_string(),
        rating: 4,
        rating_date: Utc::now(),
        music_id,
        user_id: Uuid::new_v4(),
    }
}

pub fn service_with(repo: Arc<InMemoryRatingRepository>) -> RatingService {
    RatingService::new(repo)
}

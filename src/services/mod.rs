pub mod ratings;

pub use ratings::RatingService;

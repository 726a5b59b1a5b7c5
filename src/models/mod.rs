pub mod rating;

pub use rating::{Rating, RatingRequest, RatingUpdate};

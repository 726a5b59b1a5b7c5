pub mod rating;

pub use rating::{
    add_music_rating_handler, delete_music_rating_handler, get_all_ratings_handler,
    get_music_rating_handler, modify_music_rating_handler,
};

pub async fn health_handler() -> &'static str {
    "ok"
}

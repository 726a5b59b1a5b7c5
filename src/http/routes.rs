use axum::{Router, routing::get};

use crate::{
    http::handlers::{
        add_music_rating_handler, delete_music_rating_handler, get_all_ratings_handler,
        get_music_rating_handler, health_handler, modify_music_rating_handler,
    },
    state::AppState,
};

pub fn create_http_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/musics/{music_id}/ratings",
            get(get_all_ratings_handler).post(add_music_rating_handler),
        )
        .route(
            "/musics/{music_id}/ratings/{rating_id}",
            get(get_music_rating_handler)
                .put(modify_music_rating_handler)
                .delete(delete_music_rating_handler),
        )
        .with_state(state)
}

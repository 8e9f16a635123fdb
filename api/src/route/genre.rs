use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::genre::{
    create_genre, create_genre_form, delete_genre, delete_genre_form, show_genre,
    show_genre_list, update_genre, update_genre_form,
};

pub fn build_genre_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/genres", get(show_genre_list))
        .route("/genre/create", get(create_genre_form).post(create_genre))
        .route("/genre/:id", get(show_genre))
        .route("/genre/:id/delete", get(delete_genre_form).post(delete_genre))
        .route("/genre/:id/update", get(update_genre_form).post(update_genre));

    Router::new().nest("/catalog", routers)
}

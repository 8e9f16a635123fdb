use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::book_instance::{
    create_book_instance, create_book_instance_form, delete_book_instance,
    delete_book_instance_form, show_book_instance, show_book_instance_list,
    update_book_instance, update_book_instance_form,
};

pub fn build_book_instance_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/bookinstances", get(show_book_instance_list))
        .route(
            "/bookinstance/create",
            get(create_book_instance_form).post(create_book_instance),
        )
        .route("/bookinstance/:id", get(show_book_instance))
        .route(
            "/bookinstance/:id/delete",
            get(delete_book_instance_form).post(delete_book_instance),
        )
        .route(
            "/bookinstance/:id/update",
            get(update_book_instance_form).post(update_book_instance),
        );

    Router::new().nest("/catalog", routers)
}

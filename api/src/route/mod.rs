use axum::Router;
use registry::AppRegistry;

pub mod book_instance;
pub mod catalog;
pub mod genre;
pub mod health;

/// Every page of the catalog, plus the root redirect and health checks.
pub fn build_catalog_app() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(catalog::build_catalog_routers())
        .merge(genre::build_genre_routers())
        .merge(book_instance::build_book_instance_routers())
}

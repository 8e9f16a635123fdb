use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::catalog::{redirect_to_catalog, show_catalog, CATALOG_URL};

pub fn build_catalog_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(redirect_to_catalog))
        .route(CATALOG_URL, get(show_catalog))
}

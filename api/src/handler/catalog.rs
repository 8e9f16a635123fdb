use axum::{extract::State, http::Uri, response::Redirect};
use kernel::model::book_instance::BookInstanceStatus;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::{catalog::CatalogView, page::Outcome};

pub const CATALOG_URL: &str = "/catalog";

#[utoipa::path(get, path = "/", responses((status = 303, description = "Redirect to the catalog")), tag = "catalog")]
pub async fn redirect_to_catalog(uri: Uri) -> Redirect {
    tracing::info!(%uri, "redirecting to the catalog");
    Redirect::to(CATALOG_URL)
}

#[utoipa::path(
    get,
    path = "/catalog",
    responses((status = 200, description = "Rendered `index` page", body = CatalogView)),
    tag = "catalog"
)]
#[axum::debug_handler]
pub async fn show_catalog(State(registry): State<AppRegistry>) -> AppResult<Outcome<CatalogView>> {
    let book_repository = registry.book_repository();
    let book_instance_repository = registry.book_instance_repository();
    let genre_repository = registry.genre_repository();

    let (book_count, book_instance_count, book_instance_available_count, genre_count) = tokio::try_join!(
        book_repository.count(),
        book_instance_repository.count(),
        book_instance_repository.count_by_status(BookInstanceStatus::Available),
        genre_repository.count(),
    )?;

    Ok(Outcome::render(
        "index",
        "Local Library Home",
        CatalogView {
            book_count,
            book_instance_count,
            book_instance_available_count,
            genre_count,
        },
    ))
}

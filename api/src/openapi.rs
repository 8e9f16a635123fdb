use utoipa::OpenApi;

use crate::{handler, model};

#[derive(OpenApi)]
#[openapi(
    info(title = "Local Library catalog"),
    paths(
        handler::health::health_check,
        handler::health::health_check_db,
        handler::catalog::redirect_to_catalog,
        handler::catalog::show_catalog,
        handler::genre::show_genre_list,
        handler::genre::show_genre,
        handler::genre::create_genre_form,
        handler::genre::create_genre,
        handler::genre::delete_genre_form,
        handler::genre::delete_genre,
        handler::genre::update_genre_form,
        handler::genre::update_genre,
        handler::book_instance::show_book_instance_list,
        handler::book_instance::show_book_instance,
        handler::book_instance::create_book_instance_form,
        handler::book_instance::create_book_instance,
        handler::book_instance::delete_book_instance_form,
        handler::book_instance::delete_book_instance,
        handler::book_instance::update_book_instance_form,
        handler::book_instance::update_book_instance,
    ),
    components(schemas(
        model::validation::FieldError,
        model::catalog::CatalogView,
        model::book::BookResponse,
        model::book::BookTitleResponse,
        model::book::BookSummaryResponse,
        model::genre::GenreForm,
        model::genre::GenreDeleteForm,
        model::genre::GenreFormValues,
        model::genre::GenreResponse,
        model::genre::GenreListView,
        model::genre::GenreDetailView,
        model::genre::GenreFormView,
        model::genre::GenreDeleteView,
        model::book_instance::BookInstanceForm,
        model::book_instance::BookInstanceDeleteForm,
        model::book_instance::BookInstanceFormValues,
        model::book_instance::BookInstanceResponse,
        model::book_instance::BookInstanceListView,
        model::book_instance::BookInstanceDetailView,
        model::book_instance::BookInstanceFormView,
        model::book_instance::BookInstanceDeleteView,
    )),
    tags(
        (name = "health", description = "Liveness checks"),
        (name = "catalog", description = "Catalog home"),
        (name = "genre", description = "Genre pages"),
        (name = "bookinstance", description = "Book copy pages")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_catalog_page() {
        let doc = ApiDoc::openapi();
        for path in [
            "/catalog/genres",
            "/catalog/genre/{id}",
            "/catalog/genre/{id}/delete",
            "/catalog/bookinstance/create",
            "/catalog/bookinstance/{id}/update",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path} is undocumented");
        }
    }
}

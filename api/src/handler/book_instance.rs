use axum::{
    extract::{Path, State},
    Form,
};
use kernel::model::{book_instance::event::DeleteBookInstance, id::BookInstanceId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::ensure_same_id;
use crate::model::{
    book::BookTitleResponse,
    book_instance::{
        book_instance_url, BookInstanceDeleteForm, BookInstanceDeleteView,
        BookInstanceDetailView, BookInstanceForm, BookInstanceFormValues, BookInstanceFormView,
        BookInstanceListView, BookInstanceResponse, BOOK_INSTANCE_LIST_URL,
    },
    page::Outcome,
    validation::{FieldError, FormFields, Sanitized},
};

fn book_instance_not_found() -> AppError {
    AppError::EntityNotFound("Book copy not found".into())
}

async fn book_list(registry: &AppRegistry) -> AppResult<Vec<BookTitleResponse>> {
    let titles = registry.book_repository().find_all_titles().await?;
    Ok(titles.into_iter().map(BookTitleResponse::from).collect())
}

fn book_instance_form(
    title: &'static str,
    bookinstance: BookInstanceFormValues,
    book_list: Vec<BookTitleResponse>,
    errors: Vec<FieldError>,
) -> Outcome<BookInstanceFormView> {
    Outcome::render(
        "bookinstance_form",
        title,
        BookInstanceFormView::new(bookinstance, book_list, errors),
    )
}

#[utoipa::path(
    get,
    path = "/catalog/bookinstances",
    responses((status = 200, description = "Rendered `bookinstance_list` page", body = BookInstanceListView)),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn show_book_instance_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<BookInstanceListView>> {
    let book_instances = registry.book_instance_repository().find_all().await?;
    Ok(Outcome::render(
        "bookinstance_list",
        "Book Instance List",
        BookInstanceListView {
            bookinstance_list: book_instances
                .into_iter()
                .map(BookInstanceResponse::from)
                .collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}",
    params(("id" = String, Path, description = "Book instance id")),
    responses(
        (status = 200, description = "Rendered `bookinstance_detail` page", body = BookInstanceDetailView),
        (status = 404, description = "No such book copy")
    ),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn show_book_instance(
    Path(book_instance_id): Path<BookInstanceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<BookInstanceDetailView>> {
    let book_instance = registry
        .book_instance_repository()
        .find_by_id(book_instance_id)
        .await?
        .ok_or_else(book_instance_not_found)?;
    Ok(Outcome::render(
        "bookinstance_detail",
        "Book Instance Detail",
        BookInstanceDetailView {
            bookinstance: book_instance.into(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/catalog/bookinstance/create",
    responses((status = 200, description = "Rendered empty `bookinstance_form` page", body = BookInstanceFormView)),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn create_book_instance_form(
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<BookInstanceFormView>> {
    Ok(book_instance_form(
        "Create BookInstance",
        BookInstanceFormValues::default(),
        book_list(&registry).await?,
        Vec::new(),
    ))
}

#[utoipa::path(
    post,
    path = "/catalog/bookinstance/create",
    request_body(content = BookInstanceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`bookinstance_form` shown again with errors", body = BookInstanceFormView),
        (status = 303, description = "Redirect to the new book copy"),
        (status = 404, description = "The chosen book does not exist")
    ),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn create_book_instance(
    State(registry): State<AppRegistry>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Outcome<BookInstanceFormView>> {
    let Sanitized { value, errors } = form.sanitize();
    if !errors.is_empty() {
        tracing::debug!(?errors, "book instance form rejected");
        return Ok(book_instance_form(
            "Create BookInstance",
            value,
            book_list(&registry).await?,
            errors,
        ));
    }

    let book_instance = registry
        .book_instance_repository()
        .create(value.into_create_event()?)
        .await?;
    tracing::info!(
        book_instance.id = %book_instance.book_instance_id,
        book.id = %book_instance.book.book_id,
        "book instance created"
    );
    Ok(Outcome::redirect(book_instance_url(
        book_instance.book_instance_id,
    )))
}

#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}/delete",
    params(("id" = String, Path, description = "Book instance id")),
    responses(
        (status = 200, description = "Rendered `bookinstance_delete` page", body = BookInstanceDeleteView),
        (status = 404, description = "No such book copy")
    ),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn delete_book_instance_form(
    Path(book_instance_id): Path<BookInstanceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<BookInstanceDeleteView>> {
    let book_instance = registry
        .book_instance_repository()
        .find_by_id(book_instance_id)
        .await?
        .ok_or_else(book_instance_not_found)?;
    Ok(Outcome::render(
        "bookinstance_delete",
        "Delete BookInstance",
        BookInstanceDeleteView {
            book_instance: book_instance.into(),
        },
    ))
}

#[utoipa::path(
    post,
    path = "/catalog/bookinstance/{id}/delete",
    params(("id" = String, Path, description = "Book instance id")),
    request_body(content = BookInstanceDeleteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Deleted; redirect to the book instance list"),
        (status = 404, description = "No such book copy"),
        (status = 422, description = "Posted id does not match the path")
    ),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn delete_book_instance(
    Path(book_instance_id): Path<BookInstanceId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<BookInstanceDeleteForm>,
) -> AppResult<Outcome<()>> {
    ensure_same_id(&form.bookinstanceid, book_instance_id)?;
    registry
        .book_instance_repository()
        .delete(DeleteBookInstance::new(book_instance_id))
        .await?;
    tracing::info!(book_instance.id = %book_instance_id, "book instance deleted");
    Ok(Outcome::redirect(BOOK_INSTANCE_LIST_URL))
}

#[utoipa::path(
    get,
    path = "/catalog/bookinstance/{id}/update",
    params(("id" = String, Path, description = "Book instance id")),
    responses(
        (status = 200, description = "Rendered `bookinstance_form` filled with the copy", body = BookInstanceFormView),
        (status = 404, description = "No such book copy")
    ),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn update_book_instance_form(
    Path(book_instance_id): Path<BookInstanceId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<BookInstanceFormView>> {
    let book_instance_repository = registry.book_instance_repository();
    let (book_instance, book_list) = tokio::try_join!(
        book_instance_repository.find_by_id(book_instance_id),
        book_list(&registry),
    )?;
    let book_instance = book_instance.ok_or_else(book_instance_not_found)?;

    Ok(book_instance_form(
        "Update BookInstance",
        book_instance.into(),
        book_list,
        Vec::new(),
    ))
}

#[utoipa::path(
    post,
    path = "/catalog/bookinstance/{id}/update",
    params(("id" = String, Path, description = "Book instance id")),
    request_body(content = BookInstanceForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`bookinstance_form` shown again with errors", body = BookInstanceFormView),
        (status = 303, description = "Redirect to the updated book copy"),
        (status = 404, description = "No such book copy, or the chosen book does not exist")
    ),
    tag = "bookinstance"
)]
#[axum::debug_handler]
pub async fn update_book_instance(
    Path(book_instance_id): Path<BookInstanceId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Outcome<BookInstanceFormView>> {
    let Sanitized { mut value, errors } = form.sanitize();
    value.id = Some(book_instance_id.to_string());
    if !errors.is_empty() {
        tracing::debug!(book_instance.id = %book_instance_id, ?errors, "book instance form rejected");
        return Ok(book_instance_form(
            "Update BookInstance",
            value,
            book_list(&registry).await?,
            errors,
        ));
    }

    let book_instance = registry
        .book_instance_repository()
        .update(value.into_update_event(book_instance_id)?)
        .await?;
    tracing::info!(book_instance.id = %book_instance_id, "book instance updated");
    Ok(Outcome::redirect(book_instance_url(
        book_instance.book_instance_id,
    )))
}

use axum::{
    extract::{Path, State},
    Form,
};
use kernel::model::{
    genre::event::{CreateGenre, DeleteGenre, UpdateGenre},
    id::GenreId,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::ensure_same_id;
use crate::model::{
    book::BookSummaryResponse,
    genre::{
        genre_url, GenreDeleteForm, GenreDeleteView, GenreDetailView, GenreForm, GenreFormValues,
        GenreFormView, GenreListView, GenreResponse, GENRE_LIST_URL, GENRE_NAME_TAKEN_MESSAGE,
    },
    page::Outcome,
    validation::{escape, FieldError, FormFields, Sanitized},
};

fn genre_not_found() -> AppError {
    AppError::EntityNotFound("Genre not found".into())
}

fn genre_form(
    title: &'static str,
    genre: GenreFormValues,
    errors: Vec<FieldError>,
) -> Outcome<GenreFormView> {
    Outcome::render("genre_form", title, GenreFormView { genre, errors })
}

#[utoipa::path(
    get,
    path = "/catalog/genres",
    responses((status = 200, description = "Rendered `genre_list` page", body = GenreListView)),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn show_genre_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<GenreListView>> {
    let genres = registry.genre_repository().find_all().await?;
    Ok(Outcome::render(
        "genre_list",
        "Genre List",
        GenreListView {
            genre_list: genres.into_iter().map(GenreResponse::from).collect(),
        },
    ))
}

/// `key` is a genre id, or a genre name matched case-insensitively.
#[utoipa::path(
    get,
    path = "/catalog/genre/{id}",
    params(("id" = String, Path, description = "Genre id or name")),
    responses(
        (status = 200, description = "Rendered `genre_detail` page", body = GenreDetailView),
        (status = 404, description = "No such genre")
    ),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn show_genre(
    Path(key): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<GenreDetailView>> {
    let genre_repository = registry.genre_repository();
    let book_repository = registry.book_repository();
    let (genre, genre_books) = match key.parse::<GenreId>() {
        Ok(genre_id) => tokio::try_join!(
            genre_repository.find_by_id(genre_id),
            book_repository.find_by_genre(genre_id),
        )?,
        Err(_) => {
            // Names are stored escaped.
            let genre = genre_repository
                .find_by_name(&escape(key.trim()))
                .await?
                .ok_or_else(genre_not_found)?;
            let genre_books = book_repository.find_by_genre(genre.genre_id).await?;
            (Some(genre), genre_books)
        }
    };
    let genre = genre.ok_or_else(genre_not_found)?;

    Ok(Outcome::render(
        "genre_detail",
        "Genre Detail",
        GenreDetailView {
            genre: genre.into(),
            genre_books: genre_books
                .into_iter()
                .map(BookSummaryResponse::from)
                .collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/catalog/genre/create",
    responses((status = 200, description = "Rendered empty `genre_form` page", body = GenreFormView)),
    tag = "genre"
)]
pub async fn create_genre_form() -> Outcome<GenreFormView> {
    genre_form("Create Genre", GenreFormValues::default(), Vec::new())
}

#[utoipa::path(
    post,
    path = "/catalog/genre/create",
    request_body(content = GenreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`genre_form` shown again with errors", body = GenreFormView),
        (status = 303, description = "Redirect to the new or already existing genre")
    ),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn create_genre(
    State(registry): State<AppRegistry>,
    Form(form): Form<GenreForm>,
) -> AppResult<Outcome<GenreFormView>> {
    let Sanitized { value, errors } = form.sanitize();
    if !errors.is_empty() {
        tracing::debug!(?errors, "genre form rejected");
        return Ok(genre_form("Create Genre", value, errors));
    }

    let genre_repository = registry.genre_repository();
    if let Some(existing) = genre_repository.find_by_name(&value.name).await? {
        return Ok(Outcome::redirect(genre_url(existing.genre_id)));
    }

    match genre_repository
        .create(CreateGenre::new(value.name.clone()))
        .await
    {
        Ok(genre) => {
            tracing::info!(genre.id = %genre.genre_id, genre.name = %genre.name, "genre created");
            Ok(Outcome::redirect(genre_url(genre.genre_id)))
        }
        // Another request stored the same name between the lookup and the insert.
        Err(AppError::DuplicateEntity(_)) => {
            let existing = genre_repository
                .find_by_name(&value.name)
                .await?
                .ok_or_else(genre_not_found)?;
            Ok(Outcome::redirect(genre_url(existing.genre_id)))
        }
        Err(e) => Err(e),
    }
}

#[utoipa::path(
    get,
    path = "/catalog/genre/{id}/delete",
    params(("id" = String, Path, description = "Genre id")),
    responses(
        (status = 200, description = "Rendered `genre_delete` page", body = GenreDeleteView),
        (status = 404, description = "No such genre")
    ),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn delete_genre_form(
    Path(genre_id): Path<GenreId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<GenreDeleteView>> {
    let genre_repository = registry.genre_repository();
    let book_repository = registry.book_repository();
    let (genre, genre_books) = tokio::try_join!(
        genre_repository.find_by_id(genre_id),
        book_repository.find_by_genre(genre_id),
    )?;
    let genre = genre.ok_or_else(genre_not_found)?;

    Ok(Outcome::render(
        "genre_delete",
        "Delete Genre",
        GenreDeleteView {
            genre: genre.into(),
            genre_books: genre_books
                .into_iter()
                .map(BookSummaryResponse::from)
                .collect(),
        },
    ))
}

#[utoipa::path(
    post,
    path = "/catalog/genre/{id}/delete",
    params(("id" = String, Path, description = "Genre id")),
    request_body(content = GenreDeleteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Refused: `genre_delete` listing the books still in the genre", body = GenreDeleteView),
        (status = 303, description = "Deleted; redirect to the genre list"),
        (status = 404, description = "No such genre"),
        (status = 422, description = "Posted id does not match the path")
    ),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn delete_genre(
    Path(genre_id): Path<GenreId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<GenreDeleteForm>,
) -> AppResult<Outcome<GenreDeleteView>> {
    ensure_same_id(&form.genreid, genre_id)?;

    let genre_repository = registry.genre_repository();
    let book_repository = registry.book_repository();
    let (genre, genre_books) = tokio::try_join!(
        genre_repository.find_by_id(genre_id),
        book_repository.find_by_genre(genre_id),
    )?;
    let genre = genre.ok_or_else(genre_not_found)?;

    let genre_books = if genre_books.is_empty() {
        match genre_repository.delete(DeleteGenre::new(genre_id)).await {
            Ok(()) => {
                tracing::info!(genre.id = %genre_id, "genre deleted");
                return Ok(Outcome::redirect(GENRE_LIST_URL));
            }
            // A book was filed under the genre after the lookup above.
            Err(AppError::ReferencedEntity(_)) => book_repository.find_by_genre(genre_id).await?,
            Err(e) => return Err(e),
        }
    } else {
        genre_books
    };

    tracing::debug!(genre.id = %genre_id, books = genre_books.len(), "genre delete refused");
    Ok(Outcome::render(
        "genre_delete",
        "Delete Genre",
        GenreDeleteView {
            genre: genre.into(),
            genre_books: genre_books
                .into_iter()
                .map(BookSummaryResponse::from)
                .collect(),
        },
    ))
}

#[utoipa::path(
    get,
    path = "/catalog/genre/{id}/update",
    params(("id" = String, Path, description = "Genre id")),
    responses(
        (status = 200, description = "Rendered `genre_form` filled with the genre", body = GenreFormView),
        (status = 404, description = "No such genre")
    ),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn update_genre_form(
    Path(genre_id): Path<GenreId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Outcome<GenreFormView>> {
    let genre = registry
        .genre_repository()
        .find_by_id(genre_id)
        .await?
        .ok_or_else(genre_not_found)?;
    Ok(genre_form("Update Genre", genre.into(), Vec::new()))
}

#[utoipa::path(
    post,
    path = "/catalog/genre/{id}/update",
    params(("id" = String, Path, description = "Genre id")),
    request_body(content = GenreForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "`genre_form` shown again with errors", body = GenreFormView),
        (status = 303, description = "Redirect to the updated genre"),
        (status = 404, description = "No such genre")
    ),
    tag = "genre"
)]
#[axum::debug_handler]
pub async fn update_genre(
    Path(genre_id): Path<GenreId>,
    State(registry): State<AppRegistry>,
    Form(form): Form<GenreForm>,
) -> AppResult<Outcome<GenreFormView>> {
    let Sanitized { mut value, errors } = form.sanitize();
    value.id = Some(genre_id.to_string());
    if !errors.is_empty() {
        tracing::debug!(genre.id = %genre_id, ?errors, "genre form rejected");
        return Ok(genre_form("Update Genre", value, errors));
    }

    match registry
        .genre_repository()
        .update(UpdateGenre::new(genre_id, value.name.clone()))
        .await
    {
        Ok(genre) => {
            tracing::info!(genre.id = %genre_id, genre.name = %genre.name, "genre updated");
            Ok(Outcome::redirect(genre_url(genre.genre_id)))
        }
        Err(AppError::DuplicateEntity(_)) => Ok(genre_form(
            "Update Genre",
            value,
            vec![FieldError::new("name", GENRE_NAME_TAKEN_MESSAGE)],
        )),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::handler::testing::registry_with;
    use kernel::{
        model::{book::BookSummary, genre::Genre, id::BookId},
        repository::{
            book::MockBookRepository, book_instance::MockBookInstanceRepository,
            genre::MockGenreRepository,
        },
    };
    use mockall::{predicate::eq, Sequence};
    use rstest::rstest;

    type Genres = Arc<Mutex<Vec<Genre>>>;

    /// A genre repository keeping its rows in `genres`, matching names the
    /// way the store's collation does.
    fn genre_store(genres: Genres) -> MockGenreRepository {
        let mut repo = MockGenreRepository::new();

        let store = genres.clone();
        repo.expect_find_by_name().returning(move |name: &str| {
            Ok(store
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.name.to_lowercase() == name.to_lowercase())
                .cloned())
        });
        let store = genres.clone();
        repo.expect_find_by_id().returning(move |genre_id| {
            Ok(store
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.genre_id == genre_id)
                .cloned())
        });
        let store = genres.clone();
        repo.expect_create().returning(move |event| {
            let genre = Genre {
                genre_id: GenreId::new(),
                name: event.name,
            };
            store.lock().unwrap().push(genre.clone());
            Ok(genre)
        });
        let store = genres;
        repo.expect_delete().returning(move |event| {
            let mut rows = store.lock().unwrap();
            let before = rows.len();
            rows.retain(|g| g.genre_id != event.genre_id);
            if rows.len() == before {
                Err(genre_not_found())
            } else {
                Ok(())
            }
        });
        repo
    }

    fn genre(name: &str) -> Genre {
        Genre {
            genre_id: GenreId::new(),
            name: name.into(),
        }
    }

    fn book(title: &str) -> BookSummary {
        BookSummary::new(BookId::new(), title.into(), format!("About {title}"))
    }

    fn no_books() -> MockBookRepository {
        let mut books = MockBookRepository::new();
        books.expect_find_by_genre().returning(|_| Ok(vec![]));
        books
    }

    fn redirect_url<T: std::fmt::Debug>(outcome: Outcome<T>) -> String {
        match outcome {
            Outcome::Redirect(url) => url,
            other => panic!("expected a redirect, got {other:?}"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("No")]
    #[case("   Ab   ")]
    #[case("Thirty-one characters of genre!")]
    #[tokio::test]
    async fn create_with_bad_name_redisplays_form(#[case] name: &str) {
        let mut genres = MockGenreRepository::new();
        genres.expect_find_by_name().never();
        genres.expect_create().never();
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let outcome = create_genre(State(registry), Form(GenreForm { name: name.into() }))
            .await
            .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the form to be shown again");
        };
        assert_eq!(page.template, "genre_form");
        assert_eq!(page.title, "Create Genre");
        assert_eq!(page.data.errors[0].field, "name");
        assert_eq!(page.data.genre.name, name.trim());
    }

    #[tokio::test]
    async fn creating_same_name_twice_stores_one_genre() {
        let genres: Genres = Arc::default();
        let registry = registry_with(
            genre_store(genres.clone()),
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let first = create_genre(
            State(registry.clone()),
            Form(GenreForm {
                name: "Fantasy".into(),
            }),
        )
        .await
        .unwrap();
        let second = create_genre(
            State(registry),
            Form(GenreForm {
                name: "  FANTASY ".into(),
            }),
        )
        .await
        .unwrap();

        let stored = genres.lock().unwrap().clone();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Fantasy");
        let url = genre_url(stored[0].genre_id);
        assert_eq!(redirect_url(first), url);
        assert_eq!(redirect_url(second), url);
    }

    #[tokio::test]
    async fn create_losing_insert_race_redirects_to_winner() {
        let winner = genre("Horror");
        let winner_id = winner.genre_id;
        let mut seq = Sequence::new();
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_name()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        genres
            .expect_create()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::DuplicateEntity("Genre 'Horror' already exists".into())));
        genres
            .expect_find_by_name()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(winner.clone())));
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let outcome = create_genre(
            State(registry),
            Form(GenreForm {
                name: "horror".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(redirect_url(outcome), genre_url(winner_id));
    }

    #[tokio::test]
    async fn delete_with_books_is_refused_and_lists_them() {
        let target = genre("Poetry");
        let genre_id = target.genre_id;
        let genres: Genres = Arc::new(Mutex::new(vec![target.clone()]));
        let dependents = vec![book("Leaves of Grass"), book("The Waste Land")];

        let mut books = MockBookRepository::new();
        let listed = dependents.clone();
        books
            .expect_find_by_genre()
            .with(eq(genre_id))
            .times(1)
            .returning(move |_| Ok(listed.clone()));
        let mut repo = MockGenreRepository::new();
        let store = genres.clone();
        repo.expect_find_by_id().times(1).returning(move |id| {
            Ok(store
                .lock()
                .unwrap()
                .iter()
                .find(|g| g.genre_id == id)
                .cloned())
        });
        repo.expect_delete().never();
        let registry = registry_with(repo, books, MockBookInstanceRepository::new());

        let outcome = delete_genre(
            Path(genre_id),
            State(registry),
            Form(GenreDeleteForm {
                genreid: genre_id.to_string(),
            }),
        )
        .await
        .unwrap();

        let Outcome::Render(page) = outcome else {
            panic!("expected the refusal page");
        };
        assert_eq!(page.template, "genre_delete");
        assert_eq!(page.data.genre.id, genre_id.to_string());
        let ids: Vec<_> = page.data.genre_books.iter().map(|b| b.id.clone()).collect();
        let expected: Vec<_> = dependents.iter().map(|b| b.book_id.to_string()).collect();
        assert_eq!(ids, expected);
        assert_eq!(*genres.lock().unwrap(), vec![target]);
    }

    #[tokio::test]
    async fn delete_without_books_removes_genre() {
        let target = genre("Satire");
        let genre_id = target.genre_id;
        let genres: Genres = Arc::new(Mutex::new(vec![target, genre("Travel")]));
        let registry = registry_with(
            genre_store(genres.clone()),
            no_books(),
            MockBookInstanceRepository::new(),
        );

        let outcome = delete_genre(
            Path(genre_id),
            State(registry.clone()),
            Form(GenreDeleteForm {
                genreid: genre_id.to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(redirect_url(outcome), GENRE_LIST_URL);
        assert_eq!(genres.lock().unwrap().len(), 1);

        let detail = show_genre(Path(genre_id.to_string()), State(registry)).await;
        assert!(matches!(detail, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn delete_rejected_by_foreign_key_shows_new_dependents() {
        let target = genre("Westerns");
        let genre_id = target.genre_id;
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_id()
            .returning(move |_| Ok(Some(target.clone())));
        genres
            .expect_delete()
            .times(1)
            .returning(|_| Err(AppError::ReferencedEntity("still referenced".into())));

        let mut seq = Sequence::new();
        let mut books = MockBookRepository::new();
        books
            .expect_find_by_genre()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![]));
        books
            .expect_find_by_genre()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(vec![book("Lonesome Dove")]));
        let registry = registry_with(genres, books, MockBookInstanceRepository::new());

        let outcome = delete_genre(
            Path(genre_id),
            State(registry),
            Form(GenreDeleteForm {
                genreid: genre_id.to_string(),
            }),
        )
        .await
        .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the refusal page");
        };
        assert_eq!(page.data.genre_books.len(), 1);
        assert_eq!(page.data.genre_books[0].title, "Lonesome Dove");
    }

    #[tokio::test]
    async fn delete_with_mismatched_body_id_touches_nothing() {
        let mut genres = MockGenreRepository::new();
        genres.expect_find_by_id().never();
        genres.expect_delete().never();
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let result = delete_genre(
            Path(GenreId::new()),
            State(registry),
            Form(GenreDeleteForm {
                genreid: GenreId::new().to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::UnprocessableEntity(_))));
    }

    #[tokio::test]
    async fn delete_form_for_missing_genre_is_not_found() {
        let registry = registry_with(
            genre_store(Arc::default()),
            no_books(),
            MockBookInstanceRepository::new(),
        );
        let result = delete_genre_form(Path(GenreId::new()), State(registry)).await;
        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn detail_of_missing_genre_is_not_found() {
        let registry = registry_with(
            genre_store(Arc::default()),
            no_books(),
            MockBookInstanceRepository::new(),
        );
        let result = show_genre(Path(GenreId::new().to_string()), State(registry)).await;
        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn detail_by_name_lists_genre_books() {
        let target = genre("Mystery");
        let genre_id = target.genre_id;
        let mut books = MockBookRepository::new();
        books
            .expect_find_by_genre()
            .with(eq(genre_id))
            .times(1)
            .returning(|_| Ok(vec![book("The Big Sleep")]));
        let registry = registry_with(
            genre_store(Arc::new(Mutex::new(vec![target]))),
            books,
            MockBookInstanceRepository::new(),
        );

        let outcome = show_genre(Path("mystery".into()), State(registry))
            .await
            .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the detail page");
        };
        assert_eq!(page.template, "genre_detail");
        assert_eq!(page.data.genre.name, "Mystery");
        assert_eq!(page.data.genre_books[0].title, "The Big Sleep");
    }

    #[tokio::test]
    async fn detail_by_name_matches_stored_escaped_name() {
        let target = genre("Sci-Fi &amp; Fantasy");
        let genre_id = target.genre_id;
        let registry = registry_with(
            genre_store(Arc::new(Mutex::new(vec![target]))),
            no_books(),
            MockBookInstanceRepository::new(),
        );

        let outcome = show_genre(Path(" sci-fi & fantasy ".into()), State(registry))
            .await
            .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the detail page");
        };
        assert_eq!(page.data.genre.id, genre_id.to_string());
    }

    #[tokio::test]
    async fn detail_by_id_reads_genre_and_books() {
        let target = genre("Mystery");
        let genre_id = target.genre_id;
        let mut genres = MockGenreRepository::new();
        genres
            .expect_find_by_id()
            .with(eq(genre_id))
            .times(1)
            .returning(move |_| Ok(Some(target.clone())));
        genres.expect_find_by_name().never();
        let mut books = MockBookRepository::new();
        books
            .expect_find_by_genre()
            .with(eq(genre_id))
            .times(1)
            .returning(|_| Ok(vec![book("Gaudy Night")]));
        let registry = registry_with(genres, books, MockBookInstanceRepository::new());

        let outcome = show_genre(Path(genre_id.to_string()), State(registry))
            .await
            .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the detail page");
        };
        assert_eq!(page.data.genre.name, "Mystery");
        assert_eq!(page.data.genre_books[0].title, "Gaudy Night");
    }

    #[rstest]
    #[case("xy")]
    #[case("A name well beyond thirty characters")]
    #[tokio::test]
    async fn update_with_bad_name_keeps_path_id_and_persists_nothing(#[case] name: &str) {
        let genre_id = GenreId::new();
        let mut genres = MockGenreRepository::new();
        genres.expect_update().never();
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let outcome = update_genre(
            Path(genre_id),
            State(registry),
            Form(GenreForm { name: name.into() }),
        )
        .await
        .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the form to be shown again");
        };
        assert_eq!(page.title, "Update Genre");
        assert_eq!(page.data.genre.id, Some(genre_id.to_string()));
        assert_eq!(page.data.errors.len(), 1);
    }

    #[tokio::test]
    async fn update_replaces_by_path_id() {
        let genre_id = GenreId::new();
        let mut genres = MockGenreRepository::new();
        genres
            .expect_update()
            .with(eq(UpdateGenre::new(genre_id, "Biography".into())))
            .times(1)
            .returning(|event| {
                Ok(Genre {
                    genre_id: event.genre_id,
                    name: event.name,
                })
            });
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let outcome = update_genre(
            Path(genre_id),
            State(registry),
            Form(GenreForm {
                name: " Biography ".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(redirect_url(outcome), genre_url(genre_id));
    }

    #[tokio::test]
    async fn update_of_missing_genre_is_not_found() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_update()
            .returning(|_| Err(genre_not_found()));
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let result = update_genre(
            Path(GenreId::new()),
            State(registry),
            Form(GenreForm {
                name: "Biography".into(),
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn update_to_taken_name_redisplays_form() {
        let mut genres = MockGenreRepository::new();
        genres
            .expect_update()
            .returning(|_| Err(AppError::DuplicateEntity("taken".into())));
        let registry = registry_with(
            genres,
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let outcome = update_genre(
            Path(GenreId::new()),
            State(registry),
            Form(GenreForm {
                name: "Fantasy".into(),
            }),
        )
        .await
        .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the form to be shown again");
        };
        assert_eq!(
            page.data.errors,
            vec![FieldError::new("name", GENRE_NAME_TAKEN_MESSAGE)]
        );
    }

    #[tokio::test]
    async fn update_form_is_prefilled() {
        let target = genre("Romance");
        let genre_id = target.genre_id;
        let registry = registry_with(
            genre_store(Arc::new(Mutex::new(vec![target]))),
            MockBookRepository::new(),
            MockBookInstanceRepository::new(),
        );

        let outcome = update_genre_form(Path(genre_id), State(registry))
            .await
            .unwrap();
        let Outcome::Render(page) = outcome else {
            panic!("expected the form");
        };
        assert_eq!(
            page.data.genre,
            GenreFormValues {
                id: Some(genre_id.to_string()),
                name: "Romance".into(),
            }
        );
        assert!(page.data.errors.is_empty());
    }
}

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        genre::{
            event::{CreateGenre, DeleteGenre, UpdateGenre},
            Genre,
        },
        id::GenreId,
    },
    repository::genre::GenreRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    is_foreign_key_violation, is_unique_violation, model::genre::GenreRow, operation_error,
    ConnectionPool,
};

#[derive(new)]
pub struct GenreRepositoryImpl {
    db: ConnectionPool,
}

fn duplicate_name(name: &str) -> AppError {
    AppError::DuplicateEntity(format!("Genre '{name}' already exists"))
}

#[async_trait]
impl GenreRepository for GenreRepositoryImpl {
    async fn create(&self, event: CreateGenre) -> AppResult<Genre> {
        let genre_id = GenreId::new();
        sqlx::query(
            r#"
                INSERT INTO genres (genre_id, name)
                VALUES ($1, $2)
            "#,
        )
        .bind(genre_id)
        .bind(&event.name)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_name(&event.name)
            } else {
                operation_error(e)
            }
        })?;

        Ok(Genre {
            genre_id,
            name: event.name,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Genre>> {
        let rows: Vec<GenreRow> = sqlx::query_as(
            r#"
                SELECT genre_id, name
                FROM genres
                ORDER BY name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(operation_error)?;

        Ok(rows.into_iter().map(Genre::from).collect())
    }

    async fn find_by_id(&self, genre_id: GenreId) -> AppResult<Option<Genre>> {
        let row: Option<GenreRow> = sqlx::query_as(
            r#"
                SELECT genre_id, name
                FROM genres
                WHERE genre_id = $1
            "#,
        )
        .bind(genre_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(operation_error)?;

        Ok(row.map(Genre::from))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>> {
        let row: Option<GenreRow> = sqlx::query_as(
            r#"
                SELECT genre_id, name
                FROM genres
                WHERE LOWER(name) = LOWER($1)
            "#,
        )
        .bind(name)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(operation_error)?;

        Ok(row.map(Genre::from))
    }

    async fn update(&self, event: UpdateGenre) -> AppResult<Genre> {
        let row: Option<GenreRow> = sqlx::query_as(
            r#"
                UPDATE genres
                SET name = $2
                WHERE genre_id = $1
                RETURNING genre_id, name
            "#,
        )
        .bind(event.genre_id)
        .bind(&event.name)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                duplicate_name(&event.name)
            } else {
                operation_error(e)
            }
        })?;

        row.map(Genre::from)
            .ok_or_else(|| AppError::EntityNotFound("Genre not found".into()))
    }

    async fn delete(&self, event: DeleteGenre) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM genres
                WHERE genre_id = $1
            "#,
        )
        .bind(event.genre_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::ReferencedEntity(format!(
                    "Genre {} is still referenced by books",
                    event.genre_id
                ))
            } else {
                operation_error(e)
            }
        })?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Genre not found".into()));
        }
        tracing::debug!(genre.id = %event.genre_id, "genre row deleted");
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM genres")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(operation_error)
    }
}

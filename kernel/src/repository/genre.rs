use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    genre::{
        event::{CreateGenre, DeleteGenre, UpdateGenre},
        Genre,
    },
    id::GenreId,
};

#[mockall::automock]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Inserts a genre. A name colliding case-insensitively with a stored
    /// genre fails with `AppError::DuplicateEntity`.
    async fn create(&self, event: CreateGenre) -> AppResult<Genre>;
    /// All genres ordered by name.
    async fn find_all(&self) -> AppResult<Vec<Genre>>;
    async fn find_by_id(&self, genre_id: GenreId) -> AppResult<Option<Genre>>;
    /// Case-insensitive lookup by name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Genre>>;
    /// Replaces the genre's fields. Fails with `AppError::EntityNotFound` when
    /// no genre has the id.
    async fn update(&self, event: UpdateGenre) -> AppResult<Genre>;
    /// Fails with `AppError::ReferencedEntity` while books still reference
    /// the genre.
    async fn delete(&self, event: DeleteGenre) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
}

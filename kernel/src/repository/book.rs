use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book::{BookSummary, BookTitle},
    id::GenreId,
};

/// Read-only access to books, which are owned by the book controller.
#[mockall::automock]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Every book's title, ordered by title.
    async fn find_all_titles(&self) -> AppResult<Vec<BookTitle>>;
    /// Books listing the genre among their genres.
    async fn find_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<BookSummary>>;
    async fn count(&self) -> AppResult<i64>;
}

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book::{BookSummary, BookTitle},
        id::GenreId,
    },
    repository::book::BookRepository,
};
use shared::error::AppResult;

use crate::database::{
    model::book::{BookSummaryRow, BookTitleRow},
    operation_error, ConnectionPool,
};

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn find_all_titles(&self) -> AppResult<Vec<BookTitle>> {
        let rows: Vec<BookTitleRow> = sqlx::query_as(
            r#"
                SELECT book_id, title
                FROM books
                ORDER BY title ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(operation_error)?;

        Ok(rows.into_iter().map(BookTitle::from).collect())
    }

    async fn find_by_genre(&self, genre_id: GenreId) -> AppResult<Vec<BookSummary>> {
        let rows: Vec<BookSummaryRow> = sqlx::query_as(
            r#"
                SELECT b.book_id, b.title, b.summary
                FROM books AS b
                INNER JOIN book_genres AS bg ON bg.book_id = b.book_id
                WHERE bg.genre_id = $1
                ORDER BY b.title ASC
            "#,
        )
        .bind(genre_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(operation_error)?;

        Ok(rows.into_iter().map(BookSummary::from).collect())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(operation_error)
    }
}

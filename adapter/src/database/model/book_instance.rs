use std::str::FromStr;

use chrono::NaiveDate;
use kernel::model::{
    book::{Author, Book},
    book_instance::{BookInstance, BookInstanceStatus},
    id::{AuthorId, BookId, BookInstanceId},
};
use shared::error::AppError;

/// A copy joined with its book and the book's author.
#[derive(sqlx::FromRow)]
pub struct BookInstanceRow {
    pub book_instance_id: BookInstanceId,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
    pub book_id: BookId,
    pub title: String,
    pub author_id: AuthorId,
    pub first_name: String,
    pub family_name: String,
}

impl TryFrom<BookInstanceRow> for BookInstance {
    type Error = AppError;

    fn try_from(value: BookInstanceRow) -> Result<Self, Self::Error> {
        let BookInstanceRow {
            book_instance_id,
            imprint,
            status,
            due_back,
            book_id,
            title,
            author_id,
            first_name,
            family_name,
        } = value;
        let status = BookInstanceStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "unknown status '{status}' on book instance {book_instance_id}"
            ))
        })?;
        Ok(BookInstance {
            book_instance_id,
            book: Book::new(
                book_id,
                title,
                Author::new(author_id, first_name, family_name),
            ),
            imprint,
            status,
            due_back,
        })
    }
}

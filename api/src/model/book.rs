use kernel::model::{
    book::{Book, BookSummary, BookTitle},
    id::BookId,
};
use serde::Serialize;
use utoipa::ToSchema;

pub fn book_url(book_id: BookId) -> String {
    format!("/catalog/book/{book_id}")
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub url: String,
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        Self {
            id: value.book_id.to_string(),
            title: value.title,
            author: value.author.name(),
            url: book_url(value.book_id),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookTitleResponse {
    pub id: String,
    pub title: String,
}

impl From<BookTitle> for BookTitleResponse {
    fn from(value: BookTitle) -> Self {
        Self {
            id: value.book_id.to_string(),
            title: value.title,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookSummaryResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub url: String,
}

impl From<BookSummary> for BookSummaryResponse {
    fn from(value: BookSummary) -> Self {
        let BookSummary {
            book_id,
            title,
            summary,
        } = value;
        Self {
            id: book_id.to_string(),
            title,
            summary,
            url: book_url(book_id),
        }
    }
}

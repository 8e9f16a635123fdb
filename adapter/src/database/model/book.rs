use kernel::model::{
    book::{BookSummary, BookTitle},
    id::BookId,
};

#[derive(sqlx::FromRow)]
pub struct BookTitleRow {
    pub book_id: BookId,
    pub title: String,
}

impl From<BookTitleRow> for BookTitle {
    fn from(value: BookTitleRow) -> Self {
        BookTitle::new(value.book_id, value.title)
    }
}

#[derive(sqlx::FromRow)]
pub struct BookSummaryRow {
    pub book_id: BookId,
    pub title: String,
    pub summary: String,
}

impl From<BookSummaryRow> for BookSummary {
    fn from(value: BookSummaryRow) -> Self {
        let BookSummaryRow {
            book_id,
            title,
            summary,
        } = value;
        BookSummary::new(book_id, title, summary)
    }
}

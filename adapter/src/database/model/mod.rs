pub mod book;
pub mod book_instance;
pub mod genre;

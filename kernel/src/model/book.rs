use derive_new::new;

use super::id::{AuthorId, BookId};

/// A book populated with its author, as shown on book instance pages.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Author {
    pub author_id: AuthorId,
    pub first_name: String,
    pub family_name: String,
}

impl Author {
    /// "Family, First"; either part may be missing.
    pub fn name(&self) -> String {
        match (self.family_name.is_empty(), self.first_name.is_empty()) {
            (false, false) => format!("{}, {}", self.family_name, self.first_name),
            (false, true) => self.family_name.clone(),
            (true, _) => self.first_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BookTitle {
    pub book_id: BookId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BookSummary {
    pub book_id: BookId,
    pub title: String,
    pub summary: String,
}

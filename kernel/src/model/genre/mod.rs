use super::id::GenreId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub genre_id: GenreId,
    pub name: String,
}

use derive_new::new;

use crate::model::id::GenreId;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CreateGenre {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct UpdateGenre {
    pub genre_id: GenreId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DeleteGenre {
    pub genre_id: GenreId,
}

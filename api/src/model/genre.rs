use garde::Validate;
use kernel::model::{genre::Genre, id::GenreId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    book::BookSummaryResponse,
    validation::{escape, FieldError, FormFields},
};

pub const GENRE_LIST_URL: &str = "/catalog/genres";
pub const GENRE_NAME_MESSAGE: &str = "Genre name must contain between 3 and 30 characters";
pub const GENRE_NAME_TAKEN_MESSAGE: &str = "Genre name already exists";

const GENRE_NAME_CHARS: std::ops::RangeInclusive<usize> = 3..=30;

pub fn genre_url(genre_id: GenreId) -> String {
    format!("/catalog/genre/{genre_id}")
}

fn is_genre_name_length(value: &str, _: &()) -> garde::Result {
    if GENRE_NAME_CHARS.contains(&value.chars().count()) {
        Ok(())
    } else {
        Err(garde::Error::new("length is out of bounds"))
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct GenreForm {
    #[garde(custom(is_genre_name_length))]
    #[serde(default)]
    pub name: String,
}

impl FormFields for GenreForm {
    type Clean = GenreFormValues;

    fn trim(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
        }
    }

    fn message(field: &str) -> Option<&'static str> {
        match field {
            "name" => Some(GENRE_NAME_MESSAGE),
            _ => None,
        }
    }

    fn clean(self) -> GenreFormValues {
        GenreFormValues {
            id: None,
            name: escape(&self.name),
        }
    }
}

/// Confirmation body of a genre delete.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct GenreDeleteForm {
    #[serde(default)]
    pub genreid: String,
}

/// The genre as entered on the form; `id` is set when updating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct GenreFormValues {
    pub id: Option<String>,
    pub name: String,
}

impl From<Genre> for GenreFormValues {
    fn from(value: Genre) -> Self {
        Self {
            id: Some(value.genre_id.to_string()),
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreResponse {
    pub id: String,
    pub name: String,
    pub url: String,
}

impl From<Genre> for GenreResponse {
    fn from(value: Genre) -> Self {
        Self {
            id: value.genre_id.to_string(),
            url: genre_url(value.genre_id),
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreListView {
    pub genre_list: Vec<GenreResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreDetailView {
    pub genre: GenreResponse,
    pub genre_books: Vec<BookSummaryResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenreFormView {
    pub genre: GenreFormValues,
    pub errors: Vec<FieldError>,
}

/// Shown both to confirm a delete and to explain a refused one.
#[derive(Debug, Serialize, ToSchema)]
pub struct GenreDeleteView {
    pub genre: GenreResponse,
    pub genre_books: Vec<BookSummaryResponse>,
}

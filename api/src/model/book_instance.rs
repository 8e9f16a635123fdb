use std::str::FromStr;

use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    book_instance::{
        event::{CreateBookInstance, UpdateBookInstance},
        BookInstance, BookInstanceStatus,
    },
    id::{BookId, BookInstanceId},
};
use serde::{Deserialize, Serialize};
use shared::error::AppResult;
use strum::IntoEnumIterator;
use utoipa::ToSchema;

use super::{
    book::{BookResponse, BookTitleResponse},
    validation::{escape, optional_iso8601, parse_iso8601_date, FieldError, FormFields},
};

pub const BOOK_INSTANCE_LIST_URL: &str = "/catalog/bookinstances";

pub fn book_instance_url(book_instance_id: BookInstanceId) -> String {
    format!("/catalog/bookinstance/{book_instance_id}")
}

fn is_book_id(value: &str, _: &()) -> garde::Result {
    BookId::from_str(value)
        .map(|_| ())
        .map_err(|_| garde::Error::new("not a book id"))
}

fn is_known_status(value: &str, _: &()) -> garde::Result {
    if value.is_empty() || BookInstanceStatus::from_str(value).is_ok() {
        Ok(())
    } else {
        Err(garde::Error::new("unknown status"))
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct BookInstanceForm {
    #[garde(length(min = 1), custom(is_book_id))]
    #[serde(default)]
    pub book: String,
    #[garde(length(min = 1))]
    #[serde(default)]
    pub imprint: String,
    #[garde(custom(is_known_status))]
    #[serde(default)]
    pub status: String,
    #[garde(custom(optional_iso8601))]
    #[serde(default)]
    pub due_back: String,
}

impl FormFields for BookInstanceForm {
    type Clean = BookInstanceFormValues;

    fn trim(self) -> Self {
        Self {
            book: self.book.trim().to_owned(),
            imprint: self.imprint.trim().to_owned(),
            status: self.status.trim().to_owned(),
            due_back: self.due_back.trim().to_owned(),
        }
    }

    fn message(field: &str) -> Option<&'static str> {
        match field {
            "book" => Some("Book must be specified"),
            "imprint" => Some("Imprint must be specified"),
            "status" => Some("Invalid status"),
            "due_back" => Some("Invalid date"),
            _ => None,
        }
    }

    fn clean(self) -> BookInstanceFormValues {
        BookInstanceFormValues {
            id: None,
            book: escape(&self.book),
            imprint: escape(&self.imprint),
            status: BookInstanceStatus::from_str(&self.status).unwrap_or_default(),
            due_back: parse_iso8601_date(&self.due_back),
        }
    }
}

/// Confirmation body of a book instance delete.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BookInstanceDeleteForm {
    #[serde(default)]
    pub bookinstanceid: String,
}

/// A copy as entered on the form; `id` is set when updating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct BookInstanceFormValues {
    pub id: Option<String>,
    pub book: String,
    pub imprint: String,
    #[schema(value_type = String)]
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

impl BookInstanceFormValues {
    pub fn into_create_event(self) -> AppResult<CreateBookInstance> {
        Ok(CreateBookInstance::new(
            self.book.parse()?,
            self.imprint,
            self.status,
            self.due_back,
        ))
    }

    pub fn into_update_event(
        self,
        book_instance_id: BookInstanceId,
    ) -> AppResult<UpdateBookInstance> {
        Ok(UpdateBookInstance::new(
            book_instance_id,
            self.book.parse()?,
            self.imprint,
            self.status,
            self.due_back,
        ))
    }
}

impl From<BookInstance> for BookInstanceFormValues {
    fn from(value: BookInstance) -> Self {
        Self {
            id: Some(value.book_instance_id.to_string()),
            book: value.book.book_id.to_string(),
            imprint: value.imprint,
            status: value.status,
            due_back: value.due_back,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookInstanceResponse {
    pub id: String,
    pub url: String,
    pub book: BookResponse,
    pub imprint: String,
    #[schema(value_type = String)]
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

impl From<BookInstance> for BookInstanceResponse {
    fn from(value: BookInstance) -> Self {
        let BookInstance {
            book_instance_id,
            book,
            imprint,
            status,
            due_back,
        } = value;
        Self {
            id: book_instance_id.to_string(),
            url: book_instance_url(book_instance_id),
            book: book.into(),
            imprint,
            status,
            due_back,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookInstanceListView {
    pub bookinstance_list: Vec<BookInstanceResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookInstanceDetailView {
    pub bookinstance: BookInstanceResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookInstanceFormView {
    pub bookinstance: BookInstanceFormValues,
    pub book_list: Vec<BookTitleResponse>,
    pub selected_book: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub status_list: Vec<BookInstanceStatus>,
    pub errors: Vec<FieldError>,
}

impl BookInstanceFormView {
    pub fn new(
        bookinstance: BookInstanceFormValues,
        book_list: Vec<BookTitleResponse>,
        errors: Vec<FieldError>,
    ) -> Self {
        let selected_book = Some(bookinstance.book.clone()).filter(|book| !book.is_empty());
        Self {
            bookinstance,
            book_list,
            selected_book,
            status_list: BookInstanceStatus::iter().collect(),
            errors,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookInstanceDeleteView {
    pub book_instance: BookInstanceResponse,
}

use chrono::NaiveDate;
use derive_new::new;

use super::BookInstanceStatus;
use crate::model::id::{BookId, BookInstanceId};

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CreateBookInstance {
    pub book_id: BookId,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct UpdateBookInstance {
    pub book_instance_id: BookInstanceId,
    pub book_id: BookId,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct DeleteBookInstance {
    pub book_instance_id: BookInstanceId,
}

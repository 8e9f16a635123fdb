use chrono::NaiveDate;
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use super::{book::Book, id::BookInstanceId};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInstance {
    pub book_instance_id: BookInstanceId,
    pub book: Book,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn status_round_trips_through_its_name() {
        for status in BookInstanceStatus::iter() {
            assert_eq!(
                BookInstanceStatus::from_str(status.as_ref()).unwrap(),
                status
            );
        }
        assert!(BookInstanceStatus::from_str("Lost").is_err());
    }

    #[test]
    fn default_status_is_maintenance() {
        assert_eq!(
            BookInstanceStatus::default(),
            BookInstanceStatus::Maintenance
        );
    }
}

use std::str::FromStr;

use shared::error::{AppError, AppResult};

pub mod book_instance;
pub mod catalog;
pub mod genre;
pub mod health;

/// Checks that the id posted with a delete confirmation names the resource
/// in the path.
pub(crate) fn ensure_same_id<T>(body_id: &str, path_id: T) -> AppResult<()>
where
    T: FromStr + PartialEq,
{
    match body_id.trim().parse::<T>() {
        Ok(id) if id == path_id => Ok(()),
        _ => Err(AppError::UnprocessableEntity(
            "Submitted id does not match the requested resource".into(),
        )),
    }
}

use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    book_instance::{
        event::{CreateBookInstance, DeleteBookInstance, UpdateBookInstance},
        BookInstance, BookInstanceStatus,
    },
    id::BookInstanceId,
};

#[mockall::automock]
#[async_trait]
pub trait BookInstanceRepository: Send + Sync {
    async fn create(&self, event: CreateBookInstance) -> AppResult<BookInstance>;
    /// All copies with their books populated, ordered by book title.
    async fn find_all(&self) -> AppResult<Vec<BookInstance>>;
    async fn find_by_id(
        &self,
        book_instance_id: BookInstanceId,
    ) -> AppResult<Option<BookInstance>>;
    async fn update(&self, event: UpdateBookInstance) -> AppResult<BookInstance>;
    async fn delete(&self, event: DeleteBookInstance) -> AppResult<()>;
    async fn count(&self) -> AppResult<i64>;
    async fn count_by_status(&self, status: BookInstanceStatus) -> AppResult<i64>;
}

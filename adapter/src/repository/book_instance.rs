use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book_instance::{
            event::{CreateBookInstance, DeleteBookInstance, UpdateBookInstance},
            BookInstance, BookInstanceStatus,
        },
        id::BookInstanceId,
    },
    repository::book_instance::BookInstanceRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{
    is_foreign_key_violation, model::book_instance::BookInstanceRow, operation_error,
    ConnectionPool,
};

const SELECT_POPULATED: &str = r#"
    SELECT
        bi.book_instance_id,
        bi.imprint,
        bi.status,
        bi.due_back,
        b.book_id,
        b.title,
        a.author_id,
        a.first_name,
        a.family_name
    FROM book_instances AS bi
    INNER JOIN books AS b ON b.book_id = bi.book_id
    INNER JOIN authors AS a ON a.author_id = b.author_id
"#;

#[derive(new)]
pub struct BookInstanceRepositoryImpl {
    db: ConnectionPool,
}

fn write_error(e: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&e) {
        AppError::EntityNotFound("Book not found".into())
    } else {
        operation_error(e)
    }
}

impl BookInstanceRepositoryImpl {
    async fn find_populated(
        &self,
        book_instance_id: BookInstanceId,
    ) -> AppResult<BookInstance> {
        self.find_by_id(book_instance_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Book copy not found".into()))
    }
}

#[async_trait]
impl BookInstanceRepository for BookInstanceRepositoryImpl {
    async fn create(&self, event: CreateBookInstance) -> AppResult<BookInstance> {
        let book_instance_id = BookInstanceId::new();
        sqlx::query(
            r#"
                INSERT INTO book_instances (book_instance_id, book_id, imprint, status, due_back)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(book_instance_id)
        .bind(event.book_id)
        .bind(&event.imprint)
        .bind(event.status.to_string())
        .bind(event.due_back)
        .execute(self.db.inner_ref())
        .await
        .map_err(write_error)?;

        self.find_populated(book_instance_id).await
    }

    async fn find_all(&self) -> AppResult<Vec<BookInstance>> {
        let sql = format!("{SELECT_POPULATED} ORDER BY b.title ASC, bi.imprint ASC");
        let rows: Vec<BookInstanceRow> = sqlx::query_as(&sql)
            .fetch_all(self.db.inner_ref())
            .await
            .map_err(operation_error)?;

        rows.into_iter().map(BookInstance::try_from).collect()
    }

    async fn find_by_id(
        &self,
        book_instance_id: BookInstanceId,
    ) -> AppResult<Option<BookInstance>> {
        let sql = format!("{SELECT_POPULATED} WHERE bi.book_instance_id = $1");
        let row: Option<BookInstanceRow> = sqlx::query_as(&sql)
            .bind(book_instance_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map_err(operation_error)?;

        row.map(BookInstance::try_from).transpose()
    }

    async fn update(&self, event: UpdateBookInstance) -> AppResult<BookInstance> {
        let res = sqlx::query(
            r#"
                UPDATE book_instances
                SET book_id = $2, imprint = $3, status = $4, due_back = $5
                WHERE book_instance_id = $1
            "#,
        )
        .bind(event.book_instance_id)
        .bind(event.book_id)
        .bind(&event.imprint)
        .bind(event.status.to_string())
        .bind(event.due_back)
        .execute(self.db.inner_ref())
        .await
        .map_err(write_error)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Book copy not found".into()));
        }
        self.find_populated(event.book_instance_id).await
    }

    async fn delete(&self, event: DeleteBookInstance) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM book_instances
                WHERE book_instance_id = $1
            "#,
        )
        .bind(event.book_instance_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(operation_error)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Book copy not found".into()));
        }
        Ok(())
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(operation_error)
    }

    async fn count_by_status(&self, status: BookInstanceStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
            .bind(status.to_string())
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(operation_error)
    }
}

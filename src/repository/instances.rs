//! Book instances (physical copies) repository for database operations

use chrono::NaiveDate;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::BookShort,
        book_instance::{BookInstance, BookInstanceDetails, CreateBookInstance, LoanStatus},
    },
};

#[derive(Clone)]
pub struct InstancesRepository {
    pool: Pool<Postgres>,
}

impl InstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a copy by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<BookInstance> {
        sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, due_back, borrower_id, status
             FROM book_instances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))
    }

    /// Get a copy with book and borrower details
    pub async fn get_details(&self, id: Uuid, today: NaiveDate) -> AppResult<BookInstanceDetails> {
        let row = sqlx::query(
            r#"
            SELECT bi.id, bi.imprint, bi.status, bi.due_back,
                   b.id as book_id, b.title,
                   a.last_name || ', ' || a.first_name as author_name,
                   u.username as borrower
            FROM book_instances bi
            JOIN books b ON bi.book_id = b.id
            LEFT JOIN authors a ON b.author_id = a.id
            LEFT JOIN users u ON bi.borrower_id = u.id
            WHERE bi.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book instance {} not found", id)))?;

        Ok(Self::details_from_row(&row, today))
    }

    /// List copies of a book, in default due_back order
    pub async fn list_for_book(&self, book_id: i32) -> AppResult<Vec<BookInstance>> {
        let instances = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, due_back, borrower_id, status
             FROM book_instances
             WHERE book_id = $1
             ORDER BY due_back",
        )
        .bind(book_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(instances)
    }

    /// List copies currently on loan, due_back ascending.
    /// When `borrower_id` is set, restricts to that borrower's loans.
    pub async fn list_on_loan(
        &self,
        borrower_id: Option<i32>,
        page: i64,
        per_page: i64,
        today: NaiveDate,
    ) -> AppResult<(Vec<BookInstanceDetails>, i64)> {
        let offset = (page - 1) * per_page;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM book_instances
             WHERE status = 'o' AND ($1::int IS NULL OR borrower_id = $1)",
        )
        .bind(borrower_id)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query(
            r#"
            SELECT bi.id, bi.imprint, bi.status, bi.due_back,
                   b.id as book_id, b.title,
                   a.last_name || ', ' || a.first_name as author_name,
                   u.username as borrower
            FROM book_instances bi
            JOIN books b ON bi.book_id = b.id
            LEFT JOIN authors a ON b.author_id = a.id
            LEFT JOIN users u ON bi.borrower_id = u.id
            WHERE bi.status = 'o' AND ($1::int IS NULL OR bi.borrower_id = $1)
            ORDER BY bi.due_back
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(borrower_id)
        .bind(per_page)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let details = rows
            .iter()
            .map(|row| Self::details_from_row(row, today))
            .collect();

        Ok((details, total))
    }

    /// Create a copy of a book
    pub async fn create(
        &self,
        book_id: i32,
        instance: &CreateBookInstance,
    ) -> AppResult<BookInstance> {
        let id = Uuid::new_v4();
        let status = instance.status.unwrap_or_default();

        let created = sqlx::query_as::<_, BookInstance>(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status)
            VALUES ($1, $2, $3, $4)
            RETURNING id, book_id, imprint, due_back, borrower_id, status
            "#,
        )
        .bind(id)
        .bind(book_id)
        .bind(&instance.imprint)
        .bind(status.as_code())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Set the due date of a copy (renewal)
    pub async fn set_due_back(&self, id: Uuid, due_back: NaiveDate) -> AppResult<()> {
        let result = sqlx::query("UPDATE book_instances SET due_back = $1 WHERE id = $2")
            .bind(due_back)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book instance {} not found", id)));
        }
        Ok(())
    }

    /// Lend a copy to a borrower
    pub async fn checkout(
        &self,
        id: Uuid,
        borrower_id: i32,
        due_back: NaiveDate,
    ) -> AppResult<()> {
        let borrower_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                .bind(borrower_id)
                .fetch_one(&self.pool)
                .await?;

        if !borrower_exists {
            return Err(AppError::NotFound(format!(
                "Borrower with id {} not found",
                borrower_id
            )));
        }

        sqlx::query(
            "UPDATE book_instances SET status = 'o', borrower_id = $1, due_back = $2 WHERE id = $3",
        )
        .bind(borrower_id)
        .bind(due_back)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Mark a copy returned: available again, no borrower, no due date
    pub async fn mark_returned(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE book_instances SET status = 'a', borrower_id = NULL, due_back = NULL WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Delete a copy. Restricted while it is on loan.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let instance = self.get_by_id(id).await?;

        if instance.loan_status() == LoanStatus::OnLoan {
            return Err(AppError::ReferenceRestricted(
                "Book instance is on loan; mark it returned first".to_string(),
            ));
        }

        sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Count all copies
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count copies with the given status
    pub async fn count_by_status(&self, status: LoanStatus) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
                .bind(status.as_code())
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    fn details_from_row(row: &sqlx::postgres::PgRow, today: NaiveDate) -> BookInstanceDetails {
        let due_back: Option<NaiveDate> = row.get("due_back");
        let status_code: String = row.get("status");

        BookInstanceDetails {
            id: row.get("id"),
            book: BookShort {
                id: row.get("book_id"),
                title: row.get("title"),
                author_name: row.get("author_name"),
            },
            imprint: row.get("imprint"),
            status: LoanStatus::from(status_code.trim()).to_string(),
            due_back,
            borrower: row.get("borrower"),
            is_overdue: due_back.map(|d| d < today).unwrap_or(false),
        }
    }
}

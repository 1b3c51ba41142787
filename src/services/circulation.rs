//! Circulation service: borrowed-copy queries and the loan renewal workflow

use chrono::{Duration, NaiveDate, Utc};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book_instance::{BookInstanceDetails, LoanStatus},
    repository::Repository,
};

/// Renewals may not extend a loan more than this far past today
pub const MAX_RENEWAL_WEEKS: i64 = 4;
/// Proposed renewal period when initiating a renewal
pub const DEFAULT_RENEWAL_WEEKS: i64 = 3;

/// Default proposed due date for a renewal: today + 3 weeks
pub fn default_renewal_date(today: NaiveDate) -> NaiveDate {
    today + Duration::weeks(DEFAULT_RENEWAL_WEEKS)
}

/// Latest due date a renewal may propose: today + 4 weeks
pub fn max_renewal_date(today: NaiveDate) -> NaiveDate {
    today + Duration::weeks(MAX_RENEWAL_WEEKS)
}

/// Validate a proposed renewal due date against today.
/// Accepts any date in [today, today + 4 weeks]; no other rule applies.
pub fn validate_renewal_date(proposed: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if proposed < today {
        return Err(AppError::Validation(
            "Invalid date - renewal in past".to_string(),
        ));
    }
    if proposed > max_renewal_date(today) {
        return Err(AppError::Validation(
            "Invalid date - renewal more than 4 weeks ahead".to_string(),
        ));
    }
    Ok(())
}

#[derive(Clone)]
pub struct CirculationService {
    repository: Repository,
}

impl CirculationService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Copies on loan to a specific borrower, due_back ascending
    pub async fn borrowed_by_user(
        &self,
        borrower_id: i32,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<BookInstanceDetails>, i64)> {
        self.repository
            .instances
            .list_on_loan(Some(borrower_id), page, per_page, Self::today())
            .await
    }

    /// All copies currently on loan to anybody, due_back ascending
    pub async fn borrowed_all(
        &self,
        page: i64,
        per_page: i64,
    ) -> AppResult<(Vec<BookInstanceDetails>, i64)> {
        self.repository
            .instances
            .list_on_loan(None, page, per_page, Self::today())
            .await
    }

    /// Renewal proposal for a copy: the default and latest acceptable due dates
    pub async fn renewal_proposal(&self, id: Uuid) -> AppResult<(NaiveDate, NaiveDate)> {
        // Verify the copy exists
        self.repository.instances.get_by_id(id).await?;

        let today = Self::today();
        Ok((default_renewal_date(today), max_renewal_date(today)))
    }

    /// Renew a copy: validate the proposed due date and update due_back.
    /// Status is left untouched; only the due date moves.
    pub async fn renew(&self, id: Uuid, due_back: NaiveDate) -> AppResult<BookInstanceDetails> {
        let today = Self::today();

        self.repository.instances.get_by_id(id).await?;
        validate_renewal_date(due_back, today)?;
        self.repository.instances.set_due_back(id, due_back).await?;
        self.repository.instances.get_details(id, today).await
    }

    /// Lend a copy to a borrower. The due date defaults to today + 3 weeks.
    pub async fn checkout(
        &self,
        id: Uuid,
        borrower_id: i32,
        due_back: Option<NaiveDate>,
    ) -> AppResult<BookInstanceDetails> {
        let today = Self::today();
        let instance = self.repository.instances.get_by_id(id).await?;

        if instance.loan_status() == LoanStatus::OnLoan {
            return Err(AppError::BusinessRule(
                "Book instance is already on loan".to_string(),
            ));
        }

        let due_back = due_back.unwrap_or_else(|| default_renewal_date(today));
        self.repository
            .instances
            .checkout(id, borrower_id, due_back)
            .await?;
        self.repository.instances.get_details(id, today).await
    }

    /// Mark a copy returned
    pub async fn mark_returned(&self, id: Uuid) -> AppResult<BookInstanceDetails> {
        let instance = self.repository.instances.get_by_id(id).await?;

        if instance.loan_status() != LoanStatus::OnLoan {
            return Err(AppError::BusinessRule(
                "Book instance is not on loan".to_string(),
            ));
        }

        self.repository.instances.mark_returned(id).await?;
        self.repository.instances.get_details(id, Self::today()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn rejects_date_in_past() {
        let yesterday = today() - Duration::days(1);
        let err = validate_renewal_date(yesterday, today()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid date - renewal in past"));
    }

    #[test]
    fn rejects_date_more_than_four_weeks_ahead() {
        let too_far = today() + Duration::days(29);
        let err = validate_renewal_date(too_far, today()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Validation(msg) if msg == "Invalid date - renewal more than 4 weeks ahead"
        ));
    }

    #[test]
    fn accepts_every_date_in_window() {
        for offset in 0..=28 {
            let proposed = today() + Duration::days(offset);
            assert!(
                validate_renewal_date(proposed, today()).is_ok(),
                "day offset {} should be accepted",
                offset
            );
        }
    }

    #[test]
    fn accepts_today_and_window_end_boundaries() {
        assert!(validate_renewal_date(today(), today()).is_ok());
        assert!(validate_renewal_date(today() + Duration::weeks(4), today()).is_ok());
    }

    #[test]
    fn default_proposal_is_three_weeks_out() {
        assert_eq!(
            default_renewal_date(today()),
            NaiveDate::from_ymd_opt(2024, 7, 6).unwrap()
        );
        assert_eq!(default_renewal_date(today()), today() + Duration::days(21));
    }

    #[test]
    fn default_proposal_is_within_window() {
        assert!(validate_renewal_date(default_renewal_date(today()), today()).is_ok());
    }
}

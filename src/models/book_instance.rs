//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::book::BookShort;

/// Loan status of a copy. Stored in the DB as a single-char code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    /// Return the single-char DB code for this status
    pub fn as_code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }
}

impl From<&str> for LoanStatus {
    fn from(s: &str) -> Self {
        match s {
            "o" => LoanStatus::OnLoan,
            "a" => LoanStatus::Available,
            "r" => LoanStatus::Reserved,
            _ => LoanStatus::Maintenance,
        }
    }
}

impl Default for LoanStatus {
    fn default() -> Self {
        LoanStatus::Maintenance
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LoanStatus::Maintenance => "Maintenance",
            LoanStatus::OnLoan => "On loan",
            LoanStatus::Available => "Available",
            LoanStatus::Reserved => "Reserved",
        };
        write!(f, "{}", label)
    }
}

/// Full book instance model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookInstance {
    /// Unique ID for this particular copy across the whole library
    pub id: Uuid,
    pub book_id: i32,
    pub imprint: String,
    pub due_back: Option<NaiveDate>,
    pub borrower_id: Option<i32>,
    pub status: String, // Loan status code: m/o/a/r
}

impl BookInstance {
    pub fn loan_status(&self) -> LoanStatus {
        LoanStatus::from(self.status.as_str())
    }

    /// A copy is overdue when it has a due date strictly before today
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.due_back.map(|d| d < today).unwrap_or(false)
    }
}

/// Book instance with book and borrower details, for lists and
/// circulation responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BookInstanceDetails {
    pub id: Uuid,
    pub book: BookShort,
    pub imprint: String,
    /// Human-readable status label ("On loan", "Available", ...)
    pub status: String,
    pub due_back: Option<NaiveDate>,
    pub borrower: Option<String>,
    pub is_overdue: bool,
}

/// Create book instance request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookInstance {
    pub imprint: String,
    /// Initial status; defaults to Maintenance
    pub status: Option<LoanStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copy(due_back: Option<NaiveDate>) -> BookInstance {
        BookInstance {
            id: Uuid::new_v4(),
            book_id: 1,
            imprint: "Test Imprint, 2020".to_string(),
            due_back,
            borrower_id: None,
            status: "o".to_string(),
        }
    }

    #[test]
    fn overdue_when_due_back_before_today() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let instance = copy(NaiveDate::from_ymd_opt(2024, 6, 14));
        assert!(instance.is_overdue(today));
    }

    #[test]
    fn not_overdue_on_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let instance = copy(NaiveDate::from_ymd_opt(2024, 6, 15));
        assert!(!instance.is_overdue(today));
    }

    #[test]
    fn not_overdue_without_due_date() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(!copy(None).is_overdue(today));
    }

    #[test]
    fn status_codes_round_trip() {
        for status in [
            LoanStatus::Maintenance,
            LoanStatus::OnLoan,
            LoanStatus::Available,
            LoanStatus::Reserved,
        ] {
            assert_eq!(LoanStatus::from(status.as_code()), status);
        }
    }

    #[test]
    fn unknown_code_defaults_to_maintenance() {
        assert_eq!(LoanStatus::from("x"), LoanStatus::Maintenance);
    }
}

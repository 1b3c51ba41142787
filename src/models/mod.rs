//! Data models for the LocalLibrary catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod genre;
pub mod language;
pub mod user;

// Re-export commonly used types
pub use author::Author;
pub use book::{Book, BookShort};
pub use book_instance::{BookInstance, BookInstanceDetails, LoanStatus};
pub use genre::Genre;
pub use language::Language;
pub use user::{CatalogPermission, UserClaims};

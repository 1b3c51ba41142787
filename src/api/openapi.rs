//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, genres, health, languages, loans, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "LocalLibrary API",
        version = "0.1.0",
        description = "Library Catalog REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        books::list_book_instances,
        books::create_book_instance,
        books::delete_book_instance,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Lookups
        genres::list_genres,
        languages::list_languages,
        // Loans
        loans::my_borrowed,
        loans::all_borrowed,
        loans::renewal_proposal,
        loans::renew,
        loans::checkout,
        loans::mark_returned,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::BookShort,
            crate::models::book::BookQuery,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::BookListResponse,
            // Book instances
            crate::models::book_instance::BookInstance,
            crate::models::book_instance::BookInstanceDetails,
            crate::models::book_instance::CreateBookInstance,
            crate::models::book_instance::LoanStatus,
            // Authors
            crate::models::author::Author,
            crate::models::author::AuthorDetails,
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            authors::AuthorQuery,
            authors::AuthorListResponse,
            // Lookups
            crate::models::genre::Genre,
            crate::models::language::Language,
            // Loans
            loans::BorrowedQuery,
            loans::BorrowedListResponse,
            loans::RenewalProposalResponse,
            loans::RenewRequest,
            loans::CheckoutRequest,
            // Permissions
            crate::models::user::CatalogPermission,
            // Stats
            stats::StatsResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Book catalog management"),
        (name = "authors", description = "Author catalog management"),
        (name = "catalog", description = "Genre and language lookups"),
        (name = "loans", description = "Circulation: borrowed copies and renewals"),
        (name = "stats", description = "Catalog statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

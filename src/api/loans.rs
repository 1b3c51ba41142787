//! Circulation endpoints: borrowed-copy lists and the renewal workflow

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{book_instance::BookInstanceDetails, user::CatalogPermission},
};

use super::{pagination, AuthenticatedUser};

/// Borrowed list query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BorrowedQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Paginated borrowed-copy list response
#[derive(Serialize, ToSchema)]
pub struct BorrowedListResponse {
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub loans: Vec<BookInstanceDetails>,
}

/// Renewal proposal: the default and latest acceptable due dates
#[derive(Serialize, ToSchema)]
pub struct RenewalProposalResponse {
    pub instance_id: Uuid,
    /// Proposed due date (today + 3 weeks)
    pub proposed_due_back: NaiveDate,
    /// Latest acceptable due date (today + 4 weeks)
    pub max_due_back: NaiveDate,
}

/// Renew request: the proposed due date
#[derive(Deserialize, ToSchema)]
pub struct RenewRequest {
    pub due_back: NaiveDate,
}

/// Checkout request
#[derive(Deserialize, ToSchema)]
pub struct CheckoutRequest {
    pub borrower_id: i32,
    /// Due date; defaults to today + 3 weeks
    pub due_back: Option<NaiveDate>,
}

/// Copies on loan to the calling user, due_back ascending
#[utoipa::path(
    get,
    path = "/loans/mine",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(BorrowedQuery),
    responses(
        (status = 200, description = "The caller's borrowed copies", body = BorrowedListResponse)
    )
)]
pub async fn my_borrowed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<BorrowedQuery>,
) -> AppResult<Json<BorrowedListResponse>> {
    let (page, per_page) = pagination(query.page, query.per_page);
    let (loans, total) = state
        .services
        .circulation
        .borrowed_by_user(claims.user_id, page, per_page)
        .await?;

    Ok(Json(BorrowedListResponse {
        total,
        page,
        per_page,
        loans,
    }))
}

/// All copies currently on loan to anybody, due_back ascending
#[utoipa::path(
    get,
    path = "/loans/borrowed",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(BorrowedQuery),
    responses(
        (status = 200, description = "All borrowed copies", body = BorrowedListResponse),
        (status = 403, description = "Missing mark_returned permission")
    )
)]
pub async fn all_borrowed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<BorrowedQuery>,
) -> AppResult<Json<BorrowedListResponse>> {
    claims.require(CatalogPermission::MarkReturned)?;

    let (page, per_page) = pagination(query.page, query.per_page);
    let (loans, total) = state
        .services
        .circulation
        .borrowed_all(page, per_page)
        .await?;

    Ok(Json(BorrowedListResponse {
        total,
        page,
        per_page,
        loans,
    }))
}

/// Renewal proposal for a copy
#[utoipa::path(
    get,
    path = "/instances/{id}/renewal",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book instance ID")
    ),
    responses(
        (status = 200, description = "Renewal proposal", body = RenewalProposalResponse),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn renewal_proposal(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<RenewalProposalResponse>> {
    claims.require(CatalogPermission::MarkReturned)?;

    let (proposed_due_back, max_due_back) = state.services.circulation.renewal_proposal(id).await?;

    Ok(Json(RenewalProposalResponse {
        instance_id: id,
        proposed_due_back,
        max_due_back,
    }))
}

/// Renew a copy: set a new due date within the 4-week window
#[utoipa::path(
    post,
    path = "/instances/{id}/renew",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book instance ID")
    ),
    request_body = RenewRequest,
    responses(
        (status = 200, description = "Copy renewed", body = BookInstanceDetails),
        (status = 400, description = "Date in the past or more than 4 weeks ahead"),
        (status = 404, description = "Copy not found")
    )
)]
pub async fn renew(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<RenewRequest>,
) -> AppResult<Json<BookInstanceDetails>> {
    claims.require(CatalogPermission::MarkReturned)?;

    let details = state
        .services
        .circulation
        .renew(id, request.due_back)
        .await?;
    Ok(Json(details))
}

/// Lend a copy to a borrower
#[utoipa::path(
    post,
    path = "/instances/{id}/checkout",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book instance ID")
    ),
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Copy lent", body = BookInstanceDetails),
        (status = 404, description = "Copy not found"),
        (status = 422, description = "Copy is already on loan")
    )
)]
pub async fn checkout(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<CheckoutRequest>,
) -> AppResult<Json<BookInstanceDetails>> {
    claims.require(CatalogPermission::MarkReturned)?;

    let details = state
        .services
        .circulation
        .checkout(id, request.borrower_id, request.due_back)
        .await?;
    Ok(Json(details))
}

/// Mark a copy returned
#[utoipa::path(
    post,
    path = "/instances/{id}/return",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Book instance ID")
    ),
    responses(
        (status = 200, description = "Copy returned", body = BookInstanceDetails),
        (status = 404, description = "Copy not found"),
        (status = 422, description = "Copy is not on loan")
    )
)]
pub async fn mark_returned(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> AppResult<Json<BookInstanceDetails>> {
    claims.require(CatalogPermission::MarkReturned)?;

    let details = state.services.circulation.mark_returned(id).await?;
    Ok(Json(details))
}

//! API handlers for the LocalLibrary REST endpoints

pub mod authors;
pub mod books;
pub mod genres;
pub mod health;
pub mod languages;
pub mod loans;
pub mod openapi;
pub mod stats;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::user::UserClaims, AppState};

/// Default page size for list endpoints
pub const DEFAULT_PER_PAGE: i64 = 10;
/// Upper bound on page size
pub const MAX_PER_PAGE: i64 = 100;

/// Normalize page/per_page query values.
/// The page cap keeps `(page - 1) * per_page` offsets within i64.
pub fn pagination(page: Option<i64>, per_page: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).clamp(1, i64::MAX / MAX_PER_PAGE);
    let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    (page, per_page)
}

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication("Invalid authorization header format".to_string()));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::pagination;

    #[test]
    fn pagination_defaults_to_ten_per_page() {
        assert_eq!(pagination(None, None), (1, 10));
    }

    #[test]
    fn pagination_clamps_out_of_range_values() {
        assert_eq!(pagination(Some(0), Some(0)), (1, 1));
        assert_eq!(pagination(Some(-3), Some(1000)), (1, 100));
        assert_eq!(pagination(Some(4), Some(25)), (4, 25));
    }

    #[test]
    fn pagination_offset_cannot_overflow() {
        let (page, per_page) = pagination(Some(i64::MAX), Some(i64::MAX));
        let offset = (page - 1).checked_mul(per_page).expect("offset overflowed");
        assert!(offset >= 0);
    }
}

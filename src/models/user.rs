//! User claims and catalog permissions.
//!
//! Authentication itself (login, password storage, token issuance) lives in
//! an external identity service; this server only verifies the signed claims
//! and enforces the permission flags they carry.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;

/// Per-entity, per-operation permission flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CatalogPermission {
    AddAuthor,
    ChangeAuthor,
    DeleteAuthor,
    AddBook,
    ChangeBook,
    DeleteBook,
    /// Manage circulation: mark copies returned, renew and issue loans
    MarkReturned,
}

impl CatalogPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogPermission::AddAuthor => "add_author",
            CatalogPermission::ChangeAuthor => "change_author",
            CatalogPermission::DeleteAuthor => "delete_author",
            CatalogPermission::AddBook => "add_book",
            CatalogPermission::ChangeBook => "change_book",
            CatalogPermission::DeleteBook => "delete_book",
            CatalogPermission::MarkReturned => "mark_returned",
        }
    }
}

impl std::fmt::Display for CatalogPermission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// JWT claims carried by API callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    #[serde(default)]
    pub permissions: Vec<CatalogPermission>,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn has(&self, permission: CatalogPermission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Require a specific catalog permission
    pub fn require(&self, permission: CatalogPermission) -> Result<(), AppError> {
        if self.has(permission) {
            Ok(())
        } else {
            Err(AppError::Authorization(format!(
                "Missing permission: {}",
                permission
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(permissions: Vec<CatalogPermission>) -> UserClaims {
        UserClaims {
            sub: "librarian".to_string(),
            user_id: 7,
            permissions,
            exp: 4_000_000_000,
            iat: 0,
        }
    }

    #[test]
    fn token_round_trip_preserves_permissions() {
        let original = claims(vec![
            CatalogPermission::MarkReturned,
            CatalogPermission::AddBook,
        ]);
        let token = original.create_token("test-secret").unwrap();
        let parsed = UserClaims::from_token(&token, "test-secret").unwrap();
        assert_eq!(parsed.user_id, 7);
        assert!(parsed.has(CatalogPermission::MarkReturned));
        assert!(parsed.has(CatalogPermission::AddBook));
        assert!(!parsed.has(CatalogPermission::DeleteAuthor));
    }

    #[test]
    fn token_rejected_with_wrong_secret() {
        let token = claims(vec![]).create_token("secret-a").unwrap();
        assert!(UserClaims::from_token(&token, "secret-b").is_err());
    }

    #[test]
    fn require_fails_without_flag() {
        let c = claims(vec![CatalogPermission::AddAuthor]);
        assert!(c.require(CatalogPermission::AddAuthor).is_ok());
        assert!(c.require(CatalogPermission::DeleteAuthor).is_err());
    }
}

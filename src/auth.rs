use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::{AppConfig, Env},
    error::ApiError,
    repository::RepositoryState,
};

/// Fixed validity window for admin session tokens: 1 day from issuance.
pub const TOKEN_TTL_SECS: i64 = 86_400;

/// Claims
///
/// Payload of the signed session token. Tokens are stateless: there is no
/// server-side session or revocation list, so these claims plus the signature
/// are the entire credential.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the administrator's identifier, used to re-resolve the
    /// admin record on every authenticated request.
    pub sub: Uuid,
    /// Email at issuance time. Informational only; not re-validated.
    pub email: String,
    /// Expiration Time (exp): seconds since epoch after which the token is rejected.
    pub exp: i64,
    /// Issued At (iat): seconds since epoch when the token was signed.
    pub iat: i64,
}

/// issue_token
///
/// Signs a session token for the administrator, valid for exactly one day.
/// Logout never touches the server state; a token stays valid until expiry.
pub fn issue_token(id: Uuid, email: &str, secret: &str) -> Result<String, ApiError> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: id,
        email: email.to_string(),
        exp: iat + TOKEN_TTL_SECS,
        iat,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Server(format!("Failed to sign token: {e}")))
}

/// AuthAdmin
///
/// The resolved identity of an authenticated request: the administrator named
/// by the bearer token, verified to still exist. This is the request-context
/// parameter handlers receive instead of any mutable request-scoped state.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub id: Uuid,
    pub email: String,
}

/// AuthAdmin Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making AuthAdmin usable as a
/// function argument in the gate middleware and in any protected handler.
/// The process:
/// 1. Dependency resolution: Repository and AppConfig from the application state.
/// 2. Local bypass: development-time access via the 'x-admin-id' header.
/// 3. Token validation: Bearer extraction, signature + expiry verification.
/// 4. DB lookup: the admin named by the `sub` claim must still exist.
///
/// Rejection: 401 with a message distinguishing missing, expired, and invalid
/// tokens, and tokens whose administrator no longer exists.
impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
    RepositoryState: FromRef<S>,
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let repo = RepositoryState::from_ref(state);
        let config = AppConfig::from_ref(state);

        // Local Development Bypass Check
        // In Env::Local a known admin id in 'x-admin-id' authenticates the
        // request without a token. The id must still resolve to a stored
        // admin, and the whole path is disabled in production.
        if config.env == Env::Local {
            if let Some(header_value) = parts.headers.get("x-admin-id") {
                if let Ok(id_str) = header_value.to_str() {
                    if let Ok(admin_id) = Uuid::parse_str(id_str) {
                        if let Some(admin) = repo
                            .get_admin(admin_id)
                            .await
                            .map_err(ApiError::db("Server error during authentication"))?
                        {
                            return Ok(AuthAdmin {
                                id: admin.id,
                                email: admin.email,
                            });
                        }
                    }
                }
            }
        }
        // Falls through to standard token validation when the bypass does not apply.

        // Token Extraction
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Auth("Not authorized, token missing".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Auth("Not authorized, token missing".to_string()))?;

        // Signature and expiry verification against the shared secret.
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = match decode::<Claims>(token, &decoding_key, &validation) {
            Ok(data) => data,
            Err(e) => {
                return Err(match e.kind() {
                    // Expired tokens get a distinct message so clients can
                    // tell a stale session from a forged or mangled token.
                    ErrorKind::ExpiredSignature => ApiError::Auth("Token expired".to_string()),
                    _ => ApiError::Auth("Not authorized, invalid token".to_string()),
                });
            }
        };

        // Final verification: the admin may have been removed out-of-band
        // after the token was issued.
        let admin = repo
            .get_admin(token_data.claims.sub)
            .await
            .map_err(ApiError::db("Server error during authentication"))?
            .ok_or_else(|| ApiError::Auth("Not authorized, admin not found".to_string()))?;

        Ok(AuthAdmin {
            id: admin.id,
            email: admin.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_with_one_day_window() {
        let id = Uuid::new_v4();
        let token = issue_token(id, "admin@example.com", "unit-test-secret").unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"unit-test-secret"),
            &Validation::default(),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, id);
        assert_eq!(decoded.claims.email, "admin@example.com");
        assert_eq!(decoded.claims.exp - decoded.claims.iat, TOKEN_TTL_SECS);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), "admin@example.com", "secret-one").unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"secret-two"),
            &Validation::default(),
        );

        assert!(result.is_err());
    }
}

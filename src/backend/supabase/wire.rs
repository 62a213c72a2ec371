//! Request targets and response parsing for PostgREST and GoTrue.
//!
//! Kept free of any HTTP client so it can be checked natively.
use crate::config::SupabaseConfig;
use crate::error::{AuthError, StoreError};
use crate::models::session::{Session, SessionUser};
use serde::Deserialize;

pub const REVIEWS_TABLE: &str = "client_reviews";
pub const DEFAULT_INVALID_LOGIN: &str = "Invalid login credentials";

pub fn list_reviews_url(config: &SupabaseConfig) -> String {
    format!("{}?select=*&order=created_at.desc", config.rest_url(REVIEWS_TABLE))
}

pub fn insert_review_url(config: &SupabaseConfig) -> String {
    config.rest_url(REVIEWS_TABLE)
}

/// Row filter `id=eq.<id>` shared by update and delete.
pub fn review_by_id_url(config: &SupabaseConfig, id: &str) -> String {
    format!("{}?id=eq.{}", config.rest_url(REVIEWS_TABLE), urlencoding::encode(id))
}

pub fn password_grant_url(config: &SupabaseConfig) -> String {
    config.auth_url("token?grant_type=password")
}

pub fn refresh_grant_url(config: &SupabaseConfig) -> String {
    config.auth_url("token?grant_type=refresh_token")
}

pub fn logout_url(config: &SupabaseConfig) -> String {
    config.auth_url("logout")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    fn first_message(self) -> Option<String> {
        [self.msg, self.error_description, self.message, self.error]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

pub fn store_error(status: u16, body: &str) -> StoreError {
    let message = ErrorBody::parse(body)
        .first_message()
        .unwrap_or_else(|| body.trim().to_string());
    StoreError::Status { status, message }
}

pub fn auth_error(status: u16, body: &str) -> AuthError {
    let message = ErrorBody::parse(body).first_message();
    match status {
        400 | 401 | 422 => {
            AuthError::InvalidCredentials(message.unwrap_or_else(|| DEFAULT_INVALID_LOGIN.to_string()))
        }
        _ => AuthError::Status {
            status,
            message: message.unwrap_or_else(|| body.trim().to_string()),
        },
    }
}

/// Body of a successful token grant.
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl TokenResponse {
    pub fn into_session(self, now_unix: i64) -> Session {
        let expires_at = self
            .expires_at
            .or_else(|| self.expires_in.map(|secs| now_unix + secs));
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// What a stored session is good for at a given moment.
#[derive(Debug, PartialEq, Eq)]
pub enum StoredSession {
    Absent,
    Live(Session),
    Stale { refresh_token: Option<String> },
}

pub fn classify_session(stored: Option<Session>, now_unix: i64) -> StoredSession {
    match stored {
        None => StoredSession::Absent,
        Some(session) if session.is_expired(now_unix) => StoredSession::Stale {
            refresh_token: session.refresh_token,
        },
        Some(session) => StoredSession::Live(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SupabaseConfig {
        SupabaseConfig::new("https://abcd.supabase.co", "anon-key")
    }

    #[test]
    fn list_orders_newest_first() {
        assert_eq!(
            list_reviews_url(&config()),
            "https://abcd.supabase.co/rest/v1/client_reviews?select=*&order=created_at.desc"
        );
    }

    #[test]
    fn row_filter_encodes_id() {
        assert_eq!(
            review_by_id_url(&config(), "a b&c"),
            "https://abcd.supabase.co/rest/v1/client_reviews?id=eq.a%20b%26c"
        );
    }

    #[test]
    fn postgrest_message_is_used() {
        let err = store_error(
            401,
            r#"{"code":"42501","details":null,"hint":null,"message":"permission denied for table client_reviews"}"#,
        );
        assert_eq!(
            err,
            StoreError::Status {
                status: 401,
                message: "permission denied for table client_reviews".into()
            }
        );
    }

    #[test]
    fn non_json_store_body_is_kept_verbatim() {
        assert_eq!(
            store_error(502, " Bad Gateway\n"),
            StoreError::Status { status: 502, message: "Bad Gateway".into() }
        );
    }

    #[test]
    fn bad_password_maps_to_invalid_credentials() {
        let legacy = auth_error(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#);
        assert_eq!(legacy, AuthError::InvalidCredentials("Invalid login credentials".into()));

        let current = auth_error(400, r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#);
        assert_eq!(current, AuthError::InvalidCredentials("Invalid login credentials".into()));

        let empty = auth_error(400, "");
        assert_eq!(empty, AuthError::InvalidCredentials(DEFAULT_INVALID_LOGIN.into()));
    }

    #[test]
    fn server_failures_are_not_credential_errors() {
        let err = auth_error(500, r#"{"message":"Database error"}"#);
        assert_eq!(err, AuthError::Status { status: 500, message: "Database error".into() });
    }

    fn session(expires_at: Option<i64>, refresh_token: Option<&str>) -> Session {
        Session {
            access_token: "jwt".into(),
            refresh_token: refresh_token.map(str::to_string),
            expires_at,
            user: SessionUser { id: "u-1".into(), email: None },
        }
    }

    #[test]
    fn expired_session_is_never_live() {
        assert_eq!(classify_session(None, 100), StoredSession::Absent);
        assert_eq!(
            classify_session(Some(session(Some(200), None)), 100),
            StoredSession::Live(session(Some(200), None))
        );
        assert_eq!(
            classify_session(Some(session(Some(100), Some("refresh"))), 100),
            StoredSession::Stale { refresh_token: Some("refresh".into()) }
        );
        assert_eq!(
            classify_session(Some(session(Some(50), None)), 100),
            StoredSession::Stale { refresh_token: None }
        );
        // No expiry from the service means it stays usable.
        assert_eq!(
            classify_session(Some(session(None, None)), 100),
            StoredSession::Live(session(None, None))
        );
    }

    #[test]
    fn token_expiry_is_derived_from_expires_in() {
        let body = r#"{
            "access_token": "jwt",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": {"id": "u-1", "email": "admin@example.com", "role": "authenticated"}
        }"#;
        let token: TokenResponse = serde_json::from_str(body).unwrap();
        let session = token.into_session(1_000);
        assert_eq!(session.expires_at, Some(4_600));
        assert_eq!(session.refresh_token.as_deref(), Some("refresh"));
        assert!(!session.is_expired(4_599));
        assert!(session.is_expired(4_600));
    }
}

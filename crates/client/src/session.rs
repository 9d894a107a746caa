//! Session handling
//!
//! The bearer token is decoded, never verified: the backend is the only
//! party that checks signatures. Decoding gives us the greeting name and the
//! expiry used by the guard.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::Deserialize;

use rentdesk_core::{Error, Result};

/// Claims read from the token payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    /// Expiry, seconds since the epoch
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
}

// The guard checks expiry itself so an expired token still decodes
fn decode_only() -> Validation {
    let mut validation = Validation::default();
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    validation
}

/// An authenticated session, passed explicitly to API clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
    claims: SessionClaims,
}

impl Session {
    /// Decode a bearer token into a session
    pub fn from_token(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        let token = token.trim().to_string();
        let key = DecodingKey::from_secret(&[]);
        let claims = decode::<SessionClaims>(&token, &key, &decode_only())
            .map(|decoded| decoded.claims)
            .map_err(|e| Error::Unauthenticated(format!("Invalid token: {}", e)))?;
        Ok(Self { token, claims })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &SessionClaims {
        &self.claims
    }

    /// Name shown in the greeting
    pub fn display_name(&self) -> &str {
        self.claims.username.as_deref().unwrap_or("User")
    }

    /// Tokens without `exp` never expire on the client side
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.claims.exp.is_some_and(|exp| exp <= now.timestamp())
    }

    /// Decide whether a stored token grants access.
    pub fn guard(token: Option<&str>, now: DateTime<Utc>) -> GuardDecision {
        let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
            return GuardDecision::RequireLogin {
                reason: "Not logged in".into(),
            };
        };
        match Session::from_token(token) {
            Ok(session) if session.is_expired_at(now) => GuardDecision::RequireLogin {
                reason: "Session expired".into(),
            },
            Ok(session) => GuardDecision::Authenticated(session),
            Err(e) => GuardDecision::RequireLogin {
                reason: e.to_string(),
            },
        }
    }
}

/// Outcome of the session guard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Authenticated(Session),
    /// The caller should discard any stored token and send the user to login
    RequireLogin { reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    // Signed with a throwaway key; signatures are never checked here
    fn token_with_claims(claims: serde_json::Value) -> String {
        encode(&Header::default(), &claims, &EncodingKey::from_secret(b"other-secret")).unwrap()
    }

    #[test]
    fn test_decodes_username_and_expiry() {
        let token = token_with_claims(json!({"username": "manager", "exp": 2_000_000_000}));
        let session = Session::from_token(token).unwrap();
        assert_eq!(session.display_name(), "manager");
        assert_eq!(session.claims().exp, Some(2_000_000_000));
    }

    #[test]
    fn test_missing_username_greets_generic_user() {
        let session = Session::from_token(token_with_claims(json!({"sub": "42"}))).unwrap();
        assert_eq!(session.display_name(), "User");
        assert!(!session.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        assert!(Session::from_token("not-a-jwt").is_err());
        assert!(Session::from_token("a.!!!.c").is_err());
        assert!(Session::from_token("a..c").is_err());
    }

    #[test]
    fn test_guard_requires_login_without_token() {
        assert!(matches!(
            Session::guard(None, Utc::now()),
            GuardDecision::RequireLogin { .. }
        ));
        assert!(matches!(
            Session::guard(Some("  "), Utc::now()),
            GuardDecision::RequireLogin { .. }
        ));
    }

    #[test]
    fn test_guard_rejects_expired_token() {
        let now = Utc::now();
        let token = token_with_claims(json!({
            "username": "m",
            "exp": (now - Duration::minutes(1)).timestamp(),
        }));
        assert_eq!(
            Session::guard(Some(&token), now),
            GuardDecision::RequireLogin {
                reason: "Session expired".into()
            }
        );
    }

    #[test]
    fn test_guard_accepts_live_token() {
        let now = Utc::now();
        let token = token_with_claims(json!({
            "username": "m",
            "exp": (now + Duration::hours(1)).timestamp(),
        }));
        match Session::guard(Some(&token), now) {
            GuardDecision::Authenticated(session) => assert_eq!(session.token(), token),
            other => panic!("unexpected decision: {:?}", other),
        }
    }
}

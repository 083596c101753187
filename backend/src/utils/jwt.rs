//! HS256 access tokens shared with the identity service.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const ADMIN_ROLE: &str = "admin";
const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

impl Claims {
    pub fn new(user_id: String, username: String, role: String, expiration_hours: i64) -> Self {
        let issued_at = Utc::now();
        let lifetime = Duration::hours(expiration_hours);
        Self {
            sub: user_id,
            username,
            display_name: None,
            role,
            exp: (issued_at + lifetime).timestamp(),
            iat: issued_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(ADMIN_ROLE)
    }
}

/// Signs `claims`. Production tokens come from the identity service; this
/// exists for local tooling and tests.
pub fn create_access_token(claims: &Claims, secret: &str) -> anyhow::Result<String> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::new(ALGORITHM), claims, &key)?)
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let data = decode::<Claims>(token, &key, &Validation::new(ALGORITHM))?;
    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_token_keeps_identity_and_role() {
        let mut claims = Claims::new("user-123".into(), "bob".into(), "admin".into(), 1);
        claims.display_name = Some("Bob Example".into());
        let token = create_access_token(&claims, "secret").expect("create token");
        let verified = verify_access_token(&token, "secret").expect("verify token");
        assert_eq!(verified.sub, "user-123");
        assert_eq!(verified.display_name.as_deref(), Some("Bob Example"));
        assert!(verified.is_admin());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let claims = Claims::new("user-1".into(), "eve".into(), "admin".into(), 1);
        let token = create_access_token(&claims, "secret").expect("create token");
        assert!(verify_access_token(&token, "other-secret").is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = Claims::new("user-1".into(), "old".into(), "admin".into(), 1);
        claims.iat -= 7200;
        claims.exp = claims.iat + 60;
        let token = create_access_token(&claims, "secret").expect("create token");
        assert!(verify_access_token(&token, "secret").is_err());
    }

    #[test]
    fn tokens_signed_with_another_algorithm_are_rejected() {
        let claims = Claims::new("user-1".into(), "mallory".into(), "admin".into(), 1);
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .expect("encode");
        assert!(verify_access_token(&token, "secret").is_err());
    }

    #[test]
    fn admin_role_ignores_case() {
        assert!(Claims::new("u".into(), "u".into(), "ADMIN".into(), 1).is_admin());
        assert!(!Claims::new("u".into(), "u".into(), "editor".into(), 1).is_admin());
    }
}

//! The authenticated caller, as described by verified access token claims.

use serde::{Deserialize, Serialize};

use crate::utils::jwt::Claims;

/// Request extension inserted by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.eq_ignore_ascii_case(crate::utils::jwt::ADMIN_ROLE)
    }
}

impl From<&Claims> for CurrentUser {
    fn from(claims: &Claims) -> Self {
        let display_name = claims
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&claims.username)
            .to_string();
        Self {
            id: claims.sub.clone(),
            username: claims.username.clone(),
            display_name,
            role: claims.role.to_ascii_lowercase(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
    pub is_admin: bool,
}

impl From<CurrentUser> for UserResponse {
    fn from(user: CurrentUser) -> Self {
        let is_admin = user.is_admin();
        Self {
            id: user.id,
            username: user.username,
            display_name: user.display_name,
            role: user.role,
            is_admin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_username() {
        let mut claims = Claims::new("u1".into(), "alice".into(), "Admin".into(), 1);
        claims.display_name = Some("   ".into());
        let user = CurrentUser::from(&claims);
        assert_eq!(user.display_name, "alice");
        assert_eq!(user.role, "admin");

        claims.display_name = Some("Alice Example".into());
        assert_eq!(CurrentUser::from(&claims).display_name, "Alice Example");
    }

    #[test]
    fn response_reports_admin_flag() {
        let claims = Claims::new("u1".into(), "alice".into(), "admin".into(), 1);
        let response = UserResponse::from(CurrentUser::from(&claims));
        assert!(response.is_admin);

        let claims = Claims::new("u2".into(), "bob".into(), "editor".into(), 1);
        let response = UserResponse::from(CurrentUser::from(&claims));
        assert!(!response.is_admin);
    }
}

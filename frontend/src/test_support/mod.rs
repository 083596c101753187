pub mod ssr;

pub mod helpers {
    use crate::api::UserResponse;

    pub fn admin_user() -> UserResponse {
        UserResponse {
            id: "u-admin".into(),
            username: "admin".into(),
            display_name: "Admin User".into(),
            role: "admin".into(),
            is_admin: true,
        }
    }

    pub fn regular_user() -> UserResponse {
        UserResponse {
            id: "u-regular".into(),
            username: "member".into(),
            display_name: "Regular User".into(),
            role: "member".into(),
            is_admin: false,
        }
    }
}

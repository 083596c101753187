use crate::{components::guard::RequireAdmin, state::auth::AuthContext};
use leptos::*;

pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::SiteConfigPanel;

#[component]
pub fn AdminSiteConfigPage(auth: AuthContext) -> impl IntoView {
    view! { <RequireAdmin auth=auth.state><SiteConfigPanel /></RequireAdmin> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, regular_user};
    use crate::test_support::ssr::{auth_context, render_to_string};

    fn render_page(state: AuthState) -> String {
        render_to_string(move || {
            let auth = auth_context(state);
            view! { <AdminSiteConfigPage auth=auth /> }
        })
    }

    #[test]
    fn admin_sees_panel() {
        let html = render_page(AuthState::resolved(Some(admin_user())));
        assert!(html.contains("Site configuration"));
    }

    #[test]
    fn regular_user_gets_nothing() {
        let html = render_page(AuthState::resolved(Some(regular_user())));
        assert!(!html.contains("max-w-2xl"));
    }
}

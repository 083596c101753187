use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::AUTH_ROUTE,
    pages::{AdminPricesPage, AdminSiteConfigPage, AuthPage, HomePage},
    state::auth::{create_auth_context, AuthProvider},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/auth", "/admin/prices", "/admin/site-config"];

/// Routes wrapped in the admin gate.
pub const GATED_ROUTE_PATHS: &[&str] = &["/admin/prices", "/admin/site-config"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/auth"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let api = ApiClient::new();
    provide_context(api.clone());
    let auth = create_auth_context(api);

    view! {
        <AuthProvider auth=auth>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path=AUTH_ROUTE view=move || view! { <AuthPage auth=auth/> }/>
                    <Route path="/admin/prices" view=move || view! { <AdminPricesPage auth=auth/> }/>
                    <Route
                        path="/admin/site-config"
                        view=move || view! { <AdminSiteConfigPage auth=auth/> }
                    />
                </Routes>
            </Router>
        </AuthProvider>
    }
}

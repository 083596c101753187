use crate::{components::guard::RequireAdmin, state::auth::AuthContext};
use leptos::*;

pub mod panel;
pub mod repository;
pub mod utils;
pub mod view_model;

pub use panel::PricesPanel;

#[component]
pub fn AdminPricesPage(auth: AuthContext) -> impl IntoView {
    view! { <RequireAdmin auth=auth.state><PricesPanel /></RequireAdmin> }
}

use crate::{components::guard::is_admin_user, state::auth::use_auth};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let user_label = move || {
        auth.and_then(|ctx| ctx.state.get().user.map(|user| user.label().to_string()))
    };
    let can_access_admin = move || {
        auth.map(|ctx| ctx.state.with(|state| is_admin_user(state.user.as_ref())))
            .unwrap_or(false)
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href="/" class="text-xl font-semibold text-fg">"Store Admin"</a>
                    <nav class="flex items-center space-x-4">
                        <Show when=can_access_admin>
                            <a href="/admin/prices" class=NAV_LINK_CLASS>"Prices"</a>
                            <a href="/admin/site-config" class=NAV_LINK_CLASS>"Site configuration"</a>
                        </Show>
                        {move || {
                            user_label()
                                .map(|label| {
                                    view! { <span class="text-sm text-fg-muted">{label}</span> }
                                        .into_view()
                                })
                                .unwrap_or_else(|| {
                                    view! { <a href="/auth" class=NAV_LINK_CLASS>"Sign in"</a> }
                                        .into_view()
                                })
                        }}
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

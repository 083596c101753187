use crate::{
    api::ApiClient,
    components::{guard::is_admin_user, layout::*},
    config,
    state::auth::{AuthContext, AuthState},
};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionSummary {
    Checking,
    SignedOut,
    NotAdmin(String),
    Admin(String),
}

pub fn summarize_session(state: &AuthState) -> SessionSummary {
    if state.loading {
        return SessionSummary::Checking;
    }
    match state.user.as_ref() {
        None => SessionSummary::SignedOut,
        Some(user) if is_admin_user(Some(user)) => SessionSummary::Admin(user.label().to_string()),
        Some(user) => SessionSummary::NotAdmin(user.label().to_string()),
    }
}

#[component]
pub fn AuthPage(auth: AuthContext) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let portal = create_local_resource(|| (), |_| async { config::runtime_config().await.auth_portal_url });
    let summary = create_memo(move |_| auth.state.with(summarize_session));

    let check_again = move |_| {
        log::debug!("re-checking session");
        auth.refresh(api.clone());
    };

    view! {
        <Layout>
            <div class="bg-surface-elevated shadow rounded-lg p-6 max-w-xl mx-auto space-y-4">
                <h2 class="text-lg font-medium text-fg">"Sign-in required"</h2>
                {move || match summary.get() {
                    SessionSummary::Checking => view! { <LoadingSpinner /> }.into_view(),
                    SessionSummary::SignedOut => view! {
                        <p class="text-sm text-fg-muted">
                            "Administrator pages need an active session from the identity service."
                        </p>
                    }
                    .into_view(),
                    SessionSummary::NotAdmin(label) => view! {
                        <ErrorMessage message=format!(
                            "Signed in as {}, but this account is not an administrator.",
                            label
                        ) />
                    }
                    .into_view(),
                    SessionSummary::Admin(label) => view! {
                        <SuccessMessage message=format!("Signed in as {}.", label) />
                        <a href="/admin/prices" class="text-action-primary-bg underline">
                            "Continue to prices"
                        </a>
                    }
                    .into_view(),
                }}
                <div class="flex items-center gap-3">
                    {move || {
                        portal
                            .get()
                            .flatten()
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        class="px-4 py-2 bg-action-primary-bg text-action-primary-text rounded"
                                    >
                                        "Sign in"
                                    </a>
                                }
                            })
                    }}
                    <button
                        class="px-4 py-2 border border-border rounded text-fg disabled:opacity-50"
                        disabled=move || summary.get() == SessionSummary::Checking
                        on:click=check_again
                    >
                        "Check again"
                    </button>
                </div>
            </div>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};

    #[test]
    fn summary_tracks_auth_state() {
        assert_eq!(summarize_session(&AuthState::pending()), SessionSummary::Checking);
        assert_eq!(
            summarize_session(&AuthState::resolved(None)),
            SessionSummary::SignedOut
        );
        assert_eq!(
            summarize_session(&AuthState::resolved(Some(regular_user()))),
            SessionSummary::NotAdmin("Regular User".into())
        );
        assert_eq!(
            summarize_session(&AuthState::resolved(Some(admin_user()))),
            SessionSummary::Admin("Admin User".into())
        );
    }
}

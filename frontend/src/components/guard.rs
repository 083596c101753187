use crate::{api::UserResponse, components::layout::LoadingSpinner, state::auth::AuthState};
use leptos::*;
use leptos_router::{use_navigate, NavigateOptions, RouterContext};

/// Where signed-out and non-admin visitors are sent.
pub const AUTH_ROUTE: &str = "/auth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Loading,
    Redirect(&'static str),
    Render,
}

pub fn is_admin_user(user: Option<&UserResponse>) -> bool {
    user.is_some_and(|u| u.is_admin)
}

/// Decides what an admin-only page shows for the given auth state.
///
/// Loading wins over everything else: a stale or missing `user` is never
/// acted on until the provider has finished its check.
pub fn evaluate_admin_gate(state: &AuthState) -> GateOutcome {
    if state.loading {
        GateOutcome::Loading
    } else if !is_admin_user(state.user.as_ref()) {
        GateOutcome::Redirect(AUTH_ROUTE)
    } else {
        GateOutcome::Render
    }
}

/// Re-evaluates the gate whenever the provider pushes a new state.
pub fn create_gate_memo(auth: ReadSignal<AuthState>) -> Memo<GateOutcome> {
    create_memo(move |_| auth.with(evaluate_admin_gate))
}

#[component]
pub fn RequireAdmin(
    auth: ReadSignal<AuthState>,
    /// Overrides how redirects are performed (defaults to the router).
    #[prop(optional)]
    on_redirect: Option<Callback<&'static str>>,
    children: ChildrenFn,
) -> impl IntoView {
    let outcome = create_gate_memo(auth);
    let navigate = use_context::<RouterContext>().map(|_| use_navigate());

    create_effect(move |_| {
        perform_redirect(outcome.get(), on_redirect, navigate.as_ref());
    });

    move || match outcome.get() {
        GateOutcome::Loading => view! { <LoadingSpinner /> }.into_view(),
        GateOutcome::Redirect(_) => ().into_view(),
        GateOutcome::Render => children().into_view(),
    }
}

/// Carries out a `Redirect` outcome: the callback wins, then the router, then
/// a full page load. Returns the target when a redirect was issued.
pub fn perform_redirect<N>(
    outcome: GateOutcome,
    on_redirect: Option<Callback<&'static str>>,
    navigate: Option<&N>,
) -> Option<&'static str>
where
    N: Fn(&str, NavigateOptions),
{
    let GateOutcome::Redirect(target) = outcome else {
        return None;
    };
    log::debug!("admin gate redirecting to {}", target);
    match (on_redirect, navigate) {
        (Some(callback), _) => callback.call(target),
        (None, Some(navigate)) => navigate(target, NavigateOptions::default()),
        (None, None) => hard_redirect(target),
    }
    Some(target)
}

#[cfg(target_arch = "wasm32")]
fn hard_redirect(target: &str) {
    let Some(win) = web_sys::window() else {
        log::warn!("no window; cannot redirect to {}", target);
        return;
    };
    if let Err(err) = win.location().set_href(target) {
        log::warn!("redirect to {} failed: {:?}", target, err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn hard_redirect(target: &str) {
    log::warn!("no router mounted; cannot redirect to {}", target);
}

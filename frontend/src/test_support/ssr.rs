use crate::state::auth::{AuthContext, AuthState};
use leptos::*;

/// Runs `f` inside a fresh reactive runtime and disposes it afterwards.
pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Creates auth signals holding `state`; call inside a runtime.
pub fn auth_context(state: AuthState) -> AuthContext {
    let (read, write) = create_signal(state);
    AuthContext::from_signal(read, write)
}

/// Server-renders a view with resource loading suppressed.
#[cfg(not(target_arch = "wasm32"))]
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

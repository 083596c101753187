use crate::api::{ApiClient, ApiError, UserResponse};
use leptos::*;

/// Authentication status as observed by the UI. While `loading` is set the
/// `user` field is not authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    pub loading: bool,
}

impl AuthState {
    pub fn pending() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    pub fn resolved(user: Option<UserResponse>) -> Self {
        Self {
            user,
            loading: false,
        }
    }
}

/// Where the session check gets the current user from.
#[allow(async_fn_in_trait)]
pub trait AuthSource {
    async fn current_user(&self) -> Result<UserResponse, ApiError>;
}

impl AuthSource for ApiClient {
    async fn current_user(&self) -> Result<UserResponse, ApiError> {
        self.get_me().await
    }
}

/// Read/write handles to the auth signal. Pages receive this explicitly from
/// the router; only the provider writes to it.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn pending() -> Self {
        let (state, set_state) = create_signal(AuthState::pending());
        Self { state, set_state }
    }

    pub fn from_signal(state: ReadSignal<AuthState>, set_state: WriteSignal<AuthState>) -> Self {
        Self { state, set_state }
    }

    /// Re-runs the session check in the background.
    pub fn refresh<S>(&self, source: S)
    where
        S: AuthSource + 'static,
    {
        let set_state = self.set_state;
        spawn_local(async move {
            refresh_auth(&source, set_state).await;
        });
    }
}

/// Marks the state as loading, asks `source` for the current user, and
/// resolves. Failures resolve to the signed-out state instead of surfacing
/// to the gate.
pub async fn refresh_auth<S: AuthSource>(source: &S, set_state: WriteSignal<AuthState>) {
    set_state.update(|state| state.loading = true);

    let user = match source.current_user().await {
        Ok(user) => Some(user),
        Err(err) if err.is_unauthorized() => {
            log::debug!("no active session");
            None
        }
        Err(err) => {
            log::warn!("session check failed: {} ({})", err, err.code);
            None
        }
    };

    set_state.set(AuthState::resolved(user));
}

pub fn create_auth_context<S>(source: S) -> AuthContext
where
    S: AuthSource + 'static,
{
    let ctx = AuthContext::pending();
    ctx.refresh(source);
    ctx
}

#[component]
pub fn AuthProvider(auth: AuthContext, children: Children) -> impl IntoView {
    provide_context::<AuthContext>(auth);
    view! { <>{children()}</> }
}

/// Tree-wide access for presentational components (header, nav). Gates take
/// the signal as a prop instead.
pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}

use axum::{
    http::{header, HeaderValue, Method},
    middleware as axum_middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, handlers, middleware as auth_middleware, state::AppState};

const CORS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let public_routes = Router::new().route("/api/health", get(handlers::health::health));

    let user_routes = Router::new()
        .route("/api/auth/me", get(handlers::auth::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::auth,
        ));

    let admin_routes = Router::new()
        .route(
            "/api/admin/prices",
            get(handlers::admin::list_prices).post(handlers::admin::create_price),
        )
        .route(
            "/api/admin/site-config",
            get(handlers::admin::get_site_config).put(handlers::admin::update_site_config),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::auth_admin,
        ));

    let cors = cors_layer(&state.config)?;

    Ok(Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state))
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .max_age(CORS_MAX_AGE);

    // Cookie credentials need an explicit origin.
    match &config.cors_allow_origin {
        Some(origin) => Ok(base
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
            .allow_credentials(true)),
        None => Ok(base.allow_origin(Any).allow_headers(Any)),
    }
}

//! Database-backed handler tests. Run with a Postgres `DATABASE_URL` and
//! `cargo test -- --ignored`.

use axum::{extract::State, http::StatusCode, Extension, Json};
use sqlx::PgPool;
use storeadmin_backend::{
    error::AppError,
    handlers::admin,
    models::{price::CreatePricePayload, site_config::UpdateSiteConfigPayload},
};

mod support;
use support::{admin_user, state_with_pool};

fn price_payload(sku: &str) -> CreatePricePayload {
    CreatePricePayload {
        sku: sku.into(),
        name: "Green tea".into(),
        amount_cents: 450,
        currency: "eur".into(),
        active: true,
    }
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn create_price_then_list_returns_it(pool: PgPool) {
    let state = state_with_pool(pool);

    let (status, Json(created)) = admin::create_price(
        State(state.clone()),
        Extension(admin_user()),
        Json(price_payload(" TEA-01 ")),
    )
    .await
    .expect("create price");
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created.sku, "TEA-01");
    assert_eq!(created.currency, "EUR");

    let Json(prices) = admin::list_prices(State(state)).await.expect("list prices");
    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].id, created.id);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn duplicate_sku_is_a_conflict(pool: PgPool) {
    let state = state_with_pool(pool);
    admin::create_price(
        State(state.clone()),
        Extension(admin_user()),
        Json(price_payload("TEA-01")),
    )
    .await
    .expect("first insert");

    let err = admin::create_price(
        State(state),
        Extension(admin_user()),
        Json(price_payload("TEA-01")),
    )
    .await
    .expect_err("duplicate sku");
    assert!(matches!(err, AppError::Conflict(_)));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn invalid_price_is_rejected_before_insert(pool: PgPool) {
    let state = state_with_pool(pool);
    let mut payload = price_payload("bad sku");
    payload.amount_cents = -5;

    let err = admin::create_price(State(state.clone()), Extension(admin_user()), Json(payload))
        .await
        .expect_err("validation");
    assert!(matches!(err, AppError::Validation(_)));

    let Json(prices) = admin::list_prices(State(state)).await.expect("list prices");
    assert!(prices.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires a Postgres DATABASE_URL"]
async fn site_config_is_seeded_and_updatable(pool: PgPool) {
    let state = state_with_pool(pool);

    let Json(seeded) = admin::get_site_config(State(state.clone()))
        .await
        .expect("seeded config");
    assert_eq!(seeded.default_currency, "USD");

    let Json(updated) = admin::update_site_config(
        State(state.clone()),
        Extension(admin_user()),
        Json(UpdateSiteConfigPayload {
            site_name: " Corner Shop ".into(),
            support_email: "help@corner.shop".into(),
            default_currency: "jpy".into(),
            maintenance_mode: true,
        }),
    )
    .await
    .expect("update");
    assert_eq!(updated.site_name, "Corner Shop");
    assert_eq!(updated.default_currency, "JPY");
    assert!(updated.maintenance_mode);

    let Json(reloaded) = admin::get_site_config(State(state)).await.expect("reload");
    assert_eq!(reloaded.site_name, "Corner Shop");
}

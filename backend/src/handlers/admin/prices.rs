use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        price::{CreatePricePayload, Price, PriceResponse},
        user::CurrentUser,
    },
    repositories::PriceRepository,
    state::AppState,
};

pub async fn list_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceResponse>>, AppError> {
    let prices = PriceRepository::new().find_all(&state.pool).await?;
    Ok(Json(prices.into_iter().map(PriceResponse::from).collect()))
}

pub async fn create_price(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreatePricePayload>,
) -> Result<(StatusCode, Json<PriceResponse>), AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let created = PriceRepository::new()
        .create(&state.pool, &Price::new(payload))
        .await?;
    tracing::info!(
        price_id = %created.id,
        sku = %created.sku,
        actor = %user.id,
        "price created"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

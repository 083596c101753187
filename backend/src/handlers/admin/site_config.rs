use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        site_config::{SiteConfig, UpdateSiteConfigPayload},
        user::CurrentUser,
    },
    repositories::SiteConfigRepository,
    state::AppState,
};

pub async fn get_site_config(State(state): State<AppState>) -> Result<Json<SiteConfig>, AppError> {
    let config = SiteConfigRepository::new().get(&state.pool).await?;
    Ok(Json(config))
}

pub async fn update_site_config(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<UpdateSiteConfigPayload>,
) -> Result<Json<SiteConfig>, AppError> {
    let payload = payload.normalized();
    payload.validate()?;

    let updated = SiteConfigRepository::new()
        .update(&state.pool, &payload)
        .await?;
    tracing::info!(
        actor = %user.id,
        maintenance_mode = updated.maintenance_mode,
        "site configuration updated"
    );

    Ok(Json(updated))
}

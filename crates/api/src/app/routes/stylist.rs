use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use storefront_stylist::{suggest_outfits, StylistError};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Ask the configured advisor for outfit ideas over the current catalog.
///
/// The advisor call blocks, so it runs on the blocking pool.
pub async fn suggest(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::StyleRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let Some(advisor) = services.advisor() else {
        return errors::stylist_error_to_response(StylistError::Unavailable(
            "no style advisor configured".to_string(),
        ));
    };

    let catalog = match services.catalog().list() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let joined = tokio::task::spawn_blocking(move || {
        suggest_outfits(advisor.as_ref(), &body.user_preferences, &catalog)
    })
    .await;

    match joined {
        Ok(Ok(reply)) => Json(reply).into_response(),
        Ok(Err(e)) => errors::stylist_error_to_response(e),
        Err(e) => errors::json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            format!("suggestion task failed: {e}"),
        ),
    }
}

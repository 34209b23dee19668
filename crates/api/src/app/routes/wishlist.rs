use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
    Json, Router,
};
use serde_json::json;

use storefront_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_wishlist))
        .route("/:id", put(add_to_wishlist).delete(remove_from_wishlist))
}

pub async fn list_wishlist(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    let catalog = match services.catalog().list() {
        Ok(c) => c,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let wishlist = services.wishlist();
    let ids: Vec<ProductId> = wishlist.ids().to_vec();
    let items = wishlist.resolve(&catalog);

    Json(json!({
        "ids": ids,
        "items": items,
    }))
    .into_response()
}

/// Only products currently in the catalog can be wishlisted.
pub async fn add_to_wishlist(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_product_id(&id) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    if let Err(e) = services.catalog().get(id) {
        return errors::domain_error_to_response(e);
    }

    match mutate(services, move |s| s.wishlist().add(id)).await {
        Ok(added) => Json(json!({ "id": id, "added": added })).into_response(),
        Err(response) => response,
    }
}

pub async fn remove_from_wishlist(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match dto::parse_product_id(&id) {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match mutate(services, move |s| s.wishlist().remove(id)).await {
        Ok(removed) => Json(json!({ "id": id, "removed": removed })).into_response(),
        Err(response) => response,
    }
}

/// Wishlist mutations write through to storage, so they run on the blocking pool.
async fn mutate<F>(services: Arc<AppServices>, f: F) -> Result<bool, axum::response::Response>
where
    F: FnOnce(&AppServices) -> bool + Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&services))
        .await
        .map_err(|e| {
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                format!("wishlist task failed: {e}"),
            )
        })
}

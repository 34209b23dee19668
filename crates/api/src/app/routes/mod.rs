use axum::{routing::post, Router};

pub mod products;
pub mod stylist;
pub mod system;
pub mod wishlist;

pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/wishlist", wishlist::router())
        .route("/style-suggestions", post(stylist::suggest))
}

//! HTTP surface.
//!
//! Registration order is matching order: inside the `/api` scope the literal
//! `/brands/search` route is registered before the `/brands/{tail}` lookup so
//! it is never captured as a brand name, and the lookup takes whatever
//! remains under `/brands/`. Anything left over falls through to
//! [`not_found`]. Method guards sit on the resources, so a non-GET request
//! falls through as well.

pub mod api;
pub mod root;

use {
    crate::error::ApiError,
    actix_web::{web, HttpResponse},
};

pub use self::api::service as api;

/// Registers every route plus the JSON fallbacks.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(root::index)
        .service(root::health)
        .service(api())
        .default_service(web::route().to(not_found));
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound)
}

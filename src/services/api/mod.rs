pub mod brands;
pub mod count;

use actix_web::{dev::HttpServiceFactory, web};

/// `/api` routes, most specific first.
pub fn service() -> impl HttpServiceFactory + 'static {
    web::scope("/api")
        .service(brands::list)
        .service(brands::search)
        .service(brands::by_name)
        .service(count::count)
}

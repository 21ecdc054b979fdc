use {
    crate::{catalog::CatalogState, error::ApiError},
    actix_web::{get, web, HttpResponse},
};

#[get("/count")]
pub async fn count(state: web::Data<CatalogState>) -> Result<HttpResponse, ApiError> {
    let catalog = state.catalog()?;

    Ok(HttpResponse::Ok().json(catalog.statistics()))
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            catalog::{loader::parse_catalog, CatalogState},
            services::tests::{app, get, loaded},
        },
        actix_web::http::StatusCode,
        serde_json::json,
    };

    #[actix_web::test]
    async fn statistics() {
        let app = app!(loaded());

        let (status, body) = get!(app, "/api/count");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total_brands": 3,
                "total_models": 4,
                "year_range": { "min": 2019, "max": 2021 },
                "brands": ["Toyota", "Honda", "Rivian"],
            })
        );
    }

    #[actix_web::test]
    async fn year_range_ignores_missing_years() {
        let app = app!(CatalogState::from(parse_catalog(
            br#"{"brands":[
                {"name":"A","models":[{"year":2019},{"year":2021}]},
                {"name":"B","models":[{"model_name":"b"},{"year":2019}]}
            ]}"#
        )));

        let (_, body) = get!(app, "/api/count");

        assert_eq!(body["year_range"], json!({ "min": 2019, "max": 2021 }));
    }

    #[actix_web::test]
    async fn empty_catalog() {
        let app = app!(CatalogState::from(parse_catalog(b"{}")));

        let (status, body) = get!(app, "/api/count");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "total_brands": 0,
                "total_models": 0,
                "year_range": { "min": null, "max": null },
                "brands": [],
            })
        );
    }
}

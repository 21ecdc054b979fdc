use {
    actix_web::{get, HttpResponse},
    serde::Serialize,
};

pub const SERVICE_NAME: &str = "Car Makes and Models API";
pub const API_VERSION: &str = "2.0";

const ENDPOINTS: &[(&str, &str)] = &[
    ("/health", "Service liveness"),
    ("/api/brands", "Get all car brands and models with years"),
    ("/api/brands/<brand_name>", "Get models for a specific brand"),
    (
        "/api/brands/search?model=<name>&year=<year>",
        "Search for models by name or year",
    ),
    ("/api/count", "Get statistics about brands and models"),
];

#[derive(Serialize)]
struct Descriptor {
    message: &'static str,
    version: &'static str,
    endpoints: serde_json::Map<String, serde_json::Value>,
}

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(Descriptor {
        message: SERVICE_NAME,
        version: API_VERSION,
        endpoints: ENDPOINTS
            .iter()
            .map(|(path, about)| ((*path).to_owned(), (*about).into()))
            .collect(),
    })
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use {
        crate::services::tests::{app, get, loaded},
        actix_web::http::StatusCode,
        serde_json::json,
    };

    #[actix_web::test]
    async fn index_describes_the_service() {
        let app = app!(loaded());

        let (status, body) = get!(app, "/");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Car Makes and Models API");
        assert_eq!(body["version"], "2.0");
        assert!(body["endpoints"]["/api/count"].is_string());
        assert_eq!(body["endpoints"].as_object().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn health_is_ok() {
        let app = app!(loaded());

        assert_eq!(get!(app, "/health"), (StatusCode::OK, json!({ "status": "ok" })));
    }
}

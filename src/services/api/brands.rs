use {
    crate::{
        catalog::{CatalogState, SearchFilter},
        error::ApiError,
    },
    actix_web::{get, web, HttpRequest, HttpResponse},
};

/// `model` and `year` from the query string. A repeated key keeps its first
/// value; unknown keys are ignored.
#[derive(Debug, Default, PartialEq)]
pub struct SearchParams {
    pub model: Option<String>,
    pub year: Option<String>,
}

impl SearchParams {
    pub fn from_query(query: &str) -> Self {
        // Plain string pairs: decoding is lossy, never rejected.
        let pairs = web::Query::<Vec<(String, String)>>::from_query(query)
            .map(web::Query::into_inner)
            .unwrap_or_default();

        let mut params = SearchParams::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "model" => &mut params.model,
                "year" => &mut params.year,
                _ => continue,
            };

            slot.get_or_insert(value);
        }

        params
    }
}

#[get("/brands")]
pub async fn list(state: web::Data<CatalogState>) -> Result<HttpResponse, ApiError> {
    let catalog = state.catalog()?;

    Ok(HttpResponse::Ok().json(catalog))
}

#[get("/brands/search")]
pub async fn search(
    state: web::Data<CatalogState>,
    req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
    let catalog = state.catalog()?;

    let params = SearchParams::from_query(req.query_string());
    let filter = SearchFilter::new(params.model.as_deref(), params.year.as_deref());
    let found = catalog.search(&filter);

    tracing::debug!(?filter, count = found.count, "Searched models");

    Ok(HttpResponse::Ok().json(found))
}

/// Any remainder under `/brands/`; the brand is its last segment.
#[get("/brands/{tail:.+}")]
pub async fn by_name(
    state: web::Data<CatalogState>,
    tail: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let catalog = state.catalog()?;
    let name = tail.rsplit('/').next().unwrap_or("").to_owned();

    match catalog.find_brand(&name) {
        Some(brand) => Ok(HttpResponse::Ok().json(brand)),
        None => {
            tracing::debug!(brand = %name, "No such brand");

            Err(ApiError::BrandNotFound(name))
        }
    }
}

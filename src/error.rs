use {
    crate::catalog::LoadError,
    actix_web::{http::StatusCode, HttpResponse, ResponseError},
    serde::Serialize,
};

/// Errors a request can end in. All of them render as `{"error": "..."}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Brand '{0}' not found")]
    BrandNotFound(String),

    #[error("Endpoint not found")]
    RouteNotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Load(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BrandNotFound(_) | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use lonchera_client::{Error as ClientError, NormalizeError};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Error desde la API de Gemini")]
    Upstream(#[source] ClientError),
    #[error("Gemini no devolvió contenido válido")]
    EmptyContent,
    #[error("Gemini no devolvió JSON válido")]
    InvalidJson(#[source] NormalizeError),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a str>,
}

impl From<ClientError> for ApiError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::EmptyContent => ApiError::EmptyContent,
            other => ApiError::Upstream(other),
        }
    }
}

impl From<NormalizeError> for ApiError {
    fn from(e: NormalizeError) -> Self {
        ApiError::InvalidJson(e)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let details = match self {
            ApiError::Upstream(ClientError::Upstream { details, .. }) => Some(details.clone()),
            ApiError::Upstream(other) => Some(other.to_string()),
            _ => None,
        };
        let raw = match self {
            ApiError::InvalidJson(e) => Some(e.raw()),
            _ => None,
        };

        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
            details,
            raw,
        })
    }
}

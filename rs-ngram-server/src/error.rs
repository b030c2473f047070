use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use rs_ngram_core::NgramError;

/// HTTP face of `NgramError`.
#[derive(Debug)]
pub struct ApiError(pub NgramError);

#[derive(Serialize)]
struct ErrorBody {
	error: String,
}

impl std::fmt::Display for ApiError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<NgramError> for ApiError {
	fn from(error: NgramError) -> Self {
		Self(error)
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match &self.0 {
			NgramError::InsufficientData { .. } | NgramError::EmptyQuery | NgramError::InvalidParameter { .. } => {
				StatusCode::BAD_REQUEST
			}
			NgramError::UnreadableInput { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
				StatusCode::NOT_FOUND
			}
			NgramError::UnreadableInput { .. } | NgramError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status.is_server_error() {
			log::error!("{}", self.0);
		}
		HttpResponse::build(status).json(ErrorBody { error: self.0.to_string() })
	}
}

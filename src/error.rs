use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

/// Request-level error taxonomy. Every variant renders the
/// `{success: false, error}` envelope with its mapped status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Configuration(String),

    /// Unexpected failure. The cause is logged server-side; the client
    /// only sees the generic public message.
    #[error("{public}")]
    Internal { public: String, cause: anyhow::Error },
}

impl ApiError {
    /// `map_err` adapter attaching a user-facing message to an unexpected
    /// failure: `.map_err(ApiError::internal("..."))?`.
    pub fn internal<E: Into<anyhow::Error>>(public: &str) -> impl FnOnce(E) -> ApiError + '_ {
        move |err| ApiError::Internal {
            public: public.to_string(),
            cause: err.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal { public, cause } => {
                error!(error = %cause, "{}", public);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(serde_json::json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_match_taxonomy() {
        let cases = [
            (ApiError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (ApiError::Auth("a".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Conflict("c".into()), StatusCode::CONFLICT),
            (ApiError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Configuration("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn internal_hides_the_source_message() {
        let err = ApiError::internal("요청을 처리하는 중 오류가 발생했습니다")(anyhow::anyhow!(
            "connection refused"
        ));
        assert_eq!(
            err.to_string(),
            "요청을 처리하는 중 오류가 발생했습니다"
        );
    }
}

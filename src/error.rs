use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt::Debug;

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        request_failed_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = match self.code {
            1..=99 => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, self.message.as_str()),
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub fn request_failed_error<T: Debug>(err: T) -> Error {
    tracing::error!("request failed: {:?}", err);

    Error {
        code: 3,
        message: "request failed".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 100,
        message: "invalid state".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn missing_address_error() -> Error {
    Error {
        code: 102,
        message: "both start and destination addresses are required".into(),
    }
}

pub fn address_not_found_error(query: &str) -> Error {
    Error {
        code: 103,
        message: format!("address not found: {}", query),
    }
}

pub fn route_not_found_error(label: &str) -> Error {
    Error {
        code: 104,
        message: format!("{} route not found", label),
    }
}

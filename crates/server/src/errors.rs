use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use lumilab_core::errors::{ApplicationError, InterfaceError};
use serde::Serialize;
use tracing::{error, warn};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub error: String,
    pub correlation_id: String,
}

pub type ApiFailure = (StatusCode, Json<ApiError>);

pub fn correlation_id() -> String {
    Uuid::new_v4().simple().to_string()
}

pub fn status_code(error: &InterfaceError) -> StatusCode {
    match error {
        InterfaceError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        InterfaceError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Text safe to show a visitor. Bad-request details name the offending field;
/// anything else collapses to the generic message.
pub fn public_message(error: &InterfaceError) -> String {
    match error {
        InterfaceError::BadRequest { message, .. } => message.clone(),
        other => other.user_message().to_string(),
    }
}

/// Logs `error` against `route` and maps it to its interface form.
pub fn report(
    error: ApplicationError,
    route: &'static str,
    correlation_id: &str,
) -> InterfaceError {
    let detail = error.to_string();
    let mapped = error.into_interface(correlation_id);
    match mapped {
        InterfaceError::BadRequest { .. } => warn!(
            event_name = "site.request.rejected",
            correlation_id = %correlation_id,
            route,
            error = %detail,
            "request rejected"
        ),
        _ => error!(
            event_name = "site.request.failed",
            correlation_id = %correlation_id,
            route,
            error = %detail,
            "request failed"
        ),
    }
    mapped
}

pub fn api_failure(
    error: ApplicationError,
    route: &'static str,
    correlation_id: &str,
) -> ApiFailure {
    let mapped = report(error, route, correlation_id);
    let body = ApiError {
        error: public_message(&mapped),
        correlation_id: mapped.correlation_id().to_string(),
    };
    (status_code(&mapped), Json(body))
}

/// Rejection for a body that did not deserialize: bad JSON, a missing field or
/// a number out of range.
pub fn malformed_body(
    rejection: &JsonRejection,
    route: &'static str,
    correlation_id: &str,
) -> ApiFailure {
    let detail = rejection.body_text();
    warn!(
        event_name = "site.request.malformed",
        correlation_id = %correlation_id,
        route,
        error = %detail,
        "request body rejected"
    );
    let body = ApiError {
        error: format!("malformed request body: {detail}"),
        correlation_id: correlation_id.to_string(),
    };
    (StatusCode::BAD_REQUEST, Json(body))
}

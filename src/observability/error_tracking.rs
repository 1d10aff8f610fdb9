//! Log-backed error tracking. Each captured event gets an id that can be
//! correlated with the access log.

use crate::error::{AppError, AppResult};
use tracing::error;
use uuid::Uuid;

pub fn capture_unexpected_5xx(
    path: &str,
    method: &str,
    status: u16,
    request_id: &str,
) -> AppResult<Uuid> {
    if !(500..=599).contains(&status) {
        return Err(AppError::BadRequest(format!(
            "only 5xx responses are tracked, got {status}"
        )));
    }

    let event_id = Uuid::new_v4();
    error!(
        tracking_backend = "log",
        event_id = %event_id,
        request_id = %request_id,
        method = %method,
        path = %path,
        status = status,
        "unexpected server error response"
    );
    Ok(event_id)
}

/// Logs the hidden cause of an internal error before it is rendered as a
/// generic 500 body.
pub fn capture_internal_error(err: &AppError) -> Option<Uuid> {
    let cause = match err {
        AppError::DatabaseError(source) => source.to_string(),
        AppError::InternalError(source) => format!("{source:#}"),
        _ => return None,
    };

    let event_id = Uuid::new_v4();
    error!(
        tracking_backend = "log",
        event_id = %event_id,
        code = err.error_code(),
        cause = %cause,
        "internal error"
    );
    Some(event_id)
}

use crate::error::app_error::{AppError, ValidationIssue};
use crate::error::db_mapping::map_database_error;
use crate::error::validation_mapping::{collect_validation_issues, summarize_issues};
use crate::validation::Validator;

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err)
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        AppError::InternalError(anyhow::anyhow!("database query timed out"))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_) => AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: "Unable to connect to database. Please try again later.".to_string(),
            },
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => AppError::ServiceUnavailable {
                service: "database".to_string(),
                message: "Service temporarily unavailable. Please try again later.".to_string(),
            },
            sqlx::Error::Database(database_error) => {
                if let Some(mapped) = map_database_error(
                    database_error.code().as_deref(),
                    database_error.constraint(),
                    database_error.message(),
                ) {
                    mapped
                } else {
                    AppError::DatabaseError(sqlx::Error::Database(database_error))
                }
            }
            other => AppError::DatabaseError(other),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut issues = Vec::new();
        collect_validation_issues(None, &err, &mut issues);
        issues.sort_by(|left, right| {
            left.field
                .cmp(&right.field)
                .then(left.code.cmp(&right.code))
        });

        let message = summarize_issues(&issues);
        AppError::ValidationError { message, issues }
    }
}

impl From<Validator> for AppError {
    fn from(v: Validator) -> Self {
        let issues: Vec<ValidationIssue> = v
            .into_errors()
            .into_iter()
            .map(|(field, message)| ValidationIssue {
                field,
                message,
                code: "invalid".to_string(),
            })
            .collect();

        let message = summarize_issues(&issues);
        AppError::ValidationError { message, issues }
    }
}

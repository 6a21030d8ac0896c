//! Conversions from external infrastructure errors into domain errors.

use cobrix_domain::CobrixError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CobrixError);

impl From<InfraError> for CobrixError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CobrixError> for InfraError {
    fn from(value: CobrixError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCobrixError {
    fn into_cobrix(self) -> CobrixError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → CobrixError */
/* -------------------------------------------------------------------------- */

impl IntoCobrixError for SqlError {
    fn into_cobrix(self) -> CobrixError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => CobrixError::Storage("database is busy".into()),
                    (ErrorCode::DatabaseLocked, _) => {
                        CobrixError::Storage("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 2067) => {
                        CobrixError::Storage("unique constraint violation".into())
                    }
                    (ErrorCode::ConstraintViolation, 787) => {
                        CobrixError::Storage("foreign key constraint violation".into())
                    }
                    _ => CobrixError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => CobrixError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                CobrixError::Storage(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                CobrixError::Storage(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => CobrixError::Storage("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidParameterName(parameter_name) => {
                CobrixError::Storage(format!("invalid parameter name: {parameter_name}"))
            }
            RE::InvalidPath(path) => {
                CobrixError::Storage(format!("invalid database path: {}", path.to_string_lossy()))
            }
            RE::InvalidQuery => CobrixError::Storage("invalid SQL query".into()),
            other => CobrixError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_cobrix())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → CobrixError */
/* -------------------------------------------------------------------------- */

impl IntoCobrixError for r2d2::Error {
    fn into_cobrix(self) -> CobrixError {
        CobrixError::Storage(format!("connection pool error: {self}"))
    }
}

impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_cobrix())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CobrixError */
/* -------------------------------------------------------------------------- */

impl IntoCobrixError for serde_json::Error {
    fn into_cobrix(self) -> CobrixError {
        CobrixError::Storage(format!("stored value is not valid JSON: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_cobrix())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

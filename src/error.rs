// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the AQT provider.

use std::fmt;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Provider error types.
#[derive(Debug)]
pub enum Error {
    /// Configuration error
    Config(String),
    /// Backend error
    Backend(BackendError),
    /// Validation error
    Validation(ValidationError),
    /// IO error
    Io(std::io::Error),
    /// Serialization error
    Serialization(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Backend(e) => write!(f, "Backend error: {}", e),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Backend(e) => Some(e),
            Error::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<BackendError> for Error {
    fn from(e: BackendError) -> Self {
        Error::Backend(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Backend and portal errors.
#[derive(Debug, Clone)]
pub enum BackendError {
    /// No backend, workspace or resource matched
    NotFound(String),
    /// Two backends share a name
    DuplicateName(String),
    /// More than one backend matched where exactly one was expected
    Ambiguous(String),
    /// Portal rejected the access token
    AuthenticationFailed(String),
    /// HTTP error talking to the portal
    Http(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::NotFound(msg) => write!(f, "Not found: {}", msg),
            BackendError::DuplicateName(name) => {
                write!(f, "Duplicate backend name: {}", name)
            }
            BackendError::Ambiguous(msg) => write!(f, "Ambiguous match: {}", msg),
            BackendError::AuthenticationFailed(msg) => write!(f, "Authentication failed: {}", msg),
            BackendError::Http(msg) => write!(f, "HTTP error: {}", msg),
        }
    }
}

impl std::error::Error for BackendError {}

/// Validation errors.
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field validation failed
    Field { field: String, message: String },
    /// Resource limit exceeded
    ResourceLimit {
        resource: String,
        limit: u64,
        requested: u64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Field { field, message } => {
                write!(f, "Field '{}': {}", field, message)
            }
            ValidationError::ResourceLimit {
                resource,
                limit,
                requested,
            } => {
                write!(
                    f,
                    "Resource limit exceeded for {}: limit={}, requested={}",
                    resource, limit, requested
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_config() {
        let e = Error::Config("missing token".into());
        assert_eq!(e.to_string(), "Configuration error: missing token");
    }

    #[test]
    fn test_error_display_backend() {
        let e = Error::Backend(BackendError::NotFound("aqt_pine".into()));
        assert_eq!(e.to_string(), "Backend error: Not found: aqt_pine");
    }

    #[test]
    fn test_error_display_io() {
        let e = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(e.to_string(), "IO error: gone");
    }

    #[test]
    fn test_backend_error_display_duplicate() {
        let e = BackendError::DuplicateName("aqt_innsbruck".into());
        assert_eq!(e.to_string(), "Duplicate backend name: aqt_innsbruck");
    }

    #[test]
    fn test_backend_error_display_ambiguous() {
        let e = BackendError::Ambiguous("More than one backend matches criteria.".into());
        assert_eq!(
            e.to_string(),
            "Ambiguous match: More than one backend matches criteria."
        );
    }

    #[test]
    fn test_backend_error_display_auth_failed() {
        let e = BackendError::AuthenticationFailed("bad token".into());
        assert_eq!(e.to_string(), "Authentication failed: bad token");
    }

    #[test]
    fn test_backend_error_display_http() {
        let e = BackendError::Http("503".into());
        assert_eq!(e.to_string(), "HTTP error: 503");
    }

    #[test]
    fn test_validation_error_display_field() {
        let e = ValidationError::Field {
            field: "shots".into(),
            message: "must be greater than 0".into(),
        };
        assert_eq!(e.to_string(), "Field 'shots': must be greater than 0");
    }

    #[test]
    fn test_validation_error_display_resource_limit() {
        let e = ValidationError::ResourceLimit {
            resource: "shots".into(),
            limit: 200,
            requested: 201,
        };
        assert_eq!(
            e.to_string(),
            "Resource limit exceeded for shots: limit=200, requested=201"
        );
    }

    #[test]
    fn test_error_source() {
        assert!(Error::Io(std::io::Error::other("disk")).source().is_some());
        assert!(Error::Backend(BackendError::Http("x".into()))
            .source()
            .is_some());
        assert!(Error::Config("x".into()).source().is_none());
        assert!(Error::Serialization("x".into()).source().is_none());
    }

    #[test]
    fn test_from_conversions() {
        let e: Error = BackendError::NotFound("x".into()).into();
        assert!(matches!(e, Error::Backend(BackendError::NotFound(_))));

        let e: Error = ValidationError::Field {
            field: "x".into(),
            message: "y".into(),
        }
        .into();
        assert!(matches!(e, Error::Validation(_)));

        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>("{{{{").unwrap_err();
        let e: Error = yaml_err.into();
        assert!(matches!(e, Error::Serialization(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{bad}").unwrap_err();
        let e: Error = json_err.into();
        assert!(matches!(e, Error::Serialization(_)));
    }
}

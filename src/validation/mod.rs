// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Input validation for backend run options.

use crate::error::{Result, ValidationError};

/// Validate the number of shots against a backend's limit.
pub fn validate_shots(shots: u32, max_shots: u32) -> Result<()> {
    if shots == 0 {
        return Err(ValidationError::Field {
            field: "shots".into(),
            message: "must be greater than 0".into(),
        }
        .into());
    }

    if shots > max_shots {
        return Err(ValidationError::ResourceLimit {
            resource: "shots".into(),
            limit: max_shots as u64,
            requested: shots as u64,
        }
        .into());
    }

    Ok(())
}

/// Validate the period between two job status queries.
pub fn validate_query_period(seconds: f64) -> Result<()> {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(ValidationError::Field {
            field: "query_period_seconds".into(),
            message: format!("must be a positive number of seconds, got {}", seconds),
        }
        .into());
    }
    Ok(())
}

/// Validate the job status query timeout. `None` means no timeout.
pub fn validate_query_timeout(seconds: Option<f64>) -> Result<()> {
    match seconds {
        Some(s) if !s.is_finite() || s < 0.0 => Err(ValidationError::Field {
            field: "query_timeout_seconds".into(),
            message: format!("must be a non-negative number of seconds, got {}", s),
        }
        .into()),
        _ => Ok(()),
    }
}

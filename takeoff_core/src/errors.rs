//! # Error Types
//!
//! Structured error types for takeoff_core. The engine itself never throws
//! for business conditions: missing optional fields default to zero/false and
//! unknown material strings fall through to an "other" bucket. `TakeoffError`
//! covers the remaining contract-level failures (bad collaborator payloads,
//! serialization), while [`ValidationIssue`] captures per-room data defects
//! that are *reported alongside* zeroed contributions instead of aborting the
//! batch.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::errors::{TakeoffError, TakeoffResult};
//!
//! fn validate_container_size(size_m3: f64) -> TakeoffResult<()> {
//!     if size_m3 <= 0.0 {
//!         return Err(TakeoffError::invalid_input(
//!             "container_size_m3",
//!             size_m3.to_string(),
//!             "Container size must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for takeoff_core operations
pub type TakeoffResult<T> = Result<T, TakeoffError>;

/// Structured error type for engine boundary operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by hosts and collaborators.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum TakeoffError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A project could not be found by the storage collaborator
    #[error("Project not found: {project_id}")]
    ProjectNotFound { project_id: Uuid },

    /// A quantity item could not be priced by the pricing collaborator
    #[error("No price for item: {category}/{description}")]
    PriceNotFound {
        category: String,
        description: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch on a stored project
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl TakeoffError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        TakeoffError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        TakeoffError::MissingField {
            field: field.into(),
        }
    }

    /// Create a PriceNotFound error
    pub fn price_not_found(category: impl Into<String>, description: impl Into<String>) -> Self {
        TakeoffError::PriceNotFound {
            category: category.into(),
            description: description.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            TakeoffError::InvalidInput { .. } => "INVALID_INPUT",
            TakeoffError::MissingField { .. } => "MISSING_FIELD",
            TakeoffError::ProjectNotFound { .. } => "PROJECT_NOT_FOUND",
            TakeoffError::PriceNotFound { .. } => "PRICE_NOT_FOUND",
            TakeoffError::SerializationError { .. } => "SERIALIZATION_ERROR",
            TakeoffError::VersionMismatch { .. } => "VERSION_MISMATCH",
            TakeoffError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// A per-room data defect detected during computation.
///
/// Issues are collected inside the summary values so one room's bad data
/// never prevents computing totals for the rest. The offending room
/// contributes zero to every accumulator it cannot be evaluated for.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "details")]
pub enum ValidationIssue {
    /// Neither measurement mode is populated: no width/length pair and
    /// no area/perimeter pair.
    #[error("Room {room_id} has no usable geometry")]
    MissingGeometry { room_id: Uuid },

    /// A geometric field is negative; the value was clamped to zero.
    #[error("Room {room_id}: negative value for '{field}' treated as zero")]
    NegativeValue { room_id: Uuid, field: String },
}

impl ValidationIssue {
    /// The room this issue refers to
    pub fn room_id(&self) -> Uuid {
        match self {
            ValidationIssue::MissingGeometry { room_id } => *room_id,
            ValidationIssue::NegativeValue { room_id, .. } => *room_id,
        }
    }
}

//! # Response Envelope
//!
//! Every successful response is wrapped as `{message, data, id, changes}`,
//! with absent members left out of the JSON entirely.

use serde::Serialize;
use serde_json::Value;

/// Message for successful reads, inserts and updates
pub const SUCCESS: &str = "success";

/// Message for successful deletes
pub const DELETED: &str = "successfully deleted";

/// Uniform success wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T: Serialize = Value> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<usize>,
}

impl<T: Serialize> Envelope<T> {
    /// Read result
    pub fn success(data: T) -> Self {
        Self::found(Some(data))
    }

    /// By-id read; a missing row leaves `data` out
    pub fn found(data: Option<T>) -> Self {
        Self {
            message: SUCCESS,
            data,
            id: None,
            changes: None,
        }
    }

    /// Insert echoing the submitted body with the assigned id
    pub fn inserted(data: T, id: Option<i64>) -> Self {
        Self {
            message: SUCCESS,
            data: Some(data),
            id,
            changes: None,
        }
    }

    /// Update echoing the submitted body with the changed-row count
    pub fn updated(data: T, changes: usize) -> Self {
        Self {
            message: SUCCESS,
            data: Some(data),
            id: None,
            changes: Some(changes),
        }
    }
}

impl Envelope {
    /// Delete with the changed-row count
    pub fn deleted(changes: usize) -> Self {
        Self {
            message: DELETED,
            data: None,
            id: None,
            changes: Some(changes),
        }
    }
}

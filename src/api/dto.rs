//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::view::Selection;

/// Selection-changed request for the view endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ViewRequest {
    /// Selected country names; empty or absent means all countries
    #[serde(default)]
    pub countries: Selection,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub rows: usize,
    pub countries: usize,
    pub uptime_seconds: u64,
    pub version: String,
}

use super::ApiResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub url: String,
    #[serde(default)]
    pub alias: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias: alias.into(),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform error body, serialized as `{"Error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    #[serde(rename = "Error")]
    pub error: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// One-shot messages drained from the session and rendered with form views
#[derive(Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct FlashDto {
    pub success: Vec<String>,
    pub error: Vec<String>,
}

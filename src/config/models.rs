use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Credentials {
    #[serde(alias = "apiToken")]
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    #[serde(alias = "zoneId")]
    #[validate(length(min = 1, message = "Zone ID cannot be empty"))]
    pub zone_id: String,
}

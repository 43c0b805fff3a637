use serde::{Deserialize, Serialize};

/// Body of a create-record request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSpec {
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DnsRecord {
    pub r#type: String,
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub proxied: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Option<T>,
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
}

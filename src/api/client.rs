use super::models::*;
use crate::error::Result;
use async_trait::async_trait;

/// Record operations against a single zone. Each call is one outbound request.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsGateway: Send + Sync {
    async fn create_record(&self, spec: &RecordSpec) -> Result<()>;
    async fn list_all(&self) -> Result<Vec<DnsRecord>>;
    /// Filtered by the provider, not locally.
    async fn list_by_type(&self, record_type: &str) -> Result<Vec<DnsRecord>>;
}

use super::{client::DnsGateway, models::*};
use crate::error::{Error, Result};
use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;

const API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

pub struct CloudflareGateway {
    client: reqwest::Client,
    api_token: String,
    zone_id: String,
    base_url: String,
}

#[async_trait]
impl DnsGateway for CloudflareGateway {
    async fn create_record(&self, spec: &RecordSpec) -> Result<()> {
        debug!("POST {} ({} {})", self.records_url(), spec.r#type, spec.name);
        let response = self
            .client
            .post(self.records_url())
            .bearer_auth(&self.api_token)
            .json(spec)
            .send()
            .await?;

        Self::parse_response::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<DnsRecord>> {
        debug!("GET {}", self.records_url());
        let response = self
            .client
            .get(self.records_url())
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        Ok(Self::parse_response::<Vec<DnsRecord>>(response)
            .await?
            .unwrap_or_default())
    }

    async fn list_by_type(&self, record_type: &str) -> Result<Vec<DnsRecord>> {
        debug!("GET {}?type={}", self.records_url(), record_type);
        let response = self
            .client
            .get(self.records_url())
            .query(&[("type", record_type)])
            .bearer_auth(&self.api_token)
            .send()
            .await?;

        Ok(Self::parse_response::<Vec<DnsRecord>>(response)
            .await?
            .unwrap_or_default())
    }
}

impl CloudflareGateway {
    pub fn new(api_token: String, zone_id: String) -> Self {
        Self::with_base_url(api_token, zone_id, API_BASE_URL.to_string())
    }

    pub fn with_base_url(api_token: String, zone_id: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_token,
            zone_id,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn records_url(&self) -> String {
        format!("{}/zones/{}/dns_records", self.base_url, self.zone_id)
    }

    async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>> {
        let status = response.status();
        let text = response.text().await?;

        let parsed: ApiResponse<T> = serde_json::from_str(&text).map_err(|e| {
            Error::Api(format!(
                "failed to parse response ({}): {}. Response: {}",
                status, e, text
            ))
        })?;

        if !parsed.success {
            return Err(Error::Api(
                serde_json::Value::Array(parsed.errors).to_string(),
            ));
        }

        Ok(parsed.result)
    }
}

use crate::api::{DnsGateway, RecordSpec};
use crate::error::{Error, Result};
use log::{debug, info};
use std::{fmt, str::FromStr};
use tokio::time::{sleep, Duration};

const TXT: &str = "TXT";

/// Keeps sequential creates under the provider's rate limit.
pub const DEFAULT_PACE: Duration = Duration::from_secs(1);

/// One `label:payload` piece of a segmented TXT value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub label: String,
    pub payload: String,
}

impl FromStr for Segment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        // Only the first colon separates; the payload may contain more.
        let (label, payload) = s
            .split_once(':')
            .ok_or_else(|| Error::Format(s.to_string()))?;

        Ok(Self {
            label: label.to_string(),
            payload: payload.to_string(),
        })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.payload)
    }
}

pub struct SegmentedTxtWriter<'a, G: DnsGateway + ?Sized> {
    gateway: &'a G,
    pace: Duration,
}

impl<'a, G: DnsGateway + ?Sized> SegmentedTxtWriter<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self {
            gateway,
            pace: DEFAULT_PACE,
        }
    }

    /// Creates one TXT record per content string, in order, pausing after
    /// each successful create (the last one included).
    ///
    /// The first malformed segment or failed create aborts the batch.
    /// Records already created are left in place.
    pub async fn write(&self, name: &str, contents: &[String], ttl: u32) -> Result<usize> {
        let mut created = 0;

        for content in contents {
            let segment: Segment = content.parse()?;

            let spec = RecordSpec {
                r#type: TXT.to_string(),
                name: name.to_string(),
                content: segment.to_string(),
                ttl,
            };
            self.gateway.create_record(&spec).await?;
            created += 1;
            info!(
                "Created segment {} for {} ({}/{})",
                segment.label,
                name,
                created,
                contents.len()
            );

            debug!("Pausing {:?} before next request", self.pace);
            sleep(self.pace).await;
        }

        Ok(created)
    }
}

pub mod client;
pub mod cloudflare;
pub mod models;

pub use client::DnsGateway;
pub use cloudflare::CloudflareGateway;
pub use models::{DnsRecord, RecordSpec};

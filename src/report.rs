use crate::api::DnsRecord;
use std::collections::BTreeMap;

/// Renders the record listing followed by a per-type summary.
///
/// Listing order follows the input; summary rows are sorted by type.
pub fn report(records: &[DnsRecord]) -> String {
    let mut out = String::new();

    out.push_str("DNS Records:\n");
    out.push_str("------------\n");
    for record in records {
        out.push_str(&format!(
            "{} | {} | {} | TTL: {} | Proxied: {}\n",
            record.r#type,
            record.name,
            record.content,
            record.ttl,
            record.proxied.unwrap_or(false)
        ));
    }

    out.push_str("\nSummary:\n");
    out.push_str("--------\n");
    for (record_type, count) in type_counts(records) {
        out.push_str(&format!("{}: {}\n", record_type, count));
    }
    out.push_str(&format!("Total records: {}", records.len()));

    out
}

pub fn type_counts(records: &[DnsRecord]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(record.r#type.as_str()).or_insert(0) += 1;
    }
    counts
}

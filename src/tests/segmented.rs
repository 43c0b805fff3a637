use crate::api::client::MockDnsGateway;
use crate::error::Error;
use crate::segmented::{SegmentedTxtWriter, DEFAULT_PACE};
use mockall::Sequence;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

fn contents(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[tokio::test(start_paused = true)]
async fn test_creates_each_segment_in_order_with_pacing() {
    let mut gateway = MockDnsGateway::new();
    let mut seq = Sequence::new();
    let calls = Arc::new(Mutex::new(Vec::new()));

    for content in ["1:a", "2:b", "3:c"] {
        let calls = calls.clone();
        gateway
            .expect_create_record()
            .withf(move |spec| {
                spec.r#type == "TXT"
                    && spec.name == "example.com"
                    && spec.content == content
                    && spec.ttl == 3600
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| {
                calls.lock().unwrap().push(Instant::now());
                Ok(())
            });
    }

    let start = Instant::now();
    let created = SegmentedTxtWriter::new(&gateway)
        .write("example.com", &contents(&["1:a", "2:b", "3:c"]), 3600)
        .await
        .unwrap();

    assert_eq!(created, 3);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 3);
    for pair in calls.windows(2) {
        assert!(pair[1] - pair[0] >= DEFAULT_PACE);
    }
    // The last segment is paced as well.
    assert!(start.elapsed() >= DEFAULT_PACE * 3);
}

#[tokio::test(start_paused = true)]
async fn test_payload_keeps_extra_colons() {
    let mut gateway = MockDnsGateway::new();
    gateway
        .expect_create_record()
        .withf(|spec| spec.content == "1:v=spf1 include:_spf.example.com -all")
        .times(1)
        .returning(|_| Ok(()));

    let created = SegmentedTxtWriter::new(&gateway)
        .write(
            "example.com",
            &contents(&["1:v=spf1 include:_spf.example.com -all"]),
            1,
        )
        .await
        .unwrap();

    assert_eq!(created, 1);
}

#[tokio::test(start_paused = true)]
async fn test_malformed_segment_aborts_remaining() {
    let mut gateway = MockDnsGateway::new();
    gateway
        .expect_create_record()
        .withf(|spec| spec.content == "1:a")
        .times(1)
        .returning(|_| Ok(()));

    let result = SegmentedTxtWriter::new(&gateway)
        .write("example.com", &contents(&["1:a", "nosep", "3:c"]), 3600)
        .await;

    match result {
        Err(Error::Format(content)) => assert_eq!(content, "nosep"),
        other => panic!("expected format error, got {:?}", other),
    }
}

#[tokio::test(start_paused = true)]
async fn test_api_error_aborts_remaining() {
    let mut gateway = MockDnsGateway::new();
    let mut seq = Sequence::new();

    gateway
        .expect_create_record()
        .withf(|spec| spec.content == "1:a")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));
    gateway
        .expect_create_record()
        .withf(|spec| spec.content == "2:b")
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(Error::Api("rate limited".to_string())));

    let result = SegmentedTxtWriter::new(&gateway)
        .write("example.com", &contents(&["1:a", "2:b", "3:c"]), 3600)
        .await;

    match result {
        Err(Error::Api(detail)) => assert_eq!(detail, "rate limited"),
        other => panic!("expected API error, got {:?}", other),
    }
}

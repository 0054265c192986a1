use chrono::{Duration, FixedOffset, TimeZone};
use horae::codec::{serialize_events, Codec};
use horae::core::Event;
use horae::Error;

fn window_events(count: usize) -> Vec<Event> {
    let offset = FixedOffset::east_opt(3600).unwrap();
    (0..count)
        .map(|i| {
            let ts = offset.with_ymd_and_hms(2021, 4, 1, 8, 0, 0).unwrap()
                + Duration::seconds(30 * i as i64);
            let mut event = Event::new(ts, 30.0);
            event.id = Some(i as u64);
            event.data.insert("app".to_string(), serde_json::json!("firefox"));
            event
                .data
                .insert("title".to_string(), serde_json::json!(format!("tab {}", i % 7)));
            event
        })
        .collect()
}

#[test]
fn test_round_trip_reproduces_serialized_bytes() {
    let serialized = serialize_events(&window_events(200)).unwrap();
    for codec in Codec::ALL {
        let (compressed, _) = codec.compress(&serialized).unwrap();
        let restored = codec.decompress(&compressed).unwrap();
        assert_eq!(restored, serialized, "codec={}", codec);
    }
}

#[test]
fn test_repetitive_events_compress_well() {
    let serialized = serialize_events(&window_events(500)).unwrap();
    for codec in Codec::ALL {
        let (compressed, _) = codec.compress(&serialized).unwrap();
        assert!(
            compressed.len() < serialized.len() / 2,
            "codec={} compressed {} of {} bytes",
            codec,
            compressed.len(),
            serialized.len()
        );
    }
}

#[test]
fn test_compressed_size_is_stable_across_runs() {
    let serialized = serialize_events(&window_events(100)).unwrap();
    for codec in Codec::ALL {
        let sizes: Vec<usize> =
            (0..3).map(|_| codec.compress(&serialized).unwrap().0.len()).collect();
        assert!(sizes.windows(2).all(|w| w[0] == w[1]), "codec={} sizes={:?}", codec, sizes);
    }
}

#[test]
fn test_serialization_is_deterministic_and_utf8() {
    let events = window_events(10);
    let first = serialize_events(&events).unwrap();
    let second = serialize_events(&events).unwrap();
    assert_eq!(first, second);
    assert!(std::str::from_utf8(&first).is_ok());
}

#[test]
fn test_empty_chunk_serializes_to_empty_array() {
    let events: Vec<Event> = Vec::new();
    assert_eq!(serialize_events(&events).unwrap(), b"[]");
}

#[test]
fn test_brotli_is_unsupported() {
    let err = Codec::from_name("brotli").unwrap_err();
    assert!(matches!(err, Error::UnsupportedAlgorithm(name) if name == "brotli"));
}

#[test]
fn test_supported_codec_names_resolve() {
    assert_eq!(Codec::from_name("zstd").unwrap(), Codec::Zstd);
    assert_eq!(Codec::from_name("zlib").unwrap(), Codec::Zlib);
    for codec in Codec::ALL {
        assert_eq!(Codec::from_name(codec.name()).unwrap(), codec);
    }
}

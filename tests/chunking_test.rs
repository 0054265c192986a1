use chrono::{Duration, FixedOffset, NaiveDate, TimeZone};
use horae::chunking::{chunked, chunked_by_date};
use horae::core::Event;
use horae::Error;

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

/// Events spaced one minute apart starting at the given day, with ids so
/// ordering checks can identify them.
fn minute_events(year: i32, month: u32, day: u32, count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| {
            let ts = utc().with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
                + Duration::minutes(i as i64);
            let mut event = Event::new(ts, 60.0);
            event.id = Some(i as u64);
            event
        })
        .collect()
}

#[test]
fn test_fixed_concatenation_reproduces_input() {
    let events = minute_events(2021, 1, 1, 25);
    for chunk_size in [1, 2, 7, 25, 100] {
        let ids: Vec<Option<u64>> =
            chunked(&events, chunk_size).unwrap().flatten().map(|e| e.id).collect();
        let expected: Vec<Option<u64>> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, expected, "chunk_size={}", chunk_size);
    }
}

#[test]
fn test_fixed_chunk_count_is_ceiling() {
    let events = minute_events(2021, 1, 1, 25);
    for chunk_size in [1, 2, 7, 25, 100] {
        let count = chunked(&events, chunk_size).unwrap().count();
        assert_eq!(count, (25 + chunk_size - 1) / chunk_size, "chunk_size={}", chunk_size);
    }
}

#[test]
fn test_fixed_seven_by_three_example() {
    let events = minute_events(2021, 1, 1, 7);
    let lengths: Vec<usize> = chunked(&events, 3).unwrap().map(|c| c.len()).collect();
    assert_eq!(lengths, vec![3, 3, 1]);
}

#[test]
fn test_fixed_is_restartable() {
    let events = minute_events(2021, 1, 1, 10);
    let iter = chunked(&events, 4).unwrap();
    let first: Vec<usize> = iter.clone().map(|c| c.len()).collect();
    let second: Vec<usize> = iter.map(|c| c.len()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_fixed_rejects_zero_chunk_size() {
    let events = minute_events(2021, 1, 1, 3);
    assert!(matches!(chunked(&events, 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_by_date_partition_equals_sorted_input() {
    let mut events = minute_events(2021, 1, 1, 10);
    events.extend(minute_events(2021, 1, 2, 5));
    events.extend(minute_events(2021, 1, 5, 3));
    // Shuffle deterministically so the strategy has to sort
    events.reverse();

    let mut collected: Vec<Event> =
        chunked_by_date(&events).unwrap().flatten().cloned().collect();
    collected.sort_by_key(|e| e.timestamp);

    let mut expected = events.clone();
    expected.sort_by_key(|e| e.timestamp);

    assert_eq!(collected.len(), expected.len());
    for (got, want) in collected.iter().zip(expected.iter()) {
        assert_eq!(got.timestamp, want.timestamp);
    }
}

#[test]
fn test_by_date_one_chunk_per_distinct_day() {
    let mut events = minute_events(2021, 1, 1, 4);
    events.extend(minute_events(2021, 1, 2, 4));
    events.extend(minute_events(2021, 2, 14, 1));
    events.extend(minute_events(2021, 3, 1, 2));

    let chunks: Vec<Vec<&Event>> = chunked_by_date(&events).unwrap().collect();
    assert_eq!(chunks.len(), 4);

    // Chronological window order, each chunk on a single day
    let mut previous: Option<NaiveDate> = None;
    for chunk in &chunks {
        let day = chunk[0].day();
        assert!(chunk.iter().all(|e| e.day() == day));
        if let Some(prev) = previous {
            assert!(day > prev);
        }
        previous = Some(day);
    }
}

#[test]
fn test_by_date_two_day_example() {
    // Events on 2021-01-01, 2021-01-01, 2021-01-03 must produce exactly
    // two chunks under the earliest-anchor rule.
    let events = vec![
        Event::new(utc().with_ymd_and_hms(2021, 1, 1, 9, 0, 0).unwrap(), 1.0),
        Event::new(utc().with_ymd_and_hms(2021, 1, 1, 18, 0, 0).unwrap(), 1.0),
        Event::new(utc().with_ymd_and_hms(2021, 1, 3, 7, 0, 0).unwrap(), 1.0),
    ];
    let chunks: Vec<Vec<&Event>> = chunked_by_date(&events).unwrap().collect();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].len(), 2);
    assert_eq!(chunks[1].len(), 1);
}

#[test]
fn test_by_date_single_event() {
    let events = minute_events(2021, 6, 15, 1);
    let chunks: Vec<Vec<&Event>> = chunked_by_date(&events).unwrap().collect();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].len(), 1);
}

#[test]
fn test_by_date_rejects_empty_input() {
    let events: Vec<Event> = Vec::new();
    assert!(matches!(chunked_by_date(&events), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_both_strategies_are_idempotent() {
    let mut events = minute_events(2021, 1, 1, 8);
    events.extend(minute_events(2021, 1, 2, 8));

    let fixed_a: Vec<usize> = chunked(&events, 5).unwrap().map(|c| c.len()).collect();
    let fixed_b: Vec<usize> = chunked(&events, 5).unwrap().map(|c| c.len()).collect();
    assert_eq!(fixed_a, fixed_b);

    let dates_a: Vec<usize> = chunked_by_date(&events).unwrap().map(|c| c.len()).collect();
    let dates_b: Vec<usize> = chunked_by_date(&events).unwrap().map(|c| c.len()).collect();
    assert_eq!(dates_a, dates_b);
}

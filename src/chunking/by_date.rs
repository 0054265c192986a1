//! Calendar-day chunking: one chunk per distinct calendar day.

use chrono::NaiveDate;

use crate::core::Event;
use crate::error::{Error, Result};

/// Iterator over calendar-day chunks of an event sequence.
///
/// Events are sorted ascending by timestamp up front, then grouped into
/// half-open day windows `[day, day + 1)` keyed on the date in each event's
/// own recorded offset. The first window is anchored on the earliest
/// event's day; every window boundary after that is re-anchored on the day
/// of the event that overflowed the previous window. Chunks come out in
/// chronological window order and the final chunk is always non-empty.
#[derive(Debug)]
pub struct DayChunks<'a> {
    sorted: std::vec::IntoIter<&'a Event>,
    // Exclusive upper bound of the current window; None once the bound
    // cannot advance past the end of the calendar.
    bound: Option<NaiveDate>,
    current: Vec<&'a Event>,
    done: bool,
}

/// Partitions `events` into one chunk per distinct calendar day.
///
/// The input may arrive in any order; the partition is computed over the
/// timestamp-sorted sequence. Fails if `events` is empty, since no anchor
/// day exists.
pub fn chunked_by_date(events: &[Event]) -> Result<DayChunks<'_>> {
    if events.is_empty() {
        return Err(Error::InvalidArgument(
            "cannot chunk an empty event sequence by date".to_string(),
        ));
    }

    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    // Anchor the first window on the earliest event's day. The events
    // themselves are consumed by the iterator, so only the bound is
    // precomputed here.
    let bound = sorted.first().and_then(|e| e.day().succ_opt());

    Ok(DayChunks { sorted: sorted.into_iter(), bound, current: Vec::new(), done: false })
}

impl<'a> Iterator for DayChunks<'a> {
    type Item = Vec<&'a Event>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        for event in self.sorted.by_ref() {
            let day = event.day();
            let in_window = self.bound.map_or(true, |bound| day < bound);
            if in_window {
                self.current.push(event);
            } else {
                // First event at or past the bound: flush the window and
                // re-anchor on this event's day.
                let chunk = std::mem::replace(&mut self.current, vec![event]);
                self.bound = day.succ_opt();
                return Some(chunk);
            }
        }

        // Input exhausted; the accumulated window is always non-empty
        // because construction rejects empty input.
        self.done = true;
        Some(std::mem::take(&mut self.current))
    }
}

//! Core data structures for the Horae benchmark tool

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single time-tracked activity event as reported by the collection
/// service. Events are read-only for the lifetime of a benchmark run.
///
/// The `data` payload is kept in a `BTreeMap` so that serializing an event
/// always produces the same key order; compressed sizes would otherwise
/// vary between runs over identical input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Row id assigned by the collection service, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Start of the event, in the offset the source reported
    pub timestamp: DateTime<FixedOffset>,
    /// Length of the event in seconds; zero or negative for degenerate
    /// intervals
    #[serde(default)]
    pub duration: f64,
    /// Free-form payload (window title, app name, ...)
    #[serde(default)]
    pub data: BTreeMap<String, serde_json::Value>,
}

impl Event {
    /// Creates an event with no id and an empty payload.
    pub fn new(timestamp: DateTime<FixedOffset>, duration: f64) -> Self {
        Self { id: None, timestamp, duration, data: BTreeMap::new() }
    }

    /// The calendar date of the event in its own recorded offset.
    pub fn day(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

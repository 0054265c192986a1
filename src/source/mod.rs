//! Event source adapters.
//!
//! The benchmark never talks to a concrete service directly; it goes
//! through the [`EventSource`] trait so a run can be driven by the live
//! HTTP adapter or by an in-memory fixture in tests.

use crate::core::Event;
use crate::error::Result;

pub mod aw_client;

pub use aw_client::{AwClient, AwEndpoint};

/// A provider of time-tracked activity events, keyed by bucket.
pub trait EventSource {
    /// Lists the identifiers of every bucket the source knows about, in a
    /// deterministic order.
    fn list_buckets(&self) -> Result<Vec<String>>;

    /// Fetches the events of one bucket. `limit` caps the number of events
    /// returned; `None` means all of them.
    fn get_events(&self, bucket_id: &str, limit: Option<usize>) -> Result<Vec<Event>>;
}

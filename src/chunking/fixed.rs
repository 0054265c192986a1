//! Fixed-size chunking: partition an event sequence into runs of N events.

use crate::core::Event;
use crate::error::{Error, Result};

/// Iterator over fixed-size chunks of an event slice.
///
/// Every chunk has exactly `chunk_size` events except possibly the last,
/// which holds the remainder. Concatenating the chunks in emission order
/// reproduces the input exactly. The iterator is `Clone`, so a benchmark
/// can restart it without re-deriving the partition.
#[derive(Debug, Clone)]
pub struct FixedChunks<'a> {
    remaining: &'a [Event],
    chunk_size: usize,
}

/// Partitions `events` into chunks of `chunk_size` events.
///
/// # Arguments
///
/// * `events` - The events to partition, in their existing order.
/// * `chunk_size` - Number of events per chunk; must be positive.
pub fn chunked(events: &[Event], chunk_size: usize) -> Result<FixedChunks<'_>> {
    if chunk_size == 0 {
        return Err(Error::InvalidArgument("chunk size must be positive".to_string()));
    }
    Ok(FixedChunks { remaining: events, chunk_size })
}

impl<'a> Iterator for FixedChunks<'a> {
    type Item = &'a [Event];

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let split = self.chunk_size.min(self.remaining.len());
        let (chunk, rest) = self.remaining.split_at(split);
        self.remaining = rest;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let chunks = self.remaining.len().div_ceil(self.chunk_size);
        (chunks, Some(chunks))
    }
}

impl ExactSizeIterator for FixedChunks<'_> {}

//! Chunking strategies for partitioning an event sequence.
//!
//! Both strategies are lazy iterators over borrowed events: a chunk is a
//! view into the caller's collection, never a copy of it. The fixed-size
//! strategy preserves input order; the calendar-day strategy sorts first
//! and emits one chunk per distinct day.

pub mod by_date;
pub mod fixed;

pub use by_date::{chunked_by_date, DayChunks};
pub use fixed::{chunked, FixedChunks};

//! # Horae
//!
//! Horae benchmarks how well time-tracked activity events compress when they
//! are grouped into chunks before compression.
//!
//! The name "Horae" comes from the Greek goddesses of the hours and the
//! seasons, who divide time into its natural units. This mirrors what the
//! tool does: it partitions a stream of timestamped events into fixed-size
//! and calendar-day chunks and measures the size, ratio and timing of
//! compressing each grouping.
//!
//! ## Features
//!
//! - Fetches events from a local ActivityWatch-style collection service
//! - Two chunking strategies: fixed event count and calendar day
//! - Two codecs: zstd and zlib, with size/ratio/timing statistics
//!
//! ## Example
//!
//! ```rust
//! use horae::chunking::chunked;
//! use horae::Result;
//!
//! fn example() -> Result<()> {
//!     let events = Vec::new();
//!     assert_eq!(chunked(&events, 1000)?.count(), 0);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

/// Core data structures and types
pub mod core;

/// Chunking strategies for partitioning event sequences
pub mod chunking;

/// Event source adapters
pub mod source;

/// Compression codecs and canonical chunk serialization
pub mod codec;

/// Benchmark harness and reporting
pub mod bench;

/// Error types and result definitions
pub mod error;

// Re-export commonly used types
pub use error::{Error, Result};

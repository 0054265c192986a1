//! Benchmark harness: source -> chunking -> codec -> report.

use std::time::Duration;

use crate::chunking::{chunked, chunked_by_date};
use crate::codec::{serialize_events, Codec};
use crate::core::Event;
use crate::error::Result;
use crate::source::EventSource;

/// Parameters of one benchmark run.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of events per fixed-size chunk
    pub chunk_size: usize,
    /// Codec used for the per-chunk benchmarks
    pub codec: Codec,
    /// Whether to also compress each whole bucket under every codec
    pub whole_bucket: bool,
    /// Whether to drop zero/negative-duration events before benchmarking
    pub filter_short: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { chunk_size: 1000, codec: Codec::Zstd, whole_bucket: true, filter_short: false }
    }
}

/// Size and timing of compressing one byte buffer under one codec.
#[derive(Debug, Clone)]
pub struct CompressionStats {
    /// Codec that produced these numbers
    pub codec: Codec,
    /// Size of the serialized input in bytes
    pub raw_bytes: usize,
    /// Size of the compressed output in bytes
    pub compressed_bytes: usize,
    /// Wall-clock time of the compression call
    pub elapsed: Duration,
}

impl CompressionStats {
    /// Compression ratio, raw over compressed.
    pub fn ratio(&self) -> f64 {
        self.raw_bytes as f64 / self.compressed_bytes as f64
    }
}

/// Aggregate over every chunk of one strategy run. Per-chunk numbers are
/// folded in and discarded.
#[derive(Debug, Clone, Default)]
pub struct ChunkStats {
    /// Number of chunks the strategy produced
    pub chunks: usize,
    /// Total compressed size across all chunks in bytes
    pub compressed_bytes: usize,
    /// Total wall-clock compression time across all chunks
    pub elapsed: Duration,
}

/// Everything the benchmark measured for one bucket.
#[derive(Debug, Clone)]
pub struct BucketReport {
    /// Identifier of the benchmarked bucket
    pub bucket_id: String,
    /// Number of events fetched from the source
    pub event_count: usize,
    /// Number of events dropped by the short-event filter, when enabled
    pub filtered_out: Option<usize>,
    /// Whole-bucket compression under every codec, when enabled
    pub whole_bucket: Vec<CompressionStats>,
    /// Fixed-size chunking aggregate; absent when the bucket is empty
    pub fixed: Option<ChunkStats>,
    /// Calendar-day chunking aggregate; absent when the bucket is empty
    pub by_date: Option<ChunkStats>,
}

/// Drops events with zero or negative duration.
pub fn filter_short(events: &[Event]) -> Vec<Event> {
    events.iter().filter(|e| e.duration > 0.0).cloned().collect()
}

/// Serializes and compresses every chunk, folding sizes and timings into
/// one aggregate. Serialization happens outside the timed section.
pub fn bench_chunks<'a, C, I>(chunks: C, codec: Codec) -> Result<ChunkStats>
where
    C: IntoIterator<Item = I>,
    I: IntoIterator<Item = &'a Event>,
{
    let mut stats = ChunkStats::default();
    for chunk in chunks {
        let serialized = serialize_events(chunk)?;
        let (compressed, elapsed) = codec.compress(&serialized)?;
        stats.chunks += 1;
        stats.compressed_bytes += compressed.len();
        stats.elapsed += elapsed;
    }
    Ok(stats)
}

/// Runs every configured benchmark over one bucket's events.
pub fn bench_bucket(bucket_id: &str, events: &[Event], config: &BenchConfig) -> Result<BucketReport> {
    let event_count = events.len();

    let kept;
    let (events, filtered_out) = if config.filter_short {
        kept = filter_short(events);
        (kept.as_slice(), Some(event_count - kept.len()))
    } else {
        (events, None)
    };

    let mut whole_bucket = Vec::new();
    if config.whole_bucket && !events.is_empty() {
        let serialized = serialize_events(events)?;
        for codec in Codec::ALL {
            let (compressed, elapsed) = codec.compress(&serialized)?;
            whole_bucket.push(CompressionStats {
                codec,
                raw_bytes: serialized.len(),
                compressed_bytes: compressed.len(),
                elapsed,
            });
        }
    }

    // Day-chunking has no anchor for an empty sequence, so both chunked
    // sections are skipped for buckets without events.
    let (fixed, by_date) = if events.is_empty() {
        (None, None)
    } else {
        (
            Some(bench_chunks(chunked(events, config.chunk_size)?, config.codec)?),
            Some(bench_chunks(chunked_by_date(events)?, config.codec)?),
        )
    };

    Ok(BucketReport {
        bucket_id: bucket_id.to_string(),
        event_count,
        filtered_out,
        whole_bucket,
        fixed,
        by_date,
    })
}

/// Benchmarks every bucket the source lists, printing one report per
/// bucket. A bucket that fails is skipped with a message on stderr; the
/// run continues with the next one. Returns how many buckets completed.
pub fn run<S: EventSource>(source: &S, config: &BenchConfig) -> Result<usize> {
    let buckets = source.list_buckets()?;

    let mut completed = 0;
    for bucket_id in buckets {
        match bench_one(source, &bucket_id, config) {
            Ok(report) => {
                print_report(&report, config);
                completed += 1;
            }
            Err(e) => {
                eprintln!("skipping bucket {}: {}", bucket_id, e);
            }
        }
        println!("{:=<20}", "");
    }
    Ok(completed)
}

fn bench_one<S: EventSource>(
    source: &S,
    bucket_id: &str,
    config: &BenchConfig,
) -> Result<BucketReport> {
    let events = source.get_events(bucket_id, None)?;
    bench_bucket(bucket_id, &events, config)
}

fn print_report(report: &BucketReport, config: &BenchConfig) {
    println!("bucket: {}", report.bucket_id);
    println!("event count: {}", report.event_count);

    if let Some(filtered) = report.filtered_out {
        let percent = if report.event_count == 0 {
            0.0
        } else {
            100.0 * filtered as f64 / report.event_count as f64
        };
        println!("filtered: {} ({:.2}%)", filtered, percent);
    }

    if !report.whole_bucket.is_empty() {
        println!("# Whole bucket");
        for stats in &report.whole_bucket {
            println!("{}:", stats.codec);
            println!("  before:\t{} bytes", stats.raw_bytes);
            println!("  after: \t{} bytes", stats.compressed_bytes);
            println!(
                "  ratio: {:.2} ({:.3} ms)",
                stats.ratio(),
                stats.elapsed.as_secs_f64() * 1000.0
            );
        }
    }

    if let Some(stats) = &report.fixed {
        println!("# Chunked (n={}, {})", config.chunk_size, config.codec);
        print_chunk_stats(stats);
    }

    if let Some(stats) = &report.by_date {
        println!("# Chunked (by date, {})", config.codec);
        print_chunk_stats(stats);
    }
}

fn print_chunk_stats(stats: &ChunkStats) {
    println!("chunks: {}", stats.chunks);
    println!(
        "total size of all chunks: {} bytes ({:.3} ms)",
        stats.compressed_bytes,
        stats.elapsed.as_secs_f64() * 1000.0
    );
}

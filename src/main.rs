//! Horae - chunking and compression benchmarks for time-tracked activity events
//!
//! Usage:
//!   horae
//!   horae --codec zlib --chunk-size 500
//!   horae --host localhost --port 5600 --filter-short

use clap::Parser;
use horae::bench::{run, BenchConfig};
use horae::codec::Codec;
use horae::source::{AwClient, AwEndpoint};

#[derive(Parser, Debug)]
#[command(name = "horae")]
#[command(about = "Benchmark chunked compression of time-tracked activity events")]
struct Args {
    /// Host of the collection service
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Port of the collection service
    #[arg(long, default_value = "5600")]
    port: u16,

    /// Codec for the per-chunk benchmarks: zstd or zlib
    #[arg(short, long, default_value = "zstd")]
    codec: String,

    /// Number of events per fixed-size chunk
    #[arg(short = 'n', long, default_value = "1000")]
    chunk_size: usize,

    /// Drop zero/negative-duration events before benchmarking
    #[arg(long)]
    filter_short: bool,

    /// Skip the whole-bucket codec comparison
    #[arg(long)]
    no_whole_bucket: bool,
}

fn main() {
    let args = Args::parse();

    let codec = match Codec::from_name(&args.codec) {
        Ok(codec) => codec,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Valid options: zstd, zlib");
            std::process::exit(1);
        }
    };

    if args.chunk_size == 0 {
        eprintln!("Error: chunk size must be positive");
        std::process::exit(1);
    }

    let config = BenchConfig {
        chunk_size: args.chunk_size,
        codec,
        whole_bucket: !args.no_whole_bucket,
        filter_short: args.filter_short,
    };

    let endpoint = AwEndpoint::new(args.host, args.port);
    let result = AwClient::new(endpoint).and_then(|client| run(&client, &config));

    match result {
        Ok(0) => println!("no buckets to benchmark"),
        Ok(completed) => println!("benchmarked {} bucket(s)", completed),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

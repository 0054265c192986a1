//! Compression codecs and the canonical chunk serialization fed to them.

use std::io::Write;
use std::time::{Duration, Instant};

use crate::core::Event;
use crate::error::{Error, Result};

/// zstd level used by the benchmark; tuned for ratio over speed.
const ZSTD_LEVEL: i32 = 10;
/// zlib level used by the benchmark; the library default.
const ZLIB_LEVEL: u32 = 6;

/// A supported compression algorithm with its fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    /// zstd, the fast/high-ratio tier
    Zstd,
    /// zlib (DEFLATE), the ubiquitous/portable tier
    Zlib,
}

impl Codec {
    /// Every codec the benchmark can run, in reporting order.
    pub const ALL: [Codec; 2] = [Codec::Zstd, Codec::Zlib];

    /// Resolves an algorithm identifier. Identifiers are matched
    /// case-insensitively; anything other than `zstd` or `zlib` is an
    /// [`Error::UnsupportedAlgorithm`].
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "zstd" => Ok(Codec::Zstd),
            "zlib" => Ok(Codec::Zlib),
            _ => Err(Error::UnsupportedAlgorithm(name.to_string())),
        }
    }

    /// The identifier this codec reports under.
    pub fn name(&self) -> &'static str {
        match self {
            Codec::Zstd => "zstd",
            Codec::Zlib => "zlib",
        }
    }

    /// Compresses `bytes`, returning the compressed form and the wall-clock
    /// duration of the compression call alone.
    pub fn compress(&self, bytes: &[u8]) -> Result<(Vec<u8>, Duration)> {
        let start = Instant::now();
        let compressed = match self {
            Codec::Zstd => zstd::stream::encode_all(bytes, ZSTD_LEVEL)
                .map_err(|e| Error::Compression(e.to_string()))?,
            Codec::Zlib => {
                let mut encoder = flate2::write::ZlibEncoder::new(
                    Vec::new(),
                    flate2::Compression::new(ZLIB_LEVEL),
                );
                encoder.write_all(bytes)?;
                encoder.finish()?
            }
        };
        Ok((compressed, start.elapsed()))
    }

    /// Inverse of [`Codec::compress`], used to verify round-trips.
    pub fn decompress(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        match self {
            Codec::Zstd => {
                zstd::stream::decode_all(bytes).map_err(|e| Error::Compression(e.to_string()))
            }
            Codec::Zlib => {
                let mut decoder = flate2::write::ZlibDecoder::new(Vec::new());
                decoder.write_all(bytes)?;
                Ok(decoder.finish()?)
            }
        }
    }
}

impl std::fmt::Display for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Serializes a chunk of events into its canonical UTF-8 JSON form.
///
/// The encoding is a JSON array of the events' structured representations.
/// Field order is fixed and payload keys are sorted, so identical chunks
/// always serialize to identical bytes.
pub fn serialize_events<'a, I>(events: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let values: Vec<serde_json::Value> =
        events.into_iter().map(serde_json::to_value).collect::<serde_json::Result<_>>()?;
    Ok(serde_json::to_vec(&values)?)
}

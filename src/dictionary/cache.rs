//! Compressed binary cache for compiled dictionaries.
//!
//! A cache file is a gzip stream holding a small header followed by the
//! bincode encoding of a [`PhraseDictionary`]:
//!
//! ```text
//! magic    u32  "PFTC"
//! version  u32
//! checksum u32  CRC32 of the payload
//! length   u64  payload length in bytes
//! payload  [u8; length]
//! ```
//!
//! All integers are little-endian. The layout is private to this crate; the
//! only guarantee is that reading back a written cache yields an equivalent
//! dictionary.

use std::io::{self, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use super::PhraseDictionary;
use crate::error::{PhraseFindError, Result};

/// Magic number at the start of every cache ("PFTC").
pub const CACHE_MAGIC: u32 = 0x5046_5443;

/// Current cache format version.
pub const CACHE_VERSION: u32 = 1;

/// File name suffix of cache files.
pub const CACHE_SUFFIX: &str = ".trie.gz";

/// Write `dictionary` as a compressed cache to `writer`.
pub fn write_cache<W: Write>(dictionary: &PhraseDictionary, writer: W) -> Result<()> {
    let payload = bincode::serialize(dictionary).map_err(|e| {
        PhraseFindError::cache_format(format!("Failed to encode dictionary: {e}"))
    })?;

    let mut encoder = GzEncoder::new(writer, Compression::default());
    encoder.write_u32::<LittleEndian>(CACHE_MAGIC)?;
    encoder.write_u32::<LittleEndian>(CACHE_VERSION)?;
    encoder.write_u32::<LittleEndian>(crc32fast::hash(&payload))?;
    encoder.write_u64::<LittleEndian>(payload.len() as u64)?;
    encoder.write_all(&payload)?;
    encoder.finish()?.flush()?;

    Ok(())
}

/// Read a compressed cache from `reader`.
///
/// Anything that is not a well-formed cache of the current version, including
/// a truncated or non-gzip stream, is reported as
/// [`PhraseFindError::CacheFormat`].
pub fn read_cache<R: Read>(reader: R) -> Result<PhraseDictionary> {
    let mut decoder = MultiGzDecoder::new(reader);

    let magic = decoder.read_u32::<LittleEndian>().map_err(corrupt)?;
    if magic != CACHE_MAGIC {
        return Err(PhraseFindError::cache_format(format!(
            "Invalid cache magic number: {magic:#010x}"
        )));
    }

    let version = decoder.read_u32::<LittleEndian>().map_err(corrupt)?;
    if version != CACHE_VERSION {
        return Err(PhraseFindError::cache_format(format!(
            "Unsupported cache version: {version}"
        )));
    }

    let checksum = decoder.read_u32::<LittleEndian>().map_err(corrupt)?;
    let length = decoder.read_u64::<LittleEndian>().map_err(corrupt)?;

    let mut payload = Vec::new();
    decoder
        .take(length)
        .read_to_end(&mut payload)
        .map_err(corrupt)?;
    if payload.len() as u64 != length {
        return Err(PhraseFindError::cache_format(format!(
            "Truncated cache: expected {length} payload bytes, found {}",
            payload.len()
        )));
    }

    let actual = crc32fast::hash(&payload);
    if actual != checksum {
        return Err(PhraseFindError::cache_format(format!(
            "Checksum mismatch: expected {checksum:#010x}, found {actual:#010x}"
        )));
    }

    bincode::deserialize(&payload)
        .map_err(|e| PhraseFindError::cache_format(format!("Failed to decode dictionary: {e}")))
}

fn corrupt(error: io::Error) -> PhraseFindError {
    PhraseFindError::cache_format(format!("Unreadable cache stream: {error}"))
}

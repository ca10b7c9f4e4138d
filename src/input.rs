//! Input handling for the `ccitt16` command: argument parsing and
//! streaming readers through the engine.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use hex::FromHexError;
use thiserror::Error;

use crate::convention::Convention;
use crate::engine::Crc16;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid hex input: {0}")]
    InvalidHex(#[from] FromHexError),
    #[error("Invalid 16-bit value: {0}")]
    InvalidNumber(String),
    #[error("Unknown convention: {0}")]
    UnknownConvention(String),
}

/// Parse a 16-bit value given as `0x`-prefixed hex or decimal.
pub fn parse_u16(s: &str) -> Result<u16, CliError> {
    let s = s.trim();
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| CliError::InvalidNumber(s.to_string()))
}

/// Decode a hex string. Whitespace, `_`, `:` and an optional leading `0x`
/// are ignored.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, CliError> {
    let trimmed = s.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let digits: String = body
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != ':')
        .collect();

    Ok(hex::decode(digits)?)
}

/// Resolve a convention name for the command line.
pub fn parse_convention(s: &str) -> Result<Convention, CliError> {
    Convention::by_name(s.trim()).ok_or_else(|| CliError::UnknownConvention(s.to_string()))
}

/// Stream `reader` through a register seeded with `seed`.
/// Returns the raw accumulator and the number of bytes read.
pub fn checksum_reader<R: Read>(seed: u16, reader: &mut R) -> io::Result<(u16, u64)> {
    let mut crc = Crc16::new(seed);
    let n = io::copy(reader, &mut crc)?;
    Ok((crc.value(), n))
}

/// Checksum a file, or stdin when `path` is `-`.
pub fn checksum_path(seed: u16, path: &Path) -> Result<(u16, u64), CliError> {
    let io_err = |source| CliError::Io {
        path: path.display().to_string(),
        source,
    };

    if path == Path::new("-") {
        let stdin = io::stdin();
        checksum_reader(seed, &mut stdin.lock()).map_err(io_err)
    } else {
        let mut file = File::open(path).map_err(io_err)?;
        checksum_reader(seed, &mut file).map_err(io_err)
    }
}

//! Table-driven CRC-16/CCITT update.
//!
//! The engine holds no state of its own. Callers pick the seed, own the
//! accumulator between calls and apply any final XOR afterwards.

use std::io;

use crate::table::TABLE;

/// Fold one byte into `crc` with a single table lookup.
#[inline]
pub fn update(crc: u16, byte: u8) -> u16 {
    let index = ((crc >> 8) as u8 ^ byte) as usize;
    (crc << 8) ^ TABLE[index]
}

/// Fold [`update`] over `data`. Returns `seed` for empty input.
pub fn compute(seed: u16, data: &[u8]) -> u16 {
    data.iter().fold(seed, |crc, &byte| update(crc, byte))
}

/// A running CRC register for streaming input.
///
/// `value()` is the raw accumulator: no reflection, no final XOR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crc16 {
    crc: u16,
}

impl Crc16 {
    pub const fn new(seed: u16) -> Self {
        Self { crc: seed }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.crc = compute(self.crc, data);
    }

    pub fn update_byte(&mut self, byte: u8) {
        self.crc = update(self.crc, byte);
    }

    pub const fn value(&self) -> u16 {
        self.crc
    }
}

impl From<Crc16> for u16 {
    fn from(crc: Crc16) -> Self {
        crc.value()
    }
}

/// Lets a reader be checksummed with `io::copy` without buffering it.
impl io::Write for Crc16 {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! Bit-by-bit CRC-16/CCITT (poly 0x1021, MSB first).
//!
//! This is the slow path: eight shift/XOR steps per input byte. It builds the
//! lookup table at compile time and serves as the reference the table engine
//! is checked against.

use crate::table::POLY;

/// Feed one byte through the register, one bit at a time.
pub const fn update(crc: u16, byte: u8) -> u16 {
    let mut crc = crc ^ ((byte as u16) << 8);
    let mut bit = 0;
    while bit < 8 {
        crc = if crc & 0x8000 != 0 {
            (crc << 1) ^ POLY
        } else {
            crc << 1
        };
        bit += 1;
    }
    crc
}

/// Fold [`update`] over `data`, starting from `seed`.
pub const fn compute(seed: u16, data: &[u8]) -> u16 {
    let mut crc = seed;
    let mut i = 0;
    while i < data.len() {
        crc = update(crc, data[i]);
        i += 1;
    }
    crc
}

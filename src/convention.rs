//! Seed and final-XOR pairs used by common CCITT-family protocols.
//!
//! These belong to the protocol layer. The engine never reads them; a caller
//! picks one and applies `finish` to the raw accumulator itself.

use crate::engine::{self, Crc16};

/// Parameters a protocol wraps around the raw CRC-16/CCITT engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Convention {
    pub name: &'static str,
    pub seed: u16,
    pub xorout: u16,
    /// Expected result for the ASCII string `"123456789"`.
    pub check: u16,
}

/// XMODEM, ZMODEM, Redis cluster slots.
pub const XMODEM: Convention = Convention {
    name: "xmodem",
    seed: 0x0000,
    xorout: 0x0000,
    check: 0x31C3,
};

/// Also known as CRC-16/IBM-3740 and AUTOSAR CRC-16.
pub const CCITT_FALSE: Convention = Convention {
    name: "ccitt-false",
    seed: 0xFFFF,
    xorout: 0x0000,
    check: 0x29B1,
};

/// The seed is what 0xFFFF becomes after two zero bytes.
pub const AUG_CCITT: Convention = Convention {
    name: "aug-ccitt",
    seed: 0x1D0F,
    xorout: 0x0000,
    check: 0xE5CC,
};

pub const GENIBUS: Convention = Convention {
    name: "genibus",
    seed: 0xFFFF,
    xorout: 0xFFFF,
    check: 0xD64E,
};

impl Convention {
    pub const ALL: [Convention; 4] = [XMODEM, CCITT_FALSE, AUG_CCITT, GENIBUS];

    pub fn by_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// A register seeded for this convention.
    pub const fn start(&self) -> Crc16 {
        Crc16::new(self.seed)
    }

    /// Apply the final XOR to a raw accumulator.
    pub const fn finish(&self, crc: u16) -> u16 {
        crc ^ self.xorout
    }

    pub fn checksum(&self, data: &[u8]) -> u16 {
        self.finish(engine::compute(self.seed, data))
    }
}

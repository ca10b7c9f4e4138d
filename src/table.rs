//! The 256-entry CRC-16/CCITT lookup table.

use crate::bitwise;

/// Generator polynomial x^16 + x^12 + x^5 + 1, MSB-first form.
pub const POLY: u16 = 0x1021;

/// Number of entries in [`TABLE`].
pub const TABLE_LENGTH: usize = 256;

/// Size of [`TABLE`] in bytes.
pub const TABLE_SIZE: usize = TABLE_LENGTH * size_of::<u16>();

/// `TABLE[b]` is the CRC remainder of byte `b` run through an all-zero
/// register. Built at compile time and never written afterwards.
pub static TABLE: [u16; TABLE_LENGTH] = generate();

/// Look up the partial remainder for `byte`.
#[inline]
pub fn table(byte: u8) -> u16 {
    TABLE[byte as usize]
}

/// Run the bitwise algorithm once per byte value.
///
/// `bitwise::update(0, b)` starts from `b << 8` and shifts it eight times,
/// which is exactly the per-entry construction.
pub const fn generate() -> [u16; TABLE_LENGTH] {
    let mut table = [0u16; TABLE_LENGTH];
    let mut b = 0;
    while b < TABLE_LENGTH {
        table[b] = bitwise::update(0, b as u8);
        b += 1;
    }
    table
}

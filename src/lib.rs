//! Table-driven CRC-16/CCITT (poly 0x1021, no reflection).
//! Provides the lookup table, the streaming update, a bitwise reference,
//! common seed conventions and helpers for CRC trailers.

pub mod bitwise;
pub mod convention;
pub mod engine;
pub mod input;
pub mod table;
pub mod trailer;

pub use convention::Convention;
pub use engine::{Crc16, compute as crc16_compute, update as crc16_update};
pub use table::TABLE;

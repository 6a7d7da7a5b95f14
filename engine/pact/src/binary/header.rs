//! Frozen constants of the v0 contract layout.
//!
//! Every header byte of the data table section is written bit-reversed
//! (bit 0 swapped with bit 7, bit 1 with bit 6, ...). Raw string bytes are
//! the only part of the section written as-is.

/// Leading byte of every encoded contract.
pub const CONTRACT_VERSION: u8 = 0;
/// Kind discriminant of a string-like entry, before bit reversal.
pub const KIND_STRING_LIKE: u8 = 0;
/// Kind discriminant of a numeric entry, before bit reversal.
pub const KIND_NUMERIC: u8 = 1;
/// Width in bytes of a numeric slot.
pub const NUMERIC_WIDTH: usize = 8;
/// Largest number of entries a data table can declare.
pub const MAX_TABLE_LEN: usize = u8::MAX as usize;

#[inline]
pub(crate) fn push_reversed(buf: &mut Vec<u8>, byte: u8) {
    buf.push(byte.reverse_bits());
}

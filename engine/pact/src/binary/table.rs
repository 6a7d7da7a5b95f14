use super::header::{push_reversed, KIND_NUMERIC, KIND_STRING_LIKE, NUMERIC_WIDTH};
use crate::value::{Numeric, PactType, StringLike};

/// Append the data table section for `values` to `buf`.
///
/// The caller guarantees `values.len()` fits the one-byte count.
pub(crate) fn write_table(values: &[PactType], buf: &mut Vec<u8>) {
    buf.reserve(1 + values.iter().map(encoded_entry_len).sum::<usize>());
    push_reversed(buf, values.len() as u8);
    for value in values {
        write_entry(value, buf);
    }
}

pub(crate) fn write_entry(value: &PactType, buf: &mut Vec<u8>) {
    match value {
        PactType::Numeric(numeric) => write_numeric(*numeric, buf),
        PactType::StringLike(string) => write_string_like(string, buf),
    }
}

pub(crate) fn encoded_entry_len(value: &PactType) -> usize {
    match value {
        PactType::Numeric(_) => 2 + NUMERIC_WIDTH,
        PactType::StringLike(string) => 2 + string.len(),
    }
}

fn write_numeric(Numeric(value): Numeric, buf: &mut Vec<u8>) {
    push_reversed(buf, KIND_NUMERIC);
    push_reversed(buf, NUMERIC_WIDTH as u8);
    for byte in value.to_le_bytes() {
        push_reversed(buf, byte);
    }
}

fn write_string_like(string: &StringLike, buf: &mut Vec<u8>) {
    push_reversed(buf, KIND_STRING_LIKE);
    // StringLike::new bounds the length to one byte.
    push_reversed(buf, string.len() as u8);
    buf.extend_from_slice(string.as_bytes());
}

//! Checks against payloads produced by the reference encoder.
//!
//! Numeric slot layout and the string length tag are frozen by reference
//! vectors rather than by a derivation, so every new vector from the
//! reference encoder should be run through [`verify_payload`].

use crate::contract::Contract;
use crate::error::{PactError, PactResult};

/// Encode `contract` and compare it byte for byte with `expected`.
pub fn verify_payload(contract: &Contract, expected: &[u8]) -> PactResult<()> {
    let actual = contract.encode();
    if actual == expected {
        return Ok(());
    }
    let first_byte_mismatch = divergence_offset(expected, &actual);
    tracing::warn!(
        expected_len = expected.len(),
        actual_len = actual.len(),
        ?first_byte_mismatch,
        "payload diverges from reference vector"
    );
    Err(PactError::ConformanceMismatch {
        expected_len: expected.len(),
        actual_len: actual.len(),
        first_byte_mismatch,
        expected_hex: hex::encode(expected),
        actual_hex: hex::encode(&actual),
    })
}

/// Offset of the first byte where `actual` leaves `expected`, counting a
/// length difference as a divergence at the shorter length.
fn divergence_offset(expected: &[u8], actual: &[u8]) -> Option<usize> {
    expected
        .iter()
        .zip(actual)
        .position(|(want, got)| want != got)
        .or_else(|| (expected.len() != actual.len()).then_some(expected.len().min(actual.len())))
}

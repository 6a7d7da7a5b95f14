use thiserror::Error;

/// Result alias used across the crate.
pub type PactResult<T> = Result<T, PactError>;

/// Error variants surfaced while building and encoding Pact contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PactError {
    #[error("{operand} operand index {index} does not fit in 4 bits")]
    InvalidOperand { operand: &'static str, index: u8 },
    #[error("invalid numeric literal: {0:?}")]
    InvalidNumericLiteral(String),
    #[error("{what} exceeds the encodable limit of {limit}")]
    ValueTooLarge { what: &'static str, limit: u64 },
    #[error("unknown {kind} opcode {code}")]
    UnknownOpcode { kind: &'static str, code: u8 },
    #[error(
        "payload does not match reference vector: {actual_len} bytes vs {expected_len}, first byte mismatch at {first_byte_mismatch:?} (expected {expected_hex}, got {actual_hex})"
    )]
    ConformanceMismatch {
        expected_len: usize,
        actual_len: usize,
        first_byte_mismatch: Option<usize>,
        expected_hex: String,
        actual_hex: String,
    },
}

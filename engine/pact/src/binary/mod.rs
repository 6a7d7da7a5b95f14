mod header;
pub(crate) mod table;

pub use header::{CONTRACT_VERSION, KIND_NUMERIC, KIND_STRING_LIKE, MAX_TABLE_LEN, NUMERIC_WIDTH};

use crate::opcode::OpCode;

/// Concatenate instruction encodings in evaluation order.
pub fn encode_bytecode(ops: &[OpCode]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(ops.iter().map(OpCode::encoded_len).sum());
    for op in ops {
        let start = buf.len();
        op.encode_into(&mut buf);
        tracing::trace!(
            offset = start,
            len = op.encoded_len(),
            leading = buf[start],
            "encoded instruction"
        );
    }
    buf
}

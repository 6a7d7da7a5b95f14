use crate::binary::CONTRACT_VERSION;
use crate::data_table::DataTable;
use crate::error::PactResult;

/// A data table paired with the instruction stream that references it.
///
/// The bytecode is opaque here: it is stored and emitted verbatim, and
/// operand indices are not checked against the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Contract {
    data_table: DataTable,
    bytecode: Vec<u8>,
}

impl Contract {
    pub fn new(data_table: DataTable, bytecode: impl Into<Vec<u8>>) -> Self {
        Self {
            data_table,
            bytecode: bytecode.into(),
        }
    }

    /// Build a contract from string literals the way the JS bindings do.
    pub fn from_literals<S: AsRef<str>>(literals: &[S], bytecode: &[u8]) -> PactResult<Self> {
        Ok(Self::new(DataTable::from_literals(literals)?, bytecode))
    }

    pub fn data_table(&self) -> &DataTable {
        &self.data_table
    }

    /// The instruction stream exactly as supplied.
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    pub fn encoded_len(&self) -> usize {
        1 + self.data_table.encoded_len() + self.bytecode.len()
    }

    /// Append the contract payload to `buf`.
    pub fn encode_into(&self, buf: &mut Vec<u8>) {
        buf.push(CONTRACT_VERSION);
        self.data_table.encode(buf);
        buf.extend_from_slice(&self.bytecode);
    }

    /// The contract payload: version byte, data table section, bytecode.
    pub fn encode(&self) -> Vec<u8> {
        let mut payload = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut payload);
        tracing::debug!(
            entries = self.data_table.len(),
            bytecode_len = self.bytecode.len(),
            payload_len = payload.len(),
            "encoded contract"
        );
        payload
    }
}

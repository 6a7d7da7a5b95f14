use std::slice;

use crate::binary::{table, MAX_TABLE_LEN};
use crate::error::{PactError, PactResult};
use crate::value::PactType;

/// A contract's ordered table of constants.
///
/// Comparators address entries by position, so insertion order is kept and
/// nothing is sorted or deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DataTable(Vec<PactType>);

impl DataTable {
    pub fn new(values: Vec<PactType>) -> PactResult<Self> {
        if values.len() > MAX_TABLE_LEN {
            return Err(PactError::ValueTooLarge {
                what: "data table length",
                limit: MAX_TABLE_LEN as u64,
            });
        }
        Ok(Self(values))
    }

    /// Build a table from string literals using [`PactType::classify`].
    pub fn from_literals<S: AsRef<str>>(literals: &[S]) -> PactResult<Self> {
        let values = literals
            .iter()
            .map(|literal| PactType::classify(literal.as_ref()))
            .collect::<PactResult<Vec<_>>>()?;
        Self::new(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PactType> {
        self.0.get(index)
    }

    pub fn iter(&self) -> slice::Iter<'_, PactType> {
        self.0.iter()
    }

    /// Number of bytes [`DataTable::encode`] appends.
    pub fn encoded_len(&self) -> usize {
        1 + self.0.iter().map(table::encoded_entry_len).sum::<usize>()
    }

    /// Append the encoded table section to `buf`.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        table::write_table(&self.0, buf);
    }
}

impl AsRef<[PactType]> for DataTable {
    fn as_ref(&self) -> &[PactType] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a DataTable {
    type Item = &'a PactType;
    type IntoIter = slice::Iter<'a, PactType>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Numeric, StringLike};

    #[test]
    fn it_encodes() {
        let table = DataTable::new(vec![
            PactType::Numeric(Numeric(111)),
            PactType::Numeric(Numeric(333)),
            PactType::StringLike(StringLike::new(b"testing".to_vec()).unwrap()),
        ])
        .unwrap();
        let mut encoded: Vec<u8> = Vec::new();
        table.encode(&mut encoded);

        let mut expected: Vec<u8> = vec![
            3, // length
            1, 8, 111, 0, 0, 0, 0, 0, 0, 0, // Numeric(111)
            1, 8, 77, 1, 0, 0, 0, 0, 0, 0, // Numeric(333)
            0, 7, // StringLike header
        ];
        expected = expected.into_iter().map(u8::reverse_bits).collect();
        expected.extend_from_slice(b"testing");

        assert_eq!(encoded, expected);
        assert_eq!(table.encoded_len(), expected.len());
    }

    #[test]
    fn empty_table_is_a_single_zero_byte() {
        let mut encoded = Vec::new();
        DataTable::default().encode(&mut encoded);
        assert_eq!(encoded, vec![0]);
    }

    #[test]
    fn table_length_is_bounded() {
        let values = vec![PactType::Numeric(Numeric(1)); MAX_TABLE_LEN + 1];
        assert_eq!(
            DataTable::new(values),
            Err(PactError::ValueTooLarge {
                what: "data table length",
                limit: 255
            })
        );
        let values = vec![PactType::Numeric(Numeric(1)); MAX_TABLE_LEN];
        let table = DataTable::new(values).unwrap();
        let mut encoded = Vec::new();
        table.encode(&mut encoded);
        assert_eq!(encoded[0], 0xFF);
    }

    #[test]
    fn from_literals_classifies_each_entry() {
        let table = DataTable::from_literals(&["10", "hello, world"]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(0), Some(&PactType::Numeric(Numeric(10))));
        assert_eq!(table.get(1).map(PactType::kind), Some("string-like"));
    }
}

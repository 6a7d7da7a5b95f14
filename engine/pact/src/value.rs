use std::fmt::{self, Display, Formatter};
use std::num::IntErrorKind;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PactError, PactResult};

/// Longest string-like value whose length fits the one-byte length tag.
pub const MAX_STRING_LEN: usize = u8::MAX as usize;

/// Unsigned numeric constant. Encodes into a fixed 8 byte slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Numeric(pub u64);

impl Numeric {
    /// Parse a base-10 literal such as `"10"` into its canonical value.
    ///
    /// Only ASCII digits are accepted; signs are rejected.
    pub fn parse(literal: &str) -> PactResult<Self> {
        if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PactError::InvalidNumericLiteral(literal.to_owned()));
        }
        match literal.parse::<u64>() {
            Ok(value) => Ok(Numeric(value)),
            Err(err) if *err.kind() == IntErrorKind::PosOverflow => Err(PactError::ValueTooLarge {
                what: "numeric literal",
                limit: u64::MAX,
            }),
            Err(_) => Err(PactError::InvalidNumericLiteral(literal.to_owned())),
        }
    }
}

impl FromStr for Numeric {
    type Err = PactError;

    fn from_str(s: &str) -> PactResult<Self> {
        Self::parse(s)
    }
}

impl Display for Numeric {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Text or opaque byte constant of at most [`MAX_STRING_LEN`] bytes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>"))]
pub struct StringLike(Vec<u8>);

impl StringLike {
    pub fn new(bytes: impl Into<Vec<u8>>) -> PactResult<Self> {
        let bytes = bytes.into();
        if bytes.len() > MAX_STRING_LEN {
            return Err(PactError::ValueTooLarge {
                what: "string-like value length",
                limit: MAX_STRING_LEN as u64,
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value as UTF-8, if it is valid text.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }
}

impl TryFrom<Vec<u8>> for StringLike {
    type Error = PactError;

    fn try_from(bytes: Vec<u8>) -> PactResult<Self> {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for StringLike {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A data table constant. The kind is fixed when the value is built and is
/// never re-inferred during encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PactType {
    StringLike(StringLike),
    Numeric(Numeric),
}

impl PactType {
    /// A numeric constant from its decimal literal.
    pub fn numeric(literal: &str) -> PactResult<Self> {
        Numeric::parse(literal).map(PactType::Numeric)
    }

    /// A text constant.
    pub fn text(value: impl Into<String>) -> PactResult<Self> {
        StringLike::new(value.into().into_bytes()).map(PactType::StringLike)
    }

    /// Numeric when `literal` is an unsigned 64-bit integer, text otherwise.
    ///
    /// This is the rule the JS bindings apply to their string-typed table
    /// input, so overflowing digit strings are kept as text.
    pub fn classify(literal: &str) -> PactResult<Self> {
        match literal.parse::<u64>() {
            Ok(value) => Ok(PactType::Numeric(Numeric(value))),
            Err(_) => Self::text(literal),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            PactType::StringLike(_) => "string-like",
            PactType::Numeric(_) => "numeric",
        }
    }
}

impl From<Numeric> for PactType {
    fn from(value: Numeric) -> Self {
        PactType::Numeric(value)
    }
}

impl From<StringLike> for PactType {
    fn from(value: StringLike) -> Self {
        PactType::StringLike(value)
    }
}

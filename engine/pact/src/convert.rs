//! Conversions from host values into data table constants.

use crate::error::{PactError, PactResult};
use crate::value::{Numeric, PactType, StringLike};

/// Fallible conversion into a [`PactType`].
///
/// The type parameter only keeps the numeric and byte-like blanket impls
/// apart; callers never name it.
pub trait IntoPact<I> {
    fn into_pact(self) -> PactResult<PactType>;
}

/// Integers that fit in a u64.
impl<T: TryInto<u64> + Copy> IntoPact<&T> for T {
    fn into_pact(self) -> PactResult<PactType> {
        let value: u64 = self.try_into().map_err(|_| PactError::ValueTooLarge {
            what: "integer value",
            limit: u64::MAX,
        })?;
        Ok(PactType::Numeric(Numeric(value)))
    }
}

/// Anything viewable as bytes.
impl<T: AsRef<[u8]> + ?Sized> IntoPact<&T> for &T {
    fn into_pact(self) -> PactResult<PactType> {
        StringLike::new(self.as_ref().to_vec()).map(PactType::StringLike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_numeric() {
        let cases = vec![
            (0_u8.into_pact(), 0),
            (1_u16.into_pact(), 1),
            (2_u32.into_pact(), 2),
            (3_u64.into_pact(), 3),
            (4_u128.into_pact(), 4),
        ];
        for (lhs, rhs) in cases {
            assert_eq!(lhs, Ok(PactType::Numeric(Numeric(rhs))));
        }
    }

    #[test]
    fn rejects_out_of_range_integers() {
        assert!(matches!(
            (u64::MAX as u128 + 1).into_pact(),
            Err(PactError::ValueTooLarge { .. })
        ));
        assert!(matches!(
            (-1_i32).into_pact(),
            Err(PactError::ValueTooLarge { .. })
        ));
    }

    #[test]
    fn converts_string_like() {
        let expected = PactType::StringLike(StringLike::new(b"test".to_vec()).unwrap());
        assert_eq!("test".into_pact(), Ok(expected.clone()));

        let v: Vec<u8> = vec![116, 101, 115, 116];
        assert_eq!(v.into_pact(), Ok(expected.clone()));

        let s = String::from("test");
        assert_eq!(s.into_pact(), Ok(expected));

        let h256 = b"0x012345678910111213141516171819";
        assert_eq!(
            h256.into_pact(),
            Ok(PactType::StringLike(StringLike::new(h256.to_vec()).unwrap()))
        );
    }

    #[test]
    fn oversized_bytes_are_rejected() {
        let long = vec![0u8; 256];
        assert!(matches!(
            long.into_pact(),
            Err(PactError::ValueTooLarge { .. })
        ));
    }
}

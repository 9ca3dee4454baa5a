//! Conversions between packed bits and the interchange forms: binary text,
//! raw bytes, lowercase hex and unsigned integers.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;

use crate::sequence::Result;
use crate::{BitSequenceError, PackedBitSequence};

impl PackedBitSequence {
    /// Renders the bits as `'0'`/`'1'` text, index 0 first.
    pub fn to_binary_string(&self) -> String {
        self.iter().map(|b| if b == 1 { '1' } else { '0' }).collect()
    }

    /// Copy of the packed buffer. Padding bits are zero.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Lowercase hex of [`to_bytes`](Self::to_bytes); empty for an empty
    /// sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let bits = PackedBitSequence::from_binary_str("1010111")?;
    /// assert_eq!(bits.to_hex(), "ae");
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Decodes hex (either case) into bytes and wraps them as by
    /// [`from_bytes`](Self::from_bytes).
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        tracing::trace!(bytes = bytes.len(), "decoded hex bit sequence");
        Ok(Self::from_bytes(bytes))
    }

    /// Minimal binary rendering of `value`, left-padded with zeros to
    /// `length` when given. Zero renders as the single bit `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// assert_eq!(PackedBitSequence::from_integer(13u32, None)?.to_binary_string(), "1101");
    /// assert_eq!(PackedBitSequence::from_integer(13u32, Some(8))?.to_binary_string(), "00001101");
    /// assert!(PackedBitSequence::from_integer(13u32, Some(3)).is_err());
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn from_integer(value: impl Into<BigUint>, length: Option<usize>) -> Result<Self> {
        let value = value.into();
        let natural = (value.bits() as usize).max(1);
        let len = match length {
            Some(len) if len < natural => {
                return Err(BitSequenceError::InvalidArgument(
                    "length is too small to fit the integer",
                ));
            }
            Some(len) => len,
            None => natural,
        };
        let mut seq = Self::zeros(len);
        for k in 0..natural {
            if value.bit(k as u64) {
                seq.put(len - 1 - k, true);
            }
        }
        Ok(seq)
    }

    /// Reads the bits as an unsigned base-2 integer, index 0 most
    /// significant. An empty sequence is 0.
    pub fn to_integer(&self) -> BigUint {
        let padding = self.as_bytes().len() * 8 - self.len();
        BigUint::from_bytes_be(self.as_bytes()) >> padding
    }

    /// `size` independent uniform bits from the thread-local generator.
    #[cfg(feature = "random")]
    pub fn random(size: usize) -> Self {
        Self::random_with(size, &mut rand::rng())
    }

    /// `size` independent uniform bits drawn from `rng`.
    #[cfg(feature = "random")]
    pub fn random_with<R: rand::Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut bytes = alloc::vec![0u8; crate::bit_ops::bytes_for(size)];
        rng.fill(bytes.as_mut_slice());
        crate::bit_ops::clear_excess(&mut bytes, size);
        Self::from_raw_parts(bytes, size)
    }
}

impl fmt::Display for PackedBitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.iter() {
            f.write_str(if b == 1 { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for PackedBitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_DISPLAY: usize = 64;
        const HALF_DISPLAY: usize = MAX_DISPLAY / 2;

        write!(f, "PackedBitSequence[")?;
        let digit = |i: usize| if self.bit(i) { "1" } else { "0" };
        if self.len() <= MAX_DISPLAY {
            for i in 0..self.len() {
                f.write_str(digit(i))?;
            }
        } else {
            for i in 0..HALF_DISPLAY {
                f.write_str(digit(i))?;
            }
            f.write_str("...")?;
            for i in self.len() - HALF_DISPLAY..self.len() {
                f.write_str(digit(i))?;
            }
        }
        write!(f, "; {}]", self.len())
    }
}

impl FromStr for PackedBitSequence {
    type Err = BitSequenceError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_binary_str(s)
    }
}

impl From<&[bool]> for PackedBitSequence {
    fn from(bits: &[bool]) -> Self {
        Self::from_bools(bits)
    }
}

impl From<Vec<bool>> for PackedBitSequence {
    fn from(bits: Vec<bool>) -> Self {
        Self::from_bools(&bits)
    }
}

impl From<PackedBitSequence> for Vec<bool> {
    fn from(seq: PackedBitSequence) -> Self {
        seq.iter().map(|b| b == 1).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn binary_text_roundtrip() {
        for s in ["", "0", "1", "10110", "1111111100000001"] {
            let seq: PackedBitSequence = s.parse().unwrap();
            assert_eq!(seq.to_binary_string(), s);
            assert_eq!(format!("{}", seq), s);
        }
    }

    #[test]
    fn hex_roundtrip_lowercases() {
        let seq = PackedBitSequence::from_hex("DEADbeef").unwrap();
        assert_eq!(seq.len(), 32);
        assert_eq!(seq.to_hex(), "deadbeef");
        assert_eq!(PackedBitSequence::new().to_hex(), "");
        assert!(PackedBitSequence::from_hex("").unwrap().is_empty());
    }

    #[test]
    fn malformed_hex_fails() {
        assert!(matches!(
            PackedBitSequence::from_hex("abc"),
            Err(BitSequenceError::InvalidHex(hex::FromHexError::OddLength))
        ));
        assert!(matches!(
            PackedBitSequence::from_hex("zz"),
            Err(BitSequenceError::InvalidHex(
                hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }
            ))
        ));
    }

    #[test]
    fn integers() {
        let seq = PackedBitSequence::from_binary_str("1101").unwrap();
        assert_eq!(seq.to_integer(), BigUint::from(13u32));
        assert_eq!(PackedBitSequence::new().to_integer(), BigUint::ZERO);
        assert_eq!(
            PackedBitSequence::from_integer(0u32, None).unwrap().to_binary_string(),
            "0"
        );
        let max = PackedBitSequence::from_integer(u128::MAX, None).unwrap();
        assert_eq!(max.len(), 128);
        assert_eq!(max.to_integer(), BigUint::from(u128::MAX));
    }

    #[test]
    fn integers_have_no_width_limit() {
        let mut wide = PackedBitSequence::zeros(129);
        wide.set(0, 1).unwrap();
        assert!(wide.is_power_of_two());
        assert_eq!(wide.to_integer(), BigUint::from(1u32) << 128usize);

        let mut seq = PackedBitSequence::zeros(300);
        seq.set(299, 1).unwrap();
        assert_eq!(seq.to_integer(), BigUint::from(1u32));
        seq.set(0, 1).unwrap();
        let value = seq.to_integer();
        assert_eq!(value, (BigUint::from(1u32) << 299usize) + 1u32);

        let back = PackedBitSequence::from_integer(value, Some(300)).unwrap();
        assert_eq!(back, seq);
    }

    #[test]
    fn debug_is_abbreviated() {
        let short = PackedBitSequence::from_binary_str("101").unwrap();
        assert_eq!(format!("{:?}", short), "PackedBitSequence[101; 3]");
        let long = PackedBitSequence::ones(100);
        let rendered = format!("{:?}", long);
        assert!(rendered.contains("..."));
        assert!(rendered.ends_with("; 100]"));
    }

    #[test]
    fn bool_conversions() {
        let seq = PackedBitSequence::from(vec![true, false, true]);
        assert_eq!(seq.to_binary_string(), "101");
        let back: Vec<bool> = seq.into();
        assert_eq!(back, vec![true, false, true]);
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_keeps_padding_clear() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for size in [0, 1, 9, 63, 200] {
            let seq = PackedBitSequence::random_with(size, &mut rng);
            assert_eq!(seq.len(), size);
            assert!(seq.padding_is_clear());
        }
        assert_eq!(PackedBitSequence::random(17).len(), 17);
    }
}

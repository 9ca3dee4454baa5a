//! Inputs a sequence can be built from, or extended with.
//!
//! ```rust
//! use packed_bit_sequence::{BitSource, PackedBitSequence};
//!
//! let a = PackedBitSequence::from_source("1011")?;
//! let b = PackedBitSequence::from_source(&[true, false][..])?;
//! let c = PackedBitSequence::from_source(BitSource::Filled { len: 3, fill: 1 })?;
//! assert_eq!(a.len() + b.len() + c.len(), 9);
//! # Ok::<(), packed_bit_sequence::BitSequenceError>(())
//! ```

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::{BitSequenceError, PackedBitSequence};

#[derive(Debug, Clone, Copy)]
pub enum BitSource<'a> {
    /// `len` bits, all equal to `fill` (0 or 1).
    Filled { len: usize, fill: u8 },
    /// Text over the alphabet `{'0', '1'}`.
    Binary(&'a str),
    Bools(&'a [bool]),
    Sequence(&'a PackedBitSequence),
}

impl<'a> BitSource<'a> {
    /// Validate the input and produce packed bits, borrowing when the input
    /// already is a sequence.
    pub fn resolve(self) -> Result<Cow<'a, PackedBitSequence>, BitSequenceError> {
        match self {
            BitSource::Filled { len, fill } => {
                PackedBitSequence::with_fill(len, fill).map(Cow::Owned)
            }
            BitSource::Binary(s) => PackedBitSequence::from_binary_str(s).map(Cow::Owned),
            BitSource::Bools(bits) => Ok(Cow::Owned(PackedBitSequence::from_bools(bits))),
            BitSource::Sequence(seq) => Ok(Cow::Borrowed(seq)),
        }
    }

    /// Number of bits this input describes.
    pub fn bit_len(&self) -> usize {
        match self {
            BitSource::Filled { len, .. } => *len,
            BitSource::Binary(s) => s.len(),
            BitSource::Bools(bits) => bits.len(),
            BitSource::Sequence(seq) => seq.len(),
        }
    }
}

impl From<usize> for BitSource<'_> {
    fn from(len: usize) -> Self {
        BitSource::Filled { len, fill: 0 }
    }
}

impl<'a> From<&'a str> for BitSource<'a> {
    fn from(s: &'a str) -> Self {
        BitSource::Binary(s)
    }
}

impl<'a> From<&'a [bool]> for BitSource<'a> {
    fn from(bits: &'a [bool]) -> Self {
        BitSource::Bools(bits)
    }
}

impl<'a> From<&'a Vec<bool>> for BitSource<'a> {
    fn from(bits: &'a Vec<bool>) -> Self {
        BitSource::Bools(bits.as_slice())
    }
}

impl<'a> From<&'a PackedBitSequence> for BitSource<'a> {
    fn from(seq: &'a PackedBitSequence) -> Self {
        BitSource::Sequence(seq)
    }
}

impl<'a> TryFrom<BitSource<'a>> for PackedBitSequence {
    type Error = BitSequenceError;

    fn try_from(source: BitSource<'a>) -> Result<Self, Self::Error> {
        source.resolve().map(Cow::into_owned)
    }
}

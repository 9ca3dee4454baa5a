//! The packed bit sequence itself: construction, indexed access and
//! structural mutation.
//!
//! # Examples
//!
//! ```rust
//! use packed_bit_sequence::PackedBitSequence;
//!
//! let mut bits = PackedBitSequence::from_binary_str("011")?;
//! bits.insert(0, 1)?;
//! assert_eq!(bits.to_binary_string(), "1011");
//!
//! assert_eq!(bits.pop(Some(0))?, 1);
//! assert_eq!(bits.to_binary_string(), "011");
//! # Ok::<(), packed_bit_sequence::BitSequenceError>(())
//! ```
//!
//! ## Padding
//!
//! ```rust
//! use packed_bit_sequence::PackedBitSequence;
//!
//! // Ten ones occupy two bytes; the six trailing bits of the second byte stay zero.
//! let bits = PackedBitSequence::ones(10);
//! assert_eq!(bits.as_bytes(), &[0xFF, 0xC0]);
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::bit_ops::{self, bytes_for};
use crate::index::SliceIndices;
use crate::{BitSequenceError, BitSource};

pub(crate) type Result<T> = core::result::Result<T, BitSequenceError>;

/// Check that `value` is a bit.
#[inline(always)]
pub(crate) fn validate_bit(value: u8) -> Result<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        v => Err(BitSequenceError::InvalidBitValue(v)),
    }
}

/// Check that `s` only holds `'0'` and `'1'`.
pub(crate) fn validate_binary(s: &str) -> Result<()> {
    match s.chars().enumerate().find(|(_, c)| !matches!(c, '0' | '1')) {
        Some((position, digit)) => Err(BitSequenceError::InvalidBinaryDigit { digit, position }),
        None => Ok(()),
    }
}

/// A growable sequence of bits packed eight to a byte, most significant bit
/// first.
///
/// `bytes.len()` is always `ceil(len / 8)` and every bit of the final byte
/// past `len` is zero, so the derived equality and hash compare logical
/// contents.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct PackedBitSequence {
    bytes: Vec<u8>,
    len: usize,
}

impl PackedBitSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `bits` bits.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes_for(bits)),
            len: 0,
        }
    }

    /// `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self {
            bytes: vec![0u8; bytes_for(len)],
            len,
        }
    }

    /// `len` one bits.
    pub fn ones(len: usize) -> Self {
        let mut bytes = vec![0xFFu8; bytes_for(len)];
        bit_ops::clear_excess(&mut bytes, len);
        Self { bytes, len }
    }

    /// `len` bits all equal to `fill`.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// assert_eq!(PackedBitSequence::with_fill(3, 1)?.to_binary_string(), "111");
    /// assert!(PackedBitSequence::with_fill(3, 2).is_err());
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn with_fill(len: usize, fill: u8) -> Result<Self> {
        Ok(if validate_bit(fill)? {
            Self::ones(len)
        } else {
            Self::zeros(len)
        })
    }

    /// Builds a sequence from any supported input.
    pub fn from_source<'a>(source: impl Into<BitSource<'a>>) -> Result<Self> {
        Self::try_from(source.into())
    }

    /// Parses text over `{'0', '1'}`; index 0 is the first character.
    pub fn from_binary_str(s: &str) -> Result<Self> {
        validate_binary(s)?;
        let mut seq = Self::zeros(s.len());
        for (i, c) in s.bytes().enumerate() {
            if c == b'1' {
                bit_ops::set_bit(&mut seq.bytes, i, true);
            }
        }
        Ok(seq)
    }

    pub fn from_bools(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    /// Wraps raw packed bytes. The length is always `bytes.len() * 8`: any
    /// padding the bytes were exported with becomes ordinary bits.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        let len = bytes.len() * 8;
        Self { bytes, len }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bits that fit in the current allocation without regrowing.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity() * 8
    }

    /// The packed buffer, padding included (always zero).
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(BitSequenceError::IndexOutOfBounds(index, self.len))
        }
    }

    #[inline]
    pub(crate) fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        bit_ops::get_bit(&self.bytes, index)
    }

    #[inline]
    pub(crate) fn put(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len);
        bit_ops::set_bit(&mut self.bytes, index, value);
    }

    /// Reads the bit at `index`.
    pub fn get(&self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        Ok(self.bit(index) as u8)
    }

    /// Writes `value` (0 or 1) at `index`.
    pub fn set(&mut self, index: usize, value: u8) -> Result<()> {
        self.check_index(index)?;
        let value = validate_bit(value)?;
        self.put(index, value);
        Ok(())
    }

    pub fn first(&self) -> Option<u8> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<u8> {
        self.len.checked_sub(1).map(|i| self.bit(i) as u8)
    }

    /// Sets every bit to `value`.
    pub fn fill_all(&mut self, value: u8) -> Result<()> {
        let byte = if validate_bit(value)? { 0xFF } else { 0x00 };
        self.bytes.fill(byte);
        bit_ops::clear_excess(&mut self.bytes, self.len);
        Ok(())
    }

    /// Copies a `start:stop:step` selection into a new sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let bits = PackedBitSequence::from_binary_str("110010")?;
    /// assert_eq!(bits.slice(Some(1), Some(4), None)?.to_binary_string(), "100");
    /// assert_eq!(bits.slice(None, None, Some(-1))?.to_binary_string(), "010011");
    /// assert_eq!(bits.slice(Some(-2), None, None)?.to_binary_string(), "10");
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self> {
        let indices = SliceIndices::resolve(self.len, start, stop, step)?;
        if indices.is_empty() {
            return Ok(Self::new());
        }
        let mut out = Self::zeros(indices.len());
        for (dst, src) in indices.iter().enumerate() {
            if self.bit(src) {
                out.put(dst, true);
            }
        }
        Ok(out)
    }

    /// Grows the logical length by `additional` zero bits.
    fn grow(&mut self, additional: usize) {
        self.len += additional;
        self.bytes.resize(bytes_for(self.len), 0);
    }

    /// Drops bits from the end so that exactly `len` remain.
    fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.bytes.truncate(bytes_for(len));
            bit_ops::clear_excess(&mut self.bytes, len);
        }
    }

    /// Inserts `value` at `index`, moving every later bit one place right.
    /// `index == len()` appends.
    pub fn insert(&mut self, index: usize, value: u8) -> Result<()> {
        if index > self.len {
            return Err(BitSequenceError::IndexOutOfBounds(index, self.len));
        }
        let value = validate_bit(value)?;
        self.grow(1);
        for i in (index + 1..self.len).rev() {
            let moved = self.bit(i - 1);
            self.put(i, moved);
        }
        self.put(index, value);
        Ok(())
    }

    /// Appends one bit.
    pub fn push(&mut self, value: u8) -> Result<()> {
        let value = validate_bit(value)?;
        self.push_bit(value);
        Ok(())
    }

    pub(crate) fn push_bit(&mut self, value: bool) {
        self.grow(1);
        if value {
            self.put(self.len - 1, true);
        }
    }

    /// Removes the bit at `index`, moving every later bit one place left,
    /// and returns it.
    pub fn remove_at(&mut self, index: usize) -> Result<u8> {
        self.check_index(index)?;
        let removed = self.bit(index);
        for i in index..self.len - 1 {
            let moved = self.bit(i + 1);
            self.put(i, moved);
        }
        self.truncate(self.len - 1);
        Ok(removed as u8)
    }

    /// Removes and returns the bit at `index`, or the last bit when `None`.
    pub fn pop(&mut self, index: Option<usize>) -> Result<u8> {
        if self.is_empty() {
            return Err(BitSequenceError::Empty);
        }
        self.remove_at(index.unwrap_or(self.len - 1))
    }

    /// Removes the first bit equal to `value`.
    pub fn remove_value(&mut self, value: u8) -> Result<()> {
        let target = validate_bit(value)?;
        let index = (0..self.len)
            .find(|&i| self.bit(i) == target)
            .ok_or(BitSequenceError::ValueNotFound(value))?;
        self.remove_at(index).map(|_| ())
    }

    /// Appends every bit of `other`: another sequence, a binary string, a
    /// list of booleans or a filled run.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let mut bits = PackedBitSequence::from_binary_str("1")?;
    /// bits.extend("01")?;
    /// bits.extend(&[true, true][..])?;
    /// assert_eq!(bits.to_binary_string(), "10111");
    ///
    /// // Nothing is appended if the input is malformed.
    /// assert!(bits.extend("012").is_err());
    /// assert_eq!(bits.len(), 5);
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn extend<'a>(&mut self, other: impl Into<BitSource<'a>>) -> Result<()> {
        let other = other.into().resolve()?;
        self.append(&other);
        Ok(())
    }

    /// Appends `other`, byte-at-a-time when `self` ends on a byte boundary.
    pub(crate) fn append(&mut self, other: &PackedBitSequence) {
        let old_len = self.len;
        if old_len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
        } else {
            self.grow(other.len);
            for i in 0..other.len {
                if other.bit(i) {
                    self.put(old_len + i, true);
                }
            }
        }
        tracing::trace!(from = old_len, to = self.len, "extended bit sequence");
    }

    /// Grows with `fill` bits or truncates to `new_len`.
    pub fn resize(&mut self, new_len: usize, fill: u8) -> Result<()> {
        let fill = validate_bit(fill)?;
        let old_len = self.len;
        if new_len > old_len {
            self.grow(new_len - old_len);
            if fill {
                for i in old_len..new_len {
                    self.put(i, true);
                }
            }
        } else {
            self.truncate(new_len);
        }
        tracing::trace!(from = old_len, to = new_len, "resized bit sequence");
        Ok(())
    }

    /// Appends zero bits until the length is a multiple of 8 and returns how
    /// many were added (0..=7).
    pub fn pad_to_byte_boundary(&mut self) -> usize {
        let extra = (8 - self.len % 8) % 8;
        // The padding bits are already zero and already allocated.
        self.len += extra;
        tracing::trace!(added = extra, len = self.len, "padded to byte boundary");
        extra
    }

    /// Removes every bit and releases the buffer contents.
    pub fn clear(&mut self) {
        self.len = 0;
        self.bytes = Vec::new();
    }

    #[cfg(test)]
    pub(crate) fn padding_is_clear(&self) -> bool {
        bit_ops::excess_is_clear(&self.bytes, self.len)
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    pub(crate) fn from_raw_parts(bytes: Vec<u8>, len: usize) -> Self {
        debug_assert!(bit_ops::excess_is_clear(&bytes, len));
        Self { bytes, len }
    }
}

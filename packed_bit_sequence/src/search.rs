//! Pattern matching, counting and predicates.
//!
//! Patterns are binary strings matched against the `'0'`/`'1'` rendering of
//! the sequence, so a match index is a bit index.

use alloc::string::String;

use crate::bit_ops;
use crate::sequence::{Result, validate_binary, validate_bit};
use crate::{BitSequenceError, PackedBitSequence};

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        return Err(BitSequenceError::EmptyPattern);
    }
    validate_binary(pattern)
}

impl PackedBitSequence {
    /// Index of the first occurrence of `pattern`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let bits: PackedBitSequence = "0011010".parse()?;
    /// assert_eq!(bits.search("101")?, Some(3));
    /// assert_eq!(bits.search("111")?, None);
    /// assert!(bits.search("").is_err());
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn search(&self, pattern: &str) -> Result<Option<usize>> {
        validate_pattern(pattern)?;
        Ok(self.to_binary_string().find(pattern))
    }

    /// Number of non-overlapping occurrences of `pattern`, scanning left to
    /// right and resuming after each match. An empty sequence counts 0 for
    /// any pattern.
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let bits: PackedBitSequence = "1111".parse()?;
    /// assert_eq!(bits.count("11")?, 2);
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn count(&self, pattern: &str) -> Result<usize> {
        if self.is_empty() {
            return Ok(0);
        }
        validate_pattern(pattern)?;
        Ok(self.to_binary_string().matches(pattern).count())
    }

    pub fn count_ones(&self) -> usize {
        bit_ops::count_ones(self.as_bytes())
    }

    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// First index in `start..stop` holding `value`. `stop` defaults to, and
    /// is clamped at, the length.
    pub fn index_of(&self, value: u8, start: usize, stop: Option<usize>) -> Result<usize> {
        let target = validate_bit(value)?;
        let stop = stop.unwrap_or(self.len()).min(self.len());
        (start..stop)
            .find(|&i| self.bit(i) == target)
            .ok_or(BitSequenceError::ValueNotFound(value))
    }

    pub fn find_first(&self, value: u8) -> Result<usize> {
        self.index_of(value, 0, None)
    }

    pub fn find_last(&self, value: u8) -> Result<usize> {
        let target = validate_bit(value)?;
        (0..self.len())
            .rev()
            .find(|&i| self.bit(i) == target)
            .ok_or(BitSequenceError::ValueNotFound(value))
    }

    pub fn contains(&self, value: u8) -> Result<bool> {
        Ok(match validate_bit(value)? {
            true => self.any(),
            false => self.count_zeros() > 0,
        })
    }

    /// True if every bit is 1 (vacuously true when empty).
    pub fn all(&self) -> bool {
        self.count_ones() == self.len()
    }

    /// True if any bit is 1.
    pub fn any(&self) -> bool {
        self.as_bytes().iter().any(|&b| b != 0)
    }

    pub fn is_palindromic(&self) -> bool {
        self.iter().eq(self.iter().rev())
    }

    /// 1 if the number of set bits is odd, else 0.
    pub fn parity(&self) -> u8 {
        (self.count_ones() % 2) as u8
    }

    /// True if the bits, read as an unsigned integer of any width, are a
    /// power of two; that is, exactly one bit is set.
    pub fn is_power_of_two(&self) -> bool {
        self.count_ones() == 1
    }

    pub fn starts_with(&self, prefix: &str) -> Result<bool> {
        validate_binary(prefix)?;
        Ok(prefix.len() <= self.len()
            && prefix.bytes().enumerate().all(|(i, c)| self.bit(i) == (c == b'1')))
    }

    pub fn ends_with(&self, suffix: &str) -> Result<bool> {
        validate_binary(suffix)?;
        let Some(offset) = self.len().checked_sub(suffix.len()) else {
            return Ok(false);
        };
        Ok(suffix
            .bytes()
            .enumerate()
            .all(|(i, c)| self.bit(offset + i) == (c == b'1')))
    }

    /// New sequence with every occurrence of `old` replaced by `new`,
    /// matching left to right without overlap.
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let bits: PackedBitSequence = "110110".parse()?;
    /// assert_eq!(bits.replace("11", "0")?.to_binary_string(), "0000");
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn replace(&self, old: &str, new: &str) -> Result<Self> {
        validate_binary(old)?;
        validate_binary(new)?;
        let replaced: String = self.to_binary_string().replace(old, new);
        Self::from_binary_str(&replaced)
    }

    /// Sorts in place: every 0 before every 1.
    pub fn sort(&mut self) {
        let len = self.len();
        let ones = self.count_ones();
        let bytes = self.bytes_mut();
        bytes.fill(0);
        for i in len - ones..len {
            bit_ops::set_bit(bytes, i, true);
        }
    }
}

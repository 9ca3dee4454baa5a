//! Bitwise algebra and whole-sequence rearrangements.
//!
//! Binary operations between sequences of different lengths work on the
//! common prefix: the result is as long as the shorter operand.
//!
//! ```rust
//! use packed_bit_sequence::PackedBitSequence;
//!
//! let a: PackedBitSequence = "1100".parse()?;
//! let b: PackedBitSequence = "101".parse()?;
//!
//! assert_eq!((&a & &b).to_binary_string(), "100");
//! assert_eq!((&a | &b).to_binary_string(), "111");
//! assert_eq!((&a ^ &b).to_binary_string(), "011");
//! assert_eq!((!&a).to_binary_string(), "0011");
//! assert_eq!((&a << 1).to_binary_string(), "1000");
//! assert_eq!((&a + &b).to_binary_string(), "1100101");
//! # Ok::<(), packed_bit_sequence::BitSequenceError>(())
//! ```

use core::ops::{Add, BitAnd, BitOr, BitXor, Mul, Not, Shl, Shr};

use crate::PackedBitSequence;
use crate::bit_ops;

impl PackedBitSequence {
    fn combine(&self, other: &Self, op: impl Fn(u8, u8) -> u8) -> Self {
        let len = self.len().min(other.len());
        let bytes = bit_ops::combine(self.as_bytes(), other.as_bytes(), len, op);
        Self::from_raw_parts(bytes, len)
    }

    pub fn and(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a & b)
    }

    pub fn or(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a | b)
    }

    pub fn xor(&self, other: &Self) -> Self {
        self.combine(other, |a, b| a ^ b)
    }

    /// New sequence with every bit flipped.
    pub fn complement(&self) -> Self {
        let mut out = self.clone();
        out.invert();
        out
    }

    /// Flips every bit in place.
    pub fn invert(&mut self) {
        let len = self.len();
        let bytes = self.bytes_mut();
        for b in bytes.iter_mut() {
            *b = !*b;
        }
        bit_ops::clear_excess(bytes, len);
    }

    /// Same-length sequence with the first `n` bits dropped and zeros
    /// shifted in at the end.
    pub fn shift_left(&self, n: usize) -> Self {
        let len = self.len();
        let mut out = Self::zeros(len);
        for i in 0..len.saturating_sub(n) {
            if self.bit(i + n) {
                out.put(i, true);
            }
        }
        out
    }

    /// Same-length sequence with the last `n` bits dropped and zeros
    /// shifted in at the front.
    pub fn shift_right(&self, n: usize) -> Self {
        let len = self.len();
        let mut out = Self::zeros(len);
        for i in n.min(len)..len {
            if self.bit(i - n) {
                out.put(i, true);
            }
        }
        out
    }

    /// Rotates in place. Positive `n` moves the last `n` bits to the front;
    /// negative `n` moves the first `|n|` bits to the back.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_bit_sequence::PackedBitSequence;
    ///
    /// let mut bits: PackedBitSequence = "10011".parse()?;
    /// bits.rotate(2);
    /// assert_eq!(bits.to_binary_string(), "11100");
    /// bits.rotate(-2);
    /// assert_eq!(bits.to_binary_string(), "10011");
    /// # Ok::<(), packed_bit_sequence::BitSequenceError>(())
    /// ```
    pub fn rotate(&mut self, n: isize) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let k = n.rem_euclid(len as isize) as usize;
        if k == 0 {
            return;
        }
        let src = self.clone();
        for i in 0..len {
            self.put((i + k) % len, src.bit(i));
        }
    }

    /// Reverses bit order in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        for i in 0..len / 2 {
            let j = len - 1 - i;
            let (a, b) = (self.bit(i), self.bit(j));
            self.put(i, b);
            self.put(j, a);
        }
    }

    /// `self` followed by `other`.
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.len() + other.len());
        out.append(self);
        out.append(other);
        out
    }

    /// `self` tiled `n` times; empty when `n == 0`.
    pub fn repeat(&self, n: usize) -> Self {
        let mut out = Self::with_capacity(self.len() * n);
        for _ in 0..n {
            out.append(self);
        }
        out
    }
}

impl BitAnd for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.xor(rhs)
    }
}

impl Not for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl Not for PackedBitSequence {
    type Output = PackedBitSequence;

    fn not(mut self) -> Self::Output {
        self.invert();
        self
    }
}

impl Shl<usize> for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn shl(self, n: usize) -> Self::Output {
        self.shift_left(n)
    }
}

impl Shr<usize> for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn shr(self, n: usize) -> Self::Output {
        self.shift_right(n)
    }
}

impl Add for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn add(self, rhs: Self) -> Self::Output {
        self.concat(rhs)
    }
}

impl Mul<usize> for &PackedBitSequence {
    type Output = PackedBitSequence;

    fn mul(self, n: usize) -> Self::Output {
        self.repeat(n)
    }
}

//! Raw MSB-first bit helpers over byte slices.
//!
//! None of these check bounds against a logical length; callers validate
//! indices first.

use crate::index::BitIndex;
use alloc::vec::Vec;

/// Number of bytes needed to hold `bits` bits.
#[inline]
pub const fn bytes_for(bits: usize) -> usize {
    bits.div_ceil(8)
}

#[inline]
pub fn get_bit(slice: &[u8], index: usize) -> bool {
    let idx = BitIndex(index);
    slice[idx.byte()] & idx.mask() != 0
}

#[inline]
pub fn set_bit(slice: &mut [u8], index: usize, value: bool) {
    let idx = BitIndex(index);
    if value {
        slice[idx.byte()] |= idx.mask();
    } else {
        slice[idx.byte()] &= !idx.mask();
    }
}

/// Mask of the bits of the final byte that belong to a sequence of `len`
/// bits. A byte-aligned length keeps the whole byte.
#[inline]
pub const fn tail_mask(len: usize) -> u8 {
    match len % 8 {
        0 => 0xFF,
        r => 0xFF << (8 - r),
    }
}

/// Zero the padding bits after `len` in the last byte.
#[inline]
pub fn clear_excess(slice: &mut [u8], len: usize) {
    if let Some(last) = slice.last_mut() {
        *last &= tail_mask(len);
    }
}

/// True if no bit after `len` is set. Used by debug assertions and tests.
pub fn excess_is_clear(slice: &[u8], len: usize) -> bool {
    slice.len() == bytes_for(len) && slice.last().is_none_or(|b| b & !tail_mask(len) == 0)
}

/// Population count, word-at-a-time over the aligned middle of the buffer.
pub fn count_ones(slice: &[u8]) -> usize {
    let (head, words, tail) = bytemuck::pod_align_to::<u8, u64>(slice);
    let bytes = head
        .iter()
        .chain(tail)
        .map(|b| b.count_ones() as usize)
        .sum::<usize>();
    bytes + words.iter().map(|w| w.count_ones() as usize).sum::<usize>()
}

/// Combine the first `len` bits of `a` and `b` byte by byte.
pub fn combine(a: &[u8], b: &[u8], len: usize, op: impl Fn(u8, u8) -> u8) -> Vec<u8> {
    let n = bytes_for(len);
    let mut out: Vec<u8> = a[..n].iter().zip(&b[..n]).map(|(&x, &y)| op(x, y)).collect();
    clear_excess(&mut out, len);
    out
}

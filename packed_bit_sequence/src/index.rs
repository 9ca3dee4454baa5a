use crate::BitSequenceError;

/// Position of a single logical bit inside an MSB-first packed buffer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BitIndex(pub usize);

impl BitIndex {
    /// Byte holding this bit.
    #[inline]
    pub const fn byte(self) -> usize {
        self.0 / 8
    }

    /// Single-bit mask selecting this bit within its byte. Bit 0 of the
    /// sequence is the most significant bit of byte 0.
    #[inline]
    pub const fn mask(self) -> u8 {
        0x80 >> (self.0 % 8)
    }
}

/// Resolved `start:stop:step` selection over a sequence of known length.
///
/// Bounds follow ordinary slicing rules: negative values count from the end,
/// anything out of range is clamped and a missing bound means "from the
/// beginning" / "to the end" in the direction of `step`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SliceIndices {
    start: isize,
    step: isize,
    count: usize,
}

impl SliceIndices {
    pub fn resolve(
        len: usize,
        start: Option<isize>,
        stop: Option<isize>,
        step: Option<isize>,
    ) -> Result<Self, BitSequenceError> {
        let step = step.unwrap_or(1);
        if step == 0 {
            return Err(BitSequenceError::InvalidArgument("slice step cannot be zero"));
        }
        let len = len as isize;

        let (start, stop) = if step > 0 {
            let clamp = |x: isize| {
                if x < 0 {
                    (x + len).max(0)
                } else {
                    x.min(len)
                }
            };
            (start.map_or(0, clamp), stop.map_or(len, clamp))
        } else {
            // -1 here means "one before index 0"
            let clamp = |x: isize| {
                if x < 0 {
                    (x + len).max(-1)
                } else {
                    x.min(len - 1)
                }
            };
            (start.map_or(len - 1, clamp), stop.map_or(-1, clamp))
        };

        // `unsigned_abs` keeps `isize::MIN` from overflowing on negation.
        let stride = step.unsigned_abs();
        let count = if step > 0 && start < stop {
            (stop - start - 1) as usize / stride + 1
        } else if step < 0 && stop < start {
            (start - stop - 1) as usize / stride + 1
        } else {
            0
        };

        Ok(Self { start, step, count })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.count).map(move |k| (self.start + k as isize * self.step) as usize)
    }
}

use crate::PackedBitSequence;

/// Iterator over the bits of a sequence, yielding 0 or 1.
pub struct Iter<'a> {
    seq: &'a PackedBitSequence,
    front: usize,
    back: usize,
}

impl PackedBitSequence {
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            seq: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            None
        } else {
            let bit = self.seq.bit(self.front);
            self.front += 1;
            Some(bit as u8)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            None
        } else {
            self.back -= 1;
            Some(self.seq.bit(self.back) as u8)
        }
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PackedBitSequence {
    type Item = u8;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<bool> for PackedBitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut seq = PackedBitSequence::with_capacity(iter.size_hint().0);
        Extend::extend(&mut seq, iter);
        seq
    }
}

impl Extend<bool> for PackedBitSequence {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push_bit(bit);
        }
    }
}

use core::iter;

/// A short run of barcode modules packed into a single word.
///
/// The module values live in the high bits and the run length in the low
/// nibble, so guard patterns and digit codes stay `Copy` and const-friendly.
/// Iterating yields modules most-significant first: the leftmost bar comes
/// out first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRun(u16);

impl BitRun {
    pub const fn new(bits: u16, count: u8) -> Self {
        debug_assert!(count <= 12, "count is too big");

        Self((bits << 4) | count as u16)
    }

    /// Number of modules in this run.
    #[inline]
    pub const fn len(&self) -> u8 {
        (self.0 & 0xF) as u8
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The module values, right-aligned.
    #[inline]
    pub const fn bits(&self) -> u16 {
        self.0 >> 4
    }
}

impl iter::IntoIterator for BitRun {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits { value: self.bits(), count: self.len() as u32 }
    }
}

pub struct Bits {
    value: u16,
    count: u32,
}

impl iter::Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.count == 0 {
            return None;
        }
        self.count -= 1;
        Some((self.value >> self.count) & 1 != 0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.count as usize;
        (count, Some(count))
    }
}

impl iter::ExactSizeIterator for Bits {}
impl iter::FusedIterator for Bits {}

#[cfg(test)]
mod tests {
    use super::BitRun;

    #[test]
    fn iterates_most_significant_first() {
        let run = BitRun::new(0b101, 3);
        let bits: Vec<bool> = run.into_iter().collect();
        assert_eq!(bits, [true, false, true]);
    }

    #[test]
    fn leading_zeros_are_kept() {
        let run = BitRun::new(0b0001101, 7);
        let bits: Vec<bool> = run.into_iter().collect();
        assert_eq!(bits, [false, false, false, true, true, false, true]);
    }

    #[test]
    fn exact_size() {
        let run = BitRun::new(0, 9);
        let iter = run.into_iter();
        assert_eq!(iter.len(), 9);
        assert_eq!(iter.filter(|&b| b).count(), 0);
    }
}

//! Fixed-capacity bit-set over a contiguous value range.
//!
//! Fragments only need marking, clearing, counting and forward scanning, so
//! those four operations form the [`FragmentSet`] trait. [`ValueBitSet`] is the
//! word-backed implementation used by the shipped neighborhoods.

const WORD_BITS: usize = u64::BITS as usize;

/// Minimal set interface needed to draw eligible groups.
pub trait FragmentSet {
    /// Sets every bit in `from..to`.
    fn mark_range(&mut self, from: usize, to: usize);

    /// Unsets the bit at `index`.
    fn clear_bit(&mut self, index: usize);

    /// Number of set bits.
    fn cardinality(&self) -> usize;

    /// Index of the first set bit at or after `from`.
    fn next_set_bit(&self, from: usize) -> Option<usize>;

    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }
}

/// A bit-set with a capacity fixed at construction.
///
/// # Example
///
/// ```
/// use lnsforge_core::{FragmentSet, ValueBitSet};
///
/// let mut set = ValueBitSet::new(10);
/// set.mark_range(0, 10);
/// set.clear_bit(0);
/// set.clear_bit(4);
///
/// assert_eq!(set.cardinality(), 8);
/// assert_eq!(set.next_set_bit(0), Some(1));
/// assert_eq!(set.next_set_bit(4), Some(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueBitSet {
    words: Vec<u64>,
    len: usize,
}

impl ValueBitSet {
    /// Creates an empty set able to hold bits `0..len`.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Number of addressable bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn contains(&self, index: usize) -> bool {
        index < self.len && self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Unsets every bit.
    pub fn clear(&mut self) {
        self.words.iter_mut().for_each(|w| *w = 0);
    }

    /// Iterates over set bits in increasing order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.next_set_bit(0), move |&i| self.next_set_bit(i + 1))
    }
}

impl FragmentSet for ValueBitSet {
    fn mark_range(&mut self, from: usize, to: usize) {
        let to = to.min(self.len);
        if from >= to {
            return;
        }
        let (first, last) = (from / WORD_BITS, (to - 1) / WORD_BITS);
        for w in first..=last {
            let lo = if w == first { from % WORD_BITS } else { 0 };
            let hi = if w == last { (to - 1) % WORD_BITS + 1 } else { WORD_BITS };
            let width = hi - lo;
            let mask = if width == WORD_BITS {
                u64::MAX
            } else {
                ((1u64 << width) - 1) << lo
            };
            self.words[w] |= mask;
        }
    }

    fn clear_bit(&mut self, index: usize) {
        if index < self.len {
            self.words[index / WORD_BITS] &= !(1 << (index % WORD_BITS));
        }
    }

    fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    fn next_set_bit(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }
        let mut w = from / WORD_BITS;
        let mut word = self.words[w] & (u64::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                let index = w * WORD_BITS + word.trailing_zeros() as usize;
                return (index < self.len).then_some(index);
            }
            w += 1;
            if w >= self.words.len() {
                return None;
            }
            word = self.words[w];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let set = ValueBitSet::new(70);
        assert_eq!(set.len(), 70);
        assert!(set.is_empty());
        assert_eq!(set.next_set_bit(0), None);
    }

    #[test]
    fn test_mark_range_across_words() {
        let mut set = ValueBitSet::new(200);
        set.mark_range(60, 130);
        assert_eq!(set.cardinality(), 70);
        assert!(!set.contains(59));
        assert!(set.contains(60));
        assert!(set.contains(64));
        assert!(set.contains(129));
        assert!(!set.contains(130));
    }

    #[test]
    fn test_mark_full_word() {
        let mut set = ValueBitSet::new(128);
        set.mark_range(0, 128);
        assert_eq!(set.cardinality(), 128);
        assert_eq!(set.ones().last(), Some(127));
    }

    #[test]
    fn test_mark_range_is_clamped() {
        let mut set = ValueBitSet::new(5);
        set.mark_range(3, 50);
        assert_eq!(set.ones().collect::<Vec<_>>(), vec![3, 4]);
        set.mark_range(4, 2);
        assert_eq!(set.cardinality(), 2);
    }

    #[test]
    fn test_clear_bit_and_scan() {
        let mut set = ValueBitSet::new(100);
        set.mark_range(0, 100);
        for i in (0..100).filter(|i| i % 3 != 0) {
            set.clear_bit(i);
        }
        assert_eq!(set.cardinality(), 34);
        assert_eq!(set.next_set_bit(1), Some(3));
        assert_eq!(set.next_set_bit(64), Some(66));
        assert_eq!(set.next_set_bit(100), None);
        assert!(set.ones().all(|i| i % 3 == 0));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut set = ValueBitSet::new(10);
        set.mark_range(0, 10);
        set.clear();
        assert!(set.is_empty());
        set.clear_bit(42);
        assert!(set.is_empty());
    }
}

// Copyright 2024 Saptak Santra
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Set of small non-negative integers backed by a growable vector of `u64` words.
//! Word `i`, bit `j` encodes membership of `i * 64 + j`.

use std::fmt;
use std::ops::BitOrAssign;

use smallvec::SmallVec;

#[cfg(feature = "profiling")]
use tracing::{info_span, trace};

use crate::error::{IntSetError, Result};

/// Number of bits packed into one storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Two inline words cover values below 128 without a heap allocation.
type Words = SmallVec<[u64; 2]>;

/// A set of small non-negative integers.
///
/// The default value is the empty set. The cardinality is cached and updated
/// incrementally: [`BitSet::add`] bumps it on every call, so adding a value
/// that is already present overcounts. [`BitSet::union_with`] is exact.
#[derive(Clone, Default)]
pub struct BitSet {
    words: Words,
    len: usize,
}

#[inline]
fn locate(value: usize) -> (usize, usize) {
    (value / WORD_BITS, value % WORD_BITS)
}

/// Number of 1-bits in `word`.
#[inline]
pub(crate) fn bit_count(word: u64) -> usize {
    word.count_ones() as usize
}

fn checked_value(value: i64) -> Result<usize> {
    if value < 0 {
        return Err(IntSetError::NegativeValue(value));
    }
    usize::try_from(value).map_err(|_| IntSetError::ValueOutOfRange(value))
}

impl BitSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with storage for values below `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut words = Words::new();
        words.resize(capacity.div_ceil(WORD_BITS), 0);
        Self { words, len: 0 }
    }

    /// Build a set by adding every value of `values` in order.
    pub fn from_slice(values: &[usize]) -> Self {
        values.iter().copied().collect()
    }

    /// Build a set from signed input, rejecting the first negative value.
    pub fn try_from_signed(values: &[i64]) -> Result<Self> {
        let mut set = Self::new();
        for &value in values {
            set.try_add(value)?;
        }
        Ok(set)
    }

    /// Check if `value` is in the set.
    /// Values past the end of storage were never added.
    pub fn contains(&self, value: usize) -> bool {
        let (word_idx, bit_idx) = locate(value);
        match self.words.get(word_idx) {
            Some(word) => (word >> bit_idx) & 1 == 1,
            None => false,
        }
    }

    /// Add `value`, growing storage as needed.
    ///
    /// The cached cardinality is incremented even if `value` was already
    /// present. Callers that need an exact [`len`](Self::len) must add each
    /// value at most once.
    pub fn add(&mut self, value: usize) {
        let (word_idx, bit_idx) = locate(value);
        if word_idx >= self.words.len() {
            #[cfg(feature = "profiling")]
            trace!(
                from_words = self.words.len(),
                to_words = word_idx + 1,
                "bitset.grow"
            );
            self.words.resize(word_idx + 1, 0);
        }
        self.words[word_idx] |= 1u64 << bit_idx;
        self.len += 1;
    }

    pub fn try_add(&mut self, value: i64) -> Result<()> {
        let value = checked_value(value)?;
        self.add(value);
        Ok(())
    }

    pub fn try_contains(&self, value: i64) -> Result<bool> {
        checked_value(value).map(|value| self.contains(value))
    }

    /// Cached cardinality.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Raw storage words, lowest values first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// Set `self` to the union of `self` and `other`.
    ///
    /// Only bits newly set in `self` are counted, so the cardinality is exact
    /// for the merged words. Zero words of `other` are skipped.
    pub fn union_with(&mut self, other: &BitSet) {
        #[cfg(feature = "profiling")]
        let span = info_span!(
            "bitset.union_with",
            self_words = self.words.len(),
            other_words = other.words.len(),
            len_before = self.len
        );
        #[cfg(feature = "profiling")]
        let _span_guard = span.enter();

        for (word_idx, &other_word) in other.words.iter().enumerate() {
            if other_word == 0 {
                continue;
            }
            if let Some(word) = self.words.get_mut(word_idx) {
                let before = bit_count(*word);
                *word |= other_word;
                self.len += bit_count(*word) - before;
            } else {
                // Earlier zero words of `other` were skipped; pad so the word keeps its index.
                self.words.resize(word_idx, 0);
                self.words.push(other_word);
                self.len += bit_count(other_word);
            }
        }
    }

    /// Members in ascending order.
    pub fn elements(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Iterate members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_idx: 0,
            current_word: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Ascending iterator over the members of a [`BitSet`].
pub struct Iter<'a> {
    words: &'a [u64],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let trailing = self.current_word.trailing_zeros() as usize;
                self.current_word &= self.current_word - 1; // clear lowest set bit
                return Some(self.word_idx * WORD_BITS + trailing);
            }

            if self.word_idx + 1 >= self.words.len() {
                self.word_idx = self.words.len();
                return None;
            }
            self.word_idx += 1;
            self.current_word = self.words[self.word_idx];
        }
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = BitSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl BitOrAssign<&BitSet> for BitSet {
    fn bitor_assign(&mut self, other: &BitSet) {
        self.union_with(other);
    }
}

impl TryFrom<&[i64]> for BitSet {
    type Error = IntSetError;

    fn try_from(values: &[i64]) -> Result<Self> {
        Self::try_from_signed(values)
    }
}

/// Renders as `{1 9 42 144}`, or `{}` when empty.
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("}")
    }
}

/// Renders the raw state as `{[words...] len}`.
impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{[")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{word}")?;
        }
        write!(f, "] {}}}", self.len)
    }
}

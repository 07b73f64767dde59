use core::fmt;
use core::ops::Index;

use crate::core::DynArray;
use crate::error::DynArrayError;
use crate::iter::DynArrayIter;
use crate::pair::Pair;

/// An ordered sequence of key-value pairs backed by a single `DynArray`.
///
/// Keys are not deduplicated and there is no lookup by key: entries are
/// addressed by position, exactly like the underlying array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairSeq<K, V> {
    entries: DynArray<Pair<K, V>>,
}

impl<K, V> PairSeq<K, V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: DynArray::new(),
        }
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynArrayError> {
        Ok(Self {
            entries: DynArray::with_capacity(capacity)?,
        })
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot be allocated.
    pub fn with_default_capacity() -> Result<Self, DynArrayError> {
        Ok(Self {
            entries: DynArray::with_default_capacity()?,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Appends a key-value pair.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot grow.
    pub fn push(&mut self, key: K, value: V) -> Result<(), DynArrayError> {
        self.entries.push(Pair::new(key, value))
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot grow.
    pub fn push_pair(&mut self, pair: Pair<K, V>) -> Result<(), DynArrayError> {
        self.entries.push(pair)
    }

    /// Inserts a key-value pair at `index`; past the end it appends.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if the buffer cannot grow.
    pub fn insert(&mut self, index: usize, key: K, value: V) -> Result<(), DynArrayError> {
        self.entries.insert(index, Pair::new(key, value))
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<Pair<K, V>, DynArrayError> {
        self.entries.remove_at(index)
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&Pair<K, V>, DynArrayError> {
        self.entries.get(index)
    }

    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfBounds` if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Pair<K, V>, DynArrayError> {
        self.entries.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Pair<K, V>] {
        self.entries.as_slice()
    }

    /// The backing array.
    #[must_use]
    pub fn entries(&self) -> &DynArray<Pair<K, V>> {
        &self.entries
    }

    /// Returns an iterator over `(key, value)` references in order.
    #[must_use]
    pub fn iter(&self) -> PairSeqIter<'_, K, V> {
        PairSeqIter {
            iter: self.entries.iter(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(Pair::first)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(Pair::second)
    }

    /// Sorts entries from largest to smallest key, breaking ties by value.
    pub fn sort_descending(&mut self) -> &mut Self
    where
        K: PartialOrd,
        V: PartialOrd,
    {
        self.entries.sort_descending();
        self
    }

    /// Replaces the contents with copies of `other`'s entries.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationFailed` if a larger buffer cannot be allocated.
    pub fn assign(&mut self, other: &Self) -> Result<(), DynArrayError>
    where
        K: Clone,
        V: Clone,
    {
        self.entries.assign(&other.entries)
    }
}

impl<K, V> Index<usize> for PairSeq<K, V> {
    type Output = Pair<K, V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for PairSeq<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.entries, f)
    }
}

impl<K, V> FromIterator<(K, V)> for PairSeq<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Pair::from).collect(),
        }
    }
}

impl<'a, K, V> IntoIterator for &'a PairSeq<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = PairSeqIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over key-value references in a `PairSeq`
///
/// This iterator implements `Clone`.
pub struct PairSeqIter<'a, K, V> {
    iter: DynArrayIter<'a, Pair<K, V>>,
}

impl<K, V> Clone for PairSeqIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

impl<'a, K, V> Iterator for PairSeqIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.iter.next()?;
        Some((&pair.first, &pair.second))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K, V> ExactSizeIterator for PairSeqIter<'_, K, V> {}

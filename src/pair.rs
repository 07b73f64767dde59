use core::fmt;

/// Two independently typed values stored side by side.
///
/// Equality holds when both fields are equal. Ordering is lexicographic:
/// `first` decides, and `second` breaks ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(&self) -> &A {
        &self.first
    }

    #[must_use]
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Returns a pair with the fields exchanged.
    #[must_use]
    pub fn swap(self) -> Pair<B, A> {
        Pair {
            first: self.second,
            second: self.first,
        }
    }

    #[must_use]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

/// Shorthand for [`Pair::new`] that lets both types be inferred.
#[must_use]
pub const fn make_pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self { first, second }
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

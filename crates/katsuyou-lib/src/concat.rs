use core::fmt;
use std::hash::{Hash, Hasher};

/// A concatenation of multiple borrowed strings with fixed size storage.
///
/// Empty strings are never stored, so two concats compare equal whenever
/// the text they spell out is the same.
#[derive(Clone, Copy)]
pub struct Concat<'a, const N: usize> {
    storage: [&'a str; N],
    len: usize,
}

impl<const N: usize> Default for Concat<'_, N> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Construct a concat holding a single string.
    pub const fn new(string: &'a str) -> Concat<'a, N> {
        let mut this = Concat {
            storage: [""; N],
            len: 0,
        };

        if !string.is_empty() {
            this.storage[0] = string;
            this.len = 1;
        }

        this
    }

    /// Construct an empty concat.
    pub const fn empty() -> Concat<'a, N> {
        Concat {
            storage: [""; N],
            len: 0,
        }
    }

    /// Push the given string onto storage.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` non-empty strings are pushed.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            assert!(self.len < N, "Capacity overflow");
            self.storage[self.len] = string;
            self.len += 1;
        }
    }

    /// Push the given string and return the concat.
    #[inline]
    pub fn with(mut self, string: &'a str) -> Self {
        self.push(string);
        self
    }

    /// The non-empty strings making up this concat.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.storage[..self.len]
    }

    /// Iterate over characters in the concatenated string.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_slice().iter().flat_map(|s| s.chars())
    }

    /// Test if concat is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<'a, const N: usize> FromIterator<&'a str> for Concat<'a, N> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut this = Self::empty();

        for string in iter {
            this.push(string);
        }

        this
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> PartialEq<str> for Concat<'_, N> {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> PartialEq<&str> for Concat<'_, N> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl<const N: usize> Hash for Concat<'_, N> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        for c in self.chars() {
            c.hash(state);
        }
    }
}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in self.as_slice() {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::Concat;

    #[test]
    fn skips_empty() {
        let a = Concat::<3>::new("食べ").with("").with("て");
        assert_eq!(a.as_slice(), ["食べ", "て"]);
        assert_eq!(a, "食べて");
        assert_eq!(a.to_string(), "食べて");
    }

    #[test]
    fn equal_across_splits() {
        let a = Concat::<3>::from_iter(["話", "し", "た"]);
        let b = Concat::<2>::from_iter(["話し", "た"]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic = "Capacity overflow"]
    fn overflow() {
        let _ = Concat::<1>::new("来").with("い");
    }
}

//! Sentinel-encoded node links.
//!
//! A [`Link`] is a slab key with a reserved sentinel (`usize::MAX`) standing in
//! for null, instead of `Option<usize>`. Keeps `prev`/`next` one word each.

/// A reference from one list node to another, or to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Link(usize);

impl Link {
    /// Sentinel value representing "no node".
    pub(crate) const NONE: Self = Self(usize::MAX);

    /// Creates a link to the node stored under `key`.
    #[inline]
    pub(crate) const fn to(key: usize) -> Self {
        debug_assert!(key != usize::MAX, "slab key collides with sentinel");
        Self(key)
    }

    /// Returns `true` if this is the sentinel value.
    #[inline]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    /// Returns `true` if this is not the sentinel value.
    #[inline]
    pub(crate) const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns the raw slab key.
    ///
    /// Only meaningful when [`is_some`](Self::is_some); the sentinel maps to a
    /// key no slab ever hands out, so indexing with it panics.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }

    /// Returns the slab key, or `None` for the sentinel.
    #[inline]
    pub(crate) const fn key(self) -> Option<usize> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel() {
        assert!(Link::NONE.is_none());
        assert!(!Link::NONE.is_some());
        assert_eq!(Link::NONE.key(), None);
    }

    #[test]
    fn keys() {
        for key in [0usize, 1, 100, usize::MAX - 1] {
            let link = Link::to(key);
            assert!(link.is_some());
            assert_eq!(link.key(), Some(key));
            assert_eq!(link.index(), key);
        }
    }
}

//! Mixin types for structures.
//!
//! - [`SourceRangeMixin`] attaches the byte range of the source line a value came from.
//! - [`SourceRangeMixinExt`] provides `into_wrapper*` helpers on any value.

use std::ops::Range;

/// A generic wrapper that attaches a byte range of the source text to a value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRangeMixin<T> {
    content: T,
    /// Start index in the source string (0-based, inclusive)
    start: usize,
    /// End index in the source string (0-based, exclusive)
    end: usize,
}

impl<T> SourceRangeMixin<T> {
    /// Instances a new `SourceRangeMixin`.
    pub const fn new(content: T, range: Range<usize>) -> Self {
        Self {
            content,
            start: range.start,
            end: range.end,
        }
    }

    /// Returns the wrapped content.
    pub const fn content(&self) -> &T {
        &self.content
    }

    /// Leans the content out of the wrapper.
    pub fn into_content(self) -> T {
        self.content
    }

    /// Returns the byte range of the source line.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Returns the source span as a tuple of (start, end).
    #[must_use]
    pub const fn as_span(&self) -> (usize, usize) {
        (self.start, self.end)
    }

    /// Maps the content of the wrapper, keeping the range.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> SourceRangeMixin<U> {
        SourceRangeMixin::new(f(self.content), self.start..self.end)
    }
}

impl<T: std::fmt::Display> std::fmt::Display for SourceRangeMixin<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at indices [{}, {})",
            self.content, self.start, self.end
        )
    }
}

impl<T: std::error::Error + 'static> std::error::Error for SourceRangeMixin<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.content)
    }
}

/// Extension methods for creating [`SourceRangeMixin`].
pub trait SourceRangeMixinExt: Sized {
    /// Wraps the value with the same range as `wrapper`.
    fn into_wrapper<W>(self, wrapper: &SourceRangeMixin<W>) -> SourceRangeMixin<Self> {
        SourceRangeMixin::new(self, wrapper.range())
    }

    /// Wraps the value with the given range.
    fn into_wrapper_range(self, range: Range<usize>) -> SourceRangeMixin<Self> {
        SourceRangeMixin::new(self, range)
    }
}

impl<T> SourceRangeMixinExt for T {}

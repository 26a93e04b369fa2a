//! Runtime configuration of analysis.

/// How to treat a slide stream ending without a terminal note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnterminatedSlide {
    /// Emit the remaining notes as a slide.
    #[default]
    Keep,
    /// Discard the remaining notes.
    Drop,
}

/// Options of [`crate::sus::analyze_with_config`].
///
/// ```
/// use sus_rs::sus::prelude::*;
///
/// let config = AnalyzeConfig::default().unterminated_slide(UnterminatedSlide::Drop);
/// assert_eq!(config.unterminated_slide, UnterminatedSlide::Drop);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub struct AnalyzeConfig {
    /// Treatment of trailing notes of a stream not closed by a terminal note.
    pub unterminated_slide: UnterminatedSlide,
}

impl AnalyzeConfig {
    /// Sets the treatment of unterminated slides.
    #[must_use]
    pub const fn unterminated_slide(mut self, unterminated_slide: UnterminatedSlide) -> Self {
        self.unterminated_slide = unterminated_slide;
        self
    }
}

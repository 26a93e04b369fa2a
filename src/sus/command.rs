//! Value types shared by the lexing and parsing phases.
//!
//! - [`mixin`] attaches the source range of a line to errors and lines.
//! - [`time`] defines measures, in-measure positions and absolute ticks.
//! - [`channel`] classifies chart line headers into the rows this crate understands.

pub mod channel;
pub mod mixin;
pub mod time;

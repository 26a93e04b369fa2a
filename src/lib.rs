//! The SUS (Sliding Universal Score) chart format analyzer.
//!
//! [`sus::analyze`] turns the chart text into a [`sus::model::Score`], where every BPM change, time scale
//! change and note is placed by absolute tick.
//!
//! # Example
//!
//! ```
//! use sus_rs::sus::prelude::*;
//!
//! let source = r#"
//! #REQUEST "ticks_per_beat 480"
//! #WAVEOFFSET 0.25
//! #00002: 4
//! #BPM01: 150
//! #00008: 01
//! #00030a:1200
//! #00130a:0020
//! "#;
//! let score = analyze(source).unwrap();
//! assert_eq!(score.offset, -0.25);
//! assert_eq!(score.bpm_changes, vec![BpmChange { tick: Tick(0), bpm: 150.0 }]);
//! assert_eq!(score.slides.len(), 1);
//! assert_eq!(score.slides[0].notes.len(), 2);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "diagnostics")]
#[cfg_attr(docsrs, doc(cfg(feature = "diagnostics")))]
pub mod diagnostics;
pub mod sus;

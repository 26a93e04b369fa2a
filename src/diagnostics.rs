//! Fancy diagnostics support using `ariadne`.
//!
//! Warnings and errors of analysis carry the byte range of their source line, so `ariadne` can compute rows
//! and columns for display by itself.
//!
//! # Usage Example
//!
//! ```rust
//! use sus_rs::{
//!     diagnostics::emit_analyze_warnings,
//!     sus::{analyze_with_config, parse::config::AnalyzeConfig},
//! };
//!
//! let source = "#REQUEST \"ticks_per_beat 480\"\n#00002: 4\n#00108: zz\n";
//! let output = analyze_with_config(source, AnalyzeConfig::default()).unwrap();
//!
//! // Output all warnings
//! emit_analyze_warnings("test.sus", source, &output.warnings);
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::sus::error::{AnalyzeErrorWithRange, AnalyzeWarningWithRange};

/// Simple source container that holds the filename and source text.
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    fn to_report<'a>(&self, src: &SimpleSource<'a>)
    -> Report<'a, (String, std::ops::Range<usize>)>;
}

impl ToAriadne for AnalyzeWarningWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let filename = src.name().to_string();
        Report::build(ReportKind::Warning, (filename.clone(), self.range()))
            .with_message(self.content().to_string())
            .with_label(Label::new((filename, self.range())).with_color(Color::Yellow))
            .finish()
    }
}

impl ToAriadne for AnalyzeErrorWithRange {
    fn to_report<'a>(
        &self,
        src: &SimpleSource<'a>,
    ) -> Report<'a, (String, std::ops::Range<usize>)> {
        let filename = src.name().to_string();
        Report::build(ReportKind::Error, (filename.clone(), self.range()))
            .with_message(self.content().to_string())
            .with_label(Label::new((filename, self.range())).with_color(Color::Red))
            .finish()
    }
}

/// Convenience method: batch render warnings of analysis to stderr.
///
/// # Parameters
/// * `name` - Name of the source file, used for display in diagnostic information
/// * `source` - Complete SUS source text
/// * `warnings` - List of warnings to display
pub fn emit_analyze_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a AnalyzeWarningWithRange>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for w in warnings {
        let report = w.to_report(&simple);
        let _ = report.eprint((name.to_string(), ariadne_source.clone()));
    }
}

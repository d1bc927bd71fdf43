//! Team Leucine roster and sequence report.
//!
//! The roster is compiled into the binary. [`write_report`] walks it in order
//! and prints, for each member, whether their sequence is DNA and, if so, its
//! GC content and translation.
//!
//! ```
//! use leucine_roster::{roster, write_report, ReportConfig};
//!
//! let mut out = Vec::new();
//! write_report(roster(), &ReportConfig::default(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Analyzing Chioma Nnadi's gene: BRCA1\n"));
//! ```

pub mod logging;
pub mod member;
pub mod report;
pub mod roster;

pub use member::{MemberRecord, NOT_SUPPLIED};
pub use report::{analyze, format_percent, write_report, MemberReport, ReportConfig, SequenceAnalysis};
pub use roster::{find_member, roster, ROSTER};

#[cfg(feature = "serde")]
pub use report::report_json;

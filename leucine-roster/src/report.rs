//! Per-member sequence report.
//!
//! Each member is analyzed on its own: validate, then (if the sequence is
//! DNA) compute GC content and translate. [`MemberReport`] renders one text
//! block; [`write_report`] streams the blocks for a list of members in order.

use std::fmt;
use std::io::Write;

use leucine_core::{Result, Summarizable};
use leucine_seq::{
    classify, gc_fraction, round_to, translate_dna, validate_dna, RnaSequence, SequenceKind,
    GC_DECIMALS,
};
use tracing::{debug, warn};

use crate::member::MemberRecord;

/// Options for rendering a report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReportConfig {
    /// Decimal places for GC content (default 2).
    pub gc_decimals: u32,
    /// Print a profile line under each header (default false).
    pub show_profile: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            gc_decimals: GC_DECIMALS,
            show_profile: false,
        }
    }
}

/// Outcome of analyzing one member's sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", rename_all = "snake_case"))]
pub enum SequenceAnalysis {
    /// The sequence is DNA.
    Valid {
        /// GC percentage.
        gc_content: f64,
        /// Frame-0 translation, stops as `_`.
        protein: String,
    },
    /// Missing, RNA, or otherwise not DNA.
    Invalid {
        /// Why the sequence was rejected.
        kind: SequenceKind,
    },
}

impl SequenceAnalysis {
    /// Whether the sequence passed DNA validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, SequenceAnalysis::Valid { .. })
    }
}

/// Report for a single member.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberReport<'a> {
    /// The analyzed member.
    pub member: &'a MemberRecord,
    /// Validation verdict and, for DNA, the results.
    pub analysis: SequenceAnalysis,
    /// Profile line, present when [`ReportConfig::show_profile`] is set.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub profile: Option<String>,
}

fn analyze_sequence(seq: Option<&str>, config: &ReportConfig) -> SequenceAnalysis {
    match seq {
        Some(s) if validate_dna(seq) => {
            // validated text is ASCII ACGT in any case
            let upper = s.to_ascii_uppercase();
            SequenceAnalysis::Valid {
                gc_content: round_to(gc_fraction(upper.as_bytes()) * 100.0, config.gc_decimals),
                protein: translate_dna(&upper),
            }
        }
        _ => SequenceAnalysis::Invalid {
            kind: classify(seq),
        },
    }
}

/// Analyze one member.
///
/// The raw sequence text goes to the validator, so the `"None"` sentinel is
/// rejected there rather than special-cased here. A valid sequence is
/// uppercased before GC content and translation, so lowercase DNA gets real
/// results where [`leucine_seq::gc_content`] and [`translate_dna`] on the raw
/// text would give 0% and an empty protein.
pub fn analyze<'a>(member: &'a MemberRecord, config: &ReportConfig) -> MemberReport<'a> {
    debug!(member = member.name, gene = member.gene_name, "analyzing sequence");
    let analysis = analyze_sequence(Some(member.sequence), config);

    if let SequenceAnalysis::Invalid {
        kind: SequenceKind::Rna,
    } = analysis
    {
        if let Ok(rna) = RnaSequence::new(member.sequence) {
            warn!(
                member = member.name,
                sequence = %rna.summary(),
                "RNA sequence rejected, only DNA is analyzed"
            );
        }
    }

    MemberReport {
        member,
        analysis,
        profile: config.show_profile.then(|| member.summary()),
    }
}

/// Format a percentage the way the report prints it: shortest form that
/// round-trips, always with a fractional part (`45.0`, `64.29`).
pub fn format_percent(value: f64) -> String {
    let s = value.to_string();
    if s.contains('.') || !value.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

impl fmt::Display for MemberReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Analyzing {}'s gene: {}",
            self.member.name, self.member.gene_name
        )?;
        if let Some(profile) = &self.profile {
            writeln!(f, "  Profile: {profile}")?;
        }
        match &self.analysis {
            SequenceAnalysis::Valid {
                gc_content,
                protein,
            } => {
                writeln!(f, "  Valid DNA sequence.")?;
                writeln!(f, "  GC Content: {}%", format_percent(*gc_content))?;
                writeln!(f, "  Translated Protein: {protein}")?;
            }
            SequenceAnalysis::Invalid { .. } => {
                writeln!(f, "  Invalid DNA sequence or no sequence provided.")?;
            }
        }
        writeln!(f)
    }
}

/// Write one block per member, in order.
pub fn write_report<W: Write>(
    members: &[MemberRecord],
    config: &ReportConfig,
    out: &mut W,
) -> Result<()> {
    let mut valid = 0usize;
    for member in members {
        let report = analyze(member, config);
        if report.analysis.is_valid() {
            valid += 1;
        }
        write!(out, "{report}")?;
    }
    debug!(members = members.len(), valid, "report written");
    Ok(())
}

/// Render the analyses as a pretty-printed JSON array.
#[cfg(feature = "serde")]
pub fn report_json(members: &[MemberRecord], config: &ReportConfig) -> Result<String> {
    let reports: Vec<MemberReport<'_>> = members.iter().map(|m| analyze(m, config)).collect();
    serde_json::to_string_pretty(&reports)
        .map_err(|e| leucine_core::LeucineError::Serialization(e.to_string()))
}

//! DNA validation and sequence classification.
//!
//! Missing sequences come in two shapes: an absent value (`None`) and the
//! literal text `"None"` (any case) used as a "not supplied" marker.

use crate::alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};

/// Text that marks a sequence as not supplied, compared case-insensitively.
pub const MISSING_MARKER: &str = "none";

/// Whether `seq` is absent or the "none" marker.
pub fn is_missing(seq: Option<&str>) -> bool {
    match seq {
        None => true,
        Some(s) => s.eq_ignore_ascii_case(MISSING_MARKER),
    }
}

/// Validate that a sequence contains only the DNA bases `A`, `C`, `G`, `T`.
///
/// Case-insensitive. Missing sequences are invalid, `U` is invalid and the
/// empty string is valid.
pub fn validate_dna(seq: Option<&str>) -> bool {
    match seq {
        Some(s) if !is_missing(seq) => DnaAlphabet::accepts(s.as_bytes()),
        _ => false,
    }
}

/// What a raw sequence string looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SequenceKind {
    /// Absent or the "none" marker.
    Missing,
    /// Only `ACGT` (any case), including the empty string.
    Dna,
    /// Only `ACGU` with at least one `U`.
    Rna,
    /// Anything else.
    Unrecognized,
}

/// Classify a raw sequence string.
///
/// Agrees with [`validate_dna`]: a sequence is [`SequenceKind::Dna`] exactly
/// when it validates.
pub fn classify(seq: Option<&str>) -> SequenceKind {
    let s = match seq {
        Some(s) if !is_missing(seq) => s,
        _ => return SequenceKind::Missing,
    };
    if DnaAlphabet::accepts(s.as_bytes()) {
        SequenceKind::Dna
    } else if RnaAlphabet::accepts(s.as_bytes()) {
        SequenceKind::Rna
    } else {
        SequenceKind::Unrecognized
    }
}

//! Concrete sequence type aliases and the analyses they support.
//!
//! - [`DnaSequence`] — GC content, translation
//! - [`RnaSequence`] — only used to recognize RNA input

use crate::alphabet::{DnaAlphabet, RnaAlphabet};
use crate::codon::GeneticCode;
use crate::gc;
use crate::seq::ValidatedSeq;

/// A validated DNA sequence (`ACGT`).
pub type DnaSequence = ValidatedSeq<DnaAlphabet>;

/// A validated RNA sequence (`ACGU`).
pub type RnaSequence = ValidatedSeq<RnaAlphabet>;

impl DnaSequence {
    /// GC content as a fraction in [0.0, 1.0]. Returns 0.0 for empty sequences.
    pub fn gc_fraction(&self) -> f64 {
        gc::gc_fraction(self)
    }

    /// GC content as a percentage rounded to `places` decimals.
    pub fn gc_percent(&self, places: u32) -> f64 {
        gc::round_to(self.gc_fraction() * 100.0, places)
    }

    /// Translate in frame 0 with the standard code, stops as `_`.
    pub fn translate(&self) -> String {
        GeneticCode::standard()
            .translate(self)
            .into_iter()
            .map(char::from)
            .collect()
    }
}

//! Nucleotide sequence analysis for the Team Leucine roster.
//!
//! Three analyses, each available as a free function over plain text and as
//! a method on the validated [`DnaSequence`] type:
//!
//! - **Validation** — [`validate_dna`], plus [`classify`] for diagnostics
//! - **GC content** — [`gc_content`], percentage rounded to two decimals
//! - **Translation** — [`translate_dna`], standard code with `_` for stops
//!
//! # Example
//!
//! ```
//! use leucine_seq::{gc_content, translate_dna, validate_dna, DnaSequence};
//!
//! assert!(validate_dna(Some("atgaaatag")));
//! assert!(!validate_dna(Some("AUG")));
//! assert_eq!(gc_content("ATGC"), 50.0);
//! assert_eq!(translate_dna("ATGAAATAG"), "MK_");
//!
//! let dna = DnaSequence::new("atgaaatag").unwrap();
//! assert_eq!(dna.translate(), "MK_");
//! ```

pub mod alphabet;
pub mod codon;
pub mod gc;
pub mod seq;
pub mod types;
pub mod validate;

pub use alphabet::{Alphabet, DnaAlphabet, RnaAlphabet};
pub use codon::{translate_dna, GeneticCode, STOP_SYMBOL};
pub use gc::{gc_content, gc_fraction, round_to, GC_DECIMALS};
pub use seq::ValidatedSeq;
pub use types::{DnaSequence, RnaSequence};
pub use validate::{classify, is_missing, validate_dna, SequenceKind};

//! Codon translation with the standard genetic code.
//!
//! Translation reads the sequence in frame 0, drops a trailing partial codon,
//! and writes stop codons as [`STOP_SYMBOL`] instead of terminating. Codons
//! containing anything other than uppercase `A`, `C`, `G`, `T` have no entry
//! in the table and are skipped.

/// Symbol emitted for the stop codons `TAA`, `TAG` and `TGA`.
pub const STOP_SYMBOL: u8 = b'_';

// ---------------------------------------------------------------------------
// Base encoding: A=0, C=1, G=2, T=3
// ---------------------------------------------------------------------------

fn base_index(b: u8) -> Option<usize> {
    match b {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Convert a 3-base codon to an index in [0, 64).
fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let b1 = base_index(codon[0])?;
    let b2 = base_index(codon[1])?;
    let b3 = base_index(codon[2])?;
    Some(b1 * 16 + b2 * 4 + b3)
}

/// Convert an index in [0, 64) back to a codon.
fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = [b'A', b'C', b'G', b'T'];
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

// Codon order: AAA, AAC, AAG, AAT, ACA, ACC, ACG, ACT, AGA, AGC, AGG, AGT,
//              ATA, ATC, ATG, ATT, CAA, CAC, CAG, CAT, CCA, CCC, CCG, CCT,
//              CGA, CGC, CGG, CGT, CTA, CTC, CTG, CTT, GAA, GAC, GAG, GAT,
//              GCA, GCC, GCG, GCT, GGA, GGC, GGG, GGT, GTA, GTC, GTG, GTT,
//              TAA, TAC, TAG, TAT, TCA, TCC, TCG, TCT, TGA, TGC, TGG, TGT,
//              TTA, TTC, TTG, TTT

/// Standard genetic code, stops written as `_`.
const STANDARD_AA: [u8; 64] = [
    b'K', b'N', b'K', b'N', b'T', b'T', b'T', b'T', b'R', b'S', b'R', b'S',
    b'I', b'I', b'M', b'I', b'Q', b'H', b'Q', b'H', b'P', b'P', b'P', b'P',
    b'R', b'R', b'R', b'R', b'L', b'L', b'L', b'L', b'E', b'D', b'E', b'D',
    b'A', b'A', b'A', b'A', b'G', b'G', b'G', b'G', b'V', b'V', b'V', b'V',
    b'_', b'Y', b'_', b'Y', b'S', b'S', b'S', b'S', b'_', b'C', b'W', b'C',
    b'L', b'F', b'L', b'F',
];

/// The process-wide standard code.
static STANDARD: GeneticCode = GeneticCode {
    name: "Standard",
    table: STANDARD_AA,
};

// ---------------------------------------------------------------------------
// GeneticCode
// ---------------------------------------------------------------------------

/// A codon translation table.
///
/// Wraps a 64-element amino acid lookup array. Use [`GeneticCode::standard`]
/// to get the shared standard table.
#[derive(Debug, Clone)]
pub struct GeneticCode {
    name: &'static str,
    table: [u8; 64],
}

impl GeneticCode {
    /// The standard genetic code.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Human-readable name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Translate a single codon (3-byte slice) to an amino acid.
    ///
    /// Stop codons yield `Some(STOP_SYMBOL)`. Returns `None` for anything
    /// that is not an uppercase `ACGT` triplet.
    pub fn translate_codon(&self, codon: &[u8]) -> Option<u8> {
        codon_index(codon).map(|idx| self.table[idx])
    }

    /// Translate a nucleotide sequence in frame 0.
    ///
    /// Stop codons are kept as `_`, unrecognized codons are skipped and an
    /// incomplete trailing codon is ignored.
    pub fn translate(&self, seq: &[u8]) -> Vec<u8> {
        seq.chunks_exact(3)
            .filter_map(|codon| self.translate_codon(codon))
            .collect()
    }

    /// Check whether a codon is a stop codon in this table.
    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.translate_codon(codon) == Some(STOP_SYMBOL)
    }

    /// Return all stop codons for this table.
    pub fn stop_codons(&self) -> Vec<[u8; 3]> {
        (0..64)
            .filter(|&i| self.table[i] == STOP_SYMBOL)
            .map(index_to_codon)
            .collect()
    }
}

/// Translate a DNA string to a protein string with the standard code.
///
/// Works on the text as given: lowercase or non-DNA triplets contribute
/// nothing, so callers should validate (and uppercase) first. Triplets are
/// counted in characters, so a multi-byte character is one unrecognized
/// position and does not shift the frame.
pub fn translate_dna(seq: &str) -> String {
    let code = GeneticCode::standard();
    if seq.is_ascii() {
        // Table entries are all ASCII.
        return code.translate(seq.as_bytes()).into_iter().map(char::from).collect();
    }
    let chars: Vec<char> = seq.chars().collect();
    chars
        .chunks_exact(3)
        .filter_map(|codon| {
            let mut bytes = [0u8; 3];
            for (slot, &c) in bytes.iter_mut().zip(codon) {
                *slot = u8::try_from(c).ok().filter(u8::is_ascii)?;
            }
            code.translate_codon(&bytes)
        })
        .map(char::from)
        .collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_bounded_by_codon_count(seq in "[ACGT]{0,120}") {
            let protein = translate_dna(&seq);
            prop_assert_eq!(protein.len(), seq.len() / 3);
        }

        #[test]
        fn arbitrary_text_never_exceeds_bound(seq in "\\PC{0,60}") {
            let protein = translate_dna(&seq);
            prop_assert!(protein.chars().count() <= seq.chars().count() / 3);
        }
    }
}

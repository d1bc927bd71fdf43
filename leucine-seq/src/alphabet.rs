//! Alphabet definitions for nucleotide sequence validation.
//!
//! Each alphabet is a zero-sized marker type that implements [`Alphabet`],
//! defining the set of valid bytes (uppercase) for a sequence type. Only the
//! four unambiguous bases are accepted; IUPAC ambiguity codes are invalid.

/// Trait for nucleotide alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Sequence
/// constructors uppercase input first, then validate against the alphabet.
pub trait Alphabet: Clone + 'static {
    /// Human-readable name (e.g. "DNA").
    const NAME: &'static str;

    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Check every byte of `bytes` after ASCII-uppercasing it.
    fn accepts(bytes: &[u8]) -> bool {
        bytes.iter().all(|b| Self::is_valid(b.to_ascii_uppercase()))
    }
}

/// DNA alphabet: `ACGT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DnaAlphabet;

impl Alphabet for DnaAlphabet {
    const NAME: &'static str = "DNA";
    const VALID_BYTES: &'static [u8] = b"ACGT";
}

/// RNA alphabet: `ACGU`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RnaAlphabet;

impl Alphabet for RnaAlphabet {
    const NAME: &'static str = "RNA";
    const VALID_BYTES: &'static [u8] = b"ACGU";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_all_bases() {
        for &b in b"ACGT" {
            assert!(DnaAlphabet::is_valid(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u() {
        assert!(!DnaAlphabet::is_valid(b'U'));
    }

    #[test]
    fn dna_rejects_ambiguity_codes() {
        for &b in b"NRYSWKMBDHV" {
            assert!(!DnaAlphabet::is_valid(b), "DNA should reject {}", b as char);
        }
    }

    #[test]
    fn rna_rejects_t() {
        assert!(!RnaAlphabet::is_valid(b'T'));
        assert!(RnaAlphabet::is_valid(b'U'));
    }

    #[test]
    fn accepts_uppercases_first() {
        assert!(DnaAlphabet::accepts(b"acgtACGT"));
        assert!(!DnaAlphabet::accepts(b"acgu"));
        assert!(RnaAlphabet::accepts(b"acgu"));
        assert!(DnaAlphabet::accepts(b""));
    }
}

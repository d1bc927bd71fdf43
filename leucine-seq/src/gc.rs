//! GC content.

/// Decimal places used by [`gc_content`].
pub const GC_DECIMALS: u32 = 2;

/// Fraction of bases that are uppercase `G` or `C`, in [0.0, 1.0].
///
/// Returns 0.0 for an empty sequence.
pub fn gc_fraction(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }
    let gc = seq.iter().filter(|&&b| b == b'G' || b == b'C').count();
    gc as f64 / seq.len() as f64
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

/// GC content of `seq` as a percentage rounded to two decimals.
///
/// Counting is case-sensitive; validate and uppercase first. The length is
/// counted in characters. An empty sequence has 0% GC.
pub fn gc_content(seq: &str) -> f64 {
    let fraction = if seq.is_ascii() {
        gc_fraction(seq.as_bytes())
    } else {
        let (gc, total) = seq.chars().fold((0usize, 0usize), |(gc, total), c| {
            (gc + usize::from(c == 'G' || c == 'C'), total + 1)
        });
        gc as f64 / total as f64
    };
    round_to(fraction * 100.0, GC_DECIMALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_gc() {
        assert_eq!(gc_content("GGCC"), 100.0);
    }

    #[test]
    fn no_gc() {
        assert_eq!(gc_content("AATT"), 0.0);
    }

    #[test]
    fn half_gc() {
        assert_eq!(gc_content("ATGC"), 50.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_eq!(gc_content(""), 0.0);
        assert_eq!(gc_fraction(b""), 0.0);
    }

    #[test]
    fn lowercase_not_counted() {
        assert_eq!(gc_content("gcAT"), 0.0);
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(gc_content("Gé"), 50.0);
        assert_eq!(gc_content("éé"), 0.0);
    }

    #[test]
    fn rounds_to_two_places() {
        // 45 of 70
        let seq = "GCTGAGACTTCCTGGACGGGGGACAGGCTGTGGGGTTTCTCAGATAACTGGGCCCCTGCGCTCAGGAGGC";
        assert_eq!(gc_content(seq), 64.29);
        // 1 of 3
        assert_eq!(gc_content("GAT"), 33.33);
        assert_eq!(gc_content("GGT"), 66.67);
    }

    #[test]
    fn round_to_places() {
        assert_eq!(round_to(40.298507, 2), 40.3);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(31.818181, 1), 31.8);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn percentage_in_range(seq in "[ACGT]{0,200}") {
            let gc = gc_content(&seq);
            prop_assert!((0.0..=100.0).contains(&gc));
        }

        #[test]
        fn repeatable(seq in "[ACGTacgt]{0,200}") {
            prop_assert_eq!(gc_content(&seq), gc_content(&seq));
        }
    }
}

//! The embedded Team Leucine roster.

use crate::member::MemberRecord;

/// All members, in report order.
pub static ROSTER: [MemberRecord; 8] = [
    MemberRecord {
        name: "Chioma Nnadi",
        slack_handle: "Chioma",
        country: "Nigeria",
        hobby: "Writing",
        affiliation: "None",
        gene_name: "BRCA1",
        sequence: "GCTGAGACTTCCTGGACGGGGGACAGGCTGTGGGGTTTCTCAGATAACTGGGCCCCTGCGCTCAGGAGGC",
    },
    MemberRecord {
        name: "Kashish Arora",
        slack_handle: "Kashish",
        country: "India",
        hobby: "Reading",
        affiliation: "University of Glasgow",
        gene_name: "CDKN1A",
        sequence: "GAACATGTCCCAACATGTTG",
    },
    MemberRecord {
        name: "Keola Merl Joanes",
        slack_handle: "Keola",
        country: "India",
        hobby: "Reading",
        affiliation: "PCCAS",
        gene_name: "HBB gene",
        sequence: "GGGGGATATTATGAAGGGCCTTGAGCATCTGGATTCTGCCTAATAAAAAACATTTATTTTCATTGCAA",
    },
    MemberRecord {
        name: "Lavinia Dorothea F Joseph",
        slack_handle: "Lavinia",
        country: "Antigua & Barbuda",
        hobby: "Sudoku",
        affiliation: "University Mohammed V, Faculty of Medicine and Pharmacy",
        gene_name: "DHh gene",
        sequence: "GTTCCAGGTAGTGCCTGAAACTACTTTTCTGAAGAAGTATAATTAAAAGTAATCTTGTTTTGAGAA",
    },
    MemberRecord {
        name: "Atairoro Joshua",
        slack_handle: "Atairoro Joshua",
        country: "Nigeria",
        hobby: "Music",
        affiliation: "None",
        gene_name: "BRCA1",
        sequence: "ATGGAAGTTGTCATTTTATAAAGTCAGTAGTTTCTTTGGCAGCAATGCCAGGAAAGGCTCTGAGGAA",
    },
    MemberRecord {
        name: "Bezaleel Akinbami",
        slack_handle: "B3z",
        country: "Nigeria",
        hobby: "Gaming",
        affiliation: "None",
        gene_name: "None",
        sequence: "None",
    },
    MemberRecord {
        name: "Sharon Addy",
        slack_handle: "Sharon Addy",
        country: "Ghana",
        hobby: "Reading",
        affiliation: "None",
        gene_name: "MIR1-1",
        sequence: "UGGAAUGUAAAGAAGUAUGUAU",
    },
    MemberRecord {
        name: "Jegede Joseph.O",
        slack_handle: "Joseph",
        country: "Nigeria",
        hobby: "Gaming",
        affiliation: "Obafemi Awolowo University",
        gene_name: "None",
        sequence: "None",
    },
];

/// The roster as a slice.
pub fn roster() -> &'static [MemberRecord] {
    &ROSTER
}

/// Look a member up by exact name.
pub fn find_member(name: &str) -> Option<&'static MemberRecord> {
    ROSTER.iter().find(|m| m.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_order() {
        let names: Vec<_> = roster().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            [
                "Chioma Nnadi",
                "Kashish Arora",
                "Keola Merl Joanes",
                "Lavinia Dorothea F Joseph",
                "Atairoro Joshua",
                "Bezaleel Akinbami",
                "Sharon Addy",
                "Jegede Joseph.O",
            ]
        );
    }

    #[test]
    fn names_are_non_empty_and_unique() {
        for (i, m) in roster().iter().enumerate() {
            assert!(!m.name.is_empty());
            assert!(roster()[i + 1..].iter().all(|o| o.name != m.name));
        }
    }

    #[test]
    fn find_by_name() {
        let m = find_member("Kashish Arora").unwrap();
        assert_eq!(m.gene_name, "CDKN1A");
        assert_eq!(m.sequence, "GAACATGTCCCAACATGTTG");
        assert!(find_member("kashish arora").is_none());
    }

    #[test]
    fn missing_fields_use_sentinel() {
        let m = find_member("Bezaleel Akinbami").unwrap();
        assert_eq!(m.gene(), None);
        assert_eq!(m.sequence(), None);
        assert_eq!(m.gene_name, "None");
    }
}

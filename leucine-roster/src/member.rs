//! Team member records.

use leucine_core::{Annotated, Summarizable};

/// Field text meaning "not supplied".
pub const NOT_SUPPLIED: &str = "None";

/// One roster entry.
///
/// Every field is present. Optional fields carry [`NOT_SUPPLIED`] instead of
/// being absent; the accessors below give the sentinel-aware view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MemberRecord {
    /// Full name, never empty.
    pub name: &'static str,
    /// Slack display handle.
    pub slack_handle: &'static str,
    pub country: &'static str,
    pub hobby: &'static str,
    /// University or institute, or the sentinel.
    pub affiliation: &'static str,
    /// Favourite gene, or the sentinel.
    pub gene_name: &'static str,
    /// Nucleotide sequence of the gene, or the sentinel. Not necessarily DNA.
    pub sequence: &'static str,
}

fn supplied(field: &'static str) -> Option<&'static str> {
    (field != NOT_SUPPLIED).then_some(field)
}

impl MemberRecord {
    /// Affiliation, or `None` when not supplied.
    pub fn affiliation(&self) -> Option<&'static str> {
        supplied(self.affiliation)
    }

    /// Gene name, or `None` when not supplied.
    pub fn gene(&self) -> Option<&'static str> {
        supplied(self.gene_name)
    }

    /// Sequence text, or `None` when not supplied.
    pub fn sequence(&self) -> Option<&'static str> {
        supplied(self.sequence)
    }
}

impl Annotated for MemberRecord {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> Option<&str> {
        self.gene()
    }
}

impl Summarizable for MemberRecord {
    fn summary(&self) -> String {
        format!(
            "{} (@{}), {}, hobby: {}, affiliation: {}",
            self.name,
            self.slack_handle,
            self.country,
            self.hobby,
            self.affiliation().unwrap_or("none"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: MemberRecord = MemberRecord {
        name: "Ada Okafor",
        slack_handle: "ada",
        country: "Nigeria",
        hobby: "Chess",
        affiliation: "None",
        gene_name: "TP53",
        sequence: "None",
    };

    #[test]
    fn sentinel_fields_read_as_absent() {
        assert_eq!(SAMPLE.affiliation(), None);
        assert_eq!(SAMPLE.sequence(), None);
        assert_eq!(SAMPLE.gene(), Some("TP53"));
        // raw text is kept
        assert_eq!(SAMPLE.affiliation, "None");
    }

    #[test]
    fn annotated() {
        assert_eq!(Annotated::name(&SAMPLE), "Ada Okafor");
        assert_eq!(SAMPLE.description(), Some("TP53"));
    }

    #[test]
    fn summary_line() {
        assert_eq!(
            SAMPLE.summary(),
            "Ada Okafor (@ada), Nigeria, hobby: Chess, affiliation: none"
        );
    }
}

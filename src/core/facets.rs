use std::collections::HashMap;

use crate::core::Study;

/// One filterable data-type dimension of a study. The key matches the
/// portal's per-study sample count field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFacet {
    Mutations,
    Cna,
    RnaSeq,
    RnaMicroarray,
    MiRna,
    Rppa,
    MassSpectrometry,
    Treatment,
}

impl DataFacet {
    pub const ALL: [DataFacet; 8] = [
        DataFacet::Mutations,
        DataFacet::Cna,
        DataFacet::RnaSeq,
        DataFacet::RnaMicroarray,
        DataFacet::MiRna,
        DataFacet::Rppa,
        DataFacet::MassSpectrometry,
        DataFacet::Treatment,
    ];

    pub fn as_key(&self) -> &'static str {
        match self {
            DataFacet::Mutations => "sequencedSampleCount",
            DataFacet::Cna => "cnaSampleCount",
            DataFacet::RnaSeq => "mrnaRnaSeqV2SampleCount",
            DataFacet::RnaMicroarray => "mrnaMicroarraySampleCount",
            DataFacet::MiRna => "miRnaSampleCount",
            DataFacet::Rppa => "rppaSampleCount",
            DataFacet::MassSpectrometry => "massSpectrometrySampleCount",
            DataFacet::Treatment => "treatmentCount",
        }
    }

    pub fn from_key(key: &str) -> Option<DataFacet> {
        DataFacet::ALL.iter().copied().find(|facet| facet.as_key() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DataFacet::Mutations => "Mutations",
            DataFacet::Cna => "CNA",
            DataFacet::RnaSeq => "RNA-Seq",
            DataFacet::RnaMicroarray => "RNA (microarray)",
            DataFacet::MiRna => "miRNA",
            DataFacet::Rppa => "RPPA",
            DataFacet::MassSpectrometry => "Protein Mass-Spectrometry",
            DataFacet::Treatment => "Treatment",
        }
    }

    pub fn count_in(&self, study: &Study) -> u32 {
        match self {
            DataFacet::Mutations => study.sequenced_sample_count,
            DataFacet::Cna => study.cna_sample_count,
            DataFacet::RnaSeq => study.mrna_rna_seq_v2_sample_count,
            DataFacet::RnaMicroarray => study.mrna_microarray_sample_count,
            DataFacet::MiRna => study.mi_rna_sample_count,
            DataFacet::Rppa => study.rppa_sample_count,
            DataFacet::MassSpectrometry => study.mass_spectrometry_sample_count,
            DataFacet::Treatment => study.treatment_count,
        }
    }
}

/// Sum of the facet's sample count over the given studies.
pub fn sample_counts_per_facet(
    facets: &[DataFacet],
    studies: &[&Study],
) -> HashMap<DataFacet, u64> {
    facets
        .iter()
        .map(|facet| {
            let total: u64 = studies.iter().map(|study| facet.count_in(study) as u64).sum();
            (*facet, total)
        })
        .collect()
}

/// Number of studies carrying any data for the facet.
pub fn study_counts_per_facet(
    facets: &[DataFacet],
    studies: &[&Study],
) -> HashMap<DataFacet, u32> {
    facets
        .iter()
        .map(|facet| {
            let total = studies.iter().filter(|study| facet.count_in(study) > 0).count() as u32;
            (*facet, total)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for facet in DataFacet::ALL {
            assert_eq!(DataFacet::from_key(facet.as_key()), Some(facet));
        }
        assert_eq!(DataFacet::from_key("somethingElse"), None);
    }

    #[test]
    fn test_count_aggregation() {
        let mut a = Study::stub("a", "A");
        a.sequenced_sample_count = 5;
        let mut b = Study::stub("b", "B");
        b.sequenced_sample_count = 0;
        let mut c = Study::stub("c", "C");
        c.sequenced_sample_count = 3;

        let studies = vec![&a, &b, &c];
        let samples = sample_counts_per_facet(&[DataFacet::Mutations], &studies);
        let counts = study_counts_per_facet(&[DataFacet::Mutations], &studies);

        assert_eq!(samples[&DataFacet::Mutations], 8);
        assert_eq!(counts[&DataFacet::Mutations], 2);
    }
}

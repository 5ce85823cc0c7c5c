use std::collections::HashMap;

use crate::core::StudyScopeError;

/// A parsed `studyscope:` page link, e.g.
/// `studyId=brca_tcga&caseId=TCGA-AR-A1AR&tab=summary`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    pub study_id: String,
    pub case: CaseRef,
    pub nav_case_ids: Vec<String>,
    pub tab: Option<String>,
}

/// The link must name the patient either directly or through a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseRef {
    CaseId(String),
    SampleId(String),
}

impl DeepLink {
    /// Parses a `key=value&key=value` query. `studyId` and one of
    /// `caseId`/`sampleId` are required; `caseId` wins when both appear.
    pub fn parse(query: &str) -> Result<DeepLink, StudyScopeError> {
        let mut params: HashMap<&str, &str> = HashMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) if !key.is_empty() => {
                    params.insert(key, value);
                }
                _ => {
                    return Err(StudyScopeError::InvalidDeepLink(format!(
                        "malformed parameter '{}'",
                        pair
                    )));
                }
            }
        }

        let study_id = params
            .get("studyId")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                StudyScopeError::InvalidDeepLink("missing required parameter 'studyId'".to_string())
            })?
            .to_string();

        let case = match (params.get("caseId"), params.get("sampleId")) {
            (Some(case_id), _) if !case_id.is_empty() => CaseRef::CaseId(case_id.to_string()),
            (_, Some(sample_id)) if !sample_id.is_empty() => {
                CaseRef::SampleId(sample_id.to_string())
            }
            _ => {
                return Err(StudyScopeError::InvalidDeepLink(
                    "one of 'caseId' or 'sampleId' is required".to_string(),
                ));
            }
        };

        let nav_case_ids = params
            .get("navCaseIds")
            .map(|list| {
                list.split(',')
                    .map(|id| id.trim())
                    .filter(|id| !id.is_empty())
                    .map(|id| id.to_string())
                    .collect()
            })
            .unwrap_or_default();

        let tab = params.get("tab").filter(|v| !v.is_empty()).map(|v| v.to_string());

        Ok(DeepLink { study_id, case, nav_case_ids, tab })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_case_id() {
        let link = DeepLink::parse("studyId=brca_tcga&caseId=TCGA-AR-A1AR&tab=summary").unwrap();
        assert_eq!(link.study_id, "brca_tcga");
        assert_eq!(link.case, CaseRef::CaseId("TCGA-AR-A1AR".to_string()));
        assert_eq!(link.tab.as_deref(), Some("summary"));
        assert!(link.nav_case_ids.is_empty());
    }

    #[test]
    fn test_sample_id_accepted_when_case_id_absent() {
        let link = DeepLink::parse("studyId=luad_tcga&sampleId=TCGA-05-4244-01").unwrap();
        assert_eq!(link.case, CaseRef::SampleId("TCGA-05-4244-01".to_string()));
    }

    #[test]
    fn test_nav_case_ids_split_on_commas() {
        let link =
            DeepLink::parse("studyId=luad_tcga&caseId=a&navCaseIds=a,b,c").unwrap();
        assert_eq!(link.nav_case_ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_study_id_is_rejected() {
        let err = DeepLink::parse("caseId=TCGA-AR-A1AR").unwrap_err();
        assert!(err.to_string().contains("studyId"));
    }

    #[test]
    fn test_missing_case_and_sample_is_rejected() {
        assert!(DeepLink::parse("studyId=brca_tcga").is_err());
    }

    #[test]
    fn test_malformed_pair_is_rejected() {
        assert!(DeepLink::parse("studyId=brca_tcga&caseId").is_err());
    }
}

//! Feature and attribute comparison records.
//!
//! A comparison row pits your product against a set of named competitors.
//! Feature rows carry boolean marks ("hasFeature"), attribute rows carry
//! 0-100 scores. Competitor marks are embedded inline as data; they never
//! reference the competitor collection.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ComparisonId, Percentage, Timestamp};

/// Which comparison collection a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonKind {
    Feature,
    Attribute,
}

impl ComparisonKind {
    /// Name of the backing collection.
    pub fn collection(&self) -> &'static str {
        match self {
            ComparisonKind::Feature => "feature_comparisons",
            ComparisonKind::Attribute => "attribute_comparisons",
        }
    }

    /// Name of the label column ("feature" or "attribute").
    pub fn label_column(&self) -> &'static str {
        match self {
            ComparisonKind::Feature => "feature",
            ComparisonKind::Attribute => "attribute",
        }
    }
}

impl std::str::FromStr for ComparisonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feature" => Ok(ComparisonKind::Feature),
            "attribute" => Ok(ComparisonKind::Attribute),
            other => Err(format!("Unknown comparison kind: {}", other)),
        }
    }
}

/// Your product's own mark on a comparison row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OwnMark {
    Flag(bool),
    Score(Percentage),
}

impl Default for OwnMark {
    fn default() -> Self {
        OwnMark::Flag(false)
    }
}

/// One named competitor's mark on a comparison row.
///
/// The wire field names ("hasFeature" / "score") are part of the stored
/// JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompetitorMark {
    Feature {
        name: String,
        #[serde(rename = "hasFeature")]
        has_feature: bool,
    },
    Score {
        name: String,
        score: Percentage,
    },
}

impl CompetitorMark {
    /// Returns the competitor's name.
    pub fn name(&self) -> &str {
        match self {
            CompetitorMark::Feature { name, .. } => name,
            CompetitorMark::Score { name, .. } => name,
        }
    }
}

/// A stored comparison row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub id: ComparisonId,
    pub kind: ComparisonKind,
    /// The compared feature or attribute name.
    pub label: String,
    #[serde(default)]
    pub your_product: OwnMark,
    #[serde(default)]
    pub competitors: Vec<CompetitorMark>,
    #[serde(default)]
    pub category: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comparison row awaiting creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonDraft {
    pub label: String,
    #[serde(default)]
    pub your_product: OwnMark,
    #[serde(default)]
    pub competitors: Vec<CompetitorMark>,
    #[serde(default)]
    pub category: String,
}

/// Partial update for a comparison row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPatch {
    pub label: Option<String>,
    pub your_product: Option<OwnMark>,
    pub competitors: Option<Vec<CompetitorMark>>,
    pub category: Option<String>,
}

impl Comparison {
    /// Materializes a draft into a stored record with a fresh id and
    /// timestamps.
    pub fn from_draft(kind: ComparisonKind, draft: ComparisonDraft) -> Self {
        let now = Timestamp::now();
        Self {
            id: ComparisonId::new(),
            kind,
            label: draft.label,
            your_product: draft.your_product,
            competitors: draft.competitors,
            category: draft.category,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial patch, refreshing `updated_at`.
    pub fn apply(&mut self, patch: ComparisonPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(your_product) = patch.your_product {
            self.your_product = your_product;
        }
        if let Some(competitors) = patch.competitors {
            self.competitors = competitors;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_mark_serializes_with_camel_case_flag() {
        let mark = CompetitorMark::Feature {
            name: "RivalCorp".to_string(),
            has_feature: true,
        };
        let json = serde_json::to_string(&mark).unwrap();
        assert_eq!(json, r#"{"name":"RivalCorp","hasFeature":true}"#);
    }

    #[test]
    fn score_mark_roundtrips() {
        let json = r#"{"name":"RivalCorp","score":72}"#;
        let mark: CompetitorMark = serde_json::from_str(json).unwrap();
        match &mark {
            CompetitorMark::Score { name, score } => {
                assert_eq!(name, "RivalCorp");
                assert_eq!(score.value(), 72);
            }
            other => panic!("Expected Score mark, got {:?}", other),
        }
        assert_eq!(serde_json::to_string(&mark).unwrap(), json);
    }

    #[test]
    fn kind_maps_to_collection_and_label_column() {
        assert_eq!(ComparisonKind::Feature.collection(), "feature_comparisons");
        assert_eq!(ComparisonKind::Feature.label_column(), "feature");
        assert_eq!(ComparisonKind::Attribute.collection(), "attribute_comparisons");
        assert_eq!(ComparisonKind::Attribute.label_column(), "attribute");
    }

    #[test]
    fn kind_parses_from_path_segment() {
        assert_eq!("feature".parse::<ComparisonKind>().unwrap(), ComparisonKind::Feature);
        assert_eq!(
            "attribute".parse::<ComparisonKind>().unwrap(),
            ComparisonKind::Attribute
        );
        assert!("pricing".parse::<ComparisonKind>().is_err());
    }

    #[test]
    fn from_draft_stamps_kind_and_timestamps() {
        let comparison = Comparison::from_draft(
            ComparisonKind::Attribute,
            ComparisonDraft {
                label: "Ease of use".to_string(),
                your_product: OwnMark::Score(Percentage::new(81)),
                competitors: vec![CompetitorMark::Score {
                    name: "RivalCorp".to_string(),
                    score: Percentage::new(64),
                }],
                category: "UX".to_string(),
            },
        );
        assert_eq!(comparison.kind, ComparisonKind::Attribute);
        assert_eq!(comparison.created_at, comparison.updated_at);
        assert_eq!(comparison.competitors[0].name(), "RivalCorp");
    }

    #[test]
    fn apply_replaces_competitor_marks_wholesale() {
        let mut comparison = Comparison::from_draft(
            ComparisonKind::Feature,
            ComparisonDraft {
                label: "SSO".to_string(),
                your_product: OwnMark::Flag(true),
                competitors: vec![CompetitorMark::Feature {
                    name: "A".to_string(),
                    has_feature: false,
                }],
                category: "Security".to_string(),
            },
        );

        comparison.apply(ComparisonPatch {
            competitors: Some(vec![
                CompetitorMark::Feature {
                    name: "A".to_string(),
                    has_feature: true,
                },
                CompetitorMark::Feature {
                    name: "B".to_string(),
                    has_feature: false,
                },
            ]),
            ..Default::default()
        });

        assert_eq!(comparison.competitors.len(), 2);
        assert_eq!(comparison.label, "SSO");
    }
}

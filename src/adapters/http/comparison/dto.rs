//! HTTP DTOs for comparison endpoints.
//!
//! The API uses a uniform `label` field for both kinds; the kind-specific
//! column name ("feature" / "attribute") is a storage concern.

use serde::{Deserialize, Serialize};

use crate::domain::resources::{
    Comparison, ComparisonDraft, ComparisonPatch, CompetitorMark, OwnMark,
};

/// Request to create one comparison row.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonRowRequest {
    pub label: String,
    #[serde(default)]
    pub your_product: OwnMark,
    #[serde(default)]
    pub competitors: Vec<CompetitorMark>,
    #[serde(default)]
    pub category: String,
}

impl From<ComparisonRowRequest> for ComparisonDraft {
    fn from(req: ComparisonRowRequest) -> Self {
        Self {
            label: req.label,
            your_product: req.your_product,
            competitors: req.competitors,
            category: req.category,
        }
    }
}

/// Partial update request; only the present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComparisonRequest {
    pub label: Option<String>,
    pub your_product: Option<OwnMark>,
    pub competitors: Option<Vec<CompetitorMark>>,
    pub category: Option<String>,
}

impl From<UpdateComparisonRequest> for ComparisonPatch {
    fn from(req: UpdateComparisonRequest) -> Self {
        Self {
            label: req.label,
            your_product: req.your_product,
            competitors: req.competitors,
            category: req.category,
        }
    }
}

/// Comparison representation in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub id: String,
    pub label: String,
    pub your_product: OwnMark,
    pub competitors: Vec<CompetitorMark>,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Comparison> for ComparisonResponse {
    fn from(row: Comparison) -> Self {
        Self {
            id: row.id.to_string(),
            label: row.label,
            your_product: row.your_product,
            competitors: row.competitors,
            category: row.category,
            created_at: row.created_at.to_rfc3339(),
            updated_at: row.updated_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_request_deserializes_feature_marks() {
        let json = r#"{
            "label": "SSO",
            "your_product": true,
            "competitors": [{"name": "RivalCorp", "hasFeature": false}],
            "category": "Security"
        }"#;
        let req: ComparisonRowRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.label, "SSO");
        assert_eq!(req.your_product, OwnMark::Flag(true));
        assert_eq!(req.competitors.len(), 1);
    }

    #[test]
    fn row_request_deserializes_score_marks() {
        let json = r#"{
            "label": "Ease of use",
            "your_product": 81,
            "competitors": [{"name": "RivalCorp", "score": 64}]
        }"#;
        let req: ComparisonRowRequest = serde_json::from_str(json).unwrap();
        match req.your_product {
            OwnMark::Score(score) => assert_eq!(score.value(), 81),
            other => panic!("Expected a score mark, got {:?}", other),
        }
    }

    #[test]
    fn update_request_converts_to_patch() {
        let req: UpdateComparisonRequest =
            serde_json::from_str(r#"{"category": "UX"}"#).unwrap();
        let patch: ComparisonPatch = req.into();
        assert_eq!(patch.category.as_deref(), Some("UX"));
        assert!(patch.label.is_none());
    }
}

//! Competitor records - tracked rival companies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompetitorId, Percentage, Timestamp};

/// A tracked competitor. Scalar profile fields plus bounded market
/// metrics; list fields default to empty rather than fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competitor {
    pub id: CompetitorId,
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub founded: String,
    #[serde(default)]
    pub employees: String,
    #[serde(default)]
    pub funding: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub market_share: Percentage,
    #[serde(default)]
    pub growth_rate: Percentage,
    #[serde(default)]
    pub customer_satisfaction: Percentage,
    #[serde(default)]
    pub price_point: String,
    #[serde(default)]
    pub threat: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A competitor awaiting creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorDraft {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub founded: String,
    #[serde(default)]
    pub employees: String,
    #[serde(default)]
    pub funding: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub market_share: Percentage,
    #[serde(default)]
    pub growth_rate: Percentage,
    #[serde(default)]
    pub customer_satisfaction: Percentage,
    #[serde(default)]
    pub price_point: String,
    #[serde(default)]
    pub threat: String,
}

/// Partial update for a competitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub description: Option<String>,
    pub founded: Option<String>,
    pub employees: Option<String>,
    pub funding: Option<String>,
    pub locations: Option<Vec<String>>,
    pub strengths: Option<Vec<String>>,
    pub weaknesses: Option<Vec<String>>,
    pub market_share: Option<Percentage>,
    pub growth_rate: Option<Percentage>,
    pub customer_satisfaction: Option<Percentage>,
    pub price_point: Option<String>,
    pub threat: Option<String>,
}

impl Competitor {
    /// Materializes a draft into a stored record with a fresh id and
    /// timestamps.
    pub fn from_draft(draft: CompetitorDraft) -> Self {
        let now = Timestamp::now();
        Self {
            id: CompetitorId::new(),
            name: draft.name,
            logo: draft.logo,
            description: draft.description,
            founded: draft.founded,
            employees: draft.employees,
            funding: draft.funding,
            locations: draft.locations,
            strengths: draft.strengths,
            weaknesses: draft.weaknesses,
            market_share: draft.market_share,
            growth_rate: draft.growth_rate,
            customer_satisfaction: draft.customer_satisfaction,
            price_point: draft.price_point,
            threat: draft.threat,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial patch, refreshing `updated_at`.
    pub fn apply(&mut self, patch: CompetitorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(founded) = patch.founded {
            self.founded = founded;
        }
        if let Some(employees) = patch.employees {
            self.employees = employees;
        }
        if let Some(funding) = patch.funding {
            self.funding = funding;
        }
        if let Some(locations) = patch.locations {
            self.locations = locations;
        }
        if let Some(strengths) = patch.strengths {
            self.strengths = strengths;
        }
        if let Some(weaknesses) = patch.weaknesses {
            self.weaknesses = weaknesses;
        }
        if let Some(market_share) = patch.market_share {
            self.market_share = market_share;
        }
        if let Some(growth_rate) = patch.growth_rate {
            self.growth_rate = growth_rate;
        }
        if let Some(customer_satisfaction) = patch.customer_satisfaction {
            self.customer_satisfaction = customer_satisfaction;
        }
        if let Some(price_point) = patch.price_point {
            self.price_point = price_point;
        }
        if let Some(threat) = patch.threat {
            self.threat = threat;
        }
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_draft_carries_all_fields() {
        let competitor = Competitor::from_draft(CompetitorDraft {
            name: "RivalCorp".to_string(),
            market_share: Percentage::new(34),
            locations: vec!["Berlin".to_string(), "NYC".to_string()],
            threat: "high".to_string(),
            ..Default::default()
        });
        assert_eq!(competitor.name, "RivalCorp");
        assert_eq!(competitor.market_share.value(), 34);
        assert_eq!(competitor.locations.len(), 2);
    }

    #[test]
    fn apply_patches_metrics_without_touching_profile() {
        let mut competitor = Competitor::from_draft(CompetitorDraft {
            name: "RivalCorp".to_string(),
            founded: "2015".to_string(),
            ..Default::default()
        });

        competitor.apply(CompetitorPatch {
            growth_rate: Some(Percentage::new(12)),
            ..Default::default()
        });

        assert_eq!(competitor.growth_rate.value(), 12);
        assert_eq!(competitor.founded, "2015");
        assert_eq!(competitor.name, "RivalCorp");
    }

    #[test]
    fn missing_list_fields_deserialize_to_empty() {
        let json = format!(
            r#"{{"id":"{}","name":"Bare","created_at":"2026-01-01T00:00:00Z","updated_at":"2026-01-01T00:00:00Z"}}"#,
            CompetitorId::new()
        );
        let competitor: Competitor = serde_json::from_str(&json).unwrap();
        assert!(competitor.locations.is_empty());
        assert!(competitor.strengths.is_empty());
        assert_eq!(competitor.market_share.value(), 0);
    }
}

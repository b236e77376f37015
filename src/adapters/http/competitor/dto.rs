//! HTTP DTOs for competitor endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;
use crate::domain::resources::{Competitor, CompetitorDraft, CompetitorPatch};

/// Request to create a competitor.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCompetitorRequest {
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

impl From<CreateCompetitorRequest> for CompetitorDraft {
    fn from(req: CreateCompetitorRequest) -> Self {
        Self {
            name: req.name,
            logo: req.logo,
            description: req.description,
            founded: req.founded,
            employees: req.employees,
            funding: req.funding,
            locations: req.locations,
            strengths: req.strengths,
            weaknesses: req.weaknesses,
            market_share: req.market_share,
            growth_rate: req.growth_rate,
            customer_satisfaction: req.customer_satisfaction,
            price_point: req.price_point,
            threat: req.threat,
        }
    }
}

/// Partial update request; only the present fields change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompetitorRequest {
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

impl From<UpdateCompetitorRequest> for CompetitorPatch {
    fn from(req: UpdateCompetitorRequest) -> Self {
        Self {
            name: req.name,
            logo: req.logo,
            description: req.description,
            founded: req.founded,
            employees: req.employees,
            funding: req.funding,
            locations: req.locations,
            strengths: req.strengths,
            weaknesses: req.weaknesses,
            market_share: req.market_share,
            growth_rate: req.growth_rate,
            customer_satisfaction: req.customer_satisfaction,
            price_point: req.price_point,
            threat: req.threat,
        }
    }
}

/// Competitor representation in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitorResponse {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub founded: String,
    pub employees: String,
    pub funding: String,
    pub locations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub market_share: Percentage,
    pub growth_rate: Percentage,
    pub customer_satisfaction: Percentage,
    pub price_point: String,
    pub threat: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Competitor> for CompetitorResponse {
    fn from(competitor: Competitor) -> Self {
        Self {
            id: competitor.id.to_string(),
            name: competitor.name,
            logo: competitor.logo,
            description: competitor.description,
            founded: competitor.founded,
            employees: competitor.employees,
            funding: competitor.funding,
            locations: competitor.locations,
            strengths: competitor.strengths,
            weaknesses: competitor.weaknesses,
            market_share: competitor.market_share,
            growth_rate: competitor.growth_rate,
            customer_satisfaction: competitor.customer_satisfaction,
            price_point: competitor.price_point,
            threat: competitor.threat,
            created_at: competitor.created_at.to_rfc3339(),
            updated_at: competitor.updated_at.to_rfc3339(),
        }
    }
}

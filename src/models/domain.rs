use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::MatchError;

/// Kind of work an RFP asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestType {
    Project,
    Service,
    Rental,
    PartSupply,
}

impl RequestType {
    pub const ALL: [RequestType; 4] = [
        RequestType::Project,
        RequestType::Service,
        RequestType::Rental,
        RequestType::PartSupply,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestType::Project => "PROJECT",
            RequestType::Service => "SERVICE",
            RequestType::Rental => "RENTAL",
            RequestType::PartSupply => "PART_SUPPLY",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestType {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        RequestType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| MatchError::UnknownRequestType(s.to_string()))
    }
}

/// Lifecycle state of an RFP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    #[default]
    Open,
    Closed,
    Awarded,
    Cancelled,
}

/// Position of a party in the construction supply chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplyChainRole {
    BuilderContractor,
    ConstructionClient,
    OperationalTeam,
    FieldService,
    ComplianceTeam,
    MaterialSupplier,
    EquipmentVendor,
    Architect,
    PlumbingAgency,
    ForkliftProvider,
    TruckingProvider,
}

impl SupplyChainRole {
    pub const ALL: [SupplyChainRole; 11] = [
        SupplyChainRole::BuilderContractor,
        SupplyChainRole::ConstructionClient,
        SupplyChainRole::OperationalTeam,
        SupplyChainRole::FieldService,
        SupplyChainRole::ComplianceTeam,
        SupplyChainRole::MaterialSupplier,
        SupplyChainRole::EquipmentVendor,
        SupplyChainRole::Architect,
        SupplyChainRole::PlumbingAgency,
        SupplyChainRole::ForkliftProvider,
        SupplyChainRole::TruckingProvider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyChainRole::BuilderContractor => "BUILDER_CONTRACTOR",
            SupplyChainRole::ConstructionClient => "CONSTRUCTION_CLIENT",
            SupplyChainRole::OperationalTeam => "OPERATIONAL_TEAM",
            SupplyChainRole::FieldService => "FIELD_SERVICE",
            SupplyChainRole::ComplianceTeam => "COMPLIANCE_TEAM",
            SupplyChainRole::MaterialSupplier => "MATERIAL_SUPPLIER",
            SupplyChainRole::EquipmentVendor => "EQUIPMENT_VENDOR",
            SupplyChainRole::Architect => "ARCHITECT",
            SupplyChainRole::PlumbingAgency => "PLUMBING_AGENCY",
            SupplyChainRole::ForkliftProvider => "FORKLIFT_PROVIDER",
            SupplyChainRole::TruckingProvider => "TRUCKING_PROVIDER",
        }
    }
}

impl fmt::Display for SupplyChainRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplyChainRole {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        SupplyChainRole::ALL
            .into_iter()
            .find(|r| r.as_str() == normalized)
            .ok_or_else(|| MatchError::UnknownRole(s.to_string()))
    }
}

/// A posted request for proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Request {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "requiredCertifications", default)]
    pub required_certifications: Option<Vec<String>>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub budget: Option<f64>,
    #[serde(default)]
    pub timeline: Option<String>,
    #[serde(default)]
    pub status: RequestStatus,
    #[validate(length(min = 1))]
    #[serde(rename = "posterId")]
    pub poster_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Request {
    /// Required certifications, empty when none were listed
    pub fn certifications(&self) -> &[String] {
        self.required_certifications.as_deref().unwrap_or(&[])
    }

    /// Title, description and requirements joined and lower-cased
    pub fn searchable_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.description,
            self.requirements.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }
}

/// A supplier or contractor profile that requests are matched against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[validate(length(min = 1))]
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "supplyChainRole", default)]
    pub supply_chain_role: Option<SupplyChainRole>,
    #[serde(rename = "regionPreference", default)]
    pub region_preference: Option<String>,
    #[serde(rename = "userCertifications", default)]
    pub certifications: Option<Vec<String>>,
}

impl CandidateProfile {
    /// Held certifications, empty when none were listed
    pub fn held_certifications(&self) -> &[String] {
        self.certifications.as_deref().unwrap_or(&[])
    }
}

/// An item annotated with its match score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
}

impl<T> Scored<T> {
    pub fn new(item: T, match_score: u32) -> Self {
        Self { item, match_score }
    }
}

/// Marketplace list filters applied to requests before ranking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestFilters {
    #[serde(rename = "type", default)]
    pub request_type: Option<RequestType>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(rename = "minBudget", default)]
    pub min_budget: Option<f64>,
    #[serde(rename = "maxBudget", default)]
    pub max_budget: Option<f64>,
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub status: Option<RequestStatus>,
    #[serde(rename = "posterId", default)]
    pub poster_id: Option<String>,
}

/// Point values for each scoring signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringWeights {
    /// Flat bonus for passing the relevance gate
    pub relevance_base: u32,
    pub keyword_per_hit: u32,
    pub keyword_max: u32,
    pub region: u32,
    pub certification: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            relevance_base: 40,
            keyword_per_hit: 5,
            keyword_max: 30,
            region: 15,
            certification: 15,
        }
    }
}

/// Per-signal contributions behind a match score
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub relevant: bool,
    pub relevance: u32,
    pub keyword: u32,
    pub region: u32,
    pub certification: u32,
    #[serde(rename = "matchedKeywords")]
    pub matched_keywords: Vec<String>,
    #[serde(rename = "matchedCertifications")]
    pub matched_certifications: Vec<String>,
    pub total: u32,
}

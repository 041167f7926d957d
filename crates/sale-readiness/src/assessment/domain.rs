use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Financial,
    OwnerDependency,
    Assets,
    Legal,
    Marketing,
    Presentation,
}

impl CategoryId {
    /// Fixed reporting order; recommendation blocks follow it too.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Financial,
            Self::OwnerDependency,
            Self::Assets,
            Self::Legal,
            Self::Marketing,
            Self::Presentation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial",
            Self::OwnerDependency => "Owner Dependency",
            Self::Assets => "Assets",
            Self::Legal => "Legal",
            Self::Marketing => "Marketing & Customers",
            Self::Presentation => "Presentation to Buyers",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::OwnerDependency => "owner_dependency",
            Self::Assets => "assets",
            Self::Legal => "legal",
            Self::Marketing => "marketing",
            Self::Presentation => "presentation",
        }
    }

    /// Number of questions the category owns. Category means divide by this,
    /// not by the number of answered questions.
    pub const fn question_count(self) -> usize {
        match self {
            Self::Financial => 4,
            _ => 3,
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    FinancialStatements,
    ExpenseSeparation,
    CashFlow,
    FinancingReady,
    OwnerDependency,
    EmployeeManagement,
    WrittenProcedures,
    PhysicalAssets,
    IntangibleAssets,
    AssetManagement,
    ContractsUpdated,
    Licenses,
    LegalRisks,
    LoyalCustomers,
    CrmData,
    MarketingPlan,
    ReadyToShow,
    TeaserReady,
    KpisAvailable,
}

impl QuestionKey {
    pub const fn ordered() -> [Self; 19] {
        [
            Self::FinancialStatements,
            Self::ExpenseSeparation,
            Self::CashFlow,
            Self::FinancingReady,
            Self::OwnerDependency,
            Self::EmployeeManagement,
            Self::WrittenProcedures,
            Self::PhysicalAssets,
            Self::IntangibleAssets,
            Self::AssetManagement,
            Self::ContractsUpdated,
            Self::Licenses,
            Self::LegalRisks,
            Self::LoyalCustomers,
            Self::CrmData,
            Self::MarketingPlan,
            Self::ReadyToShow,
            Self::TeaserReady,
            Self::KpisAvailable,
        ]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FinancialStatements => "financial_statements",
            Self::ExpenseSeparation => "expense_separation",
            Self::CashFlow => "cash_flow",
            Self::FinancingReady => "financing_ready",
            Self::OwnerDependency => "owner_dependency",
            Self::EmployeeManagement => "employee_management",
            Self::WrittenProcedures => "written_procedures",
            Self::PhysicalAssets => "physical_assets",
            Self::IntangibleAssets => "intangible_assets",
            Self::AssetManagement => "asset_management",
            Self::ContractsUpdated => "contracts_updated",
            Self::Licenses => "licenses",
            Self::LegalRisks => "legal_risks",
            Self::LoyalCustomers => "loyal_customers",
            Self::CrmData => "crm_data",
            Self::MarketingPlan => "marketing_plan",
            Self::ReadyToShow => "ready_to_show",
            Self::TeaserReady => "teaser_ready",
            Self::KpisAvailable => "kpis_available",
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown question key '{0}'")]
pub struct UnknownQuestionKey(pub String);

impl FromStr for QuestionKey {
    type Err = UnknownQuestionKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str() == trimmed)
            .ok_or_else(|| UnknownQuestionKey(trimmed.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerDomain {
    Ternary,
    FivePoint,
}

impl AnswerDomain {
    pub fn accepts(self, token: &str) -> bool {
        match self {
            Self::Ternary => TernaryAnswer::from_token(token).is_some(),
            Self::FivePoint => FivePointAnswer::from_token(token).is_some(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TernaryAnswer {
    Yes,
    No,
    DontKnow,
}

impl TernaryAnswer {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::DontKnow => "dont_know",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "dont_know" => Some(Self::DontKnow),
            _ => None,
        }
    }

    /// An unsure answer sits next to the negative pole, not at the midpoint.
    pub const fn score(self) -> u8 {
        match self {
            Self::Yes => 5,
            Self::No => 1,
            Self::DontKnow => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FivePointAnswer {
    Excellent,
    Good,
    Average,
    Poor,
    VeryPoor,
}

impl FivePointAnswer {
    pub const fn token(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Average => "average",
            Self::Poor => "poor",
            Self::VeryPoor => "very_poor",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "average" => Some(Self::Average),
            "poor" => Some(Self::Poor),
            "very_poor" => Some(Self::VeryPoor),
            _ => None,
        }
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::Excellent => 5,
            Self::Good => 4,
            Self::Average => 3,
            Self::Poor => 2,
            Self::VeryPoor => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessTier {
    High,
    Medium,
    Low,
    VeryLow,
}

impl ReadinessTier {
    /// First matching threshold wins.
    pub const fn for_score(overall: u8) -> Self {
        if overall >= 80 {
            Self::High
        } else if overall >= 60 {
            Self::Medium
        } else if overall >= 40 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub const fn verbal_assessment(self) -> &'static str {
        match self {
            Self::High => "business ready at a high level for sale",
            Self::Medium => "business ready at a medium level for sale",
            Self::Low => "business requires further preparation before sale",
            Self::VeryLow => "business requires significant work before sale",
        }
    }

    pub const fn readiness_level(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low – requires preparation",
            Self::VeryLow => "very low – requires significant work",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_keys_round_trip_through_wire_names() {
        for key in QuestionKey::ordered() {
            assert_eq!(key.as_str().parse::<QuestionKey>(), Ok(key));
            let json = serde_json::to_string(&key).expect("serializes");
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert_eq!(
            "revenue".parse::<QuestionKey>(),
            Err(UnknownQuestionKey("revenue".to_string()))
        );
    }

    #[test]
    fn category_sizes_cover_nineteen_questions() {
        let total: usize = CategoryId::ordered()
            .iter()
            .map(|category| category.question_count())
            .sum();
        assert_eq!(total, QuestionKey::ordered().len());
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert_eq!(TernaryAnswer::from_token("Yes"), None);
        assert_eq!(FivePointAnswer::from_token("very poor"), None);
        assert!(AnswerDomain::FivePoint.accepts("very_poor"));
        assert!(!AnswerDomain::Ternary.accepts("excellent"));
    }
}

pub mod comparison;
pub mod evaluator;

use serde::{Deserialize, Serialize};

use crate::model::SimulationResult;

pub use comparison::get_comparison_data;
pub use evaluator::run_simulation;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostPoint {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MccPoint {
    pub name: String,
    pub before: i64,
    pub after: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GovernancePoint {
    pub name: String,
    pub score: u32,
}

/// Results for all three strategies plus display-oriented series derived from
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub current: SimulationResult,
    pub partial: SimulationResult,
    pub full: SimulationResult,
    pub cost_comparison: Vec<CostPoint>,
    pub mcc_comparison: Vec<MccPoint>,
    pub governance_scores: Vec<GovernancePoint>,
}

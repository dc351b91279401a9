pub mod assumptions;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ElectionScope {
    OnlyNational,
    NationalAndRegional,
}

impl ElectionScope {
    pub const ALL: [ElectionScope; 2] = [
        ElectionScope::OnlyNational,
        ElectionScope::NationalAndRegional,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::OnlyNational => "only_national",
            Self::NationalAndRegional => "national_and_regional",
        }
    }

    pub fn includes_regions(&self) -> bool {
        matches!(self, Self::NationalAndRegional)
    }
}

impl Display for ElectionScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::OnlyNational => "National only",
            Self::NationalAndRegional => "National + regional",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error)]
#[error("unknown election scope: {0}")]
pub struct ScopeParseError(pub String);

impl FromStr for ElectionScope {
    type Err = ScopeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "only_national" | "national" => Ok(Self::OnlyNational),
            "national_and_regional" | "combined" | "all" => Ok(Self::NationalAndRegional),
            _ => Err(ScopeParseError(s.to_string())),
        }
    }
}

/// Degree to which election cycles are consolidated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SyncType {
    /// Current baseline, no consolidation.
    #[serde(alias = "current")]
    None,
    Partial,
    Full,
}

impl SyncType {
    pub const ALL: [SyncType; 3] = [SyncType::None, SyncType::Partial, SyncType::Full];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Full => "full",
        }
    }

    /// Long label used in result headlines.
    pub fn headline(&self) -> &'static str {
        match self {
            Self::None => "Current System",
            Self::Partial => "Partial Synchronization",
            Self::Full => "Full Synchronization",
        }
    }
}

impl Display for SyncType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::None => "Current",
            Self::Partial => "Partial",
            Self::Full => "Full",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error)]
#[error("unknown sync type: {0}")]
pub struct SyncTypeParseError(pub String);

impl FromStr for SyncType {
    type Err = SyncTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "none" | "current" | "baseline" => Ok(Self::None),
            "partial" => Ok(Self::Partial),
            "full" => Ok(Self::Full),
            _ => Err(SyncTypeParseError(s.to_string())),
        }
    }
}

/// Projection window. Only the two horizons the calculator offers exist, so a
/// zero-year horizon cannot be expressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub enum TimeHorizon {
    FiveYears,
    TenYears,
}

impl TimeHorizon {
    pub const ALL: [TimeHorizon; 2] = [TimeHorizon::FiveYears, TimeHorizon::TenYears];

    pub fn years(&self) -> u32 {
        match self {
            Self::FiveYears => 5,
            Self::TenYears => 10,
        }
    }
}

impl Display for TimeHorizon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} years", self.years())
    }
}

#[derive(Debug, Error)]
#[error("unsupported time horizon: {0} (expected 5 or 10)")]
pub struct TimeHorizonError(pub String);

impl TryFrom<u32> for TimeHorizon {
    type Error = TimeHorizonError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::FiveYears),
            10 => Ok(Self::TenYears),
            other => Err(TimeHorizonError(other.to_string())),
        }
    }
}

impl From<TimeHorizon> for u32 {
    fn from(value: TimeHorizon) -> Self {
        value.years()
    }
}

impl FromStr for TimeHorizon {
    type Err = TimeHorizonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("y")
            .or_else(|| trimmed.strip_suffix("years"))
            .unwrap_or(trimmed)
            .trim();
        let years = digits
            .parse::<u32>()
            .map_err(|_| TimeHorizonError(s.to_string()))?;
        Self::try_from(years)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feasibility {
    Low,
    Medium,
    High,
}

impl Display for Feasibility {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInput {
    pub election_scope: ElectionScope,
    pub sync_type: SyncType,
    pub time_horizon: TimeHorizon,
    pub cost_per_cycle: f64,
    pub mcc_duration: f64,
    pub participating_regions: u32,
}

impl SimulationInput {
    pub fn with_sync_type(mut self, sync_type: SyncType) -> Self {
        self.sync_type = sync_type;
        self
    }
}

impl Default for SimulationInput {
    fn default() -> Self {
        Self {
            election_scope: ElectionScope::NationalAndRegional,
            sync_type: SyncType::None,
            time_horizon: TimeHorizon::TenYears,
            cost_per_cycle: 4000.0,
            mcc_duration: 60.0,
            participating_regions: 28,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub total_cost: i64,
    pub cost_savings: i64,
    pub cost_savings_percent: f64,
    pub mcc_days_before: i64,
    pub mcc_days_after: i64,
    pub mcc_reduction: f64,
    pub governance_score: u32,
    pub admin_load_before: i64,
    pub admin_load_after: i64,
    pub admin_reduction: f64,
    pub feasibility: Feasibility,
    pub election_cycles_before: u32,
    pub election_cycles_after: u32,
}

impl SimulationResult {
    /// Cost of the unsynchronized baseline, reconstructed from the rounded
    /// output fields.
    pub fn baseline_cost(&self) -> i64 {
        self.total_cost + self.cost_savings
    }
}

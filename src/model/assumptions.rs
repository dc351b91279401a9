//! Fixed multipliers behind the projection. All values are illustrative and
//! not calibrated against any real election data.

/// Security and logistics overhead applied to every cycle.
pub const SECURITY_MULTIPLIER: f64 = 1.4;

/// Administrative load units consumed by one election cycle.
pub const ADMIN_LOAD_PER_CYCLE: f64 = 25.0;

/// Share of regions holding an independent election in any given year.
pub const REGIONAL_ELECTION_FREQUENCY: f64 = 0.2;

/// Cost weight of each participating region under the combined scope.
pub const REGION_COST_WEIGHT: f64 = 0.3;

/// Extra cost of coordinating a fully synchronized cycle.
pub const FULL_SYNC_COORDINATION_OVERHEAD: f64 = 0.15;

/// Extra administrative load of a fully synchronized cycle.
pub const FULL_SYNC_ADMIN_OVERHEAD: f64 = 0.3;

pub const NONE_EFFICIENCY: f64 = 1.0;
pub const PARTIAL_EFFICIENCY: f64 = 0.6;
pub const FULL_EFFICIENCY: f64 = 0.4;

/// Years between consolidated cycles under full synchronization.
pub const CONSOLIDATED_CYCLE_YEARS: f64 = 5.0;

pub const GOVERNANCE_BASE: f64 = 50.0;
pub const GOVERNANCE_IMPACT_WEIGHT: f64 = 0.5;
pub const GOVERNANCE_FLOOR: f64 = 40.0;
pub const GOVERNANCE_CEILING: f64 = 100.0;

/// Partial synchronization drops to medium feasibility above this many regions.
pub const PARTIAL_REGION_LIMIT: u32 = 20;

/// Full synchronization drops to low feasibility above this many regions.
pub const FULL_REGION_LIMIT: u32 = 15;

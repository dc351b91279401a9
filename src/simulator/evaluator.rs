use crate::model::assumptions::{
    ADMIN_LOAD_PER_CYCLE, CONSOLIDATED_CYCLE_YEARS, FULL_EFFICIENCY, FULL_REGION_LIMIT,
    FULL_SYNC_ADMIN_OVERHEAD, FULL_SYNC_COORDINATION_OVERHEAD, GOVERNANCE_BASE,
    GOVERNANCE_CEILING, GOVERNANCE_FLOOR, GOVERNANCE_IMPACT_WEIGHT, NONE_EFFICIENCY,
    PARTIAL_EFFICIENCY, PARTIAL_REGION_LIMIT, REGIONAL_ELECTION_FREQUENCY, REGION_COST_WEIGHT,
    SECURITY_MULTIPLIER,
};
use crate::model::{Feasibility, SimulationInput, SimulationResult, SyncType};

/// Projects one scenario. Pure and deterministic: the same input always yields
/// the same result.
pub fn run_simulation(input: &SimulationInput) -> SimulationResult {
    let horizon = f64::from(input.time_horizon.years());
    let regions = f64::from(input.participating_regions);
    let combined = input.election_scope.includes_regions();

    let frequency = election_frequency(combined, regions);
    let cycles_before = round_half_up(frequency * horizon);
    let (cycles_after, efficiency) = synced_cycles(input.sync_type, cycles_before, horizon);

    let region_multiplier = if combined {
        regions * REGION_COST_WEIGHT
    } else {
        1.0
    };
    let coordination = if input.sync_type == SyncType::Full {
        1.0 + FULL_SYNC_COORDINATION_OVERHEAD
    } else {
        1.0
    };
    let cost_before =
        cycles_before * input.cost_per_cycle * region_multiplier * SECURITY_MULTIPLIER;
    let cost_after = cycles_after
        * input.cost_per_cycle
        * region_multiplier
        * SECURITY_MULTIPLIER
        * coordination;
    let cost_savings = cost_before - cost_after;

    let mcc_days_before = cycles_before * input.mcc_duration;
    let mcc_days_after = cycles_after * input.mcc_duration * efficiency;

    let governance_impact = (mcc_days_before - mcc_days_after) / horizon;
    let governance_score = (GOVERNANCE_BASE + governance_impact * GOVERNANCE_IMPACT_WEIGHT)
        .clamp(GOVERNANCE_FLOOR, GOVERNANCE_CEILING);

    let admin_overhead = if input.sync_type == SyncType::Full {
        1.0 + FULL_SYNC_ADMIN_OVERHEAD
    } else {
        1.0
    };
    let admin_load_before = cycles_before * ADMIN_LOAD_PER_CYCLE;
    let admin_load_after = cycles_after * ADMIN_LOAD_PER_CYCLE * admin_overhead;

    SimulationResult {
        total_cost: round_whole(cost_after),
        cost_savings: round_whole(cost_savings),
        cost_savings_percent: round_tenth(percent_of(cost_savings, cost_before)),
        mcc_days_before: round_whole(mcc_days_before),
        mcc_days_after: round_whole(mcc_days_after),
        mcc_reduction: round_tenth(percent_of(mcc_days_before - mcc_days_after, mcc_days_before)),
        governance_score: round_whole(governance_score) as u32,
        admin_load_before: round_whole(admin_load_before),
        admin_load_after: round_whole(admin_load_after),
        admin_reduction: round_tenth(percent_of(
            admin_load_before - admin_load_after,
            admin_load_before,
        )),
        feasibility: assess_feasibility(input.sync_type, input.participating_regions),
        election_cycles_before: cycles_before as u32,
        election_cycles_after: cycles_after as u32,
    }
}

/// Elections per year. Under the combined scope a fifth of the regions hold
/// an off-cycle election each year on top of the national one.
pub fn election_frequency(includes_regions: bool, regions: f64) -> f64 {
    if includes_regions {
        1.0 + regions * REGIONAL_ELECTION_FREQUENCY
    } else {
        1.0
    }
}

/// Cycle count after synchronization and the share of restricted days that
/// remains per cycle.
pub fn synced_cycles(sync_type: SyncType, cycles_before: f64, horizon_years: f64) -> (f64, f64) {
    match sync_type {
        SyncType::None => (cycles_before, NONE_EFFICIENCY),
        SyncType::Partial => ((cycles_before / 2.0).ceil(), PARTIAL_EFFICIENCY),
        SyncType::Full => (
            (horizon_years / CONSOLIDATED_CYCLE_YEARS).ceil(),
            FULL_EFFICIENCY,
        ),
    }
}

/// Decision table over strategy and scale. Independent of the numeric
/// projection.
pub fn assess_feasibility(sync_type: SyncType, participating_regions: u32) -> Feasibility {
    match sync_type {
        SyncType::None => Feasibility::High,
        SyncType::Partial => {
            if participating_regions > PARTIAL_REGION_LIMIT {
                Feasibility::Medium
            } else {
                Feasibility::High
            }
        }
        SyncType::Full => {
            if participating_regions > FULL_REGION_LIMIT {
                Feasibility::Low
            } else {
                Feasibility::Medium
            }
        }
    }
}

/// `part / whole * 100`, with an empty baseline read as no change.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 || !whole.is_finite() {
        return 0.0;
    }
    part / whole * 100.0
}

/// Rounds ties toward positive infinity. `f64::round` is exact but sends
/// negative ties away from zero, so those are pulled back up by one.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

pub fn round_whole(value: f64) -> i64 {
    round_half_up(value) as i64
}

pub fn round_tenth(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

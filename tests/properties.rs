use election_sync_sim::{run_simulation, ElectionScope, SimulationInput, SyncType, TimeHorizon};
use proptest::prelude::*;

fn any_scope() -> impl Strategy<Value = ElectionScope> {
    prop::sample::select(ElectionScope::ALL.to_vec())
}

fn any_sync() -> impl Strategy<Value = SyncType> {
    prop::sample::select(SyncType::ALL.to_vec())
}

fn any_horizon() -> impl Strategy<Value = TimeHorizon> {
    prop::sample::select(TimeHorizon::ALL.to_vec())
}

prop_compose! {
    fn any_input()(
        election_scope in any_scope(),
        sync_type in any_sync(),
        time_horizon in any_horizon(),
        cost_per_cycle in 1.0f64..20_000.0,
        mcc_duration in 1.0f64..200.0,
        participating_regions in 0u32..60,
    ) -> SimulationInput {
        SimulationInput {
            election_scope,
            sync_type,
            time_horizon,
            cost_per_cycle,
            mcc_duration,
            participating_regions,
        }
    }
}

proptest! {
    #[test]
    fn governance_score_stays_in_bounds(input in any_input()) {
        let result = run_simulation(&input);
        prop_assert!((40..=100).contains(&result.governance_score));
    }

    #[test]
    fn outputs_are_finite(input in any_input()) {
        let result = run_simulation(&input);
        prop_assert!(result.cost_savings_percent.is_finite());
        prop_assert!(result.mcc_reduction.is_finite());
        prop_assert!(result.admin_reduction.is_finite());
    }

    #[test]
    fn higher_cost_never_lowers_total(input in any_input(), extra in 0.0f64..5_000.0) {
        let base = run_simulation(&input);
        let raised = run_simulation(&SimulationInput {
            cost_per_cycle: input.cost_per_cycle + extra,
            ..input
        });
        prop_assert!(raised.total_cost >= base.total_cost);
    }

    #[test]
    fn longer_restriction_never_lowers_days(input in any_input(), extra in 0.0f64..100.0) {
        let base = run_simulation(&input);
        let raised = run_simulation(&SimulationInput {
            mcc_duration: input.mcc_duration + extra,
            ..input
        });
        prop_assert!(raised.mcc_days_before >= base.mcc_days_before);
        prop_assert!(raised.mcc_days_after >= base.mcc_days_after);
    }

    #[test]
    fn baseline_strategy_changes_nothing(input in any_input()) {
        let result = run_simulation(&input.with_sync_type(SyncType::None));
        prop_assert_eq!(result.election_cycles_before, result.election_cycles_after);
        prop_assert_eq!(result.cost_savings, 0);
        prop_assert_eq!(result.governance_score, 50);
    }
}

use crate::model::{SimulationInput, SimulationResult, SyncType};
use crate::simulator::evaluator::run_simulation;
use crate::simulator::{ComparisonData, CostPoint, GovernancePoint, MccPoint};

/// Runs the scenario once per strategy, holding every other field fixed, and
/// reshapes the three results into chart-ready series.
pub fn get_comparison_data(input: &SimulationInput) -> ComparisonData {
    let current = run_simulation(&input.with_sync_type(SyncType::None));
    let partial = run_simulation(&input.with_sync_type(SyncType::Partial));
    let full = run_simulation(&input.with_sync_type(SyncType::Full));

    let cost_comparison = vec![
        CostPoint {
            name: cost_label(SyncType::None).to_string(),
            value: current.baseline_cost(),
        },
        CostPoint {
            name: cost_label(SyncType::Partial).to_string(),
            value: partial.total_cost,
        },
        CostPoint {
            name: cost_label(SyncType::Full).to_string(),
            value: full.total_cost,
        },
    ];

    let by_strategy = [
        (SyncType::None, &current),
        (SyncType::Partial, &partial),
        (SyncType::Full, &full),
    ];
    let mcc_comparison = by_strategy
        .iter()
        .map(|(sync, result)| MccPoint {
            name: sync.to_string(),
            before: result.mcc_days_before,
            after: result.mcc_days_after,
        })
        .collect();
    let governance_scores = by_strategy
        .iter()
        .map(|(sync, result)| GovernancePoint {
            name: sync.to_string(),
            score: result.governance_score,
        })
        .collect();

    ComparisonData {
        current,
        partial,
        full,
        cost_comparison,
        mcc_comparison,
        governance_scores,
    }
}

fn cost_label(sync_type: SyncType) -> &'static str {
    match sync_type {
        SyncType::None => "Current System",
        SyncType::Partial => "Partial Sync",
        SyncType::Full => "Full Sync",
    }
}

impl ComparisonData {
    pub fn result_for(&self, sync_type: SyncType) -> &SimulationResult {
        match sync_type {
            SyncType::None => &self.current,
            SyncType::Partial => &self.partial,
            SyncType::Full => &self.full,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{ElectionScope, SimulationInput, SyncType, TimeHorizon};
    use crate::simulator::comparison::get_comparison_data;
    use crate::simulator::evaluator::run_simulation;

    #[test]
    fn current_entry_matches_direct_baseline_run() {
        let input = SimulationInput {
            sync_type: SyncType::Full,
            ..SimulationInput::default()
        };
        let data = get_comparison_data(&input);
        let direct = run_simulation(&input.with_sync_type(SyncType::None));
        assert_eq!(data.current, direct);
        assert_eq!(data.result_for(SyncType::Full), &run_simulation(&input));
    }

    #[test]
    fn series_are_ordered_and_labelled() {
        let data = get_comparison_data(&SimulationInput::default());
        let names = data
            .cost_comparison
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Current System", "Partial Sync", "Full Sync"]);
        assert_eq!(data.mcc_comparison[1].name, "Partial");
        assert_eq!(data.governance_scores[2].name, "Full");
        assert_eq!(data.cost_comparison[0].value, 3_104_640);
        assert_eq!(data.cost_comparison[2].value, 108_192);
    }

    #[test]
    fn baseline_cost_is_reconstructed_from_savings() {
        let input = SimulationInput {
            election_scope: ElectionScope::OnlyNational,
            sync_type: SyncType::Partial,
            time_horizon: TimeHorizon::FiveYears,
            cost_per_cycle: 1000.0,
            mcc_duration: 30.0,
            participating_regions: 5,
        };
        let data = get_comparison_data(&input);
        assert_eq!(data.cost_comparison[0].value, 7000);
        assert_eq!(data.cost_comparison[1].value, 4200);
        assert_eq!(data.mcc_comparison[0].before, data.mcc_comparison[0].after);
    }
}

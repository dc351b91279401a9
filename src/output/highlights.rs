use serde::Serialize;

use crate::model::{SimulationInput, SimulationResult};

const STRONG_SAVINGS_PERCENT: f64 = 20.0;
const STRONG_MCC_REDUCTION: f64 = 30.0;
const STRONG_ADMIN_REDUCTION: f64 = 20.0;

/// How a dashboard figure should be emphasised.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Positive,
    Neutral,
    Info,
    Warning,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ResultHighlights {
    pub savings: Tone,
    pub mcc: Tone,
    pub admin: Tone,
}

pub fn highlight_result(result: &SimulationResult) -> ResultHighlights {
    let savings = if result.cost_savings_percent > STRONG_SAVINGS_PERCENT {
        Tone::Positive
    } else {
        Tone::Neutral
    };
    let mcc = if result.mcc_reduction > STRONG_MCC_REDUCTION {
        Tone::Positive
    } else {
        Tone::Info
    };
    let admin = if result.admin_reduction > STRONG_ADMIN_REDUCTION {
        Tone::Positive
    } else {
        Tone::Warning
    };
    ResultHighlights {
        savings,
        mcc,
        admin,
    }
}

pub fn headline(input: &SimulationInput) -> String {
    format!(
        "{} • {} Year Projection",
        input.sync_type.headline(),
        input.time_horizon.years()
    )
}

/// Integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{group_thousands, headline, highlight_result, Tone};
    use crate::model::{SimulationInput, SyncType};
    use crate::simulator::run_simulation;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(3_104_640), "3,104,640");
        assert_eq!(group_thousands(-108_192), "-108,192");
    }

    #[test]
    fn baseline_scenario_has_no_positive_highlights() {
        let result = run_simulation(&SimulationInput::default());
        let highlights = highlight_result(&result);
        assert_eq!(highlights.savings, Tone::Neutral);
        assert_eq!(highlights.mcc, Tone::Info);
        assert_eq!(highlights.admin, Tone::Warning);
    }

    #[test]
    fn full_sync_highlights_everything() {
        let input = SimulationInput::default().with_sync_type(SyncType::Full);
        let highlights = highlight_result(&run_simulation(&input));
        assert_eq!(highlights.savings, Tone::Positive);
        assert_eq!(highlights.mcc, Tone::Positive);
        assert_eq!(highlights.admin, Tone::Positive);
        assert_eq!(headline(&input), "Full Synchronization • 10 Year Projection");
    }
}

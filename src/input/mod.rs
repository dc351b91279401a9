pub mod validate;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{ElectionScope, SimulationInput, SyncType, TimeHorizon};

pub use validate::{validate_input, InputLimits};

/// Input fields the caller may override on top of configured defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct InputOverrides {
    pub election_scope: Option<ElectionScope>,
    pub sync_type: Option<SyncType>,
    pub time_horizon: Option<TimeHorizon>,
    pub cost_per_cycle: Option<f64>,
    pub mcc_duration: Option<f64>,
    pub participating_regions: Option<u32>,
}

impl InputOverrides {
    pub fn apply_to(&self, base: SimulationInput) -> SimulationInput {
        let mut input = base;
        if let Some(scope) = self.election_scope {
            input.election_scope = scope;
        }
        if let Some(sync_type) = self.sync_type {
            input.sync_type = sync_type;
        }
        if let Some(horizon) = self.time_horizon {
            input.time_horizon = horizon;
        }
        if let Some(cost) = self.cost_per_cycle {
            input.cost_per_cycle = cost;
        }
        if let Some(mcc) = self.mcc_duration {
            input.mcc_duration = mcc;
        }
        if let Some(regions) = self.participating_regions {
            input.participating_regions = regions;
        }
        input
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// All violations found in one input, reported together.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid simulation input: {}", join_errors(.0))]
pub struct InvalidInput(pub Vec<InputError>);

fn join_errors(errors: &[InputError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

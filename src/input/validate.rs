use serde::{Deserialize, Serialize};

use crate::input::{InputError, InvalidInput};
use crate::model::SimulationInput;

/// Ranges the input form allows. The model itself trusts its caller, so these
/// are enforced before an input is stored or evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub min_cost_per_cycle: f64,
    pub max_cost_per_cycle: f64,
    pub min_mcc_duration: f64,
    pub max_mcc_duration: f64,
    pub min_regions: u32,
    pub max_regions: u32,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            min_cost_per_cycle: 1000.0,
            max_cost_per_cycle: 10_000.0,
            min_mcc_duration: 30.0,
            max_mcc_duration: 120.0,
            min_regions: 5,
            max_regions: 36,
        }
    }
}

pub fn validate_input(input: &SimulationInput, limits: &InputLimits) -> Result<(), InvalidInput> {
    let mut errors = Vec::new();
    check_range(
        &mut errors,
        "cost_per_cycle",
        input.cost_per_cycle,
        limits.min_cost_per_cycle,
        limits.max_cost_per_cycle,
    );
    check_range(
        &mut errors,
        "mcc_duration",
        input.mcc_duration,
        limits.min_mcc_duration,
        limits.max_mcc_duration,
    );
    // Region count only feeds the model under the combined scope.
    if input.election_scope.includes_regions() {
        check_range(
            &mut errors,
            "participating_regions",
            f64::from(input.participating_regions),
            f64::from(limits.min_regions),
            f64::from(limits.max_regions),
        );
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidInput(errors))
    }
}

fn check_range(errors: &mut Vec<InputError>, field: &'static str, value: f64, min: f64, max: f64) {
    if !value.is_finite() {
        errors.push(InputError::NotFinite { field });
    } else if !(min..=max).contains(&value) {
        errors.push(InputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
}

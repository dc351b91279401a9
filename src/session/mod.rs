pub mod migrations;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::SimulationInput;

/// Fixed name of the slot holding the last configured input.
pub const SESSION_KEY: &str = "simulationInput";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredInput {
    pub input: SimulationInput,
    pub saved_at: DateTime<Utc>,
}

//! Educational projection of what synchronizing election cycles would do to
//! cost, campaign-restriction days, administrative load and governance
//! continuity. Every multiplier is a fixed illustrative assumption.

pub mod config;
pub mod ethics;
pub mod input;
pub mod model;
pub mod output;
pub mod session;
pub mod simulator;

pub use model::{
    ElectionScope, Feasibility, SimulationInput, SimulationResult, SyncType, TimeHorizon,
};
pub use simulator::{get_comparison_data, run_simulation, ComparisonData};

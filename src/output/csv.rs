use anyhow::Result;

use crate::model::{SimulationInput, SimulationResult};
use crate::simulator::ComparisonData;

const RESULT_HEADER: [&str; 14] = [
    "scenario",
    "total_cost",
    "cost_savings",
    "cost_savings_percent",
    "mcc_days_before",
    "mcc_days_after",
    "mcc_reduction",
    "governance_score",
    "admin_load_before",
    "admin_load_after",
    "admin_reduction",
    "feasibility",
    "election_cycles_before",
    "election_cycles_after",
];

pub fn result_to_csv(input: &SimulationInput, result: &SimulationResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(RESULT_HEADER)?;
    writer.write_record(result_record(input.sync_type.as_slug(), result))?;
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn comparison_to_csv(data: &ComparisonData) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(RESULT_HEADER)?;
    for (slug, result) in [
        ("none", &data.current),
        ("partial", &data.partial),
        ("full", &data.full),
    ] {
        writer.write_record(result_record(slug, result))?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

fn result_record(scenario: &str, r: &SimulationResult) -> Vec<String> {
    vec![
        scenario.to_string(),
        r.total_cost.to_string(),
        r.cost_savings.to_string(),
        format!("{:.1}", r.cost_savings_percent),
        r.mcc_days_before.to_string(),
        r.mcc_days_after.to_string(),
        format!("{:.1}", r.mcc_reduction),
        r.governance_score.to_string(),
        r.admin_load_before.to_string(),
        r.admin_load_after.to_string(),
        format!("{:.1}", r.admin_reduction),
        r.feasibility.to_string(),
        r.election_cycles_before.to_string(),
        r.election_cycles_after.to_string(),
    ]
}

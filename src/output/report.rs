use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::model::{SimulationInput, SimulationResult};
use crate::output::csv::result_to_csv;
use crate::output::highlights::{highlight_result, ResultHighlights};
use crate::output::json::render_json;
use crate::output::table::{render_comparison_tables, render_no_data, render_result_table};
use crate::session::store::SessionStore;
use crate::simulator::{get_comparison_data, run_simulation, ComparisonData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Serialize)]
pub struct ScenarioReport<'a> {
    pub input: &'a SimulationInput,
    pub result: &'a SimulationResult,
    pub highlights: ResultHighlights,
    pub comparison: &'a ComparisonData,
}

/// Renders the stored session input, or the no-data prompt when nothing has
/// been configured yet. The evaluator only runs when an input is present.
pub fn results_report(
    store: &SessionStore,
    format: OutputFormat,
    currency: &str,
) -> Result<String> {
    match store.load()? {
        Some(stored) => render_report(&stored.input, format, currency),
        None => Ok(render_no_data()),
    }
}

pub fn render_report(
    input: &SimulationInput,
    format: OutputFormat,
    currency: &str,
) -> Result<String> {
    let result = run_simulation(input);
    let comparison = get_comparison_data(input);
    let rendered = match format {
        OutputFormat::Table => format!(
            "{}\n\n{}\n\nSee `election-sync-sim ethics` for the ethics statement and disclaimers.",
            render_result_table(input, &result, currency),
            render_comparison_tables(&comparison, currency)
        ),
        OutputFormat::Json => render_json(&ScenarioReport {
            input,
            result: &result,
            highlights: highlight_result(&result),
            comparison: &comparison,
        })?,
        OutputFormat::Csv => result_to_csv(input, &result)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::{results_report, OutputFormat};
    use crate::model::{SimulationInput, SyncType};
    use crate::output::table::{render_no_data, render_result_table};
    use crate::session::store::SessionStore;
    use crate::simulator::run_simulation;

    #[test]
    fn empty_session_yields_prompt() {
        let store = SessionStore::in_memory().expect("open store");
        for format in [OutputFormat::Table, OutputFormat::Json, OutputFormat::Csv] {
            let rendered = results_report(&store, format, "₹").expect("render");
            assert_eq!(rendered, render_no_data());
        }
    }

    #[test]
    fn stored_input_is_evaluated() {
        let store = SessionStore::in_memory().expect("open store");
        let input = SimulationInput::default().with_sync_type(SyncType::Full);
        store.save(&input).expect("save");

        let table = results_report(&store, OutputFormat::Table, "₹").expect("render table");
        let expected = render_result_table(&input, &run_simulation(&input), "₹");
        assert!(table.starts_with(&expected));
        assert!(table.contains("election-sync-sim ethics"));

        let json = results_report(&store, OutputFormat::Json, "₹").expect("render json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse json");
        assert_eq!(value["result"]["totalCost"], 108_192);
        assert_eq!(value["highlights"]["savings"], "positive");
        assert_eq!(value["comparison"]["full"]["electionCyclesAfter"], 2);
    }
}

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::ethics::{DISCLAIMERS, INTENDED_USES, PRINCIPLES};
use crate::model::{Feasibility, SimulationInput, SimulationResult};
use crate::output::highlights::{group_thousands, headline, highlight_result, Tone};
use crate::simulator::ComparisonData;

pub fn render_input_table(input: &SimulationInput, currency: &str) -> String {
    let mut table = new_table();
    table.set_header(vec!["Parameter", "Value"]);
    table.add_row(vec!["Election scope".to_string(), input.election_scope.to_string()]);
    table.add_row(vec!["Synchronization".to_string(), input.sync_type.to_string()]);
    table.add_row(vec!["Time horizon".to_string(), input.time_horizon.to_string()]);
    table.add_row(vec![
        "Cost per cycle".to_string(),
        format!("{currency}{}", group_thousands(input.cost_per_cycle.round() as i64)),
    ]);
    table.add_row(vec![
        "MCC duration".to_string(),
        format!("{} days", input.mcc_duration),
    ]);
    if input.election_scope.includes_regions() {
        table.add_row(vec![
            "Participating regions".to_string(),
            input.participating_regions.to_string(),
        ]);
    }
    table.to_string()
}

pub fn render_result_table(
    input: &SimulationInput,
    result: &SimulationResult,
    currency: &str,
) -> String {
    let highlights = highlight_result(result);
    let mut table = new_table();
    table.set_header(vec!["Metric", "Before", "After", "Change"]);

    table.add_row(Row::from(vec![
        Cell::new("Election cycles"),
        Cell::new(result.election_cycles_before),
        Cell::new(result.election_cycles_after),
        Cell::new("-"),
    ]));
    table.add_row(Row::from(vec![
        Cell::new("Total cost"),
        Cell::new(format!("{currency}{}", group_thousands(result.baseline_cost()))),
        Cell::new(format!("{currency}{}", group_thousands(result.total_cost))),
        toned(
            format!(
                "{currency}{} saved ({:.1}%)",
                group_thousands(result.cost_savings),
                result.cost_savings_percent
            ),
            highlights.savings,
        ),
    ]));
    table.add_row(Row::from(vec![
        Cell::new("MCC days"),
        Cell::new(group_thousands(result.mcc_days_before)),
        Cell::new(group_thousands(result.mcc_days_after)),
        toned(reduction_label(result.mcc_reduction), highlights.mcc),
    ]));
    table.add_row(Row::from(vec![
        Cell::new("Admin load index"),
        Cell::new(group_thousands(result.admin_load_before)),
        Cell::new(group_thousands(result.admin_load_after)),
        toned(reduction_label(result.admin_reduction), highlights.admin),
    ]));

    let mut out = String::new();
    out.push_str(&headline(input));
    out.push('\n');
    out.push_str(&table.to_string());
    out.push_str(&format!(
        "\nGovernance score: {}/100\nFeasibility: {}",
        result.governance_score, result.feasibility
    ));
    out
}

pub fn render_comparison_tables(data: &ComparisonData, currency: &str) -> String {
    let mut cost = new_table();
    cost.set_header(vec!["Scenario", "Total Cost", "Feasibility"]);
    let results = [&data.current, &data.partial, &data.full];
    for (point, result) in data.cost_comparison.iter().zip(results) {
        cost.add_row(Row::from(vec![
            Cell::new(&point.name),
            Cell::new(format!("{currency}{}", group_thousands(point.value))),
            feasibility_cell(result.feasibility),
        ]));
    }

    let mut mcc = new_table();
    mcc.set_header(vec!["Scenario", "MCC Days Before", "MCC Days After"]);
    for point in &data.mcc_comparison {
        mcc.add_row(vec![
            point.name.clone(),
            group_thousands(point.before),
            group_thousands(point.after),
        ]);
    }

    let mut governance = new_table();
    governance.set_header(vec!["Scenario", "Governance Score"]);
    for point in &data.governance_scores {
        governance.add_row(vec![point.name.clone(), format!("{}/100", point.score)]);
    }

    format!(
        "Cost comparison\n{cost}\nMCC days comparison\n{mcc}\nGovernance scores\n{governance}"
    )
}

pub fn render_no_data() -> String {
    "No Simulation Data\nPlease run a simulation first to see the results: \
     election-sync-sim configure"
        .to_string()
}

pub fn render_ethics_table() -> String {
    let mut principles = new_table();
    principles.set_header(vec!["Principle", "Description"]);
    for principle in &PRINCIPLES {
        principles.add_row(vec![principle.title, principle.description]);
    }

    let mut disclaimers = new_table();
    disclaimers.set_header(vec!["#", "Important Disclaimers"]);
    for (idx, disclaimer) in DISCLAIMERS.iter().enumerate() {
        disclaimers.add_row(vec![(idx + 1).to_string(), disclaimer.to_string()]);
    }

    let uses = INTENDED_USES
        .iter()
        .map(|u| format!("  - {u}"))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Ethics & Disclaimer\n{principles}\n{disclaimers}\nIntended use:\n{uses}"
    )
}

/// Reductions read as decreases; a zero change carries no sign.
fn reduction_label(reduction: f64) -> String {
    if reduction > 0.0 {
        format!("-{reduction:.1}%")
    } else if reduction < 0.0 {
        format!("+{:.1}%", -reduction)
    } else {
        "0.0%".to_string()
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn toned(text: String, tone: Tone) -> Cell {
    let cell = Cell::new(text);
    match tone {
        Tone::Positive => cell.fg(Color::Green),
        Tone::Info => cell.fg(Color::Cyan),
        Tone::Warning => cell.fg(Color::Yellow),
        Tone::Neutral => cell,
    }
}

fn feasibility_cell(feasibility: Feasibility) -> Cell {
    let color = match feasibility {
        Feasibility::High => Color::Green,
        Feasibility::Medium => Color::Yellow,
        Feasibility::Low => Color::Red,
    };
    Cell::new(feasibility.to_string()).fg(color)
}

#[cfg(test)]
mod tests {
    use super::{
        reduction_label, render_comparison_tables, render_ethics_table, render_result_table,
    };
    use crate::model::{SimulationInput, SyncType};
    use crate::simulator::{get_comparison_data, run_simulation};

    #[test]
    fn result_table_carries_headline_and_score() {
        let input = SimulationInput::default().with_sync_type(SyncType::Full);
        let rendered = render_result_table(&input, &run_simulation(&input), "₹");
        assert!(rendered.starts_with("Full Synchronization • 10 Year Projection"));
        assert!(rendered.contains("₹108,192"));
        assert!(rendered.contains("Governance score: 100/100"));
        assert!(rendered.contains("Feasibility: Low"));
    }

    #[test]
    fn comparison_lists_every_strategy() {
        let rendered =
            render_comparison_tables(&get_comparison_data(&SimulationInput::default()), "$");
        for label in ["Current System", "Partial Sync", "Full Sync", "$3,104,640"] {
            assert!(rendered.contains(label), "missing {label}");
        }
    }

    #[test]
    fn baseline_reductions_carry_no_sign() {
        let input = SimulationInput::default();
        let rendered = render_result_table(&input, &run_simulation(&input), "₹");
        assert!(!rendered.contains("-0.0%"));
        assert!(rendered.contains("0.0%"));
        assert_eq!(reduction_label(98.8), "-98.8%");
        assert_eq!(reduction_label(-12.5), "+12.5%");
    }

    #[test]
    fn ethics_table_lists_principles_and_disclaimers() {
        let rendered = render_ethics_table();
        for text in [
            "No Personal Voter Data",
            "Political Neutrality",
            "Academic Purpose Only",
            "Assumed Data Disclaimer",
            "Important Disclaimers",
            "Comparative scenario studies",
        ] {
            assert!(rendered.contains(text), "missing {text}");
        }
    }
}

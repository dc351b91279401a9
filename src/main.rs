use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use election_sync_sim::config::{Config, ConfigOverrides};
use election_sync_sim::ethics::ethics_statement;
use election_sync_sim::input::{validate_input, InputOverrides};
use election_sync_sim::model::{ElectionScope, SimulationInput, SyncType, TimeHorizon};
use election_sync_sim::output::csv::{comparison_to_csv, result_to_csv};
use election_sync_sim::output::json::render_json;
use election_sync_sim::output::report::{results_report, OutputFormat};
use election_sync_sim::output::table::{
    render_comparison_tables, render_ethics_table, render_input_table, render_no_data,
    render_result_table,
};
use election_sync_sim::session::store::SessionStore;
use election_sync_sim::simulator::{get_comparison_data, run_simulation};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "election-sync-sim",
    about = "Hypothetical impact of synchronizing election cycles"
)]
struct Cli {
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, global = true)]
    output: Option<OutputFormat>,
    #[arg(long = "session-db", global = true)]
    session_db: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct InputArgs {
    #[arg(long)]
    scope: Option<ElectionScope>,
    #[arg(long)]
    sync: Option<SyncType>,
    #[arg(long)]
    horizon: Option<TimeHorizon>,
    #[arg(long = "cost")]
    cost_per_cycle: Option<f64>,
    #[arg(long = "mcc")]
    mcc_duration: Option<f64>,
    #[arg(long = "regions")]
    participating_regions: Option<u32>,
}

impl From<InputArgs> for InputOverrides {
    fn from(value: InputArgs) -> Self {
        Self {
            election_scope: value.scope,
            sync_type: value.sync,
            time_horizon: value.horizon,
            cost_per_cycle: value.cost_per_cycle,
            mcc_duration: value.mcc_duration,
            participating_regions: value.participating_regions,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate an input and store it as the current session.
    Configure {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Evaluate the stored session input.
    Results,
    /// Evaluate one scenario without touching the session.
    Run {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Evaluate all three strategies side by side.
    Compare {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the ethics statement and usage disclaimers.
    Ethics,
    Session {
        #[arg(long)]
        show: bool,
        #[arg(long)]
        clear: bool,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        session_db_path: cli.session_db.clone(),
    });
    let format = resolve_format(cli.output, &config);
    let currency = config.output.currency_symbol.clone();

    match &cli.command {
        Commands::Configure { input } => {
            let input = build_input(&config, input)?;
            let store = SessionStore::open(&config.resolved_session_db_path())?;
            let stored = store.save(&input)?;
            info!("stored session input at {}", stored.saved_at.to_rfc3339());
            match format {
                OutputFormat::Table => {
                    println!("{}", render_input_table(&stored.input, &currency));
                    println!("Saved. Run `election-sync-sim results` to view the projection.");
                }
                OutputFormat::Json | OutputFormat::Csv => println!("{}", render_json(&stored)?),
            }
        }
        Commands::Results => {
            let store = SessionStore::open(&config.resolved_session_db_path())?;
            if matches!(format, OutputFormat::Csv) {
                warn!("CSV output for results omits the comparison, use compare for it");
            }
            println!("{}", results_report(&store, format, &currency)?);
        }
        Commands::Ethics => match format {
            OutputFormat::Table => println!("{}", render_ethics_table()),
            OutputFormat::Json => println!("{}", render_json(&ethics_statement())?),
            OutputFormat::Csv => {
                warn!("CSV output for ethics not implemented, using JSON");
                println!("{}", render_json(&ethics_statement())?);
            }
        },
        Commands::Run { input } => {
            let input = build_input(&config, input)?;
            let result = run_simulation(&input);
            match format {
                OutputFormat::Table => {
                    println!("{}", render_result_table(&input, &result, &currency))
                }
                OutputFormat::Json => println!("{}", render_json(&result)?),
                OutputFormat::Csv => println!("{}", result_to_csv(&input, &result)?),
            }
        }
        Commands::Compare { input } => {
            let input = build_input(&config, input)?;
            let data = get_comparison_data(&input);
            match format {
                OutputFormat::Table => println!("{}", render_comparison_tables(&data, &currency)),
                OutputFormat::Json => println!("{}", render_json(&data)?),
                OutputFormat::Csv => println!("{}", comparison_to_csv(&data)?),
            }
        }
        Commands::Session { show, clear } => {
            let store = SessionStore::open(&config.resolved_session_db_path())?;
            if *clear {
                if store.clear()? {
                    println!("Cleared stored session input.");
                } else {
                    println!("No stored session input to clear.");
                }
            }
            if *show || !*clear {
                match store.load()? {
                    Some(stored) => println!("{}", render_json(&stored)?),
                    None => println!("{}", render_no_data()),
                }
            }
        }
        Commands::Config { init, show } => {
            handle_config_command(*init, *show, &config, &config_path)?;
        }
    }

    Ok(())
}

fn handle_config_command(init: bool, show: bool, config: &Config, config_path: &Path) -> Result<()> {
    if init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if show || !init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = cli_format {
        return format;
    }
    match OutputFormat::from_str(&config.output.format, true) {
        Ok(format) => format,
        Err(_) => {
            warn!(
                "unknown output format in config: {}, using table",
                config.output.format
            );
            OutputFormat::Table
        }
    }
}

fn build_input(config: &Config, args: &InputArgs) -> Result<SimulationInput> {
    let overrides: InputOverrides = args.clone().into();
    let input = overrides.apply_to(config.default_input());
    validate_input(&input, &config.limits).context("input rejected")?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from([
            "election-sync-sim",
            "run",
            "-o",
            "json",
            "--session-db",
            "/tmp/session.db",
            "--sync",
            "full",
        ])
        .expect("parse cli");
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.session_db.as_deref(), Some("/tmp/session.db"));
        assert!(matches!(cli.command, Commands::Run { .. }));
    }

    #[test]
    fn parses_ethics_subcommand() {
        let cli = Cli::try_parse_from(["election-sync-sim", "ethics", "--output", "table"])
            .expect("parse cli");
        assert!(matches!(cli.command, Commands::Ethics));
    }
}

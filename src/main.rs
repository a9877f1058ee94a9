//! Fund Simulator CLI
//!
//! Command-line interface for historical back-tests and future projections

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use fund_simulator::historical::{DatePreset, DateRange, HistoricalSimulationResult};
use fund_simulator::projection::{FutureParams, FutureSimulationResult, ProjectionEngine};
use fund_simulator::{ScenarioRunner, SimulatorConfig};

#[derive(Parser)]
#[command(
    name = "fund-simulator",
    version,
    about = "Historical back-test and growth projection for a fund"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay the price history over a date range
    Historical {
        /// Price feed (defaults to FUND_DATA_PATH)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Lump sum invested at the start date
        #[arg(long)]
        investment: Option<f64>,

        /// Quick-select window: 1y, 3y, 5y, ytd or max
        #[arg(long, conflicts_with_all = ["start", "end"])]
        preset: Option<DatePreset>,

        /// Start date (YYYY-MM-DD), defaults to the first observation
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (YYYY-MM-DD), defaults to the last observation
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Write the chart series to a CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Compare every preset window side by side
    Presets {
        #[arg(long)]
        data: Option<PathBuf>,

        #[arg(long)]
        investment: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Project a contribution schedule at a fixed annual rate
    Future {
        /// Opening lump sum
        #[arg(long)]
        initial: Option<f64>,

        /// Contribution added every month
        #[arg(long)]
        monthly: Option<f64>,

        /// Number of years to project
        #[arg(long, allow_negative_numbers = true)]
        years: Option<i32>,

        /// Assumed annual rate in percent
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,

        #[arg(long)]
        json: bool,

        /// Write the yearly breakdown to a CSV file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct PresetOutput {
    preset: String,
    result: Option<HistoricalSimulationResult>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = SimulatorConfig::from_env();

    match cli.command {
        Command::Historical {
            data,
            investment,
            preset,
            start,
            end,
            json,
            output,
        } => {
            let runner = load_runner(data.unwrap_or_else(|| config.data_path.clone()))?;
            let investment = investment.unwrap_or(config.initial_investment);

            let result = match preset {
                Some(preset) => runner.run_preset(investment, preset)?,
                None => {
                    let series = runner.series();
                    let (Some(min), Some(max)) = (series.min_date(), series.max_date()) else {
                        anyhow::bail!("price feed contains no valid rows");
                    };
                    let range = DateRange::new(start.unwrap_or(min), end.unwrap_or(max));
                    runner.run(investment, range)?
                }
            };

            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("Unable to create {}", path.display()))?;
                result.write_chart_csv(file)?;
                eprintln!("Chart series written to: {}", path.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_historical(&result);
            }
        }

        Command::Presets {
            data,
            investment,
            json,
        } => {
            let runner = load_runner(data.unwrap_or_else(|| config.data_path.clone()))?;
            let investment = investment.unwrap_or(config.initial_investment);
            let results = runner.run_presets(investment, &DatePreset::ALL);

            if json {
                let output: Vec<PresetOutput> = results
                    .into_iter()
                    .map(|(preset, result)| match result {
                        Ok(r) => PresetOutput {
                            preset: preset.to_string(),
                            result: Some(r),
                            error: None,
                        },
                        Err(e) => PresetOutput {
                            preset: preset.to_string(),
                            result: None,
                            error: Some(e.to_string()),
                        },
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_presets(investment, &results);
            }
        }

        Command::Future {
            initial,
            monthly,
            years,
            rate,
            json,
            output,
        } => {
            let defaults = &config.future;
            let params = FutureParams {
                initial: initial.unwrap_or(defaults.initial),
                monthly_contribution: monthly.unwrap_or(defaults.monthly_contribution),
                years: years.unwrap_or(defaults.years),
                annual_rate_pct: rate.unwrap_or(defaults.annual_rate_pct),
            };
            let result = ProjectionEngine::new(params)?.run();

            if let Some(path) = output {
                let file = File::create(&path)
                    .with_context(|| format!("Unable to create {}", path.display()))?;
                result.write_breakdown_csv(file)?;
                eprintln!("Yearly breakdown written to: {}", path.display());
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_future(&result);
            }
        }
    }

    Ok(())
}

fn load_runner(path: PathBuf) -> Result<ScenarioRunner> {
    let runner = ScenarioRunner::from_path(&path)
        .with_context(|| format!("Failed to load price feed from {}", path.display()))?;
    log::info!("Loaded {} price points from {}", runner.series().len(), path.display());
    Ok(runner)
}

fn print_historical(result: &HistoricalSimulationResult) {
    println!("Historical Simulation");
    println!("=====================\n");
    println!(
        "  Period:             {} to {} ({} points)",
        result.start_date,
        result.end_date,
        result.chart.len()
    );
    println!("  Initial Investment: {:>14.2}", result.initial_investment);
    println!("  Shares:             {:>14.4}", result.shares);
    println!("  Final Value:        {:>14.2}", result.final_value);
    println!("  Net Gain:           {:>14.2}", result.net_gain());
    println!("  Net Return:         {:>13.2}%", result.net_return_pct);
    println!("  Max Drawdown:       {:>13.2}%", result.max_drawdown * 100.0);
    println!("  Volatility (ann.):  {:>13.2}%", result.annualized_volatility * 100.0);
}

fn print_presets(
    investment: f64,
    results: &[(DatePreset, fund_simulator::Result<HistoricalSimulationResult>)],
) {
    println!("Preset Comparison (investment {:.2})", investment);
    println!(
        "{:>5} {:>10} {:>10} {:>14} {:>10} {:>10} {:>10}",
        "Range", "Start", "End", "Final Value", "Return", "Drawdown", "Vol"
    );
    println!("{}", "-".repeat(75));

    for (preset, result) in results {
        match result {
            Ok(r) => println!(
                "{:>5} {:>10} {:>10} {:>14.2} {:>9.2}% {:>9.2}% {:>9.2}%",
                preset,
                r.start_date,
                r.end_date,
                r.final_value,
                r.net_return_pct,
                r.max_drawdown * 100.0,
                r.annualized_volatility * 100.0,
            ),
            Err(e) => println!("{:>5} {}", preset, e),
        }
    }
}

fn print_future(result: &FutureSimulationResult) {
    println!("Future Projection");
    println!("=================\n");
    println!(
        "{:>4} {:>14} {:>14} {:>14} {:>14}",
        "Year", "Start", "Contributions", "Gains", "End"
    );
    println!("{}", "-".repeat(64));

    for row in &result.breakdown {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            row.year,
            row.starting_balance,
            row.contributions,
            row.gains,
            row.ending_balance,
        );
    }

    println!("\nSummary:");
    println!("  Total Contributed: {:.2}", result.total_contributed);
    println!("  Total Gains:       {:.2}", result.total_gains);
    println!("  Final Value:       {:.2}", result.final_value);
}

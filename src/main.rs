//! # Check two CSV columns for a spurious regression
//! spurcheck detect --input data.csv --response passengers --predictor rice
//!
//! # Run the built-in demonstration pair
//! spurcheck fixtures
//!
//! # Measure detection rates over simulated random-walk pairs
//! spurcheck simulate --trials 500 --length 60

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use spurcheck::simulate::run_study_with_progress;
use spurcheck::{
    air_passengers, detect_spurious_regression, rice_production, CsvLoader, CvResult,
    RollingConfig, Scenario, SimulationConfig,
};

#[derive(Parser)]
#[command(name = "spurcheck")]
#[command(about = "Rolling-origin spurious regression detector")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the detector on two columns of a CSV file
    Detect {
        /// Path to a CSV file with a header row
        #[arg(short, long)]
        input: PathBuf,

        /// Response column name
        #[arg(long)]
        response: String,

        /// Predictor column name
        #[arg(long)]
        predictor: String,

        /// Forecast horizon
        #[arg(long, default_value_t = 1)]
        horizon: usize,

        /// Minimum training window size
        #[arg(long, default_value_t = 20)]
        initial: usize,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in air-passengers vs rice-production demonstration
    Fixtures {
        /// Forecast horizon
        #[arg(long, default_value_t = 1)]
        horizon: usize,

        /// Minimum training window size
        #[arg(long, default_value_t = 20)]
        initial: usize,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a seeded simulation study over generated series pairs
    Simulate {
        /// Number of seeded trials
        #[arg(long, default_value_t = 200)]
        trials: usize,

        /// Length of each generated series
        #[arg(long, default_value_t = 60)]
        length: usize,

        /// Data-generating process
        #[arg(long, value_enum, default_value = "walks")]
        scenario: ScenarioArg,

        /// Trend slope for the trend scenario
        #[arg(long, default_value_t = 0.5)]
        trend: f64,

        /// Innovation standard deviation
        #[arg(long, default_value_t = 1.0)]
        noise: f64,

        /// Forecast horizon
        #[arg(long, default_value_t = 1)]
        horizon: usize,

        /// Minimum training window size
        #[arg(long, default_value_t = 20)]
        initial: usize,

        /// Offset added to every trial seed
        #[arg(long, default_value_t = 0)]
        seed_offset: u64,

        /// Emit the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum ScenarioArg {
    /// Independent driftless random walks
    Walks,
    /// Walks around a shared linear trend
    Trend,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Walks => Scenario::IndependentWalks,
            ScenarioArg::Trend => Scenario::TrendingWalks,
        }
    }
}

fn print_result(result: &CvResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.summary());
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spurcheck=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            response,
            predictor,
            horizon,
            initial,
            json,
        } => {
            let loader = CsvLoader::new(&input);
            let (y, x) = loader
                .load_pair(&response, &predictor)
                .with_context(|| format!("Failed to load columns from {}", input.display()))?;

            let config = RollingConfig { horizon, initial };
            let result = detect_spurious_regression(&y, &x, &config)
                .context("Detection failed")?;
            print_result(&result, json)?;
        }

        Commands::Fixtures {
            horizon,
            initial,
            json,
        } => {
            let config = RollingConfig { horizon, initial };
            let result =
                detect_spurious_regression(air_passengers(), rice_production(), &config)
                    .context("Detection failed on the built-in pair")?;
            print_result(&result, json)?;
        }

        Commands::Simulate {
            trials,
            length,
            scenario,
            trend,
            noise,
            horizon,
            initial,
            seed_offset,
            json,
        } => {
            anyhow::ensure!(noise > 0.0, "--noise must be positive");

            let config = SimulationConfig {
                trials,
                series_len: length,
                scenario: scenario.into(),
                trend,
                noise,
                seed_offset,
                rolling: RollingConfig { horizon, initial },
            };

            let bar = ProgressBar::new(trials as u64);
            bar.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos}/{len} trials ({eta})",
                )?
                .progress_chars("##-"),
            );

            let summary = run_study_with_progress(&config, || {
                bar.inc(1);
            });
            bar.finish_and_clear();

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary.summary());
            }
        }
    }

    Ok(())
}

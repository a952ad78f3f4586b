mod display;
mod menu;

use clap::{Parser, Subcommand};
use health_core::*;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "healthlog")]
#[command(about = "Personal health metrics logger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Log today's metrics and save
    Log {
        #[arg(long, allow_hyphen_values = true)]
        steps: String,

        /// Hours slept
        #[arg(long, allow_hyphen_values = true)]
        sleep: String,

        /// Calories consumed
        #[arg(long, allow_hyphen_values = true)]
        calories: String,

        /// Water intake in liters
        #[arg(long, allow_hyphen_values = true)]
        water: String,

        /// Weight in kg
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Height in meters
        #[arg(long, allow_hyphen_values = true)]
        height: String,
    },

    /// Show averages and charts for the trailing week
    Report {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate daily maintenance calories
    Calories {
        /// M or F
        #[arg(long)]
        gender: String,

        /// Weight in kg
        #[arg(long, allow_hyphen_values = true)]
        weight: String,

        /// Height in cm
        #[arg(long, allow_hyphen_values = true)]
        height_cm: String,

        #[arg(long, allow_hyphen_values = true)]
        age: String,

        /// sedentary, light, moderate or active
        #[arg(long, default_value = "sedentary")]
        activity: String,
    },

    /// Remind if today's water intake is low
    Hydration,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        health_core::logging::init_with_level("debug");
    } else {
        health_core::logging::init();
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    tracing::debug!("Using metrics table {:?}", config.data_file());

    match cli.command {
        Some(Commands::Menu) | None => cmd_menu(config),
        Some(Commands::Log {
            steps,
            sleep,
            calories,
            water,
            weight,
            height,
        }) => cmd_log(
            &config,
            RawMeasurements {
                steps,
                sleep_hours: sleep,
                calories,
                water_liters: water,
                weight,
                height,
            },
        ),
        Some(Commands::Report { json }) => cmd_report(&config, json),
        Some(Commands::Calories {
            gender,
            weight,
            height_cm,
            age,
            activity,
        }) => cmd_calories(RawCalorieInput {
            gender,
            weight,
            height_cm,
            age,
            activity,
        }),
        Some(Commands::Hydration) => cmd_hydration(&config),
    }
}

fn cmd_menu(config: Config) -> Result<()> {
    let store = MetricsStore::open(config.data_file())?;
    let stdin = io::stdin();
    let session = menu::MenuSession::new(store, config, stdin.lock(), io::stdout());
    session.run()?;
    Ok(())
}

fn cmd_log(config: &Config, raw: RawMeasurements) -> Result<()> {
    let mut store = MetricsStore::open(config.data_file())?;
    let mut out = io::stdout().lock();

    match log_daily_metrics(&mut store, &raw, menu::local_today()) {
        Ok(record) => {
            store.save()?;
            display::logged(&mut out, &record)?;
        }
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn cmd_report(config: &Config, json: bool) -> Result<()> {
    let store = MetricsStore::open(config.data_file())?;
    let window_days = config.report.window_days;
    let report = weekly_report(store.records(), menu::local_today(), window_days);
    let mut out = io::stdout().lock();

    if json {
        match report {
            Some(report) => writeln!(out, "{}", report.to_json()?)?,
            None => writeln!(out, "null")?,
        }
        return Ok(());
    }

    display::weekly_report(&mut out, report.as_ref(), window_days)?;
    Ok(())
}

fn cmd_calories(raw: RawCalorieInput) -> Result<()> {
    let mut out = io::stdout().lock();
    match parse_calorie_input(&raw) {
        Ok(input) => display::calories(&mut out, &input)?,
        Err(e) => writeln!(out, "{}", e)?,
    }
    Ok(())
}

fn cmd_hydration(config: &Config) -> Result<()> {
    let store = MetricsStore::open(config.data_file())?;
    if let Some(reminder) = hydration_check(
        store.records(),
        menu::local_today(),
        config.hydration.min_liters,
    ) {
        println!("{}", reminder);
    }
    Ok(())
}

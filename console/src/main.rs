use anyhow::Context;
use carboncore::estimate::estimate;
use carboncore::factors::{load_factor_table, FactorTable};
use carboncore::prelude::ActivityInputs;
use clap::Parser;
use std::path::PathBuf;

mod report;
mod session;

#[derive(Parser)]
#[command(author, version, about = "Carbon footprint calculator and report mailer")]
struct Args {
    /// Path to the per-country emission factor table
    #[arg(long, default_value = "Carbon_Emission_Factors_195_Countries.csv")]
    factors: PathBuf,
    /// Load mail relay settings from YAML instead of the environment
    #[arg(long)]
    mail_config: Option<PathBuf>,
    /// Country to estimate for; omitting it starts the interactive session
    #[arg(long)]
    country: Option<String>,
    /// Daily commute distance in km
    #[arg(long, default_value_t = 0.0)]
    distance: f64,
    /// Monthly electricity consumption in kWh
    #[arg(long, default_value_t = 0.0)]
    electricity: f64,
    /// Number of meals per day
    #[arg(long, default_value_t = 0)]
    meals: u32,
    /// Daily waste in kg
    #[arg(long, default_value_t = 0.0)]
    waste: f64,
    /// Print the estimate as JSON instead of the text block
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Write the category chart PNG to this path
    #[arg(long)]
    chart: Option<PathBuf>,
    /// Email the report to this address
    #[arg(long)]
    email: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = load_factor_table(&args.factors).context("loading emission factor table")?;

    match args.country.clone() {
        Some(country) => run_one_shot(&table, &args, &country),
        None => session::run(&table, args.mail_config.as_deref()),
    }
}

fn run_one_shot(table: &FactorTable, args: &Args, country: &str) -> anyhow::Result<()> {
    let inputs = ActivityInputs {
        distance_km_per_day: args.distance,
        electricity_kwh_per_month: args.electricity,
        meals_per_day: args.meals,
        waste_kg_per_day: args.waste,
    };
    session::validate_ranges(&inputs).map_err(anyhow::Error::msg)?;

    let result = estimate(table, country, &inputs)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("encoding estimate as JSON")?
        );
    } else {
        print!("{}", session::display::render_text(&result));
    }

    if let Some(path) = &args.chart {
        report::chart::render_category_chart(&result, path).context("rendering category chart")?;
        println!("Chart written to {}", path.display());
    }

    if let Some(recipient) = &args.email {
        if report::dispatch_report(args.mail_config.as_deref(), recipient, &result) {
            println!("Report sent successfully!");
        } else {
            println!("Failed to send the report; see log output for details.");
        }
    }

    Ok(())
}

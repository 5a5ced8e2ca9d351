pub mod display;
pub mod prompt;

use crate::report;
use carboncore::estimate::estimate;
use carboncore::factors::FactorTable;
use carboncore::prelude::ActivityInputs;
use std::io::{self, Write};
use std::path::Path;

/// Bounds for the numeric prompts; meals accept any non-negative integer.
pub const DISTANCE_RANGE: (f64, f64) = (0.0, 100.0);
pub const ELECTRICITY_RANGE: (f64, f64) = (0.0, 1000.0);
pub const WASTE_RANGE: (f64, f64) = (0.0, 100.0);

/// Range validation shared by the prompt loop and the one-shot driver.
pub fn validate_ranges(inputs: &ActivityInputs) -> Result<(), String> {
    check_range("distance", inputs.distance_km_per_day, DISTANCE_RANGE)?;
    check_range(
        "electricity",
        inputs.electricity_kwh_per_month,
        ELECTRICITY_RANGE,
    )?;
    check_range("waste", inputs.waste_kg_per_day, WASTE_RANGE)?;
    Ok(())
}

fn check_range(name: &str, value: f64, (low, high): (f64, f64)) -> Result<(), String> {
    if value.is_finite() && value >= low && value <= high {
        Ok(())
    } else {
        Err(format!("{} must be between {} and {}", name, low, high))
    }
}

/// Interactive prompt loop: collect inputs, compute, display, then offer to
/// email the report, recalculate, or quit.
pub fn run(table: &FactorTable, mail_config: Option<&Path>) -> anyhow::Result<()> {
    println!("Carbon Footprint Calculator");
    println!("---------------------------");

    loop {
        let request = match prompt::collect_request(table)? {
            Some(request) => request,
            None => return Ok(()),
        };

        let result = match estimate(table, &request.country, &request.inputs) {
            Ok(result) => result,
            Err(err) => {
                println!("Input rejected: {}", err);
                continue;
            }
        };

        print!("{}", display::render_text(&result));

        loop {
            print!("\n[e] email report  [r] recalculate  [q] quit\n> ");
            io::stdout().flush()?;
            let choice = match prompt::read_trimmed()? {
                Some(choice) => choice,
                None => return Ok(()),
            };

            match choice.as_str() {
                "e" => {
                    print!("Recipient email address: ");
                    io::stdout().flush()?;
                    match prompt::read_trimmed()? {
                        Some(recipient) if !recipient.is_empty() => {
                            if report::dispatch_report(mail_config, &recipient, &result) {
                                println!("Report sent successfully!");
                            } else {
                                println!("Failed to send the report; see log output for details.");
                            }
                        }
                        Some(_) => println!("No address entered."),
                        None => return Ok(()),
                    }
                }
                "r" => break,
                "q" => return Ok(()),
                other => println!("Unrecognized choice {:?}", other),
            }
        }
    }
}

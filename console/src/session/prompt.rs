use crate::session::{DISTANCE_RANGE, ELECTRICITY_RANGE, WASTE_RANGE};
use carboncore::factors::FactorTable;
use carboncore::prelude::ActivityInputs;
use std::io::{self, BufRead, Write};

/// Country plus activity values collected from one round of prompts.
pub struct EstimateRequest {
    pub country: String,
    pub inputs: ActivityInputs,
}

/// Reads one trimmed line from stdin; `None` means end of input.
pub fn read_trimmed() -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

/// Collects a full estimate request; `None` means the user ended the input.
pub fn collect_request(table: &FactorTable) -> anyhow::Result<Option<EstimateRequest>> {
    let country = match select_country(table)? {
        Some(country) => country,
        None => return Ok(None),
    };

    let distance = match prompt_f64("Daily commute distance in km", DISTANCE_RANGE)? {
        Some(value) => value,
        None => return Ok(None),
    };
    let electricity =
        match prompt_f64("Monthly electricity consumption in kWh", ELECTRICITY_RANGE)? {
            Some(value) => value,
            None => return Ok(None),
        };
    let meals = match prompt_u32("Number of meals per day")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let waste = match prompt_f64("Daily waste in kg", WASTE_RANGE)? {
        Some(value) => value,
        None => return Ok(None),
    };

    Ok(Some(EstimateRequest {
        country,
        inputs: ActivityInputs {
            distance_km_per_day: distance,
            electricity_kwh_per_month: electricity,
            meals_per_day: meals,
            waste_kg_per_day: waste,
        },
    }))
}

fn select_country(table: &FactorTable) -> anyhow::Result<Option<String>> {
    loop {
        print!("\nSelect your country (type the name, or 'list' to show all): ");
        io::stdout().flush()?;
        let entry = match read_trimmed()? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        if entry.eq_ignore_ascii_case("list") {
            for name in table.countries() {
                println!("  {}", name);
            }
            continue;
        }
        if entry.is_empty() {
            continue;
        }
        if table.get(&entry).is_some() {
            return Ok(Some(entry));
        }
        println!("No factors for {:?}; try 'list' to see the options.", entry);
    }
}

fn prompt_f64(label: &str, (low, high): (f64, f64)) -> anyhow::Result<Option<f64>> {
    loop {
        print!("{} [{}-{}]: ", label, low, high);
        io::stdout().flush()?;
        let entry = match read_trimmed()? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        match entry.parse::<f64>() {
            Ok(value) if value.is_finite() && value >= low && value <= high => {
                return Ok(Some(value));
            }
            Ok(_) => println!("Value must be between {} and {}.", low, high),
            Err(_) => println!("Not a number: {:?}", entry),
        }
    }
}

fn prompt_u32(label: &str) -> anyhow::Result<Option<u32>> {
    loop {
        print!("{}: ", label);
        io::stdout().flush()?;
        let entry = match read_trimmed()? {
            Some(entry) => entry,
            None => return Ok(None),
        };

        match entry.parse::<u32>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Enter a whole number of meals."),
        }
    }
}

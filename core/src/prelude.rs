use serde::{Deserialize, Serialize};

/// Raw activity quantities supplied for a single interaction.
///
/// Values are in the units the user is asked for: daily kilometers, monthly
/// kilowatt-hours, meals per day, daily kilograms of waste.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityInputs {
    pub distance_km_per_day: f64,
    pub electricity_kwh_per_month: f64,
    pub meals_per_day: u32,
    pub waste_kg_per_day: f64,
}

/// Relation of a computed annual total to the country baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Good,
    Moderate,
    Bad,
}

impl Classification {
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Good => "Good",
            Classification::Moderate => "Moderate",
            Classification::Bad => "Bad",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Classification::Good => {
                "Your carbon emissions are lower than the average for your country."
            }
            Classification::Moderate => {
                "Your carbon emissions are on par with the average for your country."
            }
            Classification::Bad => {
                "Your carbon emissions are higher than the average for your country."
            }
        }
    }
}

/// Annual emission estimate produced for one set of inputs.
///
/// All quantities are tons of CO2 per year; `total_tons` is rounded to two
/// decimal places, the category subtotals are not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmissionEstimate {
    pub country: String,
    pub transportation_tons: f64,
    pub electricity_tons: f64,
    pub diet_tons: f64,
    pub waste_tons: f64,
    pub total_tons: f64,
    pub classification: Classification,
    pub baseline_tons: f64,
}

impl EmissionEstimate {
    pub fn message(&self) -> &'static str {
        self.classification.message()
    }
}

/// Common error type for table loading and estimation.
#[derive(thiserror::Error, Debug)]
pub enum EstimateError {
    #[error("factor table unavailable: {0}")]
    TableLoad(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type EstimateResult<T> = Result<T, EstimateError>;

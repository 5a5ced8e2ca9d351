use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-country emission coefficients, in kg CO2 per activity unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub transportation_kg_per_km: f64,
    pub electricity_kg_per_kwh: f64,
    pub diet_kg_per_meal: f64,
    pub waste_kg_per_kg: f64,
}

/// One raw row of the factor source table, headers preserved verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactorRow {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Transportation (kg CO2 per km)")]
    pub transportation: f64,
    #[serde(rename = "Electricity (kg CO2 per kWh)")]
    pub electricity: f64,
    #[serde(rename = "Diet (kg CO2 per meal)")]
    pub diet: f64,
    #[serde(rename = "Waste (kg CO2 per kg)")]
    pub waste: f64,
}

impl FactorRow {
    pub fn factors(&self) -> EmissionFactors {
        EmissionFactors {
            transportation_kg_per_km: self.transportation,
            electricity_kg_per_kwh: self.electricity,
            diet_kg_per_meal: self.diet,
            waste_kg_per_kg: self.waste,
        }
    }

    /// Sum of the four factor columns, used as the country baseline.
    pub fn column_sum(&self) -> f64 {
        self.transportation + self.electricity + self.diet + self.waste
    }
}

/// Read-only per-country lookup built once at startup.
///
/// Keeps both the keyed coefficient map and the source rows; the raw rows
/// back the baseline lookup and preserve duplicates the map collapses.
#[derive(Debug, Clone, Default)]
pub struct FactorTable {
    factors: HashMap<String, EmissionFactors>,
    rows: Vec<FactorRow>,
}

impl FactorTable {
    pub fn from_rows(rows: Vec<FactorRow>) -> Self {
        let mut factors = HashMap::with_capacity(rows.len());
        for row in &rows {
            // last row wins on duplicate country names
            factors.insert(row.country.clone(), row.factors());
        }
        Self { factors, rows }
    }

    pub fn get(&self, country: &str) -> Option<&EmissionFactors> {
        self.factors.get(country)
    }

    /// Sorted country names for the selection menu.
    pub fn countries(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Baseline total for a country: the factor columns of the first
    /// matching raw row summed, or 0.0 when the country has no row.
    pub fn baseline_total(&self, country: &str) -> f64 {
        self.rows
            .iter()
            .find(|row| row.country == country)
            .map(FactorRow::column_sum)
            .unwrap_or(0.0)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

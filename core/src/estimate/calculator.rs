use crate::estimate::classify::classify;
use crate::factors::table::FactorTable;
use crate::prelude::{ActivityInputs, EmissionEstimate, EstimateError, EstimateResult};
use log::info;

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const WEEKS_PER_YEAR: f64 = 52.0;
const KG_PER_TON: f64 = 1000.0;

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Produces the annual emission estimate for one set of inputs.
///
/// Annualizes each activity (daily distance and meals over 365 days,
/// monthly electricity over 12 months, daily waste over 52 weeks), scales
/// by the country coefficients into tons, rounds the total to two decimals
/// and classifies it against the country baseline.
pub fn estimate(
    table: &FactorTable,
    country: &str,
    inputs: &ActivityInputs,
) -> EstimateResult<EmissionEstimate> {
    let factors = table
        .get(country)
        .ok_or_else(|| EstimateError::InvalidInput(format!("unknown country {:?}", country)))?;

    let distance_year = inputs.distance_km_per_day * DAYS_PER_YEAR;
    let electricity_year = inputs.electricity_kwh_per_month * MONTHS_PER_YEAR;
    let meals_year = f64::from(inputs.meals_per_day) * DAYS_PER_YEAR;
    let waste_year = inputs.waste_kg_per_day * WEEKS_PER_YEAR;

    let transportation_tons = distance_year * factors.transportation_kg_per_km / KG_PER_TON;
    let electricity_tons = electricity_year * factors.electricity_kg_per_kwh / KG_PER_TON;
    let diet_tons = meals_year * factors.diet_kg_per_meal / KG_PER_TON;
    let waste_tons = waste_year * factors.waste_kg_per_kg / KG_PER_TON;

    let total_tons =
        round_to_hundredths(transportation_tons + electricity_tons + diet_tons + waste_tons);
    let baseline_tons = table.baseline_total(country);
    let classification = classify(total_tons, baseline_tons);

    info!(
        "estimate for {}: {:.2} t/year ({})",
        country,
        total_tons,
        classification.label()
    );

    Ok(EmissionEstimate {
        country: country.to_string(),
        transportation_tons,
        electricity_tons,
        diet_tons,
        waste_tons,
        total_tons,
        classification,
        baseline_tons,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::table::FactorRow;
    use crate::prelude::Classification;

    const EPSILON: f64 = 1e-9;

    fn sample_table() -> FactorTable {
        FactorTable::from_rows(vec![FactorRow {
            country: "Testland".to_string(),
            transportation: 0.14,
            electricity: 0.5,
            diet: 2.5,
            waste: 0.1,
        }])
    }

    fn sample_inputs() -> ActivityInputs {
        ActivityInputs {
            distance_km_per_day: 10.0,
            electricity_kwh_per_month: 100.0,
            meals_per_day: 2,
            waste_kg_per_day: 5.0,
        }
    }

    #[test]
    fn worked_example_matches_reference_values() {
        let result = estimate(&sample_table(), "Testland", &sample_inputs()).unwrap();

        assert!((result.transportation_tons - 0.511).abs() < EPSILON);
        assert!((result.electricity_tons - 0.6).abs() < EPSILON);
        assert!((result.diet_tons - 1.825).abs() < EPSILON);
        assert!((result.waste_tons - 0.026).abs() < EPSILON);
        assert!((result.total_tons - 2.96).abs() < EPSILON);
    }

    #[test]
    fn total_is_rounded_sum_of_categories() {
        let result = estimate(&sample_table(), "Testland", &sample_inputs()).unwrap();
        let sum = result.transportation_tons
            + result.electricity_tons
            + result.diet_tons
            + result.waste_tons;
        assert_eq!(result.total_tons, round_to_hundredths(sum));
    }

    #[test]
    fn category_terms_are_non_negative() {
        let result = estimate(&sample_table(), "Testland", &sample_inputs()).unwrap();
        for tons in [
            result.transportation_tons,
            result.electricity_tons,
            result.diet_tons,
            result.waste_tons,
        ] {
            assert!(tons >= 0.0);
        }
    }

    #[test]
    fn doubling_distance_doubles_transportation() {
        let table = sample_table();
        let base = estimate(&table, "Testland", &sample_inputs()).unwrap();

        let mut doubled_inputs = sample_inputs();
        doubled_inputs.distance_km_per_day *= 2.0;
        let doubled = estimate(&table, "Testland", &doubled_inputs).unwrap();

        assert_eq!(doubled.transportation_tons, base.transportation_tons * 2.0);
    }

    #[test]
    fn unknown_country_is_invalid_input() {
        let err = estimate(&sample_table(), "Atlantis", &sample_inputs()).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput(_)));
    }

    #[test]
    fn classification_compares_against_baseline() {
        // baseline for Testland is 0.14 + 0.5 + 2.5 + 0.1 = 3.24
        let table = sample_table();

        let below = estimate(&table, "Testland", &sample_inputs()).unwrap();
        assert_eq!(below.classification, Classification::Good);

        let above = estimate(
            &table,
            "Testland",
            &ActivityInputs {
                distance_km_per_day: 100.0,
                electricity_kwh_per_month: 1000.0,
                meals_per_day: 5,
                waste_kg_per_day: 50.0,
            },
        )
        .unwrap();
        assert_eq!(above.classification, Classification::Bad);
    }

    #[test]
    fn zero_inputs_yield_zero_categories() {
        let result = estimate(
            &sample_table(),
            "Testland",
            &ActivityInputs {
                distance_km_per_day: 0.0,
                electricity_kwh_per_month: 0.0,
                meals_per_day: 0,
                waste_kg_per_day: 0.0,
            },
        )
        .unwrap();
        assert_eq!(result.total_tons, 0.0);
        assert_eq!(result.classification, Classification::Good);
    }
}

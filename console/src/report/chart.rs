use carboncore::prelude::EmissionEstimate;
use plotters::prelude::*;
use std::path::Path;

/// Display order of the categories in the chart and the report body.
pub const CATEGORY_LABELS: [&str; 4] = ["Transportation", "Electricity", "Diet", "Waste"];

// One fixed color per category, in display order.
const BAR_COLORS: [RGBColor; 4] = [BLUE, GREEN, RGBColor(255, 140, 0), RED];

/// Renders the per-category bar chart as a PNG at `path`.
///
/// The bitmap backend is the pure-Rust one with no font support, so the
/// chart carries no text; the labels and values live in the report body
/// next to it, in `CATEGORY_LABELS` order.
pub fn render_category_chart(estimate: &EmissionEstimate, path: &Path) -> anyhow::Result<()> {
    let values = [
        estimate.transportation_tons,
        estimate.electricity_tons,
        estimate.diet_tons,
        estimate.waste_tons,
    ];
    let y_max = values.iter().fold(0.0_f64, |acc, v| acc.max(*v)).max(1e-3) * 1.2;

    let root = BitMapBackend::new(path, (640, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(16)
        .build_cartesian_2d(
            (0u32..CATEGORY_LABELS.len() as u32).into_segmented(),
            0.0..y_max,
        )?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style_func(|segment, _| match segment {
                SegmentValue::Exact(index) | SegmentValue::CenterOf(index) => {
                    BAR_COLORS[*index as usize % BAR_COLORS.len()].filled()
                }
                SegmentValue::Last => BAR_COLORS[0].filled(),
            })
            .margin(24)
            .data(
                values
                    .iter()
                    .enumerate()
                    .map(|(index, tons)| (index as u32, *tons)),
            ),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carboncore::prelude::Classification;

    fn sample_estimate() -> EmissionEstimate {
        EmissionEstimate {
            country: "Testland".to_string(),
            transportation_tons: 0.511,
            electricity_tons: 0.6,
            diet_tons: 1.825,
            waste_tons: 0.026,
            total_tons: 2.96,
            classification: Classification::Good,
            baseline_tons: 3.24,
        }
    }

    #[test]
    fn chart_renders_non_empty_png() {
        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();

        render_category_chart(&sample_estimate(), file.path()).unwrap();

        let metadata = std::fs::metadata(file.path()).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn chart_handles_all_zero_values() {
        let mut estimate = sample_estimate();
        estimate.transportation_tons = 0.0;
        estimate.electricity_tons = 0.0;
        estimate.diet_tons = 0.0;
        estimate.waste_tons = 0.0;

        let file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .unwrap();
        render_category_chart(&estimate, file.path()).unwrap();
    }
}

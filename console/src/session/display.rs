use carboncore::prelude::EmissionEstimate;
use std::fmt::Write;

/// Plain-text result block shared by the interactive session and the
/// one-shot driver.
pub fn render_text(estimate: &EmissionEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nResults for {}", estimate.country);
    let _ = writeln!(out, "  Carbon emission by category:");
    let _ = writeln!(
        out,
        "    Transportation: {:.3} tons",
        estimate.transportation_tons
    );
    let _ = writeln!(
        out,
        "    Electricity:    {:.3} tons",
        estimate.electricity_tons
    );
    let _ = writeln!(out, "    Diet:           {:.3} tons", estimate.diet_tons);
    let _ = writeln!(out, "    Waste:          {:.3} tons", estimate.waste_tons);
    let _ = writeln!(
        out,
        "  Total: {:.2} tons ({})",
        estimate.total_tons,
        estimate.classification.label()
    );
    let _ = writeln!(out, "  {}", estimate.message());
    let _ = writeln!(
        out,
        "  Country total from factor table: {:.2} tons",
        estimate.baseline_tons
    );
    out
}

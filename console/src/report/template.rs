use carboncore::prelude::EmissionEstimate;

/// Content-ID the HTML body uses to reference the inline chart image.
pub const CHART_CONTENT_ID: &str = "carbon-chart";

/// Renders the fixed HTML report body for one estimate.
pub fn render_html(estimate: &EmissionEstimate) -> String {
    format!(
        r#"<html>
<body style="font-family: Arial, sans-serif; color: #333;">
    <div style="background-color: #f4f4f9; padding: 20px; border-radius: 8px;">
        <img src="cid:{cid}" alt="Carbon emissions by category" style="width: 100%; max-width: 600px; display: block; margin: 0 auto;"/>
        <h2 style="color: #4CAF50; text-align: center;">Carbon Footprint Report</h2>
        <p style="font-size: 16px; text-align: center;">Dear User,</p>
        <p style="font-size: 16px; line-height: 1.5; text-align: center;">
            Here is your carbon footprint report for <strong>{country}</strong>:
        </p>
        <ul style="font-size: 16px; line-height: 1.8;">
            <li><strong>Transportation:</strong> {transportation:.3} tons</li>
            <li><strong>Electricity:</strong> {electricity:.3} tons</li>
            <li><strong>Diet:</strong> {diet:.3} tons</li>
            <li><strong>Waste:</strong> {waste:.3} tons</li>
            <li><strong>Total Emissions:</strong> {total:.2} tons</li>
            <li><strong>Emission Category:</strong> {label}</li>
            <li><strong>Country's Total Emissions:</strong> {baseline:.2} tons</li>
        </ul>
        <p style="font-size: 16px; text-align: center;">{message}</p>
        <p style="font-size: 16px; text-align: center;">Best regards,</p>
        <p style="font-size: 16px; text-align: center;">Carbon Footprint Calculator Team</p>
    </div>
</body>
</html>
"#,
        cid = CHART_CONTENT_ID,
        country = estimate.country,
        transportation = estimate.transportation_tons,
        electricity = estimate.electricity_tons,
        diet = estimate.diet_tons,
        waste = estimate.waste_tons,
        total = estimate.total_tons,
        label = estimate.classification.label(),
        baseline = estimate.baseline_tons,
        message = estimate.message(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use carboncore::prelude::Classification;

    #[test]
    fn html_body_contains_every_field_and_the_chart_reference() {
        let estimate = EmissionEstimate {
            country: "Testland".to_string(),
            transportation_tons: 0.511,
            electricity_tons: 0.6,
            diet_tons: 1.825,
            waste_tons: 0.026,
            total_tons: 2.96,
            classification: Classification::Bad,
            baseline_tons: 2.5,
        };

        let html = render_html(&estimate);
        assert!(html.contains("cid:carbon-chart"));
        assert!(html.contains("Testland"));
        assert!(html.contains("0.511 tons"));
        assert!(html.contains("0.600 tons"));
        assert!(html.contains("1.825 tons"));
        assert!(html.contains("0.026 tons"));
        assert!(html.contains("2.96 tons"));
        assert!(html.contains("Bad"));
        assert!(html.contains("higher than the average"));
        assert!(html.contains("2.50 tons"));
    }
}

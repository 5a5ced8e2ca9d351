pub mod chart;
pub mod mailer;
pub mod template;

use anyhow::Context;
use carboncore::prelude::EmissionEstimate;
use log::{error, info};
use mailer::{MailConfig, Mailer};
use std::fs;
use std::path::Path;

/// Subject line used for every report email.
pub const REPORT_SUBJECT: &str = "Your Carbon Footprint Report";

/// Resolves mail settings and sends the report to `recipient`.
///
/// Any configuration, rendering or transport failure is logged and surfaced
/// as `false`; the computed estimate stays valid and redisplayable either
/// way. No retry.
pub fn dispatch_report(
    mail_config: Option<&Path>,
    recipient: &str,
    estimate: &EmissionEstimate,
) -> bool {
    let config = match MailConfig::resolve(mail_config) {
        Ok(config) => config,
        Err(err) => {
            error!("mail configuration unavailable: {:#}", err);
            return false;
        }
    };

    match send_report(&config, recipient, estimate) {
        Ok(()) => {
            info!("report delivered to {}", recipient);
            true
        }
        Err(err) => {
            error!("report delivery failed: {:#}", err);
            false
        }
    }
}

fn send_report(
    config: &MailConfig,
    recipient: &str,
    estimate: &EmissionEstimate,
) -> anyhow::Result<()> {
    // The chart lives in a scoped temp file released after the send.
    let chart_file = tempfile::Builder::new()
        .prefix("carbon-report-")
        .suffix(".png")
        .tempfile()
        .context("creating chart scratch file")?;
    chart::render_category_chart(estimate, chart_file.path())
        .context("rendering report chart")?;
    let chart_png = fs::read(chart_file.path()).context("reading rendered chart")?;

    let html = template::render_html(estimate);
    Mailer::new(config.clone()).send(recipient, REPORT_SUBJECT, html, chart_png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use carboncore::prelude::Classification;
    use std::env;

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
    fn dispatch_without_credentials_reports_failure() {
        env::remove_var("SENDER_EMAIL");
        env::remove_var("SENDER_PASSWORD");

        assert!(!dispatch_report(None, "user@example.com", &sample_estimate()));
    }

    #[test]
    fn send_rejects_invalid_recipient_before_any_transport() {
        let config = MailConfig {
            relay_host: "smtp.example.com".to_string(),
            relay_port: 465,
            sender: "reports@example.com".to_string(),
            password: "app-password".to_string(),
        };

        let err = send_report(&config, "not an address", &sample_estimate()).unwrap_err();
        assert!(format!("{:#}", err).contains("recipient"));
    }
}

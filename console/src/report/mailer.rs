use crate::report::template::CHART_CONTENT_ID;
use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const DEFAULT_RELAY_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_RELAY_PORT: u16 = 465;

fn default_relay_host() -> String {
    DEFAULT_RELAY_HOST.to_string()
}

fn default_relay_port() -> u16 {
    DEFAULT_RELAY_PORT
}

/// Mail relay settings injected into the dispatcher.
///
/// Resolved once at the driver edge, from a YAML file or from the
/// SENDER_EMAIL / SENDER_PASSWORD environment variables; the send path
/// never reads the environment itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_relay_host")]
    pub relay_host: String,
    #[serde(default = "default_relay_port")]
    pub relay_port: u16,
    pub sender: String,
    pub password: String,
}

impl MailConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading mail config {}", path_ref.display()))?;
        let config: MailConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing mail config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let sender = env::var("SENDER_EMAIL").context("SENDER_EMAIL is not set")?;
        let password = env::var("SENDER_PASSWORD").context("SENDER_PASSWORD is not set")?;
        Ok(Self {
            relay_host: default_relay_host(),
            relay_port: DEFAULT_RELAY_PORT,
            sender,
            password,
        })
    }

    pub fn resolve(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::from_env(),
        }
    }
}

/// Thin wrapper around the SMTP transport; one message per call, no retry.
///
/// The session is implicit TLS (SMTPS), matching a relay listening on 465.
pub struct Mailer {
    config: MailConfig,
}

impl Mailer {
    pub fn new(config: MailConfig) -> Self {
        Self { config }
    }

    pub fn send(
        &self,
        recipient: &str,
        subject: &str,
        html_body: String,
        chart_png: Vec<u8>,
    ) -> anyhow::Result<()> {
        let from: Mailbox = self
            .config
            .sender
            .parse()
            .with_context(|| format!("invalid sender address {:?}", self.config.sender))?;
        let to: Mailbox = recipient
            .parse()
            .with_context(|| format!("invalid recipient address {:?}", recipient))?;

        let chart_part = Attachment::new_inline(CHART_CONTENT_ID.to_string()).body(
            chart_png,
            ContentType::parse("image/png").context("image content type")?,
        );

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .multipart(
                MultiPart::related()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body),
                    )
                    .singlepart(chart_part),
            )
            .context("assembling report message")?;

        let credentials =
            Credentials::new(self.config.sender.clone(), self.config.password.clone());
        let transport = SmtpTransport::relay(&self.config.relay_host)
            .context("configuring mail relay")?
            .port(self.config.relay_port)
            .credentials(credentials)
            .build();

        transport
            .send(&message)
            .context("delivering report message")?;
        Ok(())
    }
}

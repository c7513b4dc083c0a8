use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};

use crate::notifications::{Notify, subject};

const DEFAULT_RECIPIENT: &str = "dev@sysprocard.com.br";
const SENDER_NAME: &str = "SYSPROCARD";

/// Process-wide mail settings, read from the environment once at startup
/// and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub host: String,
    /// Provider alias from the legacy environment contract. Accepted but
    /// the transport connects by host/port.
    pub service: Option<String>,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: String,
    pub cc: Vec<String>,
}

impl MailConfig {
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name).with_context(|| format!("Missing environment variable {name}"))
        };

        Ok(Self {
            host: var("MAIL_HOST")?,
            service: std::env::var("MAIL_SERVICE").ok(),
            port: var("MAIL_PORT")?
                .parse()
                .with_context(|| "MAIL_PORT is not a valid port number")?,
            user: var("MAIL_USER")?,
            pass: var("MAIL_PASS")?,
            from: var("MAIL_FROM")?,
            to: std::env::var("MAIL_TO").unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string()),
            cc: std::env::var("MAIL_CC")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

/// SMTP notifier. Built once at startup and injected wherever notifications
/// are sent; the underlying transport pools its connections.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: MailConfig,
}

impl SmtpMailer {
    pub fn new(config: MailConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .with_context(|| format!("Invalid mail relay host {}", config.host))?
            .port(config.port)
            .credentials(Credentials::new(config.user.clone(), config.pass.clone()))
            .build();

        Ok(Self { transport, config })
    }

    fn message(&self, body: &str, project: &str) -> Result<Message> {
        let from = Mailbox::new(
            Some(SENDER_NAME.to_string()),
            self.config
                .from
                .parse()
                .with_context(|| format!("Invalid from address {}", self.config.from))?,
        );

        let mut builder = Message::builder()
            .from(from)
            .to(self
                .config
                .to
                .parse()
                .with_context(|| format!("Invalid recipient address {}", self.config.to))?)
            .subject(subject(project))
            .header(ContentType::TEXT_HTML);

        for cc in &self.config.cc {
            builder = builder.cc(cc
                .parse()
                .with_context(|| format!("Invalid cc address {cc}"))?);
        }

        Ok(builder.body(body.to_string())?)
    }
}

#[async_trait]
impl Notify for SmtpMailer {
    async fn send(&self, body: &str, project: &str) -> Result<()> {
        let message = self.message(body, project)?;
        self.transport
            .send(message)
            .await
            .with_context(|| format!("Failed to send notification for {project}"))?;
        Ok(())
    }
}

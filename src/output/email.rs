// src/output/email.rs — Deliver assignments by email
//
// Messages are composed with `lettre`'s builder and handed to a
// `MailTransport`. `SmtpMailer` sends over SMTP on tokio; `PreviewMailer`
// prints the raw message instead (dry runs).

use std::path::Path;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::template::MessageTemplates;
use super::{ensure_finalized, ResultSink};
use crate::core::registry::Registry;
use crate::core::types::Giver;
use crate::infra::config::{EmailConfig, SmtpSecurity};
use crate::infra::errors::SantaError;

/// Anything that can deliver a composed message.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: Message) -> Result<(), SantaError>;
}

/// SMTP delivery with credentials.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn from_config(config: &EmailConfig) -> Result<Self, SantaError> {
        let sender = config
            .sender_email
            .clone()
            .ok_or_else(|| SantaError::Config("[email].sender_email is not set".into()))?;
        let password = config.resolve_password().ok_or_else(|| {
            SantaError::Config(format!(
                "no SMTP password: set [email].password or {}",
                crate::infra::config::PASSWORD_ENV
            ))
        })?;

        let builder = match config.security {
            SmtpSecurity::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_server),
            SmtpSecurity::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_server)
            }
        }
        .map_err(|e| SantaError::Mail(format!("SMTP setup failed: {e}")))?;

        let transport = builder
            .port(config.port)
            .credentials(Credentials::new(sender, password))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: Message) -> Result<(), SantaError> {
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| SantaError::Mail(e.to_string()))?;
        tracing::debug!(code = %response.code(), "SMTP accepted message");
        Ok(())
    }
}

/// Prints messages to stdout instead of sending them.
pub struct PreviewMailer;

#[async_trait]
impl MailTransport for PreviewMailer {
    async fn send(&self, message: Message) -> Result<(), SantaError> {
        println!("{}", String::from_utf8_lossy(&message.formatted()));
        Ok(())
    }
}

/// A file attached to every message.
#[derive(Debug, Clone)]
pub struct MailAttachment {
    pub filename: String,
    pub content: Vec<u8>,
    pub content_type: ContentType,
}

impl MailAttachment {
    pub fn load(path: &Path) -> Result<Self, SantaError> {
        let content = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".into());
        let content_type = ContentType::parse(guess_mime(path))
            .map_err(|e| SantaError::Mail(format!("bad content type: {e}")))?;
        Ok(Self {
            filename,
            content,
            content_type,
        })
    }
}

/// Content type from the file extension. Anything not listed is sent as
/// `application/octet-stream`.
fn guess_mime(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Builds one message per giver.
pub struct MessageComposer {
    sender: Mailbox,
    subject: String,
    templates: MessageTemplates,
    attachments: Vec<MailAttachment>,
}

impl MessageComposer {
    pub fn new(
        sender: &str,
        subject: impl Into<String>,
        templates: MessageTemplates,
        attachments: Vec<MailAttachment>,
    ) -> Result<Self, SantaError> {
        let sender = sender
            .parse::<Mailbox>()
            .map_err(|e| SantaError::Config(format!("invalid sender address '{sender}': {e}")))?;
        Ok(Self {
            sender,
            subject: subject.into(),
            templates,
            attachments,
        })
    }

    /// Read templates and attachments named in `[email]`.
    pub fn from_config(config: &EmailConfig) -> Result<Self, SantaError> {
        let sender = config
            .sender_email
            .as_deref()
            .ok_or_else(|| SantaError::Config("[email].sender_email is not set".into()))?;
        let html = config
            .html_template
            .as_deref()
            .map(std::fs::read_to_string)
            .transpose()?;
        let templates = MessageTemplates::new(&config.body, html.as_deref())?;
        let attachments = config
            .attachments
            .iter()
            .map(|p| MailAttachment::load(p))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(sender, config.subject.clone(), templates, attachments)
    }

    pub fn compose(&self, giver: &Giver) -> Result<Message, SantaError> {
        let to = Mailbox::new(Some(giver.name().to_string()), recipient_address(giver)?);

        let plain = self.templates.render_plain(giver)?;
        let html = self.templates.render_html(giver)?;

        let builder = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(self.subject.clone());

        let message = match (html, self.attachments.is_empty()) {
            (None, true) => builder.singlepart(SinglePart::plain(plain)),
            (Some(html), true) => {
                builder.multipart(MultiPart::alternative_plain_html(plain, html))
            }
            (html, false) => {
                let mut mixed = match html {
                    Some(html) => MultiPart::mixed()
                        .multipart(MultiPart::alternative_plain_html(plain, html)),
                    None => MultiPart::mixed().singlepart(SinglePart::plain(plain)),
                };
                for attachment in &self.attachments {
                    mixed = mixed.singlepart(
                        Attachment::new(attachment.filename.clone())
                            .body(attachment.content.clone(), attachment.content_type.clone()),
                    );
                }
                builder.multipart(mixed)
            }
        };

        message.map_err(|e| SantaError::Mail(format!("failed to build message: {e}")))
    }
}

fn recipient_address(giver: &Giver) -> Result<Address, SantaError> {
    let address = giver.address().ok_or_else(|| SantaError::MissingAddress {
        name: giver.name().to_string(),
    })?;
    address
        .parse::<Address>()
        .map_err(|e| SantaError::Config(format!("invalid address for '{}': {e}", giver.name())))
}

pub struct EmailSink {
    composer: MessageComposer,
    transport: Box<dyn MailTransport>,
}

impl EmailSink {
    pub fn new(composer: MessageComposer, transport: Box<dyn MailTransport>) -> Self {
        Self {
            composer,
            transport,
        }
    }
}

#[async_trait]
impl ResultSink for EmailSink {
    fn name(&self) -> &str {
        "email"
    }

    fn preflight(&self, registry: &Registry) -> Result<(), SantaError> {
        registry.require_addresses()?;
        for giver in registry.givers() {
            recipient_address(giver)?;
        }
        Ok(())
    }

    async fn deliver(&self, registry: &Registry) -> Result<(), SantaError> {
        ensure_finalized(registry)?;
        // Compose everything first so a template problem sends nothing.
        let messages = registry
            .givers()
            .iter()
            .map(|giver| self.composer.compose(giver).map(|m| (giver.name(), m)))
            .collect::<Result<Vec<_>, _>>()?;

        for (name, message) in messages {
            self.transport.send(message).await?;
            tracing::info!(giver = name, "Sent assignment email");
        }
        Ok(())
    }
}

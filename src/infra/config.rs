// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::paths;

/// Environment variable that overrides `[email].password`.
pub const PASSWORD_ENV: &str = "SECRET_SANTA_SMTP_PASSWORD";

/// Plain-text body template used when `[email].body` is not set.
pub const DEFAULT_BODY: &str = "Your Secret Santa assignments are ready!\n\n{{ assignment }}";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub assignment: AssignmentConfig,

    #[serde(default)]
    pub email: EmailConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    pub max_attempts: u32,
    /// Ledger count at which a receiver leaves the pool. Defaults to the
    /// number of categories when unset.
    pub fairness_cap: Option<usize>,
    /// Skip receivers already claimed in the same category column.
    pub column_aware: bool,
    /// Fixed RNG seed for reproducible draws.
    pub seed: Option<u64>,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            fairness_cap: None,
            column_aware: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpSecurity {
    /// Implicit TLS (SMTPS, usually port 465)
    #[default]
    Tls,
    /// Plain connection upgraded with STARTTLS (usually port 587)
    Starttls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub port: u16,
    pub security: SmtpSecurity,
    pub sender_email: Option<String>,
    pub password: Option<String>,
    pub subject: String,
    pub body: String,
    pub html_template: Option<PathBuf>,
    pub attachments: Vec<PathBuf>,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.gmail.com".into(),
            port: 465,
            security: SmtpSecurity::Tls,
            sender_email: None,
            password: None,
            subject: "Your Secret Santa Assignment!".into(),
            body: DEFAULT_BODY.into(),
            html_template: None,
            attachments: Vec::new(),
        }
    }
}

impl EmailConfig {
    /// Password from the environment, falling back to the config file.
    pub fn resolve_password(&self) -> Option<String> {
        std::env::var(PASSWORD_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .or_else(|| self.password.clone())
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        match paths::config_file_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

// src/cli/run.rs — Default command: load input, draw, deliver

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::Cli;
use crate::core::draw::{self, AssignmentOutcome};
use crate::core::registry::Registry;
use crate::core::types::{AssignmentPolicy, Category, Participant};
use crate::infra::config::Config;
use crate::infra::errors::SantaError;
use crate::input::loader;
use crate::output::email::{EmailSink, MailTransport, MessageComposer, PreviewMailer, SmtpMailer};
use crate::output::file::FileSink;
use crate::output::stdout::StdoutSink;
use crate::output::ResultSink;

/// Execute a full draw as described by the command line.
pub async fn run_draw(cli: &Cli, config: &Config) -> Result<AssignmentOutcome, SantaError> {
    let (participants, categories) = load_input(cli)?;
    let registry = Registry::new(participants, categories)?;

    let sink = build_sink(cli, config)?;
    sink.preflight(&registry)?;

    let policy = policy_for(cli, config);
    let mut rng = match cli.seed.or(config.assignment.seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let outcome = draw::draw_registry(registry, &policy, &mut rng)?;
    tracing::info!(
        attempts = outcome.attempts,
        participants = outcome.registry.len(),
        sink = sink.name(),
        "Draw complete"
    );

    sink.deliver(&outcome.registry).await?;
    Ok(outcome)
}

fn load_input(cli: &Cli) -> Result<(Vec<Participant>, Vec<Category>), SantaError> {
    let participants = match (&cli.participants, &cli.participants_file) {
        (_, Some(path)) => loader::load_participants(path)?,
        (Some(list), None) => loader::participants_from_list(list),
        (None, None) => Vec::new(),
    };
    let categories = match (&cli.categories, &cli.categories_file) {
        (_, Some(path)) => loader::load_categories(path)?,
        (Some(list), None) => loader::categories_from_list(list),
        (None, None) => Vec::new(),
    };
    Ok((participants, categories))
}

pub fn policy_for(cli: &Cli, config: &Config) -> AssignmentPolicy {
    let mut policy = AssignmentPolicy::from(&config.assignment);
    if let Some(max) = cli.max_attempts {
        policy.max_attempts = max;
    }
    policy
}

fn build_sink(cli: &Cli, config: &Config) -> Result<Box<dyn ResultSink>, SantaError> {
    if cli.email {
        let composer = MessageComposer::from_config(&config.email)?;
        let transport: Box<dyn MailTransport> = if cli.dry_run {
            Box::new(PreviewMailer)
        } else {
            Box::new(SmtpMailer::from_config(&config.email)?)
        };
        Ok(Box::new(EmailSink::new(composer, transport)))
    } else if cli.output_files {
        Ok(Box::new(FileSink::new(&cli.output_path)))
    } else {
        Ok(Box::new(StdoutSink))
    }
}

// src/core/controller.rs — Generate/validate retry loop
//
// GENERATING -> VALIDATING -> { SUCCEEDED | GENERATING }, and FAILED once the
// attempt budget is spent.

use rand::Rng;

use super::generator::{Attempt, Generator};
use super::registry::Registry;
use super::types::AssignmentPolicy;
use super::validator::{self, CertifiedMatrix};
use crate::infra::errors::SantaError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Generating,
    Validating,
    Succeeded,
    Failed,
}

pub struct RetryController {
    max_attempts: u32,
    attempts: u32,
    state: ControllerState,
}

impl RetryController {
    pub fn new(policy: &AssignmentPolicy) -> Self {
        Self {
            max_attempts: policy.max_attempts,
            attempts: 0,
            state: ControllerState::Generating,
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Drive attempts until one is certified or the budget runs out.
    pub fn run<R: Rng + ?Sized>(
        &mut self,
        generator: &Generator,
        categories: usize,
        rng: &mut R,
    ) -> Result<CertifiedMatrix, SantaError> {
        let mut candidate: Option<Attempt> = None;
        let mut certified: Option<CertifiedMatrix> = None;

        loop {
            match self.state {
                ControllerState::Generating => {
                    if self.attempts >= self.max_attempts {
                        self.state = ControllerState::Failed;
                        continue;
                    }
                    self.attempts += 1;
                    candidate = Some(generator.generate(rng));
                    self.state = ControllerState::Validating;
                }
                ControllerState::Validating => {
                    let Some(attempt) = candidate.take() else {
                        self.state = ControllerState::Generating;
                        continue;
                    };
                    match validator::validate(attempt, categories) {
                        Ok(matrix) => {
                            certified = Some(matrix);
                            self.state = ControllerState::Succeeded;
                        }
                        Err(reason) => {
                            tracing::debug!(attempt = self.attempts, %reason, "Attempt rejected");
                            self.state = ControllerState::Generating;
                        }
                    }
                }
                ControllerState::Succeeded => {
                    return match certified.take() {
                        Some(matrix) => {
                            tracing::info!(attempts = self.attempts, "Assignment found");
                            Ok(matrix)
                        }
                        None => Err(SantaError::Other(anyhow::anyhow!(
                            "controller already handed out its assignment"
                        ))),
                    };
                }
                ControllerState::Failed => {
                    tracing::warn!(attempts = self.attempts, "Attempt budget exhausted");
                    return Err(SantaError::AttemptsExhausted {
                        attempts: self.attempts,
                    });
                }
            }
        }
    }

    /// Convenience wrapper: build a generator for `registry` and run.
    pub fn run_for<R: Rng + ?Sized>(
        &mut self,
        registry: &Registry,
        policy: &AssignmentPolicy,
        rng: &mut R,
    ) -> Result<CertifiedMatrix, SantaError> {
        let generator = Generator::new(registry.len(), registry.category_count(), policy);
        self.run(&generator, registry.category_count(), rng)
    }
}

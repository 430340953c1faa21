// src/core/draw.rs — End-to-end draw: registry, retry loop, finalize

use rand::Rng;

use super::controller::RetryController;
use super::finalizer;
use super::registry::Registry;
use super::types::{AssignmentPolicy, Category, Participant};
use crate::infra::errors::SantaError;

/// A finalized registry plus diagnostics.
#[derive(Debug)]
pub struct AssignmentOutcome {
    pub registry: Registry,
    pub attempts: u32,
}

/// Validate input, search for an assignment, and commit it.
///
/// Input errors are reported before the RNG is touched.
pub fn draw<R: Rng + ?Sized>(
    participants: Vec<Participant>,
    categories: Vec<Category>,
    policy: &AssignmentPolicy,
    rng: &mut R,
) -> Result<AssignmentOutcome, SantaError> {
    let registry = Registry::new(participants, categories)?;
    draw_registry(registry, policy, rng)
}

/// Same as [`draw`] for a registry the caller already built (and possibly
/// checked further, e.g. for addresses).
pub fn draw_registry<R: Rng + ?Sized>(
    mut registry: Registry,
    policy: &AssignmentPolicy,
    rng: &mut R,
) -> Result<AssignmentOutcome, SantaError> {
    policy.check(registry.category_count())?;

    tracing::debug!(
        participants = registry.len(),
        categories = registry.category_count(),
        cap = policy.cap_for(registry.category_count()),
        "Starting draw"
    );

    let mut controller = RetryController::new(policy);
    let certified = controller.run_for(&registry, policy, rng)?;
    finalizer::finalize(&mut registry, certified)?;

    Ok(AssignmentOutcome {
        registry,
        attempts: controller.attempts(),
    })
}

// src/output/mod.rs — Result sinks

pub mod email;
pub mod file;
pub mod render;
pub mod stdout;
pub mod template;

use async_trait::async_trait;

use crate::core::registry::Registry;
use crate::infra::errors::SantaError;

/// Somewhere finalized assignments go.
#[async_trait]
pub trait ResultSink: Send + Sync {
    fn name(&self) -> &str;

    /// Checks that can be made before drawing, so a bad destination fails
    /// before any randomness is spent.
    fn preflight(&self, _registry: &Registry) -> Result<(), SantaError> {
        Ok(())
    }

    /// Deliver every giver's assignment. Errors propagate unchanged.
    async fn deliver(&self, registry: &Registry) -> Result<(), SantaError>;
}

pub(crate) fn ensure_finalized(registry: &Registry) -> Result<(), SantaError> {
    if registry.is_finalized() {
        Ok(())
    } else {
        Err(SantaError::Other(anyhow::anyhow!(
            "cannot deliver assignments before the draw is finalized"
        )))
    }
}

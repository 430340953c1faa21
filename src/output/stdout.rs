// src/output/stdout.rs — Print assignments to the terminal

use async_trait::async_trait;

use super::{ensure_finalized, render, ResultSink};
use crate::core::registry::Registry;
use crate::infra::errors::SantaError;

pub struct StdoutSink;

#[async_trait]
impl ResultSink for StdoutSink {
    fn name(&self) -> &str {
        "stdout"
    }

    async fn deliver(&self, registry: &Registry) -> Result<(), SantaError> {
        ensure_finalized(registry)?;
        println!("{}", render::render_all(registry));
        Ok(())
    }
}

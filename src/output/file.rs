// src/output/file.rs — One result file per giver

use std::path::PathBuf;

use async_trait::async_trait;

use super::{ensure_finalized, render, ResultSink};
use crate::core::registry::Registry;
use crate::infra::errors::SantaError;

pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl ResultSink for FileSink {
    fn name(&self) -> &str {
        "files"
    }

    fn preflight(&self, _registry: &Registry) -> Result<(), SantaError> {
        if self.dir.is_dir() {
            Ok(())
        } else {
            Err(SantaError::MissingOutputDir {
                path: self.dir.display().to_string(),
            })
        }
    }

    async fn deliver(&self, registry: &Registry) -> Result<(), SantaError> {
        ensure_finalized(registry)?;
        for giver in registry.givers() {
            let path = self.dir.join(render::file_name_for(giver));
            tokio::fs::write(&path, render::render_giver(giver)).await?;
            tracing::info!(giver = giver.name(), path = %path.display(), "Wrote assignments");
        }
        Ok(())
    }
}

// src/core/finalizer.rs — Commit a certified matrix into the registry

use super::registry::Registry;
use super::validator::CertifiedMatrix;
use crate::infra::errors::SantaError;

/// Write each certified row into its giver's slots, in category order.
///
/// A registry is finalized at most once.
pub fn finalize(registry: &mut Registry, certified: CertifiedMatrix) -> Result<(), SantaError> {
    if registry.is_finalized() {
        return Err(SantaError::Other(anyhow::anyhow!(
            "registry has already been finalized"
        )));
    }

    let rows = certified.into_inner().into_rows();
    if rows.len() != registry.len() {
        return Err(SantaError::Other(anyhow::anyhow!(
            "matrix has {} rows for {} givers",
            rows.len(),
            registry.len()
        )));
    }

    let width = registry.category_count();
    if let Some((giver, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(SantaError::Other(anyhow::anyhow!(
            "row {giver} has {} receivers for {width} categories",
            row.len()
        )));
    }

    let names: Vec<String> = registry
        .givers()
        .iter()
        .map(|g| g.name().to_string())
        .collect();

    for (giver, row) in registry.givers_mut().iter_mut().zip(rows) {
        let receivers = row.into_iter().map(|r| names[r].clone()).collect();
        giver.assign(receivers);
    }
    registry.mark_finalized();
    Ok(())
}

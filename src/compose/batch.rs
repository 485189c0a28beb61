use rayon::prelude::*;

use super::svg::FishRenderer;
use crate::catalog::FishRecord;
use crate::color::ids::sanitize_id;
use crate::foundation::error::{AquariumError, AquariumResult};

/// One rendered document from [`render_batch`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedFish {
    /// Record id.
    pub id: String,
    /// SVG markup, or fallback `<img>` markup.
    pub markup: String,
}

/// Render every record in parallel, keeping input order.
///
/// Each fish is namespaced under its own sanitized id, so the output is deterministic.
pub fn render_batch(renderer: &FishRenderer, records: &[FishRecord]) -> Vec<RenderedFish> {
    let out: Vec<RenderedFish> = records
        .par_iter()
        .map(|record| RenderedFish {
            id: record.id.clone(),
            markup: renderer.render_with_id(record, &sanitize_id(&record.id)),
        })
        .collect();
    tracing::debug!(fish = out.len(), "rendered batch");
    out
}

/// [`render_batch`] on a dedicated pool of `threads` workers.
pub fn render_batch_with_threads(
    renderer: &FishRenderer,
    records: &[FishRecord],
    threads: usize,
) -> AquariumResult<Vec<RenderedFish>> {
    if threads == 0 {
        return Err(AquariumError::validation("render threads must be >= 1"));
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| AquariumError::generation(format!("failed to build rayon thread pool: {e}")))?;
    Ok(pool.install(|| render_batch(renderer, records)))
}

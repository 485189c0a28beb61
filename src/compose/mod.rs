//! Fish document assembly.
//!
//! [`FishRenderer`] resolves a record's shape and pattern, stacks the fragments as tail, body,
//! pattern, fins and face, and swaps in a static `<img>` when generation fails. Rasterization and
//! parallel batch rendering build on top of it.

pub(crate) mod batch;
pub(crate) mod raster;
pub(crate) mod svg;

pub use batch::{RenderedFish, render_batch, render_batch_with_threads};
pub use raster::{MAX_RASTER_DIM, parse_svg, rasterize_png};
pub use svg::{FishRenderer, fallback_image, generate_fish_svg};

#[cfg(test)]
#[path = "../../tests/unit/compose/mod.rs"]
mod tests;

//! Color arithmetic, color schemes and SVG id helpers.

pub(crate) mod hex;
pub(crate) mod ids;
pub(crate) mod scheme;

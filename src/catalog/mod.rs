//! Fish data: serde models, the catalog boundary and fact lookup.
//!
//! The selection engine only ever sees [`FishSummary`] entries; rendering and fact display need
//! the full [`FishRecord`]. A [`Catalog`] holds both and is passed around explicitly.

pub(crate) mod facts;
pub(crate) mod model;
pub(crate) mod store;

pub use facts::{FactView, fact_at, random_fact};
pub use model::{Appearance, Fact, FishRecord, FishSummary, Profile, Source, WaterType};
pub use store::{Catalog, FishCatalog};

#[cfg(test)]
#[path = "../../tests/unit/catalog/mod.rs"]
mod tests;

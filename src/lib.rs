//! Aquarium draws cartoon fish as SVG and decides which fish swim in the tank.
//!
//! The crate has two pure cores and a thin layer of state around them:
//!
//! - Generation: a [`FishRenderer`] turns a [`FishRecord`] into a self-contained SVG document by
//!   combining one of seven body [`shapes`] with one of 45 [`patterns`].
//! - Selection: [`select_diverse_fish`] and [`select_daily_fish`] pick a varied set of fish from a
//!   catalog index; the daily pick is identical for every caller on the same UTC day.
//! - State: the [`catalog`] loads fish data, [`persist`] keeps the saved list and last visit, and
//!   the [`tank`] module moves fish around and rotates them in and out.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod color;

pub mod catalog;
pub mod compose;
pub mod patterns;
pub mod persist;
pub mod selection;
pub mod shapes;
pub mod tank;

pub use crate::foundation::core::{PatternArea, Point, Rect, ViewBox};
pub use crate::foundation::error::{AquariumError, AquariumResult};

pub use crate::color::hex::{Rgb, darken, lighten, with_alpha};
pub use crate::color::ids::{generate_id, generate_id_with, sanitize_id};
pub use crate::color::scheme::{ColorScheme, Palette};

pub use crate::catalog::{Catalog, FishCatalog, FishRecord, FishSummary, WaterType};
pub use crate::compose::{FishRenderer, generate_fish_svg, rasterize_png, render_batch};
pub use crate::patterns::{PatternOptions, PatternRegistry, PatternResult, PatternTemplate};
pub use crate::persist::{JsonFileStore, KeyValueStore, MemoryStore, SavedFishList, VisitTracker};
pub use crate::selection::rng::{Mulberry32, hash_string, seeded_random, seeded_shuffle};
pub use crate::selection::{
    daily_seed, select_by_body_shape, select_by_habitat, select_by_water_type, select_daily_fish,
    select_daily_fish_on, select_diverse_fish, select_diverse_fish_with, select_for_config,
    select_new_fish,
};
pub use crate::shapes::{ShapeDescriptor, ShapeKind, ShapeOptions, ShapeRegistry, ShapeTemplate};
pub use crate::tank::{AquariumConfig, DisplayMode, Roster, Swimmer, TankBounds};

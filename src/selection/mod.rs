//! Choosing which fish to show.
//!
//! Two policies sit at the core: diversity selection (a random shuffle followed by a greedy pass
//! that favors unseen shapes or colors) and daily selection (the same greedy pass over a shuffle
//! seeded by the UTC date). Every function is pure over the index it is given; empty or fully
//! excluded pools yield an empty selection, never an error.

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{FishSummary, WaterType};
use crate::tank::config::{AquariumConfig, DisplayMode};

pub(crate) mod daily;
pub(crate) mod diverse;
pub mod rng;

pub use daily::{daily_seed, select_daily_fish, select_daily_fish_on, today_utc};
pub use diverse::{select_diverse_fish, select_diverse_fish_with};

/// Diversity selection that avoids the ids currently on display.
pub fn select_new_fish(
    index: &[FishSummary],
    current_ids: &[String],
    count: usize,
) -> Vec<FishSummary> {
    select_diverse_fish(index, count, current_ids)
}

/// Diversity selection restricted to one habitat.
pub fn select_by_habitat(index: &[FishSummary], habitat: &str, count: usize) -> Vec<FishSummary> {
    let filtered: Vec<FishSummary> = index
        .iter()
        .filter(|f| f.habitat == habitat)
        .cloned()
        .collect();
    select_diverse_fish(&filtered, count, &[])
}

/// Up to `count` fish of one body shape in random order, with no diversity pass.
pub fn select_by_body_shape(
    index: &[FishSummary],
    body_shape: &str,
    count: usize,
) -> Vec<FishSummary> {
    let mut filtered: Vec<&FishSummary> = index
        .iter()
        .filter(|f| f.body_shape == body_shape)
        .collect();
    filtered.shuffle(&mut rand::thread_rng());
    filtered.into_iter().take(count).cloned().collect()
}

/// Diversity selection over fish of `water` instead of saltwater.
pub fn select_by_water_type(
    index: &[FishSummary],
    water: WaterType,
    count: usize,
) -> Vec<FishSummary> {
    diverse::diverse_in(index, water, count, &[], &mut rand::thread_rng())
}

/// Selection for a tank configured by `config`.
///
/// `all` shows the whole saltwater catalog and `daily` the date-seeded pick for `today`; both
/// ignore `exclude`. `limited` and `rotate` use diversity selection, or a plain shuffle when
/// diversity is disabled.
pub fn select_for_config<R: Rng + ?Sized>(
    index: &[FishSummary],
    config: &AquariumConfig,
    exclude: &[String],
    today: NaiveDate,
    rng: &mut R,
) -> Vec<FishSummary> {
    match config.display_mode {
        DisplayMode::Daily => select_daily_fish_on(index, config.max_fish, today),
        DisplayMode::All => {
            let mut all = diverse::pool(index, WaterType::Saltwater, &[]);
            if config.shuffle_on_load {
                all.shuffle(rng);
            }
            all.into_iter().cloned().collect()
        }
        DisplayMode::Limited | DisplayMode::Rotate => {
            let mut available = diverse::pool(index, WaterType::Saltwater, exclude);
            if config.shuffle_on_load {
                available.shuffle(rng);
            }
            if config.enable_diverse_selection {
                diverse::pick(&available, config.max_fish)
            } else {
                available
                    .into_iter()
                    .take(config.max_fish)
                    .cloned()
                    .collect()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/selection/mod.rs"]
mod tests;

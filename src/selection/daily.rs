use chrono::{NaiveDate, Utc};

use super::diverse::{pick, pool};
use super::rng::{hash_string, seeded_shuffle};
use crate::catalog::{FishSummary, WaterType};

/// Calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Seed for `date`: the hash of its `YYYY-MM-DD` form.
pub fn daily_seed(date: NaiveDate) -> u32 {
    hash_string(&date.format("%Y-%m-%d").to_string())
}

/// Selection shared by every caller on `date` with the same index.
pub fn select_daily_fish_on(
    index: &[FishSummary],
    count: usize,
    date: NaiveDate,
) -> Vec<FishSummary> {
    let seed = daily_seed(date);
    let available = pool(index, WaterType::Saltwater, &[]);
    let shuffled = seeded_shuffle(&available, seed);
    tracing::debug!(%date, seed, pool = shuffled.len(), "daily selection");
    pick(&shuffled, count)
}

/// [`select_daily_fish_on`] for today's UTC date.
pub fn select_daily_fish(index: &[FishSummary], count: usize) -> Vec<FishSummary> {
    select_daily_fish_on(index, count, today_utc())
}

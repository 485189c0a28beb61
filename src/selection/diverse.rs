use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog::{FishSummary, WaterType};

/// Entries of `index` living in `water`, first occurrence of each id only.
pub(crate) fn pool<'a>(
    index: &'a [FishSummary],
    water: WaterType,
    exclude: &[String],
) -> Vec<&'a FishSummary> {
    let mut seen = HashSet::new();
    index
        .iter()
        .filter(|f| f.water_type == water)
        .filter(|f| !exclude.iter().any(|x| *x == f.id))
        .filter(|f| seen.insert(f.id.as_str()))
        .collect()
}

/// Two-pass pick over an already shuffled pool.
///
/// The first pass accepts a fish when its shape or its primary color is new to the selection;
/// the second fills the remaining slots in shuffled order. Pools no larger than `count` are
/// returned whole.
pub(crate) fn pick(shuffled: &[&FishSummary], count: usize) -> Vec<FishSummary> {
    if shuffled.len() <= count {
        return shuffled.iter().map(|f| (*f).clone()).collect();
    }

    let mut selected: Vec<&FishSummary> = Vec::with_capacity(count);
    let mut taken: HashSet<&str> = HashSet::with_capacity(count);
    let mut shapes: HashSet<&str> = HashSet::new();
    let mut colors: HashSet<&str> = HashSet::new();

    for fish in shuffled {
        if selected.len() >= count {
            break;
        }
        let new_shape = !shapes.contains(fish.body_shape.as_str());
        let new_color = !colors.contains(fish.primary_color.as_str());
        if new_shape || new_color {
            shapes.insert(&fish.body_shape);
            colors.insert(&fish.primary_color);
            taken.insert(&fish.id);
            selected.push(fish);
        }
    }
    let diverse = selected.len();

    for fish in shuffled {
        if selected.len() >= count {
            break;
        }
        if taken.insert(&fish.id) {
            selected.push(fish);
        }
    }

    tracing::debug!(
        pool = shuffled.len(),
        requested = count,
        diverse,
        filled = selected.len() - diverse,
        "picked fish"
    );
    selected.into_iter().cloned().collect()
}

/// Diversity selection over saltwater fish with a caller-supplied RNG.
pub fn select_diverse_fish_with<R: Rng + ?Sized>(
    index: &[FishSummary],
    count: usize,
    exclude: &[String],
    rng: &mut R,
) -> Vec<FishSummary> {
    diverse_in(index, WaterType::Saltwater, count, exclude, rng)
}

/// Diversity selection over saltwater fish, shuffled with the thread RNG.
pub fn select_diverse_fish(
    index: &[FishSummary],
    count: usize,
    exclude: &[String],
) -> Vec<FishSummary> {
    select_diverse_fish_with(index, count, exclude, &mut rand::thread_rng())
}

pub(crate) fn diverse_in<R: Rng + ?Sized>(
    index: &[FishSummary],
    water: WaterType,
    count: usize,
    exclude: &[String],
    rng: &mut R,
) -> Vec<FishSummary> {
    let mut available = pool(index, water, exclude);
    available.shuffle(rng);
    pick(&available, count)
}

use chrono::NaiveDate;
use rand::Rng;
use rand::seq::SliceRandom;

use super::config::AquariumConfig;
use super::motion::{Swimmer, TankBounds};
use crate::catalog::{FishSummary, WaterType};
use crate::selection::{select_diverse_fish_with, select_for_config};

/// A fish currently in the tank.
#[derive(Clone, Debug, PartialEq)]
pub struct Resident {
    /// Catalog id.
    pub id: String,
    /// Motion state.
    pub swimmer: Swimmer,
}

/// Outcome of [`Roster::rotate_one`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rotation {
    /// Id that left the tank.
    pub removed: String,
    /// Id that took its place.
    pub added: String,
}

/// The fish on display and their motion.
#[derive(Clone, Debug)]
pub struct Roster {
    config: AquariumConfig,
    bounds: TankBounds,
    residents: Vec<Resident>,
}

impl Roster {
    /// Empty tank.
    pub fn new(config: AquariumConfig, bounds: TankBounds) -> Self {
        Self {
            config,
            bounds,
            residents: Vec::new(),
        }
    }

    /// Display policy.
    pub fn config(&self) -> &AquariumConfig {
        &self.config
    }

    /// Fish on display, in spawn order.
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// Ids on display, in spawn order.
    pub fn ids(&self) -> Vec<String> {
        self.residents.iter().map(|r| r.id.clone()).collect()
    }

    /// Number of fish on display.
    pub fn len(&self) -> usize {
        self.residents.len()
    }

    /// Return `true` when the tank is empty.
    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }

    /// Return `true` when `id` is on display.
    pub fn contains(&self, id: &str) -> bool {
        self.residents.iter().any(|r| r.id == id)
    }

    /// Replace the tank contents with the configured initial selection.
    pub fn spawn<R: Rng + ?Sized>(&mut self, index: &[FishSummary], today: NaiveDate, rng: &mut R) {
        let picked = select_for_config(index, &self.config, &[], today, rng);
        self.fill(&picked, rng);
        tracing::debug!(mode = %self.config.display_mode, fish = self.len(), "spawned tank");
    }

    /// Replace every fish, preferring ones not currently shown.
    pub fn swap_all<R: Rng + ?Sized>(&mut self, index: &[FishSummary], rng: &mut R) {
        let current = self.ids();
        let picked = if self.config.enable_diverse_selection {
            select_diverse_fish_with(index, self.config.max_fish, &current, rng)
        } else {
            let mut pool: Vec<&FishSummary> = index
                .iter()
                .filter(|f| f.water_type == WaterType::Saltwater)
                .collect();
            pool.shuffle(rng);
            pool.into_iter()
                .take(self.config.max_fish)
                .cloned()
                .collect()
        };
        self.fill(&picked, rng);
        tracing::debug!(fish = self.len(), "swapped tank");
    }

    /// Swap one random resident for a random saltwater fish not on display.
    ///
    /// Nothing happens when the index is not larger than `maxFish`, the tank is empty, or every
    /// candidate is already shown.
    pub fn rotate_one<R: Rng + ?Sized>(
        &mut self,
        index: &[FishSummary],
        rng: &mut R,
    ) -> Option<Rotation> {
        if self.residents.is_empty() || index.len() <= self.config.max_fish {
            return None;
        }
        let available: Vec<&FishSummary> = index
            .iter()
            .filter(|f| f.water_type == WaterType::Saltwater && !self.contains(&f.id))
            .collect();
        let incoming = available.choose(rng)?;

        let slot = rng.gen_range(0..self.residents.len());
        let resident = Resident {
            id: incoming.id.clone(),
            swimmer: Swimmer::spawn(self.bounds, rng),
        };
        let removed = std::mem::replace(&mut self.residents[slot], resident).id;
        tracing::debug!(%removed, added = %incoming.id, "rotated fish");
        Some(Rotation {
            removed,
            added: incoming.id.clone(),
        })
    }

    /// Advance every resident one frame.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for r in &mut self.residents {
            r.swimmer.step(self.bounds, rng);
        }
    }

    /// Change the tank size; fish outside the new bounds are pulled back in on their next step.
    pub fn resize(&mut self, bounds: TankBounds) {
        self.bounds = bounds;
    }

    fn fill<R: Rng + ?Sized>(&mut self, picked: &[FishSummary], rng: &mut R) {
        self.residents = picked
            .iter()
            .map(|f| Resident {
                id: f.id.clone(),
                swimmer: Swimmer::spawn(self.bounds, rng),
            })
            .collect();
    }
}

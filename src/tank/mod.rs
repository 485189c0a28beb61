//! The live tank: display policy, per-fish motion and the roster of displayed fish.
//!
//! Nothing here schedules frames. Callers drive [`Roster::step`] from their own loop and call
//! [`Roster::rotate_one`] every [`AquariumConfig::rotate_interval`] milliseconds in `rotate` mode.

/// Display policy and its JSON form.
pub mod config;
pub(crate) mod motion;
pub(crate) mod roster;

pub use config::{AquariumConfig, DisplayMode};
pub use motion::{Swimmer, TankBounds};
pub use roster::{Resident, Roster, Rotation};

#[cfg(test)]
#[path = "../../tests/unit/tank/mod.rs"]
mod tests;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Point;

const SIDE_MARGIN: f64 = 50.0;
const TOP_MARGIN: f64 = 60.0;
/// Keeps fish above the sand.
const BOTTOM_MARGIN: f64 = 80.0;
const MAX_VX: f64 = 1.0;
const MAX_VY: f64 = 0.5;
const TURN_CHANCE: f64 = 0.002;

/// Inner size of the tank in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TankBounds {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl TankBounds {
    /// Bounds of `width` by `height`.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return `true` when `p` lies inside the bounds.
    pub fn contains(self, p: Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

/// Position and velocity of one fish, advanced one frame at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Swimmer {
    /// Top-left position of the sprite.
    pub position: Point,
    /// Horizontal speed in pixels per frame.
    pub vx: f64,
    /// Vertical speed in pixels per frame.
    pub vy: f64,
    /// Sprite is mirrored (swimming left).
    pub flipped: bool,
}

/// Uniform draw from `[lo, hi)`, or `lo` when the range is empty.
fn between<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

fn sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.gen_bool(0.5) { 1.0 } else { -1.0 }
}

impl Swimmer {
    /// Place a fish at a random spot with a random heading.
    pub fn spawn<R: Rng + ?Sized>(bounds: TankBounds, rng: &mut R) -> Self {
        let x = between(rng, 100.0, bounds.width - 100.0);
        let y = between(rng, 80.0, bounds.height - 120.0);
        let vx = between(rng, 0.3, 0.8) * sign(rng);
        let vy = between(rng, 0.1, 0.3) * sign(rng);
        let mut swimmer = Self {
            position: Point::new(x, y),
            vx,
            vy,
            flipped: vx < 0.0,
        };
        swimmer.clamp_position(bounds);
        swimmer
    }

    /// Advance one frame, bouncing off the walls.
    pub fn step<R: Rng + ?Sized>(&mut self, bounds: TankBounds, rng: &mut R) {
        self.position.x += self.vx;
        self.position.y += self.vy;

        let Point { x, y } = self.position;
        if x <= SIDE_MARGIN || x >= bounds.width - SIDE_MARGIN {
            self.vx = -self.vx;
            self.flipped = self.vx < 0.0;
            self.vy += between(rng, -0.1, 0.1);
        }
        if y <= TOP_MARGIN || y >= bounds.height - BOTTOM_MARGIN {
            self.vy = -self.vy;
            let heading = if self.vx > 0.0 { 1.0 } else { -1.0 };
            self.vx += between(rng, -0.1, 0.1) * heading;
        }

        self.vx = self.vx.clamp(-MAX_VX, MAX_VX);
        self.vy = self.vy.clamp(-MAX_VY, MAX_VY);

        if rng.gen_bool(TURN_CHANCE) {
            self.vy = between(rng, -0.3, 0.3);
        }
        self.clamp_position(bounds);
    }

    fn clamp_position(&mut self, bounds: TankBounds) {
        self.position.x = self.position.x.clamp(0.0, bounds.width.max(0.0));
        self.position.y = self.position.y.clamp(0.0, bounds.height.max(0.0));
    }
}

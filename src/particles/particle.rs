use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A position in logical surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// 8-bit color with a floating point alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Composites this color over an opaque background.
    pub fn blend_over(self, background: (u8, u8, u8)) -> (u8, u8, u8) {
        let alpha = self.a.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| {
            (f64::from(top) * alpha + f64::from(bottom) * (1.0 - alpha)).round() as u8
        };
        (
            mix(self.r, background.0),
            mix(self.g, background.1),
            mix(self.b, background.2),
        )
    }
}

/// A single point of the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// Rest position; fixed for the particle's lifetime.
    anchor: Point,
    pub radius: f64,
    pub color: Rgba,
    /// Downward speed applied each frame in drift mode.
    pub drift: f64,
}

impl Particle {
    pub fn new(position: Point, radius: f64, color: Rgba, drift: f64) -> Self {
        Self {
            position,
            anchor: position,
            radius,
            color,
            drift,
        }
    }

    /// A particle placed uniformly in `[0, width) × [0, height)`.
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        radius: &RangeInclusive<f64>,
        drift: &RangeInclusive<f64>,
    ) -> Self {
        let position = Point::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        let color = Rgba::new(
            rng.gen_range(155..=255),
            rng.gen_range(155..=255),
            255,
            rng.gen_range(0.1..0.6),
        );
        Self::new(
            position,
            sample(rng, radius),
            color,
            sample(rng, drift),
        )
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }
}

fn sample<R: Rng>(rng: &mut R, range: &RangeInclusive<f64>) -> f64 {
    if range.start() >= range.end() {
        *range.start()
    } else {
        rng.gen_range(range.clone())
    }
}

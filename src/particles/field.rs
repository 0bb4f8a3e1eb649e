//! Pure state and per-frame logic of the particle field.
//!
//! Nothing here touches a clock or a rendering backend: [`FieldState::update`]
//! advances the simulation by one frame and [`FieldState::draw`] emits the
//! frame onto any [`Surface`].

use std::env;
use std::ops::RangeInclusive;
use std::time::Duration;

use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::particle::{Particle, Point, Rgba};
use super::surface::Surface;

/// Pointer precision of the host device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    /// Mouse or trackpad.
    Fine,
    /// Touch screen; the field runs in the reduced drift mode.
    Coarse,
}

impl DeviceClass {
    /// Mobile terminals (Termux and other Android hosts) count as coarse.
    pub fn detect() -> Self {
        if env::var_os("TERMUX_VERSION").is_some() || env::var_os("ANDROID_ROOT").is_some() {
            DeviceClass::Coarse
        } else {
            DeviceClass::Fine
        }
    }
}

/// Configured device class; `auto` defers to [`DeviceClass::detect`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceSetting {
    #[default]
    Auto,
    Fine,
    Coarse,
}

impl DeviceSetting {
    pub fn resolve(self) -> DeviceClass {
        match self {
            DeviceSetting::Auto => DeviceClass::detect(),
            DeviceSetting::Fine => DeviceClass::Fine,
            DeviceSetting::Coarse => DeviceClass::Coarse,
        }
    }
}

/// Logical size of the drawing surface plus its device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_ratio(width, height, 1.0)
    }

    pub fn with_ratio(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio,
        }
    }

    /// Backing-surface dimensions in device pixels.
    pub fn physical(&self) -> (u32, u32) {
        let ratio = if self.pixel_ratio > 0.0 { self.pixel_ratio } else { 1.0 };
        (
            (self.width * ratio).round().max(0.0) as u32,
            (self.height * ratio).round().max(0.0) as u32,
        )
    }

    pub fn is_usable(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.pixel_ratio.is_finite()
            && self.pixel_ratio > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("no drawing surface is available")]
    SurfaceUnavailable,
    #[error("surface size {width}x{height} (ratio {pixel_ratio}) cannot host a field")]
    UnusableSurface {
        width: f64,
        height: f64,
        pixel_ratio: f64,
    },
}

/// Tunables for the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub target_fps: u32,
    /// Upper bound on particles for fine-pointer devices.
    pub desktop_cap: usize,
    /// One particle per this many logical pixels of width.
    pub spacing_divisor: f64,
    /// Particle count on coarse-pointer devices.
    pub mobile_count: usize,
    /// Pointer distance under which particles are pushed away.
    pub repel_radius: f64,
    pub repel_factor: f64,
    pub spring_factor: f64,
    /// Particles closer than this are linked.
    pub link_distance: f64,
    pub link_alpha: f64,
    pub link_width: f64,
    pub link_color: Rgba,
    pub trail_color: Rgba,
    pub radius_range: (f64, f64),
    pub drift_range: (f64, f64),
    pub pointer_throttle_ms: u64,
    pub device: DeviceSetting,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            desktop_cap: 40,
            spacing_divisor: 30.0,
            mobile_count: 15,
            repel_radius: 150.0,
            repel_factor: 1.0 / 20.0,
            spring_factor: 1.0 / 10.0,
            link_distance: 100.0,
            link_alpha: 0.6,
            link_width: 0.5,
            link_color: Rgba::new(0, 240, 255, 1.0),
            trail_color: Rgba::new(15, 23, 42, 0.05),
            radius_range: (1.0, 4.0),
            drift_range: (0.05, 0.25),
            pointer_throttle_ms: 16,
            device: DeviceSetting::Auto,
        }
    }
}

impl FieldConfig {
    /// Number of particles a field of `width` logical pixels gets on `device`.
    pub fn particle_count(&self, width: f64, device: DeviceClass) -> usize {
        match device {
            DeviceClass::Coarse => self.mobile_count,
            DeviceClass::Fine if self.spacing_divisor > 0.0 && width.is_finite() => {
                let by_width = (width.max(0.0) / self.spacing_divisor).floor() as usize;
                by_width.min(self.desktop_cap)
            }
            DeviceClass::Fine => self.desktop_cap,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps.max(1)))
    }

    pub fn pointer_interval(&self) -> Duration {
        Duration::from_millis(self.pointer_throttle_ms)
    }

    fn radius_span(&self) -> RangeInclusive<f64> {
        ordered(self.radius_range)
    }

    fn drift_span(&self) -> RangeInclusive<f64> {
        ordered(self.drift_range)
    }
}

fn ordered((a, b): (f64, f64)) -> RangeInclusive<f64> {
    if a <= b { a..=b } else { b..=a }
}

/// A pair of particles close enough to be joined by a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
    /// `1 - distance / link_distance`, before `link_alpha` is applied.
    pub strength: f64,
}

/// Live particles plus everything one frame reads.
#[derive(Debug, Clone)]
pub struct FieldState {
    config: FieldConfig,
    device: DeviceClass,
    size: SurfaceSize,
    pointer: Option<Point>,
    particles: Vec<Particle>,
}

impl FieldState {
    /// Seeds a field sized for `size` on `device`.
    pub fn new<R: Rng>(
        config: FieldConfig,
        size: SurfaceSize,
        device: DeviceClass,
        rng: &mut R,
    ) -> Result<Self, FieldError> {
        if !size.is_usable() {
            return Err(FieldError::UnusableSurface {
                width: size.width,
                height: size.height,
                pixel_ratio: size.pixel_ratio,
            });
        }
        let count = config.particle_count(size.width, device);
        let radius = config.radius_span();
        let drift = config.drift_span();
        let particles = (0..count)
            .map(|_| Particle::random(rng, size.width, size.height, &radius, &drift))
            .collect();

        Ok(Self {
            config,
            device,
            size,
            pointer: None,
            particles,
        })
    }

    /// Builds a field around existing particles.
    pub fn from_particles(
        config: FieldConfig,
        size: SurfaceSize,
        device: DeviceClass,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            config,
            device,
            size,
            pointer: None,
            particles,
        }
    }

    /// Advances every particle by one frame.
    ///
    /// Pointer and size are sampled once up front and hold for the whole pass.
    pub fn update<R: Rng>(&mut self, rng: &mut R) {
        let pointer = self.pointer;
        let SurfaceSize { width, height, .. } = self.size;
        let drifting = self.device == DeviceClass::Coarse;
        let repel_radius = self.config.repel_radius;
        let repel = self.config.repel_factor;
        let spring = self.config.spring_factor;

        for particle in &mut self.particles {
            let near = pointer.filter(|p| particle.position.distance_to(*p) < repel_radius);
            match near {
                Some(pointer) => {
                    let dx = pointer.x - particle.position.x;
                    let dy = pointer.y - particle.position.y;
                    particle.position.x -= dx * repel;
                    particle.position.y -= dy * repel;
                }
                None => {
                    let anchor = particle.anchor();
                    particle.position.x -= (particle.position.x - anchor.x) * spring;
                    particle.position.y -= (particle.position.y - anchor.y) * spring;
                }
            }

            if drifting {
                particle.position.y += particle.drift;
                if particle.position.y > height {
                    particle.position.y = 0.0;
                    particle.position.x = if width.is_finite() && width > 0.0 {
                        rng.gen_range(0.0..width)
                    } else {
                        0.0
                    };
                }
            }

            if !particle.position.is_finite() {
                warn!("particle left the finite plane, resetting to its anchor");
                particle.position = particle.anchor();
            }
        }
    }

    /// Every unordered pair closer than `link_distance`, each exactly once.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.config.link_distance;
        let max_squared = max * max;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles
                .iter()
                .enumerate()
                .skip(i + 1)
                .filter_map(move |(j, b)| {
                    let dx = a.position.x - b.position.x;
                    let dy = a.position.y - b.position.y;
                    let squared = dx * dx + dy * dy;
                    (squared < max_squared).then(|| {
                        let distance = squared.sqrt();
                        Link {
                            from: i,
                            to: j,
                            distance,
                            strength: 1.0 - distance / max,
                        }
                    })
                })
        })
    }

    /// Emits the current frame: trail fade, particles, then links.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fade(self.config.trail_color);
        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.radius, particle.color);
        }
        for link in self.links() {
            let color = self
                .config
                .link_color
                .with_alpha(link.strength * self.config.link_alpha);
            surface.stroke_line(
                self.particles[link.from].position,
                self.particles[link.to].position,
                color,
                self.config.link_width,
            );
        }
    }

    /// Adopts new surface dimensions without touching any particle.
    ///
    /// A size that could not have seeded the field is refused and the
    /// current one is kept.
    pub fn resize(&mut self, size: SurfaceSize) -> Result<(), FieldError> {
        if !size.is_usable() {
            return Err(FieldError::UnusableSurface {
                width: size.width,
                height: size.height,
                pixel_ratio: size.pixel_ratio,
            });
        }
        self.size = size;
        Ok(())
    }

    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = Some(pointer);
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

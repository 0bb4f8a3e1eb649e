//! Animated field of linked points that shy away from the pointer.
//!
//! [`FieldState`] holds the simulation and is driven one frame at a time;
//! [`ParticleField`] adds mounting, frame pacing, pointer coalescing and
//! cancellation around it. Drawing goes through the [`Surface`] trait.

mod component;
mod field;
mod monitor;
mod particle;
mod schedule;
mod surface;

pub use component::ParticleField;
pub use field::{
    DeviceClass, DeviceSetting, FieldConfig, FieldError, FieldState, Link, SurfaceSize,
};
pub use monitor::{FpsMonitor, FrameRateStatus};
pub use particle::{Particle, Point, Rgba};
pub use schedule::{CancelHandle, FrameLimiter, FrameScheduler, PointerThrottle};
pub use surface::{DrawCommand, DrawList, Surface};

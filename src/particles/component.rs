use std::time::Instant;

use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::field::{DeviceClass, FieldConfig, FieldError, FieldState, SurfaceSize};
use super::particle::Point;
use super::schedule::{CancelHandle, FrameLimiter, PointerThrottle};
use super::surface::Surface;

/// A mounted particle field: simulation state plus its frame pacing.
///
/// Mounting never fails. Without a usable surface the field stays detached
/// and every frame is a no-op until a usable size arrives through
/// [`ParticleField::resized`].
pub struct ParticleField {
    config: FieldConfig,
    device: DeviceClass,
    state: Option<FieldState>,
    rng: StdRng,
    limiter: FrameLimiter,
    pointer: PointerThrottle,
    cancel: CancelHandle,
}

impl ParticleField {
    pub fn mount(config: FieldConfig, surface: Option<SurfaceSize>, device: DeviceClass) -> Self {
        Self::mount_with_rng(config, surface, device, StdRng::from_entropy())
    }

    pub fn mount_with_rng(
        config: FieldConfig,
        surface: Option<SurfaceSize>,
        device: DeviceClass,
        mut rng: StdRng,
    ) -> Self {
        let state = match surface.ok_or(FieldError::SurfaceUnavailable) {
            Ok(size) => Self::seed(&config, size, device, &mut rng),
            Err(err) => {
                warn!("particle field left detached: {err}");
                None
            }
        };
        let limiter = FrameLimiter::new(config.frame_interval());
        let pointer = PointerThrottle::new(config.pointer_interval());
        Self {
            config,
            device,
            state,
            rng,
            limiter,
            pointer,
            cancel: CancelHandle::new(),
        }
    }

    fn seed(
        config: &FieldConfig,
        size: SurfaceSize,
        device: DeviceClass,
        rng: &mut StdRng,
    ) -> Option<FieldState> {
        match FieldState::new(config.clone(), size, device, rng) {
            Ok(state) => {
                let (physical_width, physical_height) = size.physical();
                info!(
                    "Mounted particle field: {} particles on {:?} device, surface {}x{}",
                    state.len(),
                    device,
                    physical_width,
                    physical_height
                );
                Some(state)
            }
            Err(err) => {
                warn!("particle field left detached: {err}");
                None
            }
        }
    }

    pub fn pointer_moved(&mut self, point: Point) {
        self.pointer.record(point);
    }

    /// Applies new surface dimensions. Particles are never re-seeded once created.
    pub fn resized(&mut self, size: SurfaceSize) {
        if self.cancel.is_cancelled() {
            return;
        }
        match self.state.as_mut() {
            Some(state) => match state.resize(size) {
                Ok(()) => debug!("particle surface resized to {}x{}", size.width, size.height),
                Err(err) => debug!("ignoring resize: {err}"),
            },
            None => self.state = Self::seed(&self.config, size, self.device, &mut self.rng),
        }
    }

    /// Runs one rate-limited update-and-draw pass.
    ///
    /// Returns `false` when the call came too early, the field is detached,
    /// or the loop was cancelled; nothing is drawn in those cases.
    pub fn frame<S: Surface + ?Sized>(&mut self, now: Instant, surface: &mut S) -> bool {
        if self.cancel.is_cancelled() {
            return false;
        }
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        if !self.limiter.ready(now) {
            return false;
        }
        if let Some(point) = self.pointer.take(now) {
            state.set_pointer(point);
        }
        state.update(&mut self.rng);
        state.draw(surface);
        true
    }

    /// Cancels the loop and drops every particle. Safe to call repeatedly.
    pub fn unmount(&mut self) {
        if self.cancel.is_cancelled() && self.state.is_none() {
            return;
        }
        self.cancel.cancel();
        if self.state.take().is_some() {
            info!("Unmounted particle field");
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.state.is_some() && !self.cancel.is_cancelled()
    }

    pub fn particle_count(&self) -> usize {
        self.state.as_ref().map_or(0, FieldState::len)
    }

    pub fn state(&self) -> Option<&FieldState> {
        self.state.as_ref()
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::surface::DrawList;
    use std::time::Duration;

    fn seeded(surface: Option<SurfaceSize>) -> ParticleField {
        ParticleField::mount_with_rng(
            FieldConfig::default(),
            surface,
            DeviceClass::Fine,
            StdRng::seed_from_u64(42),
        )
    }

    #[test]
    fn missing_surface_mounts_detached() {
        let mut field = seeded(None);
        let mut list = DrawList::new();
        assert!(!field.is_mounted());
        assert!(!field.frame(Instant::now(), &mut list));
        assert!(list.is_empty());

        field.resized(SurfaceSize::new(300.0, 200.0));
        assert!(field.is_mounted());
        assert_eq!(field.particle_count(), 10);
    }

    #[test]
    fn frames_are_rate_limited() {
        let mut field = seeded(Some(SurfaceSize::new(900.0, 600.0)));
        let mut list = DrawList::new();
        let start = Instant::now();

        assert!(field.frame(start, &mut list));
        assert!(!field.frame(start + Duration::from_millis(4), &mut list));
        assert!(field.frame(start + Duration::from_millis(17), &mut list));
        assert_eq!(list.circles(), 2 * field.particle_count());
    }

    #[test]
    fn pointer_is_applied_on_the_next_frame() {
        let mut field = seeded(Some(SurfaceSize::new(900.0, 600.0)));
        field.pointer_moved(Point::new(1.0, 2.0));
        field.pointer_moved(Point::new(3.0, 4.0));
        assert_eq!(field.state().and_then(FieldState::pointer), None);

        field.frame(Instant::now(), &mut DrawList::new());
        assert_eq!(field.state().and_then(FieldState::pointer), Some(Point::new(3.0, 4.0)));
    }

    #[test]
    fn unmount_stops_frames_and_is_idempotent() {
        let mut field = seeded(Some(SurfaceSize::new(900.0, 600.0)));
        let handle = field.cancel_handle();
        field.unmount();
        field.unmount();

        assert!(handle.is_cancelled());
        assert_eq!(field.particle_count(), 0);
        assert!(!field.frame(Instant::now(), &mut DrawList::new()));

        field.resized(SurfaceSize::new(900.0, 600.0));
        assert!(!field.is_mounted());
    }

    #[test]
    fn unusable_resizes_are_ignored_while_attached() {
        let mut field = seeded(Some(SurfaceSize::new(900.0, 600.0)));
        let count = field.particle_count();
        let start = Instant::now();

        field.resized(SurfaceSize::new(f64::INFINITY, 10.0));
        field.resized(SurfaceSize::new(0.0, 10.0));

        assert!(field.is_mounted());
        assert_eq!(field.particle_count(), count);
        assert_eq!(field.state().map(FieldState::size), Some(SurfaceSize::new(900.0, 600.0)));
        assert!(field.frame(start, &mut DrawList::new()));
    }

    #[test]
    fn unusable_resizes_leave_a_detached_field_detached() {
        let mut field = seeded(None);
        field.resized(SurfaceSize::new(f64::INFINITY, 10.0));
        field.resized(SurfaceSize::new(0.0, 10.0));
        assert!(!field.is_mounted());
        assert_eq!(field.particle_count(), 0);
    }

    #[test]
    fn external_cancel_halts_frames() {
        let mut field = seeded(Some(SurfaceSize::new(900.0, 600.0)));
        field.cancel_handle().cancel();
        assert!(!field.frame(Instant::now(), &mut DrawList::new()));
        assert!(!field.is_mounted());
    }
}

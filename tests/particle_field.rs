use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::StdRng;
use scai::particles::{
    DeviceClass, DrawCommand, DrawList, FieldConfig, FieldState, Particle, ParticleField, Point,
    Rgba, SurfaceSize,
};

fn mount(width: f64, height: f64, device: DeviceClass, seed: u64) -> ParticleField {
    let _ = env_logger::builder().is_test(true).try_init();
    ParticleField::mount_with_rng(
        FieldConfig::default(),
        Some(SurfaceSize::new(width, height)),
        device,
        StdRng::seed_from_u64(seed),
    )
}

fn dot(x: f64, y: f64, drift: f64) -> Particle {
    Particle::new(Point::new(x, y), 2.0, Rgba::new(180, 200, 255, 0.4), drift)
}

/// Runs `frames` frames, one target interval apart.
fn run_frames(field: &mut ParticleField, start: Instant, frames: u32) -> DrawList {
    let step = Duration::from_millis(17);
    let mut last = DrawList::new();
    for frame in 0..frames {
        let mut list = DrawList::new();
        assert!(field.frame(start + step * frame, &mut list));
        last = list;
    }
    last
}

#[test]
fn desktop_count_is_bounded_by_width_and_cap() {
    let config = FieldConfig::default();
    for (width, expected) in [(1000.0, 33), (1200.0, 40), (3000.0, 40), (45.0, 1)] {
        let field = mount(width, 700.0, DeviceClass::Fine, 3);
        assert_eq!(field.particle_count(), expected);
        assert_eq!(config.particle_count(width, DeviceClass::Fine), expected);
    }
}

#[test]
fn mobile_count_ignores_width() {
    assert_eq!(mount(3000.0, 700.0, DeviceClass::Coarse, 3).particle_count(), 15);
    assert_eq!(mount(200.0, 700.0, DeviceClass::Coarse, 3).particle_count(), 15);
}

#[test]
fn count_survives_frames_and_resizes() {
    let mut field = mount(1000.0, 700.0, DeviceClass::Fine, 11);
    let start = Instant::now();
    let anchors: Vec<Point> = field
        .state()
        .unwrap()
        .particles()
        .iter()
        .map(Particle::anchor)
        .collect();

    field.pointer_moved(Point::new(500.0, 350.0));
    run_frames(&mut field, start, 120);
    field.resized(SurfaceSize::new(400.0, 300.0));
    field.resized(SurfaceSize::new(2400.0, 1400.0));
    run_frames(&mut field, start + Duration::from_secs(10), 60);

    assert_eq!(field.particle_count(), 33);
    let state = field.state().unwrap();
    assert_eq!(state.size().width, 2400.0);
    let after: Vec<Point> = state.particles().iter().map(Particle::anchor).collect();
    assert_eq!(anchors, after);
}

#[test]
fn resize_keeps_particle_positions() {
    let mut field = mount(900.0, 600.0, DeviceClass::Fine, 5);
    let before: Vec<Point> = field
        .state()
        .unwrap()
        .particles()
        .iter()
        .map(|particle| particle.position)
        .collect();

    field.resized(SurfaceSize::with_ratio(1800.0, 1200.0, 2.0));

    let state = field.state().unwrap();
    let after: Vec<Point> = state.particles().iter().map(|particle| particle.position).collect();
    assert_eq!(before, after);
    assert_eq!(state.size().physical(), (3600, 2400));
}

#[test]
fn every_close_pair_is_linked_exactly_once() {
    let particles = vec![
        dot(0.0, 0.0, 0.0),
        dot(30.0, 40.0, 0.0),
        dot(60.0, 0.0, 0.0),
        dot(90.0, 40.0, 0.0),
        dot(400.0, 400.0, 0.0),
        dot(420.0, 400.0, 0.0),
    ];
    let expected_pairs = {
        let mut count = 0;
        for a in &particles {
            for b in &particles {
                if a != b && a.position.distance_to(b.position) < 100.0 {
                    count += 1;
                }
            }
        }
        count / 2
    };
    let field = FieldState::from_particles(
        FieldConfig::default(),
        SurfaceSize::new(800.0, 600.0),
        DeviceClass::Fine,
        particles,
    );

    let links: Vec<_> = field.links().collect();
    assert_eq!(links.len(), expected_pairs);
    let unique: HashSet<(usize, usize)> = links
        .iter()
        .map(|link| (link.from.min(link.to), link.from.max(link.to)))
        .collect();
    assert_eq!(unique.len(), links.len());
    assert!(links.iter().all(|link| link.to > link.from));

    let mut surface = DrawList::new();
    field.draw(&mut surface);
    assert_eq!(surface.lines(), expected_pairs);
}

#[test]
fn random_fields_never_double_draw_links() {
    let mut field = mount(1200.0, 300.0, DeviceClass::Fine, 99);
    let start = Instant::now();
    let frame = run_frames(&mut field, start, 5);

    let state = field.state().unwrap();
    let positions: Vec<Point> = state
        .particles()
        .iter()
        .map(|particle| particle.position)
        .collect();
    let mut brute = 0;
    for i in 0..positions.len() {
        for j in 0..positions.len() {
            if i < j && positions[i].distance_to(positions[j]) < 100.0 {
                brute += 1;
            }
        }
    }
    assert_eq!(frame.lines(), brute);
    assert_eq!(frame.circles(), positions.len());
    assert!(matches!(frame.commands().first(), Some(DrawCommand::Fade(_))));
}

#[test]
fn drifting_particles_recycle_to_the_top() {
    let height = 600.0;
    let mut field = FieldState::from_particles(
        FieldConfig::default(),
        SurfaceSize::new(800.0, height),
        DeviceClass::Coarse,
        vec![dot(100.0, height - 0.01, 0.1), dot(200.0, 100.0, 0.2)],
    );
    let mut rng = StdRng::seed_from_u64(8);

    field.update(&mut rng);

    let particles = field.particles();
    assert_eq!(particles.len(), 2);
    assert_eq!(particles[0].position.y, 0.0);
    assert!((0.0..800.0).contains(&particles[0].position.x));
    assert!((particles[1].position.y - 100.2).abs() < 1e-9);
}

#[test]
fn fine_devices_do_not_drift() {
    let mut field = FieldState::from_particles(
        FieldConfig::default(),
        SurfaceSize::new(800.0, 600.0),
        DeviceClass::Fine,
        vec![dot(100.0, 599.99, 0.5)],
    );
    field.update(&mut StdRng::seed_from_u64(1));
    assert_eq!(field.particles()[0].position, Point::new(100.0, 599.99));
}

#[test]
fn mobile_field_keeps_its_count_while_recycling() {
    let mut field = mount(500.0, 40.0, DeviceClass::Coarse, 21);
    run_frames(&mut field, Instant::now(), 600);

    let state = field.state().unwrap();
    assert_eq!(state.len(), 15);
    assert!(state.particles().iter().all(|particle| particle.position.y <= 40.0));
}

#[test]
fn pointer_bursts_do_not_add_frames() {
    let mut field = mount(900.0, 600.0, DeviceClass::Fine, 4);
    let start = Instant::now();
    let mut rendered = 0;
    for tick in 0..100u32 {
        for burst in 0..20 {
            field.pointer_moved(Point::new(f64::from(tick * 20 + burst), 300.0));
        }
        if field.frame(start + Duration::from_millis(u64::from(tick) * 4), &mut DrawList::new()) {
            rendered += 1;
        }
    }
    // 400ms of callbacks at a 60 fps target.
    assert!(rendered <= 25, "rendered {rendered} frames");
    assert!(rendered >= 15, "rendered {rendered} frames");
}

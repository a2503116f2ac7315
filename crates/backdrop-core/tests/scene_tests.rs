use backdrop_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn particle(position: Vec2, velocity: Vec2) -> Particle {
    Particle {
        position,
        velocity,
        radius: 1.0,
        alpha: 0.5,
    }
}

fn config_with(boundary: BoundaryPolicy, margin: f32) -> SceneConfig {
    let mut config = SceneConfig::dust();
    config.particles.boundary = boundary;
    config.particles.wrap_margin = margin;
    config
}

#[test]
fn advance_is_linear_away_from_edges_for_both_policies() {
    let size = CanvasSize::new(1000.0, 800.0);
    for policy in [BoundaryPolicy::Wrap, BoundaryPolicy::Bounce] {
        let config = config_with(policy, 10.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut state =
            SceneState::initialize(&config, size, &Layout::default(), Motion::FULL, &mut rng);
        // Keep everyone well inside so no boundary is touched in 50 frames.
        for p in &mut state.particles {
            p.position = Vec2::new(500.0, 400.0);
        }
        let initial = state.particles.clone();
        let n = 50;
        for _ in 0..n {
            state.advance(size, &config);
        }
        for (before, after) in initial.iter().zip(&state.particles) {
            let expected = before.position + before.velocity * n as f32;
            assert!(
                (after.position - expected).length() < 1e-2,
                "{policy:?}: expected {expected:?}, got {:?}",
                after.position
            );
            assert_eq!(after.velocity, before.velocity);
        }
    }
}

#[test]
fn wrap_reenters_at_negative_margin_with_velocity_unchanged() {
    let size = CanvasSize::new(100.0, 100.0);
    let mut p = particle(Vec2::new(109.5, 50.0), Vec2::new(1.0, 0.0));
    p.step(size, BoundaryPolicy::Wrap, 10.0);
    assert_eq!(p.position.x, -10.0);
    assert_eq!(p.position.y, 50.0);
    assert_eq!(p.velocity, Vec2::new(1.0, 0.0));

    let mut q = particle(Vec2::new(50.0, -9.5), Vec2::new(0.0, -1.0));
    q.step(size, BoundaryPolicy::Wrap, 10.0);
    assert_eq!(q.position.y, 110.0);
    assert_eq!(q.velocity, Vec2::new(0.0, -1.0));
}

#[test]
fn wrap_keeps_particles_within_margin_over_time() {
    let size = CanvasSize::new(320.0, 240.0);
    let config = config_with(BoundaryPolicy::Wrap, 10.0);
    let mut rng = StdRng::seed_from_u64(99);
    let mut state =
        SceneState::initialize(&config, size, &Layout::default(), Motion::FULL, &mut rng);
    for _ in 0..5_000 {
        state.advance(size, &config);
    }
    for p in &state.particles {
        assert!(p.position.x >= -10.0 - 1.0 && p.position.x <= 330.0 + 1.0);
        assert!(p.position.y >= -10.0 - 1.0 && p.position.y <= 250.0 + 1.0);
    }
}

#[test]
fn bounce_flips_velocity_without_position_jump() {
    let size = CanvasSize::new(100.0, 100.0);
    let mut p = particle(Vec2::new(99.5, 50.0), Vec2::new(1.0, 0.25));
    p.step(size, BoundaryPolicy::Bounce, 0.0);
    assert_eq!(p.position, Vec2::new(100.5, 50.25));
    assert_eq!(p.velocity, Vec2::new(-1.0, 0.25));

    // Next frame heads back inside and keeps the flipped sign.
    p.step(size, BoundaryPolicy::Bounce, 0.0);
    assert_eq!(p.position, Vec2::new(99.5, 50.5));
    assert_eq!(p.velocity, Vec2::new(-1.0, 0.25));
}

#[test]
fn bounce_does_not_jitter_when_left_outside_after_shrink() {
    let size = CanvasSize::new(50.0, 50.0);
    let mut p = particle(Vec2::new(80.0, 25.0), Vec2::new(-0.5, 0.0));
    for _ in 0..10 {
        p.step(size, BoundaryPolicy::Bounce, 0.0);
    }
    assert_eq!(p.velocity.x, -0.5);
    assert!((p.position.x - 75.0).abs() < 1e-4);
}

#[test]
fn seeded_initialization_is_reproducible() {
    let config = SceneConfig::hero();
    let size = CanvasSize::new(1280.0, 720.0);
    let a = SceneState::initialize(
        &config,
        size,
        &Layout::default(),
        Motion::FULL,
        &mut StdRng::seed_from_u64(42),
    );
    let b = SceneState::initialize(
        &config,
        size,
        &Layout::default(),
        Motion::FULL,
        &mut StdRng::seed_from_u64(42),
    );
    assert_eq!(a, b);
    let c = SceneState::initialize(
        &config,
        size,
        &Layout::default(),
        Motion::FULL,
        &mut StdRng::seed_from_u64(43),
    );
    assert_ne!(a.particles, c.particles);
}

#[test]
fn sampled_fields_stay_within_configured_spans() {
    let config = SceneConfig::hero();
    let size = CanvasSize::new(1280.0, 720.0);
    let state = SceneState::initialize(
        &config,
        size,
        &Layout::default(),
        Motion::FULL,
        &mut StdRng::seed_from_u64(1),
    );
    let pc = &config.particles;
    for p in &state.particles {
        assert!(pc.radius.contains(p.radius));
        assert!(pc.alpha.contains(p.alpha));
        assert!(pc.velocity.contains(p.velocity.x) && pc.velocity.contains(p.velocity.y));
        assert!(p.position.x >= 0.0 && p.position.x <= size.width);
        assert!(p.position.y >= 0.0 && p.position.y <= size.height);
    }
    assert_eq!(state.beams.len(), config.beams.count);
    for b in &state.beams {
        assert!(config.beams.width.contains(b.width));
        assert!(config.beams.speed.contains(b.speed));
        assert!(config.beams.alpha.contains(b.alpha));
        assert!(b.position.x >= -0.2 && b.position.x <= 1.2);
    }
}

#[test]
fn particle_count_from_density_or_fixed() {
    let density = ParticleCount::Density {
        min: 20,
        area_per_particle: 18_000.0,
    };
    assert_eq!(density.resolve(1280.0 * 720.0), 51);
    assert_eq!(density.resolve(100.0 * 100.0), 20);
    assert_eq!(density.resolve(0.0), 20);
    assert_eq!(ParticleCount::Fixed(30).resolve(1e9), 30);
}

#[test]
fn counts_stay_fixed_while_advancing() {
    let config = SceneConfig::hero();
    let size = CanvasSize::new(800.0, 600.0);
    let mut state = SceneState::initialize(
        &config,
        size,
        &Layout::default(),
        Motion::FULL,
        &mut StdRng::seed_from_u64(5),
    );
    let (np, nb) = (state.particles.len(), state.beams.len());
    let radii: Vec<f32> = state.particles.iter().map(|p| p.radius).collect();
    for _ in 0..1_000 {
        state.advance(size, &config);
    }
    assert_eq!(state.particles.len(), np);
    assert_eq!(state.beams.len(), nb);
    let after: Vec<f32> = state.particles.iter().map(|p| p.radius).collect();
    assert_eq!(radii, after);
}

#[test]
fn beam_wraps_past_right_threshold() {
    let mut beam = Beam {
        position: Vec2::new(1.199, 0.5),
        width: 100.0,
        speed: 0.002,
        alpha: 0.1,
    };
    beam.step();
    assert_eq!(beam.position.x, -0.2);
    beam.step();
    assert!((beam.position.x - -0.198).abs() < 1e-6);
}

#[test]
fn reduced_motion_disables_particles_and_beams_but_keeps_anchors() {
    let config = SceneConfig::circuit();
    let layout = Layout {
        section: Rect::new(0.0, 100.0, 800.0, 600.0),
        nodes: vec![
            Rect::new(10.0, 110.0, 20.0, 20.0),
            Rect::new(300.0, 300.0, 40.0, 40.0),
            Rect::new(600.0, 500.0, 10.0, 10.0),
        ],
    };
    let state = SceneState::initialize(
        &config,
        CanvasSize::new(800.0, 600.0),
        &layout,
        Motion::reduced(),
        &mut StdRng::seed_from_u64(3),
    );
    assert!(state.particles.is_empty());
    assert!(state.beams.is_empty());
    assert_eq!(state.anchors.len(), 3);

    let hero = SceneState::initialize(
        &SceneConfig::hero(),
        CanvasSize::new(800.0, 600.0),
        &Layout::default(),
        Motion::reduced(),
        &mut StdRng::seed_from_u64(3),
    );
    assert!(hero.particles.is_empty() && hero.beams.is_empty());
}

#[test]
fn narrow_viewport_is_degraded_mode() {
    let config = SceneConfig::hero();
    let narrow = Motion {
        reduced_motion: false,
        viewport_width: config.min_viewport_width - 1.0,
    };
    let state = SceneState::initialize(
        &config,
        CanvasSize::new(400.0, 700.0),
        &Layout::default(),
        narrow,
        &mut StdRng::seed_from_u64(3),
    );
    assert!(state.particles.is_empty() && state.beams.is_empty());
}

#[test]
fn anchors_are_node_centers_relative_to_section() {
    let section = Rect::new(50.0, 200.0, 600.0, 400.0);
    let nodes = [Rect::new(60.0, 210.0, 20.0, 10.0), Rect::new(350.0, 400.0, 100.0, 50.0)];
    let anchors = rebuild_anchors(&nodes, section);
    assert_eq!(anchors[0].position, Vec2::new(20.0, 15.0));
    assert_eq!(anchors[1].position, Vec2::new(350.0, 225.0));
}

#[test]
fn rebuild_anchors_is_idempotent() {
    let section = Rect::new(12.5, 640.0, 1024.0, 512.0);
    let nodes: Vec<Rect> = (0..6)
        .map(|i| Rect::new(40.0 + i as f32 * 130.0, 700.0 + (i % 2) as f32 * 90.0, 64.0, 32.0))
        .collect();
    let first = rebuild_anchors(&nodes, section);
    let second = rebuild_anchors(&nodes, section);
    assert_eq!(first, second);
    assert!(rebuild_anchors(&[], section).is_empty());
}

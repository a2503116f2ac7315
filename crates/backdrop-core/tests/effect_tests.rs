use backdrop_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn layout(offset_y: f32) -> Layout {
    Layout {
        section: Rect::new(0.0, offset_y, 800.0, 400.0),
        nodes: vec![
            Rect::new(100.0, offset_y + 100.0, 20.0, 20.0),
            Rect::new(600.0, offset_y + 250.0, 20.0, 20.0),
        ],
    }
}

fn effect(config: SceneConfig, motion: Motion) -> Effect {
    Effect::new(
        config,
        CanvasSize::new(800.0, 400.0),
        &layout(0.0),
        motion,
        StdRng::seed_from_u64(21),
    )
}

#[test]
fn resize_keeps_pool_counts_and_rebuilds_anchors() {
    let mut fx = effect(SceneConfig::circuit(), Motion::FULL);
    let particles = fx.state().particles.len();
    let before = fx.state().anchors.clone();

    // Scrolling moves the section and its nodes together: anchors unchanged.
    fx.resize(CanvasSize::new(800.0, 400.0), &layout(300.0));
    assert_eq!(fx.state().anchors, before);

    let mut moved = layout(0.0);
    moved.nodes[1] = Rect::new(400.0, 50.0, 20.0, 20.0);
    fx.resize(CanvasSize::new(640.0, 400.0), &moved);
    assert_eq!(fx.state().anchors[1].position, Vec2::new(410.0, 60.0));
    assert_eq!(fx.state().particles.len(), particles);
    assert_eq!(fx.size().width, 640.0);
}

#[test]
fn toggling_reduced_motion_rebuilds_pools() {
    let mut fx = effect(SceneConfig::hero(), Motion::FULL);
    assert!(!fx.state().particles.is_empty());
    fx.set_motion(Motion::reduced(), &layout(0.0));
    assert!(fx.state().particles.is_empty() && fx.state().beams.is_empty());
    fx.set_motion(Motion::FULL, &layout(0.0));
    assert!(!fx.state().particles.is_empty());
    assert_eq!(fx.state().beams.len(), fx.config().beams.count);
}

#[test]
fn frame_reads_pointer_offset() {
    let mut fx = effect(SceneConfig::dust(), Motion::FULL);
    let mut still = RecordingSurface::new();
    let mut clone = effect(SceneConfig::dust(), Motion::FULL);
    clone.frame(&mut still, 16.0);

    fx.pointer_mut()
        .on_move(Vec2::new(800.0, 200.0), Rect::new(0.0, 0.0, 800.0, 400.0));
    let mut shifted = RecordingSurface::new();
    fx.frame(&mut shifted, 16.0);

    let dx = fx.config().particles.parallax_px * 0.5;
    for ((a, _), (b, _)) in still.circles().zip(shifted.circles()) {
        assert!((b.x - a.x - dx).abs() < 1e-3);
        assert!((b.y - a.y).abs() < 1e-3);
    }
}

#[test]
fn anchor_settle_rebuild_is_ignored_without_traces() {
    let mut fx = effect(SceneConfig::dust(), Motion::FULL);
    fx.rebuild_anchors(&layout(0.0));
    assert!(fx.state().anchors.is_empty());
}

#[test]
fn viewport_jitter_does_not_reseed_pools() {
    let mut fx = effect(SceneConfig::hero(), Motion::FULL);
    let before = fx.state().particles.clone();
    let wide = Motion {
        reduced_motion: false,
        viewport_width: 1280.0,
    };
    fx.set_motion(wide, &layout(0.0));
    fx.set_motion(
        Motion {
            viewport_width: 1279.0,
            ..wide
        },
        &layout(0.0),
    );
    assert_eq!(fx.state().particles, before);
    assert_eq!(fx.motion().viewport_width, 1279.0);
}

#[test]
fn first_drawable_resize_spreads_particles_over_the_canvas() {
    let mut fx = Effect::new(
        SceneConfig::hero(),
        CanvasSize::new(0.0, 0.0),
        &Layout::default(),
        Motion::FULL,
        StdRng::seed_from_u64(5),
    );
    assert!(fx
        .state()
        .particles
        .iter()
        .all(|p| p.position == Vec2::ZERO));

    let size = CanvasSize::new(1280.0, 720.0);
    fx.resize(size, &Layout::default());
    fx.frame(&mut RecordingSurface::new(), 16.0);

    let particles = &fx.state().particles;
    assert_eq!(
        particles.len(),
        fx.config().particles.count.resolve(size.area())
    );
    let near_origin = particles
        .iter()
        .filter(|p| p.position.length() < 20.0)
        .count();
    assert!(near_origin < particles.len() / 4, "{near_origin} near origin");
    let right_half = particles
        .iter()
        .filter(|p| p.position.x > size.width * 0.5)
        .count();
    let lower_half = particles
        .iter()
        .filter(|p| p.position.y > size.height * 0.5)
        .count();
    assert!(right_half > 0 && lower_half > 0);
}

#[test]
fn later_resizes_keep_particle_positions() {
    let mut fx = effect(SceneConfig::hero(), Motion::FULL);
    let before = fx.state().particles.clone();
    fx.resize(CanvasSize::new(1024.0, 600.0), &layout(0.0));
    assert_eq!(fx.state().particles, before);
}

#[test]
fn reduced_motion_frames_hold_still() {
    for config in [SceneConfig::hero(), SceneConfig::circuit()] {
        let mut fx = effect(config, Motion::reduced());
        let mut early = RecordingSurface::new();
        fx.frame(&mut early, 0.0);
        let mut late = RecordingSurface::new();
        fx.frame(&mut late, 5_000.0);
        assert!(!early.is_empty());
        assert_eq!(early.calls, late.calls);
    }
}

#[test]
fn full_motion_frames_keep_animating() {
    let mut fx = effect(SceneConfig::circuit(), Motion::FULL);
    let mut early = RecordingSurface::new();
    fx.frame(&mut early, 0.0);
    let mut late = RecordingSurface::new();
    fx.frame(&mut late, 5_000.0);
    assert_ne!(early.calls, late.calls);
}

use backdrop_core::*;
use glam::Vec2;

#[test]
fn pointer_offset_is_relative_to_section_center() {
    let section = Rect::new(100.0, 200.0, 400.0, 200.0);
    let off = pointer_offset(Vec2::new(300.0, 300.0), section);
    assert_eq!(off, PointerOffset::NEUTRAL);

    let off = pointer_offset(Vec2::new(500.0, 200.0), section);
    assert_eq!(off, PointerOffset { x: 0.5, y: -0.5 });

    // Not clamped: outside the section gives magnitudes above 0.5.
    let off = pointer_offset(Vec2::new(900.0, 300.0), section);
    assert_eq!(off.x, 1.5);
}

#[test]
fn zero_sized_section_gives_neutral_offset() {
    let off = pointer_offset(Vec2::new(10.0, 10.0), Rect::new(0.0, 0.0, 0.0, 100.0));
    assert_eq!(off, PointerOffset::NEUTRAL);
}

#[test]
fn tracker_resets_on_leave() {
    let section = Rect::new(0.0, 0.0, 100.0, 100.0);
    let mut tracker = PointerTracker::default();
    assert!(!tracker.is_inside());
    let off = tracker.on_move(Vec2::new(75.0, 25.0), section);
    assert_eq!(off, PointerOffset { x: 0.25, y: -0.25 });
    assert_eq!(tracker.offset(), off);
    assert!(tracker.is_inside());
    tracker.on_leave();
    assert_eq!(tracker.offset(), PointerOffset::NEUTRAL);
    assert!(!tracker.is_inside());
}

#[test]
fn parallax_transform_formats_translate_and_tilt() {
    let css = parallax_transform(PointerOffset { x: 0.5, y: -0.25 }, 12.0, 4.0);
    assert_eq!(
        css,
        "translate3d(6.00px, -3.00px, 0) rotateX(1.00deg) rotateY(2.00deg)"
    );
    let neutral = parallax_transform(PointerOffset::NEUTRAL, 12.0, 4.0);
    assert!(neutral.starts_with("translate3d(0.00px, 0.00px, 0)"));
}

#[test]
fn reveal_delays_follow_node_index_not_arrival_order() {
    let stagger = 90.0;
    let mut reveals = RevealScheduler::new(stagger);
    let delays: Vec<Option<f64>> = [2usize, 0, 1]
        .iter()
        .map(|&i| reveals.on_intersect(i))
        .collect();
    assert_eq!(
        delays,
        vec![Some(2.0 * stagger), Some(0.0), Some(1.0 * stagger)]
    );
}

#[test]
fn reveal_fires_once_per_node() {
    let mut reveals = RevealScheduler::new(50.0);
    assert_eq!(reveals.on_intersect(3), Some(150.0));
    assert_eq!(reveals.state(3), Some(RevealState::Scheduled));
    // Still pending: a second crossing does not reschedule.
    assert_eq!(reveals.on_intersect(3), None);

    assert!(reveals.mark_revealed(3));
    assert!(reveals.is_revealed(3));
    assert!(!reveals.mark_revealed(3));
    assert_eq!(reveals.on_intersect(3), None);
    assert_eq!(reveals.state(3), Some(RevealState::Visible));
    assert_eq!(reveals.state(4), None);
}

#[test]
fn reveal_can_stagger_by_sibling_rank() {
    let mut reveals = RevealScheduler::new(100.0);
    assert_eq!(reveals.on_intersect_at(40, 2), Some(200.0));
    assert_eq!(reveals.on_intersect_at(40, 0), None);
    assert_eq!(reveals.on_intersect_at(41, 0), Some(0.0));
}

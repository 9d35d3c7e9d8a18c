//! End-to-end scenarios driving a world with synthetic tick times.

use std::sync::Arc;
use std::time::{Duration, Instant};

use gamejar_entity::{Entity, Velocity};
use gamejar_graphics::{Color, DisplayMode, RecordingSurface, SolidColor};
use gamejar_math::Transform;
use gamejar_world::{TickDecision, TickScheduler, World, WorldConfig};
use parking_lot::Mutex;

fn world(config: WorldConfig) -> World<RecordingSurface> {
    let surface = RecordingSurface::single_mode(DisplayMode::new(640, 480, 32, 60));
    World::new(config, surface).unwrap()
}

/// Feed the scheduler instants `step` apart until `total` has elapsed,
/// advancing the world on every tick.
fn drive(world: &World<RecordingSurface>, step: Duration, total: Duration) -> Vec<Duration> {
    let t0 = Instant::now();
    let mut scheduler = TickScheduler::new(world.tick_interval(), t0);
    let mut ticks = Vec::new();
    let mut now = Duration::ZERO;
    while now < total {
        now += step;
        if let TickDecision::Tick { elapsed, .. } = scheduler.poll(t0 + now) {
            world.advance(elapsed.as_secs_f64());
            ticks.push(elapsed);
        }
    }
    ticks
}

#[test]
fn test_translating_entity_moves_fifty_units_in_one_second() {
    let world = world(WorldConfig::default().with_tick_rate(60));
    let entity = Entity::new(0.0, 0.0, Arc::new(SolidColor::new(Color::RED, 10, 10)), 10)
        .with_behavior(Velocity::new(50.0, 0.0))
        .into_ref();
    assert_eq!(entity.transform(), Transform::new(0.0, 0.0, 10.0, 10.0));
    world.insert_entity(entity.clone());

    let ticks = drive(&world, Duration::from_millis(20), Duration::from_secs(1));
    assert_eq!(ticks.len(), 50);

    let t = entity.transform();
    assert!((t.x() - 50.0).abs() < 1e-9, "x = {}", t.x());
    assert_eq!(t.y(), 0.0);
}

#[test]
fn test_stalled_tick_reports_real_elapsed_time() {
    let world = world(WorldConfig::default().with_tick_rate(60).with_debug_overlay(true));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    world.insert_entity(
        Entity::at(0.0, 0.0, Arc::new(SolidColor::new(Color::BLUE, 4, 4)))
            .with_update(move |_, dt| log.lock().push(dt))
            .into_ref(),
    );

    let t0 = Instant::now();
    let mut scheduler = TickScheduler::new(world.tick_interval(), t0);
    let mut fps_lines = Vec::new();
    for at in [16u64, 32, 66] {
        let TickDecision::Tick { elapsed, .. } = scheduler.poll(t0 + Duration::from_millis(at))
        else {
            panic!("tick expected at {at} ms");
        };
        world.advance(elapsed.as_secs_f64());
        fps_lines.push(world.with_surface(|s| s.last_frame().unwrap().texts()[1].to_string()));
    }

    let dts = seen.lock().clone();
    let expected = [0.016, 0.016, 0.034];
    assert_eq!(dts.len(), 3);
    for (dt, want) in dts.iter().zip(expected) {
        assert!((dt - want).abs() < 1e-12, "dt {dt} != {want}");
    }
    assert_eq!(fps_lines, vec!["FPS: 62.5", "FPS: 62.5", "FPS: 29.4"]);
}

#[test]
fn test_panning_camera_changes_visible_set() {
    let world = world(WorldConfig::default().with_view(Transform::new(0.0, 0.0, 100.0, 100.0)));
    let near = Entity::new(10.0, 10.0, Arc::new(SolidColor::new(Color::GREEN, 5, 5)), 0).into_ref();
    let far = Entity::new(300.0, 10.0, Arc::new(SolidColor::new(Color::BLUE, 5, 5)), 0).into_ref();
    world.insert_entity(near);
    world.insert_entity(far);

    assert_eq!(world.render_frame(0.016).visible, 1);
    let fills = world.with_surface(|s| s.last_frame().unwrap().fills());
    assert_eq!(fills[0].1, Color::GREEN);

    world.with_camera(|c| c.pan(280.0, 0.0)).unwrap();
    let report = world.render_frame(0.016);
    assert_eq!((report.visible, report.total), (1, 2));
    let fills = world.with_surface(|s| s.last_frame().unwrap().fills());
    assert_eq!(fills[0].1, Color::BLUE);
    // 640 px over a 100-unit view: x = (300 - 280) * 6.4
    assert!((fills[0].0.x - 128.0).abs() < 1e-9);
}

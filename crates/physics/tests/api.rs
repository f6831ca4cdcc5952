use glam::Vec3;
use physics::{ball_mass, BallParams, Bounds, PhysicsError, Simulation, RADIUS_RANGE};

fn seeded_sim() -> Simulation {
    Simulation::new(Bounds::default(), Some(7)).unwrap()
}

#[test]
fn add_ball_returns_consecutive_indices() {
    let mut sim = seeded_sim();
    assert_eq!(sim.balls.len(), 0);
    let first = sim.add_ball(BallParams::default()).unwrap();
    let second = sim.add_ball(BallParams::default()).unwrap();
    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(sim.balls.len(), 2);
}

#[test]
fn populate_spawns_requested_count() {
    let mut sim = seeded_sim();
    sim.populate(100).unwrap();
    assert_eq!(sim.balls.len(), 100);
}

#[test]
fn randomized_balls_spawn_inside_documented_ranges() {
    let mut sim = seeded_sim();
    sim.populate(100).unwrap();

    let bounds = sim.bounds;
    let v_max = bounds.min_dimension() / 4.0;
    for ball in &sim.balls {
        let r = ball.radius;
        assert!(r >= RADIUS_RANGE.0 && r <= RADIUS_RANGE.1, "radius {r}");

        assert!(ball.pos.x >= r && ball.pos.x <= bounds.width - r);
        assert!(ball.pos.y >= r && ball.pos.y <= bounds.height - r);
        assert!(ball.pos.z >= r && ball.pos.z <= bounds.depth - r);

        assert!(ball.vel.x.abs() <= v_max);
        assert!(ball.vel.y.abs() <= v_max);
        assert!(ball.vel.z.abs() <= v_max);

        // Default density is 10; mass follows the cross-sectional area.
        assert!((ball.mass - ball_mass(r, 10.0)).abs() < 1e-2);
        assert!(ball.color <= 0x00FF_FFFF);
    }
}

#[test]
fn explicit_params_are_respected() {
    let mut sim = seeded_sim();
    let idx = sim
        .add_ball(BallParams {
            color: Some(0x00AB_CDEF),
            radius: Some(50.0),
            pos: Some(Vec3::new(100.0, 100.0, 100.0)),
            vel: Some(Vec3::new(50.0, 0.0, 0.0)),
            density: Some(2.0),
        })
        .unwrap();

    let ball = sim.balls[idx];
    assert_eq!(ball.color, 0x00AB_CDEF);
    assert!((ball.radius - 50.0).abs() < f32::EPSILON);
    assert_eq!(ball.pos, Vec3::new(100.0, 100.0, 100.0));
    assert_eq!(ball.vel, Vec3::new(50.0, 0.0, 0.0));
    assert!((ball.mass - ball_mass(50.0, 2.0)).abs() < 1e-2);
}

#[test]
fn oversized_ball_is_rejected() {
    let mut sim = Simulation::new(Bounds::new(100.0, 100.0, 100.0), Some(1)).unwrap();
    let err = sim
        .add_ball(BallParams {
            radius: Some(60.0),
            ..BallParams::default()
        })
        .unwrap_err();
    assert!(matches!(err, PhysicsError::BoundsTooSmall { .. }));
}

#[test]
fn non_positive_params_are_rejected() {
    let mut sim = seeded_sim();
    for params in [
        BallParams {
            radius: Some(-1.0),
            ..BallParams::default()
        },
        BallParams {
            radius: Some(0.0),
            ..BallParams::default()
        },
        BallParams {
            density: Some(f32::NAN),
            ..BallParams::default()
        },
        BallParams {
            vel: Some(Vec3::new(f32::INFINITY, 0.0, 0.0)),
            ..BallParams::default()
        },
    ] {
        let err = sim.add_ball(params).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidParam(_)));
    }
    assert!(sim.balls.is_empty());
}

#[test]
fn degenerate_bounds_are_rejected() {
    assert!(matches!(
        Simulation::new(Bounds::new(0.0, 100.0, 100.0), None),
        Err(PhysicsError::InvalidParam("bounds"))
    ));
    assert!(matches!(
        Simulation::new(Bounds::new(100.0, -5.0, 100.0), None),
        Err(PhysicsError::InvalidParam("bounds"))
    ));
}

use glam::Vec3;
use physics::{resolve_collisions, Ball, BallParams, Bounds, Simulation};

fn ball(pos: Vec3, vel: Vec3, radius: f32, mass: f32) -> Ball {
    Ball {
        pos,
        vel,
        radius,
        mass,
        color: 0,
    }
}

/// Elastic equal-mass head-on collision: velocities swap.
#[test]
fn equal_mass_head_on_collision_swaps_velocities() {
    let mut sim = Simulation::new(Bounds::default(), Some(3)).unwrap();
    for (pos, vel) in [
        (Vec3::new(100.0, 100.0, 100.0), Vec3::new(50.0, 0.0, 0.0)),
        (Vec3::new(140.0, 100.0, 100.0), Vec3::new(-50.0, 0.0, 0.0)),
    ] {
        sim.add_ball(BallParams {
            radius: Some(50.0),
            pos: Some(pos),
            vel: Some(vel),
            ..BallParams::default()
        })
        .unwrap();
    }

    resolve_collisions(&mut sim.balls);

    let (a, b) = (sim.balls[0], sim.balls[1]);
    assert!((a.vel - Vec3::new(-50.0, 0.0, 0.0)).length() < 1e-3, "{:?}", a.vel);
    assert!((b.vel - Vec3::new(50.0, 0.0, 0.0)).length() < 1e-3, "{:?}", b.vel);

    // De-penetration must leave the pair at least touching.
    let distance = a.pos.distance(b.pos);
    assert!(distance >= a.radius + b.radius - 1e-3, "distance {distance}");
}

#[test]
fn impulse_conserves_momentum_for_unequal_masses() {
    let mut balls = vec![
        ball(Vec3::new(0.0, 0.0, 0.0), Vec3::new(30.0, 5.0, 0.0), 20.0, 400.0),
        ball(Vec3::new(30.0, 0.0, 0.0), Vec3::new(-10.0, 0.0, 2.0), 20.0, 100.0),
    ];
    let before = balls[0].vel * balls[0].mass + balls[1].vel * balls[1].mass;

    resolve_collisions(&mut balls);

    let after = balls[0].vel * balls[0].mass + balls[1].vel * balls[1].mass;
    assert!((after - before).length() < 1e-2, "{before:?} -> {after:?}");
    // The approach was head-on, so the impulse must actually have fired.
    assert!((balls[0].vel - Vec3::new(30.0, 5.0, 0.0)).length() > 1.0);
}

#[test]
fn separating_overlap_gets_position_fix_but_keeps_velocities() {
    let v0 = Vec3::new(-25.0, 0.0, 0.0);
    let v1 = Vec3::new(40.0, 0.0, 0.0);
    let mut balls = vec![
        ball(Vec3::new(0.0, 0.0, 0.0), v0, 20.0, 100.0),
        ball(Vec3::new(30.0, 0.0, 0.0), v1, 20.0, 100.0),
    ];

    resolve_collisions(&mut balls);

    assert_eq!(balls[0].vel, v0);
    assert_eq!(balls[1].vel, v1);
    let distance = balls[0].pos.distance(balls[1].pos);
    assert!(distance >= 40.0 - 1e-3, "distance {distance}");
}

#[test]
fn heavier_ball_moves_less_during_depenetration() {
    let mut balls = vec![
        ball(Vec3::new(0.0, 0.0, 0.0), Vec3::ZERO, 20.0, 900.0),
        ball(Vec3::new(30.0, 0.0, 0.0), Vec3::ZERO, 20.0, 100.0),
    ];

    resolve_collisions(&mut balls);

    let heavy_shift = balls[0].pos.distance(Vec3::ZERO);
    let light_shift = balls[1].pos.distance(Vec3::new(30.0, 0.0, 0.0));
    assert!(
        heavy_shift < light_shift,
        "heavy moved {heavy_shift}, light moved {light_shift}"
    );
}

#[test]
fn coincident_centers_leave_pair_untouched() {
    let pos = Vec3::new(500.0, 500.0, 500.0);
    let vel = Vec3::new(10.0, -3.0, 7.0);
    let mut balls = vec![
        ball(pos, vel, 30.0, 100.0),
        ball(pos, -vel, 30.0, 100.0),
    ];

    resolve_collisions(&mut balls);

    assert_eq!(balls[0].pos, pos);
    assert_eq!(balls[1].pos, pos);
    assert_eq!(balls[0].vel, vel);
    assert_eq!(balls[1].vel, -vel);
    for b in &balls {
        assert!(b.pos.is_finite() && b.vel.is_finite());
    }
}

#[test]
fn separated_pair_is_untouched() {
    let mut balls = vec![
        ball(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), 10.0, 100.0),
        ball(Vec3::new(100.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), 10.0, 100.0),
    ];
    let snapshot: Vec<Ball> = balls.clone();

    resolve_collisions(&mut balls);

    for (now, before) in balls.iter().zip(&snapshot) {
        assert_eq!(now.pos, before.pos);
        assert_eq!(now.vel, before.vel);
    }
}

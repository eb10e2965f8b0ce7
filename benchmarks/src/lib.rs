//! Scene setup shared by the benchmarks.

use glam::{Mat3, Vec3};
use rein_collide::{
    Collider, ConvexHull, ContactManifold, NarrowPhase, PhysicsConfig, PhysicsScene, RigidBody,
};

pub fn cube_collider(half: f32) -> anyhow::Result<Collider> {
    Ok(Collider::new(ConvexHull::cuboid(Vec3::splat(half))?))
}

pub fn sphere_collider(radius: f32) -> anyhow::Result<Collider> {
    Ok(Collider::new(ConvexHull::uv_sphere(radius, 12, 6)?))
}

/// Deterministic pseudo-random offsets in `[-1, 1)`, so runs are comparable.
fn jitter(i: usize, salt: u32) -> f32 {
    let mut x = (i as u32).wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    x ^= x >> 15;
    x = x.wrapping_mul(0x2C1B_3C6D);
    x ^= x >> 12;
    (x as f32 / u32::MAX as f32) * 2.0 - 1.0
}

/// `n` unit cubes in a loose grid at `spacing`, slightly rotated, above the ground.
pub fn setup_cube_world(n: usize, spacing: f32) -> anyhow::Result<(hecs::World, Vec<hecs::Entity>)> {
    let mut world = hecs::World::new();
    let side = (n as f32).cbrt().ceil() as usize;
    let collider = cube_collider(0.5)?;
    let mut entities = Vec::with_capacity(n);

    for i in 0..n {
        let cell = Vec3::new(
            (i % side) as f32,
            ((i / side) % side) as f32,
            (i / (side * side)) as f32,
        );
        let position = cell * spacing + Vec3::new(jitter(i, 1), jitter(i, 2), 2.0 + jitter(i, 3)) * 0.25;
        let body = RigidBody::new(1.0, collider.clone())
            .with_position(position + Vec3::Z)
            .with_orientation(Mat3::from_rotation_z(jitter(i, 4)));
        entities.push(world.spawn((body,)));
    }

    Ok((world, entities))
}

/// Scene of `n` falling cubes, packed tightly enough to collide.
pub fn setup_scene(n: usize, narrow_phase: NarrowPhase) -> anyhow::Result<(hecs::World, PhysicsScene)> {
    let (world, entities) = setup_cube_world(n, 1.1)?;
    let config = PhysicsConfig {
        narrow_phase,
        ..Default::default()
    };
    let mut physics = PhysicsScene::with_config(Vec3::new(1000.0, 1000.0, 1000.0), config);
    for entity in entities {
        physics.add_rigid_body(&world, entity)?;
    }
    Ok((world, physics))
}

/// A body pair at `distance` along x, with `b` rotated to exercise edge axes.
pub fn body_pair(a: Collider, b: Collider, distance: f32) -> (RigidBody, RigidBody) {
    let body_a = RigidBody::new(1.0, a);
    let body_b = RigidBody::new(1.0, b)
        .with_position(Vec3::new(distance, 0.1, 0.05))
        .with_orientation(Mat3::from_rotation_y(0.4) * Mat3::from_rotation_z(0.3));
    (body_a, body_b)
}

/// Manifolds from one detection pass over a packed scene of `n` cubes.
pub fn setup_contacts(n: usize) -> anyhow::Result<(hecs::World, Vec<ContactManifold>)> {
    let (world, physics) = setup_scene(n, NarrowPhase::SeparatingAxis)?;
    let manifolds = physics.detect_collisions(&world);
    Ok((world, manifolds))
}

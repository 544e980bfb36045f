use approx::assert_relative_eq;
use phys_contacts::collision::{Manifold, ManifoldPoint, ManifoldType, MAX_MANIFOLD_POINTS};
use phys_contacts::math::{approx_eq, Transform2, Vector2};
use phys_contacts::{Body, Contact, Fixture, ObjectStorage, Storage, WorldManifold};
use std::f32::consts::PI;

fn resolve_at_origin(manifold: &Manifold, radius_a: f32, radius_b: f32) -> WorldManifold {
    let identity = Transform2::identity();
    WorldManifold::new(manifold, &identity, radius_a, &identity, radius_b)
}

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(3.0, -4.0);

    assert_eq!(v1 + v2, Vector2::new(4.0, -2.0));
    assert_eq!(v2 - v1, Vector2::new(2.0, -6.0));
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, v1 * 2.0);
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));
    assert_eq!(v1.dot(&v2), 3.0 - 8.0);
    assert_eq!(v2.length(), 5.0);
    assert_eq!(v1.midpoint(&v2), Vector2::new(2.0, -1.0));

    let normalized = v2.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized, Vector2::new(0.6, -0.8));

    // Too short to normalize: returned untouched
    assert!(Vector2::zero().normalize().is_zero());
    assert_eq!(format!("{}", v1), "(1, 2)");
}

#[test]
fn test_vector2_nalgebra_interop() {
    let v = Vector2::new(0.25, -7.5);
    assert_eq!(Vector2::from_nalgebra(&v.to_nalgebra()), v);
    assert_eq!(Vector2::from_point(&v.to_point()), v);
    assert_eq!(Vector2::from([0.25, -7.5]), v);
}

#[test]
fn test_transform2_applies_rotation_then_translation() {
    let xf = Transform2::new(Vector2::new(10.0, 0.0), PI / 2.0);

    assert_relative_eq!(xf.rotate(Vector2::unit_x()), Vector2::new(0.0, 1.0), epsilon = 1.0e-6);
    assert_relative_eq!(
        xf.transform_point(Vector2::new(1.0, 0.0)),
        Vector2::new(10.0, 1.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn test_unrotated_transform_keeps_axes_exact() {
    let xf = Transform2::from_position(Vector2::new(3.0, 4.0));
    for axis in [
        Vector2::unit_x(),
        Vector2::unit_y(),
        -Vector2::unit_x(),
        -Vector2::unit_y(),
    ] {
        assert_eq!(xf.rotate(axis), axis);
    }
    let point = Vector2::new(1.5, 2.5);
    assert_eq!(Transform2::identity().transform_point(point), point);
}

#[test]
fn test_manifold_holds_at_most_two_points() {
    let mut manifold = Manifold::face_a(Vector2::unit_y(), Vector2::zero());
    assert!(manifold.is_empty());

    assert!(manifold.add_point(ManifoldPoint::new(Vector2::new(-1.0, 0.0))));
    assert!(manifold.add_point(ManifoldPoint::new(Vector2::new(1.0, 0.0))));
    assert!(!manifold.add_point(ManifoldPoint::new(Vector2::new(2.0, 0.0))));
    assert_eq!(manifold.point_count(), MAX_MANIFOLD_POINTS);
}

#[test]
fn test_world_manifold_for_circles() {
    // Two unit circles, centres 1.5 apart: 0.5 overlap
    let manifold = Manifold::circles(Vector2::zero(), Vector2::zero());
    assert_eq!(manifold.kind, ManifoldType::Circles);

    let world = WorldManifold::new(
        &manifold,
        &Transform2::identity(),
        1.0,
        &Transform2::from_position(Vector2::new(0.0, 1.5)),
        1.0,
    );

    assert_eq!(world.normal, Vector2::new(0.0, 1.0));
    assert_eq!(world.points().len(), 1);
    assert_relative_eq!(world.points()[0], Vector2::new(0.0, 0.75));
    assert_relative_eq!(world.separations()[0], -0.5);
}

#[test]
fn test_world_manifold_for_concentric_circles_falls_back_to_x() {
    let manifold = Manifold::circles(Vector2::zero(), Vector2::zero());
    let world = resolve_at_origin(&manifold, 1.0, 1.0);
    assert_eq!(world.normal, Vector2::unit_x());
}

#[test]
fn test_world_manifold_for_face_a() {
    // Ground top face at y = 0, B's corners sunk 0.1 below it
    let manifold = Manifold::face_a(Vector2::unit_y(), Vector2::zero())
        .with_point(Vector2::new(-0.5, -0.1))
        .with_point(Vector2::new(0.5, -0.1));

    let world = resolve_at_origin(&manifold, 0.0, 0.0);

    assert_eq!(world.normal, Vector2::new(0.0, 1.0));
    assert_eq!(world.point_count, 2);
    assert_relative_eq!(world.points()[0], Vector2::new(-0.5, -0.05));
    assert_relative_eq!(world.points()[1], Vector2::new(0.5, -0.05));
    for separation in world.separations() {
        assert!(approx_eq(*separation, -0.1));
    }
}

#[test]
fn test_world_manifold_for_face_b_points_from_a_to_b() {
    // Reference face on B (its top), A resting on it from above
    let manifold = Manifold::face_b(Vector2::unit_y(), Vector2::zero())
        .with_point(Vector2::new(0.0, -0.1));

    let world = resolve_at_origin(&manifold, 0.0, 0.0);

    assert_eq!(world.normal, Vector2::new(0.0, -1.0));
    assert_relative_eq!(world.points()[0], Vector2::new(0.0, -0.05));
    assert_relative_eq!(world.separations()[0], -0.1);
}

#[test]
fn test_empty_manifold_has_zero_normal() {
    let manifold = Manifold::face_a(Vector2::unit_y(), Vector2::zero());
    let world = resolve_at_origin(&manifold, 0.0, 0.0);

    assert!(world.normal.is_zero());
    assert!(world.points().is_empty());
}

#[test]
fn test_contact_uses_body_transforms() {
    let mut objects: ObjectStorage<phys_contacts::ContactCallbacks> = ObjectStorage::new();
    let a = objects.add(phys_contacts::ContactCallbacks::new());
    let b = objects.add(phys_contacts::ContactCallbacks::new());

    // A's local up-face, with A turned upside down
    let upside_down = Transform2::new(Vector2::zero(), PI);
    let contact = Contact::new(
        Fixture::new(Body::owned_by(a, upside_down)),
        Fixture::new(Body::owned_by(b, Transform2::identity())).with_radius(0.01),
        Manifold::face_a(Vector2::unit_y(), Vector2::zero()).with_point(Vector2::zero()),
    );

    assert_relative_eq!(contact.world_manifold().normal, Vector2::new(0.0, -1.0), epsilon = 1.0e-6);
    assert_eq!(contact.fixture_b().radius, 0.01);
}

use crate::math::{Transform2, Vector2, EPSILON};

/// Maximum number of points a 2D contact manifold can hold
pub const MAX_MANIFOLD_POINTS: usize = 2;

/// How the manifold's local data must be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifoldType {
    /// Circle against circle. `local_point` is the centre of A, the single
    /// manifold point holds the centre of B.
    Circles,

    /// Reference face on A. `local_normal`/`local_point` live in A's frame,
    /// manifold points are clip points in B's frame.
    FaceA,

    /// Reference face on B. Mirror image of `FaceA`.
    FaceB,
}

/// A single contact point as the engine stores it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManifoldPoint {
    /// Point in the local frame of the incident body
    pub local_point: Vector2,

    /// Accumulated normal impulse from the last solve
    pub normal_impulse: f32,

    /// Accumulated tangent impulse from the last solve
    pub tangent_impulse: f32,

    /// Feature key used by the engine to match points across steps
    pub id: u32,
}

impl ManifoldPoint {
    pub fn new(local_point: Vector2) -> Self {
        Self {
            local_point,
            normal_impulse: 0.0,
            tangent_impulse: 0.0,
            id: 0,
        }
    }
}

/// The engine's local-space description of a contact
#[derive(Debug, Clone, PartialEq)]
pub struct Manifold {
    pub kind: ManifoldType,

    /// Reference face normal (unused for `Circles`)
    pub local_normal: Vector2,

    /// Reference point; meaning depends on `kind`
    pub local_point: Vector2,

    // Never longer than MAX_MANIFOLD_POINTS; only `add_point` grows it
    points: Vec<ManifoldPoint>,
}

impl Manifold {
    /// Creates a manifold without contact points
    pub fn new(kind: ManifoldType, local_normal: Vector2, local_point: Vector2) -> Self {
        Self {
            kind,
            local_normal,
            local_point,
            points: Vec::with_capacity(MAX_MANIFOLD_POINTS),
        }
    }

    /// Circle-circle manifold from the two local circle centres
    pub fn circles(center_a: Vector2, center_b: Vector2) -> Self {
        let mut manifold = Self::new(ManifoldType::Circles, Vector2::zero(), center_a);
        manifold.add_point(ManifoldPoint::new(center_b));
        manifold
    }

    /// Manifold whose reference face belongs to fixture A
    pub fn face_a(local_normal: Vector2, local_point: Vector2) -> Self {
        Self::new(ManifoldType::FaceA, local_normal, local_point)
    }

    /// Manifold whose reference face belongs to fixture B
    pub fn face_b(local_normal: Vector2, local_point: Vector2) -> Self {
        Self::new(ManifoldType::FaceB, local_normal, local_point)
    }

    /// Adds a point, returning false when the manifold is already full
    pub fn add_point(&mut self, point: ManifoldPoint) -> bool {
        if self.points.len() >= MAX_MANIFOLD_POINTS {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Builder form of [`Manifold::add_point`]; extra points are ignored
    pub fn with_point(mut self, local_point: Vector2) -> Self {
        self.add_point(ManifoldPoint::new(local_point));
        self
    }

    /// Up to [`MAX_MANIFOLD_POINTS`] contact points
    pub fn points(&self) -> &[ManifoldPoint] {
        &self.points
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// An empty manifold means the shapes are no longer touching
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A manifold resolved into world space.
///
/// `normal` points from A towards B. It is zero when the manifold holds no
/// points, which is typical for end-of-contact events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldManifold {
    pub normal: Vector2,
    pub points: [Vector2; MAX_MANIFOLD_POINTS],
    pub separations: [f32; MAX_MANIFOLD_POINTS],
    pub point_count: usize,
}

impl WorldManifold {
    /// Resolves `manifold` using both bodies' transforms and shape radii
    pub fn new(
        manifold: &Manifold,
        xf_a: &Transform2,
        radius_a: f32,
        xf_b: &Transform2,
        radius_b: f32,
    ) -> Self {
        let mut world = Self {
            normal: Vector2::zero(),
            points: [Vector2::zero(); MAX_MANIFOLD_POINTS],
            separations: [0.0; MAX_MANIFOLD_POINTS],
            point_count: manifold.point_count(),
        };

        if manifold.is_empty() {
            return world;
        }

        match manifold.kind {
            ManifoldType::Circles => {
                let mut normal = Vector2::unit_x();
                let point_a = xf_a.transform_point(manifold.local_point);
                let point_b = xf_b.transform_point(manifold.points[0].local_point);
                if point_a.distance_squared(&point_b) > EPSILON * EPSILON {
                    normal = (point_b - point_a).normalize();
                }

                let c_a = point_a + radius_a * normal;
                let c_b = point_b - radius_b * normal;
                world.normal = normal;
                world.points[0] = c_a.midpoint(&c_b);
                world.separations[0] = (c_b - c_a).dot(&normal);
            }
            ManifoldType::FaceA => {
                let normal = xf_a.rotate(manifold.local_normal);
                let plane_point = xf_a.transform_point(manifold.local_point);

                for (i, point) in manifold.points.iter().enumerate() {
                    let clip_point = xf_b.transform_point(point.local_point);
                    let c_a = clip_point
                        + (radius_a - (clip_point - plane_point).dot(&normal)) * normal;
                    let c_b = clip_point - radius_b * normal;
                    world.points[i] = c_a.midpoint(&c_b);
                    world.separations[i] = (c_b - c_a).dot(&normal);
                }
                world.normal = normal;
            }
            ManifoldType::FaceB => {
                let normal = xf_b.rotate(manifold.local_normal);
                let plane_point = xf_b.transform_point(manifold.local_point);

                for (i, point) in manifold.points.iter().enumerate() {
                    let clip_point = xf_a.transform_point(point.local_point);
                    let c_b = clip_point
                        + (radius_b - (clip_point - plane_point).dot(&normal)) * normal;
                    let c_a = clip_point - radius_a * normal;
                    world.points[i] = c_a.midpoint(&c_b);
                    world.separations[i] = (c_a - c_b).dot(&normal);
                }
                // Keep the A-to-B convention
                world.normal = -normal;
            }
        }

        world
    }

    /// The populated contact points
    pub fn points(&self) -> &[Vector2] {
        &self.points[..self.point_count]
    }

    /// Separation per populated point; negative means overlap
    pub fn separations(&self) -> &[f32] {
        &self.separations[..self.point_count]
    }
}

/// Impulses applied by the solver, handed to post-solve hooks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContactImpulse {
    pub normal_impulses: [f32; MAX_MANIFOLD_POINTS],
    pub tangent_impulses: [f32; MAX_MANIFOLD_POINTS],
    pub count: usize,
}

use crate::collision::contact_manifold::{Manifold, WorldManifold};
use crate::core::ObjectId;
use crate::math::Transform2;
use std::fmt;

/// Which fixture of a contact is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixtureSide {
    A,
    B,
}

impl fmt::Display for FixtureSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureSide::A => write!(f, "A"),
            FixtureSide::B => write!(f, "B"),
        }
    }
}

/// The parts of an engine body this crate reads
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    /// World placement at the time of the contact
    pub transform: Transform2,

    /// User-data slot holding the owning game object
    pub user_data: Option<ObjectId>,
}

impl Body {
    pub fn new(transform: Transform2, user_data: Option<ObjectId>) -> Self {
        Self { transform, user_data }
    }

    /// Creates a body owned by `object`
    pub fn owned_by(object: ObjectId, transform: Transform2) -> Self {
        Self::new(transform, Some(object))
    }
}

/// A collision shape attached to a body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fixture {
    pub body: Body,

    /// Shape skin radius (circle radius, or polygon skin)
    pub radius: f32,

    /// Sensors report overlaps but never get a physical response
    pub is_sensor: bool,
}

impl Fixture {
    /// Creates a solid fixture with no skin radius
    pub fn new(body: Body) -> Self {
        Self {
            body,
            radius: 0.0,
            is_sensor: false,
        }
    }

    /// Creates a sensor fixture with no skin radius
    pub fn sensor(body: Body) -> Self {
        Self {
            is_sensor: true,
            ..Self::new(body)
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// A touching (or formerly touching) pair of fixtures, as the engine hands
/// it to contact hooks
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    fixture_a: Fixture,
    fixture_b: Fixture,
    manifold: Manifold,
}

impl Contact {
    pub fn new(fixture_a: Fixture, fixture_b: Fixture, manifold: Manifold) -> Self {
        Self {
            fixture_a,
            fixture_b,
            manifold,
        }
    }

    pub fn fixture_a(&self) -> &Fixture {
        &self.fixture_a
    }

    pub fn fixture_b(&self) -> &Fixture {
        &self.fixture_b
    }

    pub fn fixture(&self, side: FixtureSide) -> &Fixture {
        match side {
            FixtureSide::A => &self.fixture_a,
            FixtureSide::B => &self.fixture_b,
        }
    }

    pub fn manifold(&self) -> &Manifold {
        &self.manifold
    }

    /// Computes the world-space normal (A towards B), points and separations
    pub fn world_manifold(&self) -> WorldManifold {
        WorldManifold::new(
            &self.manifold,
            &self.fixture_a.body.transform,
            self.fixture_a.radius,
            &self.fixture_b.body.transform,
            self.fixture_b.radius,
        )
    }
}

use crate::collision::contact_manifold::Manifold;
use crate::collision::direction::Direction;
use crate::core::ObjectId;
use crate::math::Vector2;
use std::rc::Rc;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Which engine hook produced a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum ContactPhase {
    /// Fixtures started touching
    Begin,

    /// Fixtures stopped touching
    End,

    /// Before impulse resolution. Never queued or dispatched.
    PreSolve,

    /// After impulse resolution. Never queued or dispatched.
    PostSolve,
}

impl ContactPhase {
    /// Whether records of this phase are delivered to game objects
    pub fn is_routable(self) -> bool {
        matches!(self, ContactPhase::Begin | ContactPhase::End)
    }
}

/// One side of a captured contact.
///
/// Built in one step and immutable afterwards; the direction is derived from
/// the normal at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRecord {
    subject: ObjectId,
    manifold: Rc<Manifold>,
    phase: ContactPhase,
    normal: Vector2,
    direction: Direction,
    is_sensor: bool,
}

impl ContactRecord {
    pub fn new(
        subject: ObjectId,
        manifold: Rc<Manifold>,
        phase: ContactPhase,
        normal: Vector2,
        is_sensor: bool,
    ) -> Self {
        Self {
            subject,
            manifold,
            phase,
            normal,
            direction: Direction::from_normal(normal),
            is_sensor,
        }
    }

    /// The game object on this side
    pub fn subject(&self) -> ObjectId {
        self.subject
    }

    /// The engine manifold, shared with the partner record
    pub fn manifold(&self) -> &Manifold {
        &self.manifold
    }

    /// Whether both records of a pair point at the same manifold allocation
    pub fn shares_manifold_with(&self, other: &ContactRecord) -> bool {
        Rc::ptr_eq(&self.manifold, &other.manifold)
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Contact normal as experienced by this side
    pub fn normal(&self) -> Vector2 {
        self.normal
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether this side's fixture is a sensor
    pub fn is_sensor(&self) -> bool {
        self.is_sensor
    }
}

use crate::collision::contact::{Contact, FixtureSide};
use crate::collision::contact_record::{ContactPhase, ContactRecord};
use crate::core::ObjectId;
use crate::error::ContactError;
use crate::Result;
use std::rc::Rc;

/// Both sides of one engine contact event, created and dispatched together
#[derive(Debug, Clone, PartialEq)]
pub struct ContactPair {
    a: ContactRecord,
    b: ContactRecord,
}

impl ContactPair {
    /// Snapshots `contact` into a pair of records.
    ///
    /// The world normal is computed once from A's side and negated for B, so
    /// the two normals are exact negations and the two directions mirror each
    /// other. Fails if either body has no owning object.
    pub fn capture(contact: &Contact, phase: ContactPhase) -> Result<Self> {
        let subject_a = owner(contact, FixtureSide::A)?;
        let subject_b = owner(contact, FixtureSide::B)?;

        let manifold = Rc::new(contact.manifold().clone());
        let normal = contact.world_manifold().normal;

        let a = ContactRecord::new(
            subject_a,
            Rc::clone(&manifold),
            phase,
            normal,
            contact.fixture_a().is_sensor,
        );
        let b = ContactRecord::new(
            subject_b,
            manifold,
            phase,
            -normal,
            contact.fixture_b().is_sensor,
        );

        Ok(Self { a, b })
    }

    pub fn a(&self) -> &ContactRecord {
        &self.a
    }

    pub fn b(&self) -> &ContactRecord {
        &self.b
    }

    /// Phase shared by both records
    pub fn phase(&self) -> ContactPhase {
        self.a.phase()
    }

    /// Checks if this pair involves the specified object
    pub fn contains(&self, object: ObjectId) -> bool {
        self.a.subject() == object || self.b.subject() == object
    }

    /// Returns the other object in the pair
    pub fn other(&self, object: ObjectId) -> Option<ObjectId> {
        if self.a.subject() == object {
            Some(self.b.subject())
        } else if self.b.subject() == object {
            Some(self.a.subject())
        } else {
            None
        }
    }

    /// The record describing the contact from `object`'s side
    pub fn record_for(&self, object: ObjectId) -> Option<&ContactRecord> {
        if self.a.subject() == object {
            Some(&self.a)
        } else if self.b.subject() == object {
            Some(&self.b)
        } else {
            None
        }
    }
}

fn owner(contact: &Contact, side: FixtureSide) -> Result<ObjectId> {
    contact
        .fixture(side)
        .body
        .user_data
        .ok_or(ContactError::MissingSubject(side))
}

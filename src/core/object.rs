use crate::collision::{ContactRecord, Direction};
use crate::core::{ObjectId, ObjectStorage, Storage};
use crate::math::Vector2;

/// What a game object receives when one of its contacts is dispatched.
///
/// `own` is the record for the receiving side; its normal and direction
/// describe the collision from the receiver's point of view. `other` is the
/// partner's record, kept as evidence of what was hit.
#[derive(Debug, Clone, Copy)]
pub struct ContactReport<'a> {
    pub own: &'a ContactRecord,
    pub other: &'a ContactRecord,
}

impl<'a> ContactReport<'a> {
    /// The object on the other side of the contact
    pub fn other_object(&self) -> ObjectId {
        self.other.subject()
    }

    /// Which of the receiver's faces were touched
    pub fn direction(&self) -> Direction {
        self.own.direction()
    }

    /// Contact normal as seen by the receiver
    pub fn normal(&self) -> Vector2 {
        self.own.normal()
    }
}

/// Capability surface of an object that owns a physics body.
///
/// All callbacks default to doing nothing. They run during
/// [`ContactAggregator::drain_and_notify`](crate::ContactAggregator::drain_and_notify),
/// never inside a physics step, so they may freely mutate game state.
pub trait ContactHandler {
    /// Whether this object currently takes part in contact notifications
    fn physics_enabled(&self) -> bool;

    /// A solid contact began
    fn on_contact(&mut self, _report: &ContactReport<'_>) {}

    /// A solid contact ended
    fn on_separate(&mut self, _report: &ContactReport<'_>) {}

    /// This object's sensor started overlapping something
    fn on_sensor_contact(&mut self, _report: &ContactReport<'_>) {}

    /// This object's sensor stopped overlapping something
    fn on_sensor_separate(&mut self, _report: &ContactReport<'_>) {}
}

impl<H: ContactHandler + ?Sized> ContactHandler for Box<H> {
    fn physics_enabled(&self) -> bool {
        (**self).physics_enabled()
    }

    fn on_contact(&mut self, report: &ContactReport<'_>) {
        (**self).on_contact(report);
    }

    fn on_separate(&mut self, report: &ContactReport<'_>) {
        (**self).on_separate(report);
    }

    fn on_sensor_contact(&mut self, report: &ContactReport<'_>) {
        (**self).on_sensor_contact(report);
    }

    fn on_sensor_separate(&mut self, report: &ContactReport<'_>) {
        (**self).on_sensor_separate(report);
    }
}

/// Callback function type for contact notifications
pub type ContactCallback = Box<dyn FnMut(&ContactReport<'_>)>;

/// A [`ContactHandler`] assembled from optional closures, one per slot
pub struct ContactCallbacks {
    physics_enabled: bool,
    on_contact: Option<ContactCallback>,
    on_separate: Option<ContactCallback>,
    on_sensor_contact: Option<ContactCallback>,
    on_sensor_separate: Option<ContactCallback>,
}

impl ContactCallbacks {
    /// Creates an enabled object with every slot empty
    pub fn new() -> Self {
        Self {
            physics_enabled: true,
            on_contact: None,
            on_separate: None,
            on_sensor_contact: None,
            on_sensor_separate: None,
        }
    }

    pub fn with_contact<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ContactReport<'_>) + 'static,
    {
        self.on_contact = Some(Box::new(callback));
        self
    }

    pub fn with_separate<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ContactReport<'_>) + 'static,
    {
        self.on_separate = Some(Box::new(callback));
        self
    }

    pub fn with_sensor_contact<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ContactReport<'_>) + 'static,
    {
        self.on_sensor_contact = Some(Box::new(callback));
        self
    }

    pub fn with_sensor_separate<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&ContactReport<'_>) + 'static,
    {
        self.on_sensor_separate = Some(Box::new(callback));
        self
    }

    pub fn set_physics_enabled(&mut self, enabled: bool) {
        self.physics_enabled = enabled;
    }
}

impl Default for ContactCallbacks {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactHandler for ContactCallbacks {
    fn physics_enabled(&self) -> bool {
        self.physics_enabled
    }

    fn on_contact(&mut self, report: &ContactReport<'_>) {
        if let Some(callback) = self.on_contact.as_mut() {
            callback(report);
        }
    }

    fn on_separate(&mut self, report: &ContactReport<'_>) {
        if let Some(callback) = self.on_separate.as_mut() {
            callback(report);
        }
    }

    fn on_sensor_contact(&mut self, report: &ContactReport<'_>) {
        if let Some(callback) = self.on_sensor_contact.as_mut() {
            callback(report);
        }
    }

    fn on_sensor_separate(&mut self, report: &ContactReport<'_>) {
        if let Some(callback) = self.on_sensor_separate.as_mut() {
            callback(report);
        }
    }
}

/// Lookup from object identity to the object's contact handler
pub trait ObjectRegistry {
    /// Whether the object exists and has physics enabled.
    /// Unknown objects count as disabled.
    fn is_physics_enabled(&self, id: ObjectId) -> bool;

    /// Mutable access to the object's handler
    fn handler_mut(&mut self, id: ObjectId) -> Option<&mut dyn ContactHandler>;
}

impl<T: ContactHandler> ObjectRegistry for ObjectStorage<T> {
    fn is_physics_enabled(&self, id: ObjectId) -> bool {
        self.get(id).map_or(false, |object| object.physics_enabled())
    }

    fn handler_mut(&mut self, id: ObjectId) -> Option<&mut dyn ContactHandler> {
        self.get_mut(id).map(|object| object as &mut dyn ContactHandler)
    }
}

use crate::collision::contact::Contact;
use crate::collision::contact_manifold::{ContactImpulse, Manifold};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use tracing::debug;

/// Receiver for the engine's contact hooks.
///
/// Hooks run synchronously inside the physics step: implementations must not
/// touch game state from here.
pub trait ContactListener {
    /// Two fixtures started touching. Returning false disables the contact
    /// for this step.
    fn begin_contact(&mut self, contact: &Contact) -> bool;

    /// Two fixtures stopped touching
    fn end_contact(&mut self, contact: &Contact);

    /// Called before the solver resolves the contact
    fn pre_solve(&mut self, contact: &Contact, old_manifold: &Manifold);

    /// Called after the solver resolved the contact
    fn post_solve(&mut self, contact: &Contact, impulse: &ContactImpulse);
}

/// Shared handle under which a listener is registered
pub type SharedListener = Rc<RefCell<dyn ContactListener>>;

/// Identifier of a registration on a [`ContactManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// The engine's contact hook registry.
///
/// Holds listeners weakly; a listener whose owner was dropped is skipped and
/// pruned on the next registration change.
#[derive(Default)]
pub struct ContactManager {
    listeners: RefCell<Vec<(ListenerId, Weak<RefCell<dyn ContactListener>>)>>,
    next_id: Cell<u32>,
}

impl ContactManager {
    /// Creates a manager with no listeners
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Registers `listener` for all four hooks.
    ///
    /// The registration lives as long as the returned guard.
    pub fn subscribe(self: &Rc<Self>, listener: &SharedListener) -> Subscription {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|(_, weak)| weak.strong_count() > 0);
        listeners.push((id, Rc::downgrade(listener)));
        debug!(listener = id.0, total = listeners.len(), "contact listener subscribed");

        Subscription {
            manager: Rc::downgrade(self),
            id,
        }
    }

    fn unsubscribe(&self, id: ListenerId) {
        let mut listeners = self.listeners.borrow_mut();
        listeners.retain(|(listener_id, weak)| *listener_id != id && weak.strong_count() > 0);
        debug!(listener = id.0, total = listeners.len(), "contact listener unsubscribed");
    }

    /// Number of live listeners
    pub fn listener_count(&self) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, weak)| weak.strong_count() > 0)
            .count()
    }

    /// Fires the begin hook. The contact stays enabled only if every
    /// listener agrees.
    pub fn begin_contact(&self, contact: &Contact) -> bool {
        self.live_listeners().iter().fold(true, |enabled, listener| {
            listener.borrow_mut().begin_contact(contact) && enabled
        })
    }

    pub fn end_contact(&self, contact: &Contact) {
        for listener in self.live_listeners() {
            listener.borrow_mut().end_contact(contact);
        }
    }

    pub fn pre_solve(&self, contact: &Contact, old_manifold: &Manifold) {
        for listener in self.live_listeners() {
            listener.borrow_mut().pre_solve(contact, old_manifold);
        }
    }

    pub fn post_solve(&self, contact: &Contact, impulse: &ContactImpulse) {
        for listener in self.live_listeners() {
            listener.borrow_mut().post_solve(contact, impulse);
        }
    }

    // Snapshot so listeners may (un)subscribe while a hook is running.
    fn live_listeners(&self) -> Vec<SharedListener> {
        self.listeners
            .borrow()
            .iter()
            .filter_map(|(_, weak)| weak.upgrade())
            .collect()
    }
}

/// Guard for a listener registration; unsubscribes when dropped
#[derive(Debug)]
pub struct Subscription {
    manager: Weak<ContactManager>,
    id: ListenerId,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the manager this subscription belongs to still exists
    pub fn is_attached(&self) -> bool {
        self.manager.strong_count() > 0
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(manager) = self.manager.upgrade() {
            manager.unsubscribe(self.id);
        }
    }
}

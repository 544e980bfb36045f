use crate::collision::{
    Contact, ContactImpulse, ContactListener, ContactManager, ContactPair, ContactPhase, Manifold,
    SharedListener, Subscription,
};
use crate::core::{ContactConfig, ContactQueue, ObjectId, ObjectRegistry};
use crate::dispatch::dispatcher::{notify_objects, DispatchReport};
use crate::error::ContactError;
use crate::Result;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error, warn};

/// The listener half of an aggregator: turns engine hooks into queued pairs.
///
/// Begin and end hooks capture synchronously (normal and direction included);
/// only the notification is deferred. Pre-solve and post-solve are inert.
#[derive(Debug)]
pub struct ContactRecorder {
    queue: ContactQueue,
    config: ContactConfig,
    draining: bool,
}

impl ContactRecorder {
    pub fn new(config: ContactConfig) -> Self {
        Self {
            queue: ContactQueue::with_capacity(config.initial_capacity),
            config,
            draining: false,
        }
    }

    /// Pairs captured since the last drain
    pub fn queue(&self) -> &ContactQueue {
        &self.queue
    }

    /// Captures `contact` and appends it to the queue
    pub fn record(&mut self, contact: &Contact, phase: ContactPhase) -> Result<()> {
        if self.draining {
            return Err(ContactError::ReentrantStep);
        }

        let pair = ContactPair::capture(contact, phase)?;
        debug!(
            ?phase,
            a = %pair.a().subject(),
            b = %pair.b().subject(),
            normal = %pair.a().normal(),
            direction = ?pair.a().direction(),
            "contact captured"
        );
        self.queue.push(pair)?;

        if self.queue.len() > self.config.backlog_warning {
            warn!(
                pending = self.queue.len(),
                limit = self.config.backlog_warning,
                "contact buffer keeps growing; is it drained every frame?"
            );
        }
        Ok(())
    }

    // Hooks cannot return errors, and a contact without an owner means the
    // engine was wired up wrong.
    fn record_or_abort(&mut self, contact: &Contact, phase: ContactPhase) {
        if let Err(err) = self.record(contact, phase) {
            error!(%err, ?phase, "contact capture failed");
            panic!("contact capture failed: {err}");
        }
    }
}

impl ContactListener for ContactRecorder {
    fn begin_contact(&mut self, contact: &Contact) -> bool {
        self.record_or_abort(contact, ContactPhase::Begin);
        true
    }

    fn end_contact(&mut self, contact: &Contact) {
        self.record_or_abort(contact, ContactPhase::End);
    }

    fn pre_solve(&mut self, _contact: &Contact, _old_manifold: &Manifold) {}

    fn post_solve(&mut self, _contact: &Contact, _impulse: &ContactImpulse) {}
}

/// Collects contacts during physics steps and replays them afterwards.
///
/// Construct it with the engine's [`ContactManager`]; it subscribes on
/// creation and unsubscribes when dropped. Call
/// [`drain_and_notify`](Self::drain_and_notify) once per frame, after the
/// step and before the next one.
///
/// # Panics
///
/// The engine hooks panic if a contact's body has no owning object, or if the
/// engine is stepped from inside a notification callback.
pub struct ContactAggregator {
    recorder: Rc<RefCell<ContactRecorder>>,
    subscription: Subscription,
}

impl ContactAggregator {
    /// Creates an aggregator with the default configuration
    pub fn new(manager: &Rc<ContactManager>) -> Self {
        Self::subscribe(manager, ContactConfig::default())
    }

    /// Creates an aggregator with a custom configuration
    pub fn with_config(manager: &Rc<ContactManager>, config: ContactConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::subscribe(manager, config))
    }

    fn subscribe(manager: &Rc<ContactManager>, config: ContactConfig) -> Self {
        let recorder = Rc::new(RefCell::new(ContactRecorder::new(config)));
        let listener: SharedListener = recorder.clone();
        let subscription = manager.subscribe(&listener);
        Self {
            recorder,
            subscription,
        }
    }

    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }

    /// Number of pairs waiting for the next drain
    pub fn pending_len(&self) -> usize {
        self.recorder.borrow().queue().len()
    }

    pub fn has_pending(&self) -> bool {
        !self.recorder.borrow().queue().is_empty()
    }

    /// Copies of the waiting pairs, in arrival order
    pub fn pending(&self) -> Vec<ContactPair> {
        self.recorder.borrow().queue().iter().cloned().collect()
    }

    /// Copies of the waiting pairs captured by the given hook
    pub fn pending_of_phase(&self, phase: ContactPhase) -> Vec<ContactPair> {
        self.recorder
            .borrow()
            .queue()
            .pairs_of_phase(phase)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Copies of the waiting pairs that involve `object`
    pub fn pending_for(&self, object: ObjectId) -> Vec<ContactPair> {
        self.recorder
            .borrow()
            .queue()
            .pairs_for_object(object)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Delivers every buffered pair in arrival order, then leaves the buffer
    /// empty. Pairs whose delivery was suppressed are consumed all the same.
    pub fn drain_and_notify<R>(&self, objects: &mut R) -> DispatchReport
    where
        R: ObjectRegistry + ?Sized,
    {
        let _guard = DrainGuard::enter(&self.recorder);
        let pairs = self.recorder.borrow_mut().queue.take_all();
        let report = notify_objects(pairs, objects);

        if report.pairs > 0 {
            debug!(
                pairs = report.pairs,
                delivered = report.delivered,
                suppressed = report.suppressed,
                "contacts dispatched"
            );
        }
        report
    }
}

impl ContactListener for ContactAggregator {
    fn begin_contact(&mut self, contact: &Contact) -> bool {
        self.recorder.borrow_mut().begin_contact(contact)
    }

    fn end_contact(&mut self, contact: &Contact) {
        self.recorder.borrow_mut().end_contact(contact);
    }

    fn pre_solve(&mut self, contact: &Contact, old_manifold: &Manifold) {
        self.recorder.borrow_mut().pre_solve(contact, old_manifold);
    }

    fn post_solve(&mut self, contact: &Contact, impulse: &ContactImpulse) {
        self.recorder.borrow_mut().post_solve(contact, impulse);
    }
}

// Marks the recorder as draining for the lifetime of the guard, so captures
// attempted from inside callbacks are rejected. Nested drains restore the
// outer state on exit.
struct DrainGuard<'a> {
    recorder: &'a RefCell<ContactRecorder>,
    was_draining: bool,
}

impl<'a> DrainGuard<'a> {
    fn enter(recorder: &'a RefCell<ContactRecorder>) -> Self {
        let was_draining = std::mem::replace(&mut recorder.borrow_mut().draining, true);
        Self {
            recorder,
            was_draining,
        }
    }
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        if let Ok(mut recorder) = self.recorder.try_borrow_mut() {
            recorder.draining = self.was_draining;
        }
    }
}

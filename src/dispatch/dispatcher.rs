use crate::collision::{ContactPair, ContactPhase, ContactRecord};
use crate::core::{ContactHandler, ContactReport, ObjectRegistry};
use tracing::trace;

/// The four callback slots a contact can be routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallbackKind {
    /// [`ContactHandler::on_contact`]
    Contact,

    /// [`ContactHandler::on_separate`]
    Separate,

    /// [`ContactHandler::on_sensor_contact`]
    SensorContact,

    /// [`ContactHandler::on_sensor_separate`]
    SensorSeparate,
}

impl CallbackKind {
    /// Picks the slot for a record's phase and sensor flag.
    /// Returns `None` for phases that are never delivered.
    pub fn select(phase: ContactPhase, is_sensor: bool) -> Option<Self> {
        match (phase, is_sensor) {
            (ContactPhase::Begin, true) => Some(Self::SensorContact),
            (ContactPhase::Begin, false) => Some(Self::Contact),
            (ContactPhase::End, true) => Some(Self::SensorSeparate),
            (ContactPhase::End, false) => Some(Self::Separate),
            (ContactPhase::PreSolve | ContactPhase::PostSolve, _) => None,
        }
    }

    fn invoke(self, handler: &mut dyn ContactHandler, report: &ContactReport<'_>) {
        match self {
            Self::Contact => handler.on_contact(report),
            Self::Separate => handler.on_separate(report),
            Self::SensorContact => handler.on_sensor_contact(report),
            Self::SensorSeparate => handler.on_sensor_separate(report),
        }
    }
}

/// Outcome of one drain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchReport {
    /// Pairs consumed from the buffer
    pub pairs: usize,

    /// Callbacks actually invoked
    pub delivered: usize,

    /// Per-side notifications skipped because a participant was disabled
    /// or no longer registered, or the pair's phase has no callback
    pub suppressed: usize,
}

/// Delivers `pairs` to their objects in iteration order.
///
/// Each pair is consumed exactly once: side A is notified, then side B. A
/// side is only notified while both participants have physics enabled, and
/// that check is repeated for B after A's callback has run.
pub fn notify_objects<R, I>(pairs: I, objects: &mut R) -> DispatchReport
where
    R: ObjectRegistry + ?Sized,
    I: IntoIterator<Item = ContactPair>,
{
    let mut report = DispatchReport::default();

    for pair in pairs {
        report.pairs += 1;
        deliver(pair.a(), pair.b(), objects, &mut report);
        deliver(pair.b(), pair.a(), objects, &mut report);
    }

    report
}

fn deliver<R>(
    own: &ContactRecord,
    other: &ContactRecord,
    objects: &mut R,
    report: &mut DispatchReport,
) where
    R: ObjectRegistry + ?Sized,
{
    let receiver = own.subject();

    if !objects.is_physics_enabled(receiver) || !objects.is_physics_enabled(other.subject()) {
        trace!(
            object = %receiver,
            other = %other.subject(),
            phase = ?own.phase(),
            "contact notification suppressed"
        );
        report.suppressed += 1;
        return;
    }

    let kind = match CallbackKind::select(own.phase(), own.is_sensor()) {
        Some(kind) => kind,
        None => {
            trace!(object = %receiver, phase = ?own.phase(), "phase has no callback");
            report.suppressed += 1;
            return;
        }
    };

    if let Some(handler) = objects.handler_mut(receiver) {
        trace!(
            object = %receiver,
            other = %other.subject(),
            ?kind,
            direction = ?own.direction(),
            "delivering contact"
        );
        kind.invoke(handler, &ContactReport { own, other });
        report.delivered += 1;
    } else {
        report.suppressed += 1;
    }
}

//! Unifying plain events with life-event projections.
//!
//! Life events live in their own collection but display alongside plain
//! events. Projections are derived for display and never written back,
//! so a deletion arriving with only an id has to be routed to the
//! collection that owns the record.

use crate::model::{Event, EventOrigin, LifeEvent, Recurrence};

/// Project one life event into a read-only event record: the projection
/// starts and ends at midnight of the life event's date and carries
/// `EventOrigin::LifeProjection`.
pub fn project_life_event(life: &LifeEvent) -> Event {
    let start = life.date.and_hms_opt(0, 0, 0).unwrap();

    Event {
        id: life.id.clone(),
        title: life.title.clone(),
        description: life.note.clone(),
        location: None,
        image: None,
        start_time: start,
        end_time: start,
        kind: life.kind.as_event_kind(),
        color: life.color.clone(),
        recurrence: life.repeats_annually.then_some(Recurrence::Yearly),
        priority: None,
        origin: EventOrigin::LifeProjection,
    }
}

/// One projection per input life event, in input order.
pub fn project_life_events(life_events: &[LifeEvent]) -> Vec<Event> {
    life_events.iter().map(project_life_event).collect()
}

/// The unified display list: plain events first, then life-event
/// projections. Chronological ordering is the view composer's concern,
/// not this function's.
pub fn unify(events: &[Event], life_events: &[LifeEvent]) -> Vec<Event> {
    let mut unified = events.to_vec();
    unified.extend(project_life_events(life_events));
    unified
}

/// Which collection a deletion landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    RemovedLifeEvent,
    RemovedEvent,
    NotFound,
}

/// Remove `id` from whichever collection owns it.
///
/// Life events are searched first. The two collections share an id space
/// only by accident of UUID generation, so the routing order is part of
/// the contract, not an implementation detail. Unknown ids are a no-op.
pub fn delete_event(
    id: &str,
    events: &mut Vec<Event>,
    life_events: &mut Vec<LifeEvent>,
) -> DeleteOutcome {
    if let Some(pos) = life_events.iter().position(|l| l.id == id) {
        life_events.remove(pos);
        return DeleteOutcome::RemovedLifeEvent;
    }

    if let Some(pos) = events.iter().position(|e| e.id == id) {
        events.remove(pos);
        return DeleteOutcome::RemovedEvent;
    }

    DeleteOutcome::NotFound
}

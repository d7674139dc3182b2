//! The board aggregate: in-memory collections plus write-through
//! persistence.
//!
//! Every mutation updates the in-memory collection first, then mirrors
//! it to the store before returning. The store is the mirror, not the
//! source of truth: if a write fails it is logged and the session keeps
//! running on memory.

use crate::model::{CalendarNote, Event, Goal, LifeEvent};
use crate::normalize::{self, DeleteOutcome};
use crate::store::{Store, StoreKey, load_collection, save_collection};

pub struct Board {
    store: Box<dyn Store>,
    pub events: Vec<Event>,
    pub notes: Vec<CalendarNote>,
    pub life_events: Vec<LifeEvent>,
    pub goals: Vec<Goal>,
}

impl Board {
    /// Load every collection from `store`.
    pub fn load(store: Box<dyn Store>) -> Self {
        Board {
            events: load_collection(store.as_ref(), StoreKey::Events),
            notes: load_collection(store.as_ref(), StoreKey::Notes),
            life_events: load_collection(store.as_ref(), StoreKey::LifeEvents),
            goals: load_collection(store.as_ref(), StoreKey::Goals),
            store,
        }
    }

    /// Plain events and life-event projections as one display list.
    pub fn unified_events(&self) -> Vec<Event> {
        normalize::unify(&self.events, &self.life_events)
    }

    fn persist(&self, key: StoreKey) {
        let store = self.store.as_ref();
        match key {
            StoreKey::Events => save_collection(store, key, &self.events),
            StoreKey::Notes => save_collection(store, key, &self.notes),
            StoreKey::LifeEvents => save_collection(store, key, &self.life_events),
            StoreKey::Goals => save_collection(store, key, &self.goals),
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn create_event(&mut self, event: Event) {
        self.events.push(event);
        self.persist(StoreKey::Events);
    }

    /// Replace the event whose id matches. Unknown ids are a no-op.
    pub fn update_event(&mut self, updated: Event) {
        let Some(existing) = self.events.iter_mut().find(|e| e.id == updated.id) else {
            return;
        };
        *existing = updated;
        self.persist(StoreKey::Events);
    }

    /// Delete by id, routed to whichever collection owns the record.
    pub fn delete_event(&mut self, id: &str) -> DeleteOutcome {
        let outcome = normalize::delete_event(id, &mut self.events, &mut self.life_events);
        match outcome {
            DeleteOutcome::RemovedLifeEvent => self.persist(StoreKey::LifeEvents),
            DeleteOutcome::RemovedEvent => self.persist(StoreKey::Events),
            DeleteOutcome::NotFound => {}
        }
        outcome
    }

    // =========================================================================
    // Notes
    // =========================================================================

    pub fn create_note(&mut self, note: CalendarNote) {
        self.notes.push(note);
        self.persist(StoreKey::Notes);
    }

    pub fn update_note(&mut self, updated: CalendarNote) {
        let Some(existing) = self.notes.iter_mut().find(|n| n.id == updated.id) else {
            return;
        };
        *existing = updated;
        self.persist(StoreKey::Notes);
    }

    pub fn delete_note(&mut self, id: &str) -> bool {
        let Some(pos) = self.notes.iter().position(|n| n.id == id) else {
            return false;
        };
        self.notes.remove(pos);
        self.persist(StoreKey::Notes);
        true
    }

    /// Flip a note's pinned flag; returns the new state.
    pub fn toggle_pin(&mut self, id: &str) -> Option<bool> {
        let pinned = {
            let note = self.notes.iter_mut().find(|n| n.id == id)?;
            note.pinned = !note.pinned;
            note.pinned
        };
        self.persist(StoreKey::Notes);
        Some(pinned)
    }

    // =========================================================================
    // Life events
    // =========================================================================

    pub fn create_life_event(&mut self, life: LifeEvent) {
        self.life_events.push(life);
        self.persist(StoreKey::LifeEvents);
    }

    pub fn update_life_event(&mut self, updated: LifeEvent) {
        let Some(existing) = self.life_events.iter_mut().find(|l| l.id == updated.id) else {
            return;
        };
        *existing = updated;
        self.persist(StoreKey::LifeEvents);
    }

    pub fn delete_life_event(&mut self, id: &str) -> bool {
        let Some(pos) = self.life_events.iter().position(|l| l.id == id) else {
            return false;
        };
        self.life_events.remove(pos);
        self.persist(StoreKey::LifeEvents);
        true
    }

    // =========================================================================
    // Goals
    // =========================================================================

    pub fn create_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
        self.persist(StoreKey::Goals);
    }

    pub fn update_goal(&mut self, updated: Goal) {
        let Some(existing) = self.goals.iter_mut().find(|g| g.id == updated.id) else {
            return;
        };
        *existing = updated;
        self.persist(StoreKey::Goals);
    }

    /// Shift a goal's progress by `delta`, clamped to [0, 100]; returns
    /// the new value. Unknown ids are a no-op.
    pub fn adjust_goal_progress(&mut self, id: &str, delta: i32) -> Option<u8> {
        let progress = {
            let goal = self.goals.iter_mut().find(|g| g.id == id)?;
            goal.adjust_progress(delta);
            goal.progress()
        };
        self.persist(StoreKey::Goals);
        Some(progress)
    }

    pub fn delete_goal(&mut self, id: &str) -> bool {
        let Some(pos) = self.goals.iter().position(|g| g.id == id) else {
            return false;
        };
        self.goals.remove(pos);
        self.persist(StoreKey::Goals);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventKind, GoalCategory, LifeEventKind, NoteColor};
    use crate::store::JsonFileStore;
    use chrono::NaiveDate;
    use std::path::Path;

    fn board_at(dir: &Path) -> Board {
        Board::load(Box::new(JsonFileStore::new(dir)))
    }

    fn make_event(title: &str) -> Event {
        let start = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(15, 0, 0)
            .unwrap();
        Event::new(title, start, start + chrono::Duration::hours(1), EventKind::Appointment)
    }

    #[test]
    fn mutations_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();

        let mut board = board_at(dir.path());
        board.create_event(make_event("Dentist"));
        board.create_note(CalendarNote::new(
            "floss more",
            NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            NoteColor::Pink,
        ));
        board.create_goal(Goal::new("Read", GoalCategory::Learning));

        let reloaded = board_at(dir.path());
        assert_eq!(reloaded.events.len(), 1);
        assert_eq!(reloaded.events[0].title, "Dentist");
        assert_eq!(reloaded.events[0].start_time, board.events[0].start_time);
        assert_eq!(reloaded.notes.len(), 1);
        assert_eq!(reloaded.goals.len(), 1);
    }

    #[test]
    fn update_replaces_by_id_and_unknown_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_at(dir.path());

        board.create_event(make_event("Before"));
        let mut changed = board.events[0].clone();
        changed.title = "After".to_string();
        board.update_event(changed);

        let mut stranger = make_event("Stranger");
        stranger.id = "unknown".to_string();
        board.update_event(stranger);

        assert_eq!(board.events.len(), 1);
        assert_eq!(board.events[0].title, "After");

        let reloaded = board_at(dir.path());
        assert_eq!(reloaded.events[0].title, "After");
    }

    #[test]
    fn delete_event_routes_and_persists_the_right_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_at(dir.path());

        board.create_event(make_event("plain"));
        board.create_life_event(LifeEvent::new(
            "Ada's birthday",
            NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            LifeEventKind::Birthday,
        ));
        let life_id = board.life_events[0].id.clone();

        assert_eq!(board.delete_event(&life_id), DeleteOutcome::RemovedLifeEvent);
        assert_eq!(board.delete_event(&life_id), DeleteOutcome::NotFound);

        let reloaded = board_at(dir.path());
        assert!(reloaded.life_events.is_empty());
        assert_eq!(reloaded.events.len(), 1);
    }

    #[test]
    fn unified_list_counts_both_collections() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_at(dir.path());

        board.create_event(make_event("plain"));
        board.create_life_event(LifeEvent::new(
            "Anniversary",
            NaiveDate::from_ymd_opt(2020, 9, 12).unwrap(),
            LifeEventKind::Anniversary,
        ));

        assert_eq!(board.unified_events().len(), 2);
    }

    #[test]
    fn note_and_life_event_updates_replace_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_at(dir.path());

        board.create_note(CalendarNote::new(
            "draft",
            NaiveDate::from_ymd_opt(2026, 3, 20).unwrap(),
            NoteColor::Yellow,
        ));
        let mut note = board.notes[0].clone();
        note.content = "final".to_string();
        board.update_note(note);

        board.create_life_event(LifeEvent::new(
            "Ada",
            NaiveDate::from_ymd_opt(1990, 6, 1).unwrap(),
            LifeEventKind::Birthday,
        ));
        let mut life = board.life_events[0].clone();
        life.icon = Some("cake".to_string());
        board.update_life_event(life);

        let mut stray = LifeEvent::new(
            "Nobody",
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            LifeEventKind::Special,
        );
        stray.id = "unknown".to_string();
        board.update_life_event(stray);

        let reloaded = board_at(dir.path());
        assert_eq!(reloaded.notes[0].content, "final");
        assert_eq!(reloaded.life_events.len(), 1);
        assert_eq!(reloaded.life_events[0].icon.as_deref(), Some("cake"));
    }

    #[test]
    fn goal_progress_adjusts_and_clamps_through_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_at(dir.path());

        board.create_goal(Goal::new("Stretch", GoalCategory::Health));
        let id = board.goals[0].id.clone();

        assert_eq!(board.adjust_goal_progress(&id, 5), Some(5));
        assert_eq!(board.adjust_goal_progress(&id, -10), Some(0));
        assert_eq!(board.adjust_goal_progress("unknown", 10), None);

        let reloaded = board_at(dir.path());
        assert_eq!(reloaded.goals[0].progress(), 0);
    }

    #[test]
    fn toggle_pin_flips_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut board = board_at(dir.path());

        board.create_note(CalendarNote::new(
            "remember",
            NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
            NoteColor::Blue,
        ));
        let id = board.notes[0].id.clone();

        assert_eq!(board.toggle_pin(&id), Some(true));
        assert_eq!(board.toggle_pin(&id), Some(false));
        assert_eq!(board.toggle_pin("unknown"), None);

        let reloaded = board_at(dir.path());
        assert!(!reloaded.notes[0].pinned);
    }

    #[test]
    fn failed_writes_keep_memory_authoritative() {
        use crate::store::MemoryStore;

        let seeded = MemoryStore::new();
        save_collection(&seeded, StoreKey::Events, &[make_event("Persisted")]);

        let mut board = Board::load(Box::new(seeded.with_failing_writes()));
        board.create_event(make_event("Memory only"));

        // The session keeps both; durable storage still has only the first.
        assert_eq!(board.events.len(), 2);
        let durable: Vec<Event> = load_collection(&seeded, StoreKey::Events);
        assert_eq!(durable.len(), 1);
        assert_eq!(durable[0].title, "Persisted");
    }
}

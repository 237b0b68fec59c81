//! In-progress workout composition state, shared by the live and planned
//! stores.

use liftlog_types::workout::{EntryExercise, SetRecord, WorkoutEntry};

#[derive(Debug, Clone, Default)]
pub struct WorkoutDraft {
    pub name: String,
    pub notes: String,
    pub entries: Vec<WorkoutEntry>,
}

impl WorkoutDraft {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn add_entry(&mut self, exercise: EntryExercise, sets: Vec<SetRecord>) {
        self.entries.push(WorkoutEntry::new(exercise, sets));
    }

    /// Replace the entry at `index`, keeping the slot's original insertion
    /// timestamp. Out-of-bounds indices are ignored.
    pub fn replace_entry(&mut self, index: usize, exercise: EntryExercise, sets: Vec<SetRecord>) {
        if let Some(slot) = self.entries.get_mut(index) {
            let added_at = slot.added_at;
            *slot = WorkoutEntry::new(exercise, sets);
            slot.added_at = added_at;
        }
    }

    /// Remove the entry at `index`. Out-of-bounds indices are ignored.
    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

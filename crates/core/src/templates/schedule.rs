//! In-memory schedule being edited for a template
//!
//! The schedule axis is a day offset in [-10, 10] relative to the due date.
//! At most one message per offset, at most six messages total; an occupied
//! offset is replaced in place even at capacity.

use std::collections::BTreeMap;

use cobrix_domain::constants::{MAX_DAY_OFFSET, MAX_SCHEDULED_MESSAGES, MIN_DAY_OFFSET};
use cobrix_domain::{CobrixError, MessageKind, Result, ScheduledMessage};
use uuid::Uuid;

/// Editable schedule for one template
#[derive(Debug, Clone)]
pub struct Schedule {
    entries: BTreeMap<i32, ScheduledMessage>,
    capacity: usize,
}

impl Default for Schedule {
    fn default() -> Self {
        Self { entries: BTreeMap::new(), capacity: MAX_SCHEDULED_MESSAGES }
    }
}

impl Schedule {
    /// Create an empty schedule with the default capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty schedule with a custom entry cap.
    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: BTreeMap::new(), capacity }
    }

    /// Rebuild a schedule from persisted entries.
    ///
    /// Later duplicates of an offset win, mirroring replace-on-schedule.
    pub fn from_entries(entries: Vec<ScheduledMessage>, capacity: usize) -> Self {
        let mut schedule = Self::with_capacity(capacity);
        for entry in entries {
            schedule.entries.insert(entry.day_offset, entry);
        }
        schedule
    }

    /// Place a message at a day offset.
    ///
    /// Replaces any existing entry at that offset. Adding a new offset past
    /// the entry cap is a capacity error.
    pub fn schedule_message(
        &mut self,
        day_offset: i32,
        kind: MessageKind,
        content: &str,
    ) -> Result<&ScheduledMessage> {
        if !matches!(kind, MessageKind::Reminder | MessageKind::Marketing) {
            return Err(CobrixError::Validation(
                "only reminder and marketing messages can be scheduled".into(),
            ));
        }
        if !(MIN_DAY_OFFSET..=MAX_DAY_OFFSET).contains(&day_offset) {
            return Err(CobrixError::Validation(format!(
                "day offset {day_offset} is outside the allowed range [{MIN_DAY_OFFSET}, {MAX_DAY_OFFSET}]"
            )));
        }
        if !self.entries.contains_key(&day_offset) && self.entries.len() >= self.capacity {
            return Err(CobrixError::Capacity(format!(
                "maximum of {} scheduled messages reached",
                self.capacity
            )));
        }

        let entry = ScheduledMessage {
            id: Uuid::new_v4().to_string(),
            kind,
            day_offset,
            content: content.to_string(),
        };
        self.entries.insert(day_offset, entry);
        Ok(&self.entries[&day_offset])
    }

    /// Remove the entry at an offset; no-op when absent.
    pub fn unschedule_message(&mut self, day_offset: i32) {
        self.entries.remove(&day_offset);
    }

    /// Entry at an offset, if any.
    pub fn entry_at(&self, day_offset: i32) -> Option<&ScheduledMessage> {
        self.entries.get(&day_offset)
    }

    /// Entries ordered by day offset.
    pub fn entries(&self) -> Vec<ScheduledMessage> {
        self.entries.values().cloned().collect()
    }

    /// Number of scheduled entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the schedule has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

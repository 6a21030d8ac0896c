//! Message template and schedule types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The five fixed message slots every template carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Reminder,
    Success,
    Error,
    Rejected,
    Marketing,
}

impl MessageKind {
    /// All slots, in display order.
    pub const ALL: [Self; 5] =
        [Self::Reminder, Self::Success, Self::Error, Self::Rejected, Self::Marketing];
}

/// Named dunning-message template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// One text per slot; all five must be non-empty at creation
    pub messages: BTreeMap<MessageKind, String>,
}

/// Template fields before an id is assigned
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateDraft {
    pub name: String,
    pub description: String,
    pub messages: BTreeMap<MessageKind, String>,
}

/// Message scheduled at a day offset relative to the due date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledMessage {
    pub id: String,
    pub kind: MessageKind,
    /// Days relative to the subscription due date, within [-10, 10]
    pub day_offset: i32,
    pub content: String,
}

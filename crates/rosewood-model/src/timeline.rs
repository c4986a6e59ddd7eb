use crate::RecordId;
use serde::{Deserialize, Serialize};

/// A day-of timeline entry. Start and end are free-text time-of-day strings
/// ("3:30 PM"); the planner never parses them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TimelineEvent {
    pub id: RecordId,
    pub title: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub event_type: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTimelineEvent {
    pub title: String,
    pub description: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub location: Option<String>,
    pub event_type: String,
}

impl NewTimelineEvent {
    #[must_use]
    pub fn into_record(self, id: RecordId) -> TimelineEvent {
        TimelineEvent {
            id,
            title: self.title,
            description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            location: self.location,
            event_type: self.event_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineEventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub location: Option<Option<String>>,
    pub event_type: Option<String>,
}

impl TimelineEventPatch {
    pub fn apply(self, event: &mut TimelineEvent) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(location) = self.location {
            event.location = location;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
    }
}

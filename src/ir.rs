use serde::{Deserialize, Serialize};

use crate::parser::DateParseError;

pub const DEFAULT_TIMELINE_TITLE: &str = "Unnamed Timeline";
pub const DEFAULT_EVENT_TITLE: &str = "Untitled event";

/// Timeline document as it arrives from the loader, before any validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineSource {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub events: Vec<EventSource>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSource {
    #[serde(default)]
    pub title: Option<SourceField>,
    #[serde(default)]
    pub date: Option<SourceField>,
}

impl EventSource {
    pub fn new(title: &str, date: &str) -> Self {
        Self {
            title: Some(SourceField::Text(title.to_string())),
            date: Some(SourceField::Text(date.to_string())),
        }
    }
}

/// A per-event field that should be a string. Anything else is kept so one
/// bad entry is dropped on its own instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceField {
    Text(String),
    Other(serde_json::Value),
}

impl SourceField {
    pub fn into_text(self) -> Option<String> {
        match self {
            SourceField::Text(text) => Some(text),
            SourceField::Other(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub years_ago: f64,
}

/// An event that was dropped while building the timeline.
#[derive(Debug, Clone)]
pub struct SkippedEvent {
    pub title: String,
    pub date: Option<String>,
    pub error: DateParseError,
}

/// A validated timeline. `events` is always sorted ascending by `years_ago`,
/// ties keeping their input order.
#[derive(Debug, Clone)]
pub struct Timeline {
    pub title: String,
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedEvent>,
}

impl Timeline {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            events: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn min_years_ago(&self) -> Option<f64> {
        self.events.first().map(|event| event.years_ago)
    }

    pub fn max_years_ago(&self) -> Option<f64> {
        self.events.last().map(|event| event.years_ago)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(DEFAULT_TIMELINE_TITLE)
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use uuid::Uuid;

use crate::error::{Error, ErrorKind};

/// A record from the schedule store. Only the `event` variant takes part in
/// month-grid binning; tasks are carried through untouched for other views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Schedule {
    Event(Event),
    Task(Task),
}

impl Schedule {
    pub fn as_event(&self) -> Option<&Event> {
        match self {
            Schedule::Event(event) => Some(event),
            Schedule::Task(_) => None,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Schedule::Event(event) => event.id,
            Schedule::Task(task) => task.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Schedule::Event(event) => &event.title,
            Schedule::Task(task) => &task.title,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    #[serde(default)]
    pub calendar_id: Option<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_time: EventDateTime,
    #[serde(default)]
    pub color: Option<String>,
}

impl Event {
    /// Display color with the configured fallback for events that carry none.
    pub fn display_color<'a>(&'a self, default: &'a str) -> &'a str {
        self.color.as_deref().unwrap_or(default)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub date_time: Option<EventDateTime>,
}

/// The store's date/time pair: an 8-digit day string plus a minute range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDateTime {
    pub date: String,
    #[serde(default = "TimeRange::unset")]
    pub time: TimeRange,
}

/// Start/end minutes of an event, with `-1`/`-1` standing for "unset" as the
/// store encodes the default slot of a fresh dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: i32,
    pub end: i32,
}

impl TimeRange {
    pub const UNSET: TimeRange = TimeRange { start: -1, end: -1 };

    pub fn unset() -> Self {
        Self::UNSET
    }

    pub fn is_unset(&self) -> bool {
        *self == Self::UNSET
    }
}

#[derive(Deserialize)]
struct ScheduleFile {
    #[serde(default, rename = "schedule")]
    schedules: Vec<Schedule>,
}

/// Loads `[[schedule]]` records from a TOML file, standing in for the
/// external store this crate is otherwise fed from.
pub fn load_schedules(path: &Path) -> Result<Vec<Schedule>, Error> {
    let raw = fs::read_to_string(path)?;
    let file: ScheduleFile = toml::from_str(&raw).map_err(|err| {
        Error::new(
            ErrorKind::ScheduleParse,
            &format!("{}: {}", path.display(), err),
        )
    })?;

    Ok(file.schedules)
}

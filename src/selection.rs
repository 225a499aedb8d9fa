use chrono::NaiveDate;

use crate::daykey::DayKey;
use crate::schedule::{Event, EventDateTime, TimeRange};

/// Screen coordinates of an interaction, used to anchor the dialog popover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// Shared selection/dialog context of the month view. Starts out empty and
/// is only ever written through [`SelectionCoordinator::handle`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
    pub selected_date: Option<NaiveDate>,
    pub selected_schedule: Option<Event>,
    pub default_slot: Option<EventDateTime>,
    pub dialog_visible: bool,
    pub anchor: Option<Position>,
}

/// One user interaction with the grid.
///
/// Hit-testing happens in the caller: a click lands either on a cell's
/// background or on one of its event pills and dispatches exactly one
/// interaction, so a pill click never doubles as a background click.
#[derive(Clone, Debug)]
pub enum Interaction {
    CellClick { date: NaiveDate, position: Position },
    EventClick { date: NaiveDate, event: Event },
    DialogClosed,
}

#[derive(Default)]
pub struct SelectionCoordinator {
    state: SelectionState,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        SelectionCoordinator::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Applies one transition per interaction. The state is updated in one
    /// go, never observable half-written, and no transition can fail.
    pub fn handle(&mut self, interaction: Interaction) {
        match interaction {
            Interaction::CellClick { date, position } => {
                self.state.anchor = Some(position);
                self.select_date(date);
                self.state.selected_schedule = None;
                self.state.dialog_visible = true;
            }
            Interaction::EventClick { date, event } => {
                // pointer position is only recorded for background clicks
                self.select_date(date);
                self.state.selected_schedule = Some(event);
                self.state.dialog_visible = true;
            }
            Interaction::DialogClosed => {
                self.state.selected_schedule = None;
                self.state.dialog_visible = false;
            }
        }
    }

    fn select_date(&mut self, date: NaiveDate) {
        self.state.selected_date = Some(date);
        self.state.default_slot = Some(EventDateTime {
            date: DayKey::from_date(date).to_string(),
            time: TimeRange::UNSET,
        });
    }
}

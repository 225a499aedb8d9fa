use chrono::NaiveDate;

use crate::binning::{bin_by_day, paginate, VisibleCellEvents};
use crate::config::Config;
use crate::daykey::DayKey;
use crate::grid::MonthMatrix;
use crate::schedule::Schedule;

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One grid cell ready for rendering.
pub struct CellView<'a> {
    pub date: NaiveDate,
    pub key: DayKey,
    /// `false` for padding days borrowed from the adjacent months.
    pub in_month: bool,
    pub events: VisibleCellEvents<'a>,
}

/// Derived month view: matrix plus binned, capacity-limited events per cell.
/// Recomputed from scratch on every input change, never mutated in place.
pub struct MonthView<'a> {
    matrix: MonthMatrix,
    cells: Vec<CellView<'a>>,
}

impl<'a> MonthView<'a> {
    pub fn build(reference: NaiveDate, schedules: &'a [Schedule], config: &Config) -> Self {
        let matrix = MonthMatrix::for_month(reference);
        let keys: Vec<DayKey> = matrix.day_keys().collect();
        let mut bins = bin_by_day(schedules, &keys);
        let capacity = config.cell_capacity as usize;

        let cells = matrix
            .cells()
            .iter()
            .zip(keys.iter())
            .map(|(&date, &key)| {
                let bin = bins.remove(&key).unwrap_or_default();
                CellView {
                    date,
                    key,
                    in_month: matrix.in_target_month(date),
                    events: paginate(&bin, capacity),
                }
            })
            .collect();

        MonthView { matrix, cells }
    }

    pub fn matrix(&self) -> &MonthMatrix {
        &self.matrix
    }

    pub fn cells(&self) -> &[CellView<'a>] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CellView<'a>]> {
        self.cells.chunks(MonthMatrix::COLUMNS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{Event, EventDateTime, TimeRange};
    use uuid::Uuid;

    fn event(title: &str, date: &str) -> Schedule {
        Schedule::Event(Event {
            id: Uuid::new_v4(),
            calendar_id: None,
            title: title.to_owned(),
            description: None,
            date_time: EventDateTime {
                date: date.to_owned(),
                time: TimeRange::UNSET,
            },
            color: None,
        })
    }

    #[test]
    fn three_events_with_capacity_two_overflow_by_one() {
        // May 2024 starts on a Wednesday
        let reference = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let schedules = vec![
            event("Standup", "20240515"),
            event("Review", "20240515"),
            event("Retro", "20240515"),
        ];

        let view = MonthView::build(reference, &schedules, &Config::default());
        let cell = view
            .cells()
            .iter()
            .find(|cell| cell.key.to_string() == "20240515")
            .unwrap();

        assert_eq!(cell.events.visible.len(), 2);
        assert_eq!(cell.events.overflow, 1);
        assert_eq!(cell.events.visible[0].title, "Standup");
        assert_eq!(cell.events.visible[1].title, "Review");
    }

    #[test]
    fn empty_store_yields_42_quiet_cells() {
        let reference = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let view = MonthView::build(reference, &[], &Config::default());

        assert_eq!(view.cells().len(), MonthMatrix::CELLS);
        assert!(view
            .cells()
            .iter()
            .all(|cell| cell.events.visible.is_empty() && cell.events.overflow == 0));
    }

    #[test]
    fn weeks_and_padding_flags_line_up() {
        let reference = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let view = MonthView::build(reference, &[], &Config::default());

        assert_eq!(view.weeks().count(), MonthMatrix::ROWS);

        // Wed May 1st sits in row 0 behind three April padding days
        let first_week: Vec<bool> = view.weeks().next().unwrap().iter().map(|c| c.in_month).collect();
        assert_eq!(first_week, [false, false, false, true, true, true, true]);
    }
}

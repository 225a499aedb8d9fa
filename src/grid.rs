use chrono::{Datelike, Duration, NaiveDate};

use crate::daykey::DayKey;

/// Fixed 6x7 arrangement of dates for a month view.
///
/// Row 0 starts on the most recent Sunday on or before the 1st of the target
/// month, so the grid always carries the full leading/trailing padding days
/// from the adjacent months and stays rectangular for every month length and
/// starting weekday.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthMatrix {
    year: i32,
    month: u32,
    cells: [NaiveDate; 42],
}

impl MonthMatrix {
    pub const COLUMNS: usize = 7;
    pub const ROWS: usize = 6;
    pub const CELLS: usize = Self::COLUMNS * Self::ROWS;

    /// Builds the matrix for the month containing `reference`. The day
    /// component of `reference` only serves to pick the month.
    pub fn for_month(reference: NaiveDate) -> Self {
        // day 1 exists in every month
        let first = NaiveDate::from_ymd_opt(reference.year(), reference.month(), 1).unwrap();
        let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);

        let mut cells = [start; Self::CELLS];
        for (offset, cell) in cells.iter_mut().enumerate() {
            *cell = start + Duration::days(offset as i64);
        }

        MonthMatrix {
            year: reference.year(),
            month: reference.month(),
            cells,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn cells(&self) -> &[NaiveDate] {
        &self.cells
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.cells.chunks(Self::COLUMNS)
    }

    pub fn day_keys(&self) -> impl Iterator<Item = DayKey> + '_ {
        self.cells.iter().map(|&date| DayKey::from_date(date))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.cells[0] <= date && date <= self.cells[Self::CELLS - 1]
    }

    /// Whether `date` belongs to the target month rather than the padding.
    pub fn in_target_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

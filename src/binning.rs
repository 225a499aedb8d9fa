use std::collections::HashMap;

use crate::daykey::DayKey;
use crate::schedule::{Event, Schedule};

/// Groups events under the given day keys.
///
/// The returned map holds exactly `days` as keys, with an empty bin for quiet
/// days. Only `event` records bin; tasks, events with a malformed stored date
/// and events outside the visible window are skipped. The relative order of
/// `schedules` is preserved within each bin, nothing is re-sorted here.
pub fn bin_by_day<'a>(
    schedules: &'a [Schedule],
    days: &[DayKey],
) -> HashMap<DayKey, Vec<&'a Event>> {
    let mut bins: HashMap<DayKey, Vec<&'a Event>> =
        days.iter().map(|&day| (day, Vec::new())).collect();

    for schedule in schedules {
        let event = match schedule.as_event() {
            Some(event) => event,
            None => continue,
        };

        let key = match event.date_time.date.parse::<DayKey>() {
            Ok(key) => key,
            Err(err) => {
                log::debug!("excluding event '{}' from binning: {}", event.title, err);
                continue;
            }
        };

        if let Some(bin) = bins.get_mut(&key) {
            bin.push(event);
        }
    }

    bins
}

/// Events of one cell after capacity limiting: the first `capacity` entries
/// in source order plus the count of what got cut off.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibleCellEvents<'a> {
    pub visible: Vec<&'a Event>,
    pub overflow: usize,
}

pub fn paginate<'a>(bin: &[&'a Event], capacity: usize) -> VisibleCellEvents<'a> {
    VisibleCellEvents {
        visible: bin.iter().take(capacity).copied().collect(),
        overflow: bin.len().saturating_sub(capacity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{EventDateTime, Task, TimeRange};
    use chrono::NaiveDate;
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

    fn task(title: &str) -> Schedule {
        Schedule::Task(Task {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            completed: false,
            date_time: None,
        })
    }

    fn key(year: i32, month: u32, day: u32) -> DayKey {
        DayKey::from_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
    }

    #[test]
    fn bins_cover_exactly_the_given_days() {
        let days = vec![key(2024, 5, 14), key(2024, 5, 15), key(2024, 5, 16)];
        let schedules = vec![
            event("Standup", "20240515"),
            task("Water plants"),
            event("Off-grid", "20240601"),
            event("Broken", "not-a-date"),
            event("Review", "20240514"),
        ];

        let bins = bin_by_day(&schedules, &days);

        assert_eq!(bins.len(), days.len());
        assert_eq!(bins[&key(2024, 5, 14)].len(), 1);
        assert_eq!(bins[&key(2024, 5, 15)].len(), 1);
        assert!(bins[&key(2024, 5, 16)].is_empty());
        assert!(bins.values().flatten().all(|e| e.title != "Off-grid"));
    }

    #[test]
    fn bin_preserves_source_order() {
        let days = vec![key(2024, 5, 15)];
        let schedules = vec![
            event("first", "20240515"),
            event("second", "20240515"),
            event("third", "20240515"),
        ];

        let bins = bin_by_day(&schedules, &days);
        let titles: Vec<_> = bins[&key(2024, 5, 15)]
            .iter()
            .map(|e| e.title.as_str())
            .collect();

        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn paginate_takes_capacity_prefix() {
        let schedules = vec![
            event("a", "20240515"),
            event("b", "20240515"),
            event("c", "20240515"),
        ];
        let days = vec![key(2024, 5, 15)];
        let bins = bin_by_day(&schedules, &days);
        let bin = &bins[&key(2024, 5, 15)];

        let cell = paginate(bin, 2);
        assert_eq!(cell.visible.len(), 2);
        assert_eq!(cell.overflow, 1);
        assert_eq!(cell.visible[0].title, "a");
        assert_eq!(cell.visible[1].title, "b");
    }

    #[test]
    fn paginate_with_room_to_spare() {
        let schedules = vec![event("a", "20240515")];
        let days = vec![key(2024, 5, 15)];
        let bins = bin_by_day(&schedules, &days);

        let cell = paginate(&bins[&key(2024, 5, 15)], 2);
        assert_eq!(cell.visible.len(), 1);
        assert_eq!(cell.overflow, 0);

        let empty = paginate(&[], 2);
        assert!(empty.visible.is_empty());
        assert_eq!(empty.overflow, 0);
    }
}

//! Range selection and month grids for the calendar popover.

use crate::state::DateBounds;
use chrono::{Datelike, NaiveDate, TimeDelta};
use std::mem::replace;

/// A date range iterator that yields each date from the start date
/// through the end date (inclusive).
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl Iterator for DateRange {
    type Item = NaiveDate;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 <= self.1 {
            let next = self.0 + TimeDelta::days(1);
            Some(replace(&mut self.0, next))
        } else {
            None
        }
    }
}

impl DateBounds {
    /// Bounds after the user clicks `day` in range-selection mode.
    pub fn add_day(&self, day: NaiveDate) -> DateBounds {
        match (self.from, self.to) {
            (Some(from), Some(to)) => {
                if from == day && to == day {
                    DateBounds::default()
                } else if to == day {
                    DateBounds::new(Some(to), None)
                } else if from == day {
                    DateBounds::default()
                } else if day < from {
                    DateBounds::new(Some(day), Some(to))
                } else {
                    DateBounds::new(Some(from), Some(day))
                }
            }
            (None, Some(to)) => {
                if day > to {
                    DateBounds::new(Some(to), Some(day))
                } else {
                    DateBounds::new(Some(day), Some(to))
                }
            }
            (Some(from), None) => {
                if day < from {
                    DateBounds::new(Some(day), Some(from))
                } else {
                    DateBounds::new(Some(from), Some(day))
                }
            }
            (None, None) => DateBounds::new(Some(day), None),
        }
    }

    /// Whether `day` is highlighted as part of the range.
    pub fn contains(&self, day: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), Some(to)) => from <= day && day <= to,
            (Some(edge), None) | (None, Some(edge)) => edge == day,
            (None, None) => false,
        }
    }
}

/// The single month visible in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// e.g. "January 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    pub fn prev(&self) -> Self {
        Self {
            first: self
                .first
                .pred_opt()
                .and_then(|d| d.with_day(1))
                .unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        Self {
            first: self.last_day().succ_opt().unwrap_or(self.first),
        }
    }

    fn last_day(&self) -> NaiveDate {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.first)
    }

    /// Sunday-first week rows; cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let lead = self.first.weekday().num_days_from_sunday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; lead];
        cells.extend(DateRange(self.first, self.last_day()).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|week| {
                let mut row = [None; 7];
                row.copy_from_slice(week);
                row
            })
            .collect()
    }
}

use crate::span::DaySpan;
use thiserror::Error;
use time::{Date, Duration, Month, Weekday};

const DAYS_IN_WEEK: u8 = 7;

pub(crate) trait WeekdayExt {
    /// Number of days from `start` to `self`, walking forwards through
    /// the week.  Zero when the two coincide.
    fn days_since(self, start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    fn days_since(self, start: Weekday) -> u8 {
        (self.number_days_from_sunday() + DAYS_IN_WEEK - start.number_days_from_sunday())
            % DAYS_IN_WEEK
    }
}

/// One calendar month laid out as a grid of 7-column weeks.
///
/// The grid starts on a configurable first weekday and is padded with
/// *filler* cells on both sides so that day 1 lands in the right column
/// and the last week is complete.  Filler cells resolve to real dates in
/// the adjacent months; [`MonthGrid::contains`] distinguishes them from
/// the month's own days.
///
/// Built once, immutable afterwards.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonthGrid {
    /// First day of the month.
    first: Date,
    /// Date shown in cell 0, i.e. `first` minus the leading fillers.
    origin: Date,
    days: u8,
    leading: u8,
    trailing: u8,
}

/// Error returned when a month's grid does not fit within the calendar
/// range supported by [`time`] (years ±9999).
///
/// This is a precondition failure: it can only happen when a caller asks
/// for a bounding interval hard against the edge of the calendar, where
/// filler cells (or the successor month used to measure the month's
/// length) would be unrepresentable.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("the month grid around {0} does not fit in the supported calendar")]
pub struct OutOfCalendarError(pub Date);

impl MonthGrid {
    /// Builds the grid for the month containing `date`, with weeks
    /// starting on `first_weekday`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfCalendarError`] if any cell of the grid falls
    /// outside the representable calendar range.
    pub fn new(date: Date, first_weekday: Weekday) -> Result<MonthGrid, OutOfCalendarError> {
        let first = date.replace_day(1).map_err(|_| OutOfCalendarError(date))?;
        let next_first = match first.month() {
            Month::December => Date::from_calendar_date(first.year() + 1, Month::January, 1),
            m => Date::from_calendar_date(first.year(), m.next(), 1),
        }
        .map_err(|_| OutOfCalendarError(date))?;
        let days = u8::try_from(next_first.to_julian_day() - first.to_julian_day())
            .map_err(|_| OutOfCalendarError(date))?;
        let leading = first.weekday().days_since(first_weekday);
        let trailing = (DAYS_IN_WEEK - (leading + days) % DAYS_IN_WEEK) % DAYS_IN_WEEK;
        let origin = first
            .checked_sub(Duration::days(i64::from(leading)))
            .ok_or(OutOfCalendarError(date))?;
        let cells = i64::from(leading) + i64::from(days) + i64::from(trailing);
        origin
            .checked_add(Duration::days(cells - 1))
            .ok_or(OutOfCalendarError(date))?;
        Ok(MonthGrid {
            first,
            origin,
            days,
            leading,
            trailing,
        })
    }

    /// The year this grid belongs to.
    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// The month this grid belongs to.
    pub fn month(&self) -> Month {
        self.first.month()
    }

    /// Number of real days in the month, fillers excluded.
    pub fn days_in_month(&self) -> u8 {
        self.days
    }

    /// Number of filler cells before day 1.
    pub fn leading_filler_count(&self) -> usize {
        usize::from(self.leading)
    }

    /// Number of filler cells after the last day of the month.
    pub fn trailing_filler_count(&self) -> usize {
        usize::from(self.trailing)
    }

    /// Total number of grid cells, fillers included.  Always a multiple
    /// of 7.
    pub fn cell_count(&self) -> usize {
        usize::from(self.leading) + usize::from(self.days) + usize::from(self.trailing)
    }

    /// The month's own days as a span, from day 1 to the last day.
    pub fn span(&self) -> DaySpan {
        let last = self
            .origin
            .checked_add(Duration::days(
                i64::from(self.leading) + i64::from(self.days) - 1,
            ))
            .unwrap_or(self.first);
        DaySpan::ordered(self.first, last)
    }

    /// Returns true if `date` is one of the month's own days (never true
    /// for the dates shown in filler cells).
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.first.year() && date.month() == self.first.month()
    }

    /// The calendar date shown in the given cell, or `None` if the cell
    /// index is past the end of the grid.  Filler cells yield dates in
    /// the previous or next month.
    pub fn date_at(&self, cell: usize) -> Option<Date> {
        if cell >= self.cell_count() {
            return None;
        }
        let offset = i64::try_from(cell).ok()?;
        self.origin.checked_add(Duration::days(offset))
    }

    /// The cell index of the given day of the month; the inverse of
    /// [`MonthGrid::date_at`] over the month's own days.
    ///
    /// # Panics
    ///
    /// Panics if `day` is not a day of this month (zero or past the
    /// month's length).
    pub fn cell_for_day(&self, day: u8) -> usize {
        assert!(
            (1..=self.days).contains(&day),
            "day {day} is not a day of {} {}",
            self.first.month(),
            self.first.year(),
        );
        usize::from(self.leading) + usize::from(day) - 1
    }

    /// Human-readable "Month Year" label, e.g. "January 2024".
    pub fn title(&self) -> String {
        format!("{} {}", self.first.month(), self.first.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_january_2024_sunday_first() {
        // 2024-01-01 is a Monday.
        let grid =
            MonthGrid::new(date!(2024 - 01 - 15), Weekday::Sunday).expect("grid should build");
        assert_eq!(grid.year(), 2024);
        assert_eq!(grid.month(), Month::January);
        assert_eq!(grid.days_in_month(), 31);
        assert_eq!(grid.leading_filler_count(), 1);
        assert_eq!(grid.trailing_filler_count(), 3);
        assert_eq!(grid.cell_count(), 35);
        assert_eq!(grid.title(), "January 2024");
    }

    #[test]
    fn test_january_2024_monday_first() {
        let grid =
            MonthGrid::new(date!(2024 - 01 - 15), Weekday::Monday).expect("grid should build");
        assert_eq!(grid.leading_filler_count(), 0);
        assert_eq!(grid.trailing_filler_count(), 4);
        assert_eq!(grid.cell_count(), 35);
    }

    #[test]
    fn test_leap_february() {
        // 2024-02-01 is a Thursday.
        let grid =
            MonthGrid::new(date!(2024 - 02 - 29), Weekday::Sunday).expect("grid should build");
        assert_eq!(grid.days_in_month(), 29);
        assert_eq!(grid.leading_filler_count(), 4);
        assert_eq!(grid.trailing_filler_count(), 2);
        assert_eq!(grid.cell_count(), 35);
    }

    #[test]
    fn test_month_with_no_fillers() {
        // February 2015 starts on a Sunday and has exactly four weeks.
        let grid =
            MonthGrid::new(date!(2015 - 02 - 01), Weekday::Sunday).expect("grid should build");
        assert_eq!(grid.leading_filler_count(), 0);
        assert_eq!(grid.trailing_filler_count(), 0);
        assert_eq!(grid.cell_count(), 28);
    }

    #[test]
    fn test_cell_count_is_whole_weeks() {
        let mut date = date!(2023 - 01 - 01);
        while date < date!(2025 - 01 - 01) {
            let grid = MonthGrid::new(date, Weekday::Sunday).expect("grid should build");
            assert_eq!(grid.cell_count() % 7, 0, "ragged grid for {date}");
            date = grid
                .span()
                .end()
                .next_day()
                .expect("next month should exist");
        }
    }

    #[test]
    fn test_date_at_covers_fillers() {
        let grid =
            MonthGrid::new(date!(2024 - 01 - 01), Weekday::Sunday).expect("grid should build");
        assert_eq!(grid.date_at(0), Some(date!(2023 - 12 - 31)));
        assert_eq!(grid.date_at(1), Some(date!(2024 - 01 - 01)));
        assert_eq!(grid.date_at(31), Some(date!(2024 - 01 - 31)));
        assert_eq!(grid.date_at(32), Some(date!(2024 - 02 - 01)));
        assert_eq!(grid.date_at(34), Some(date!(2024 - 02 - 03)));
        assert_eq!(grid.date_at(35), None);
    }

    #[test]
    fn test_days_are_consecutive() {
        let grid =
            MonthGrid::new(date!(2024 - 03 - 10), Weekday::Sunday).expect("grid should build");
        let leading = grid.leading_filler_count();
        let mut expected = date!(2024 - 03 - 01);
        for cell in leading..leading + usize::from(grid.days_in_month()) {
            assert_eq!(grid.date_at(cell), Some(expected));
            expected = expected.next_day().expect("date should have a successor");
        }
    }

    #[test]
    fn test_cell_for_day_inverts_date_at() {
        let grid =
            MonthGrid::new(date!(2024 - 01 - 01), Weekday::Sunday).expect("grid should build");
        for day in 1..=grid.days_in_month() {
            let cell = grid.cell_for_day(day);
            let date = grid.date_at(cell).expect("cell should be in range");
            assert_eq!(date.day(), day);
            assert!(grid.contains(date));
        }
    }

    #[test]
    fn test_contains_excludes_fillers() {
        let grid =
            MonthGrid::new(date!(2024 - 01 - 01), Weekday::Sunday).expect("grid should build");
        assert!(grid.contains(date!(2024 - 01 - 01)));
        assert!(grid.contains(date!(2024 - 01 - 31)));
        assert!(!grid.contains(date!(2023 - 12 - 31)));
        assert!(!grid.contains(date!(2024 - 02 - 01)));
    }

    #[test]
    fn test_span() {
        let grid =
            MonthGrid::new(date!(2024 - 02 - 10), Weekday::Sunday).expect("grid should build");
        assert_eq!(grid.span().start(), date!(2024 - 02 - 01));
        assert_eq!(grid.span().end(), date!(2024 - 02 - 29));
    }

    #[test]
    fn test_calendar_edge_is_an_error() {
        assert_eq!(
            MonthGrid::new(date!(9999 - 12 - 01), Weekday::Sunday),
            Err(OutOfCalendarError(date!(9999 - 12 - 01)))
        );
    }

    #[test]
    fn test_days_since() {
        assert_eq!(Weekday::Monday.days_since(Weekday::Sunday), 1);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Sunday), 0);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Saturday.days_since(Weekday::Monday), 5);
    }
}

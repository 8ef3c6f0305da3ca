use crate::grid::{MonthGrid, OutOfCalendarError};
use crate::span::DaySpan;
use time::error::IndeterminateOffset;
use time::{Date, OffsetDateTime, Weekday};

/// Calendar rules the picker is constructed with: which weekday starts a
/// week, and which day counts as "today" when computing day state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PickerConfig {
    /// First day of the week in the rendered grids.
    pub first_weekday: Weekday,
    /// The day flagged as today.
    pub today: Date,
}

impl PickerConfig {
    /// Creates a config with an explicit "today".
    pub fn new(first_weekday: Weekday, today: Date) -> PickerConfig {
        PickerConfig {
            first_weekday,
            today,
        }
    }

    /// Creates a config whose "today" is taken from the local clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the local UTC offset cannot be determined.
    pub fn for_today(first_weekday: Weekday) -> Result<PickerConfig, IndeterminateOffset> {
        let today = OffsetDateTime::now_local()?.date();
        Ok(PickerConfig {
            first_weekday,
            today,
        })
    }
}

/// Position of one rendered day cell: which month grid it belongs to and
/// which cell within that grid, fillers included.
///
/// The derived ordering is lexicographic (month first), which coincides
/// with chronological order of the underlying cells.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct GridCoord {
    /// Index into the picker's month list.
    pub month: usize,
    /// Cell index within the month grid.
    pub cell: usize,
}

impl GridCoord {
    /// Creates a coordinate from a month index and a cell index.
    pub fn new(month: usize, cell: usize) -> GridCoord {
        GridCoord { month, cell }
    }
}

/// Display state of a single day cell.  The flags are independent bits:
/// a day can be both `today` and `selected`, and a filler cell that lies
/// between the two selected endpoints is both `filler` and `selected`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DayFlags {
    /// The cell shows the current day (never set on fillers).
    pub today: bool,
    /// The cell lies within the selected range (endpoints included).
    pub selected: bool,
    /// The cell is the selection's start endpoint.
    pub selected_start: bool,
    /// The cell is the selection's end endpoint.  Also set on a lone
    /// start endpoint, which visually closes its own range.
    pub selected_end: bool,
    /// The cell's date is outside the picker's bounding range.
    pub unselectable: bool,
    /// The cell pads the grid and shows a date from an adjacent month.
    pub filler: bool,
}

/// A day cell resolved on demand from a [`GridCoord`]: its calendar date
/// plus the flags the presentation layer renders from.  Never cached;
/// re-query after every mutation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Day {
    /// The calendar date shown in the cell.
    pub date: Date,
    /// The cell's display flags.
    pub flags: DayFlags,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Selection {
    start: Option<GridCoord>,
    end: Option<GridCoord>,
}

/// The date-range picker model: a bounded interval expanded into month
/// grids, plus a two-endpoint selection driven by taps.
///
/// The month list and bounding range are immutable after construction;
/// the selection is the only mutable state and changes only through
/// [`DateRangePicker::handle_tap`], [`DateRangePicker::select_span`],
/// and [`DateRangePicker::clear`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DateRangePicker {
    months: Vec<MonthGrid>,
    bounds: DaySpan,
    today: Date,
    selection: Selection,
}

impl DateRangePicker {
    /// Builds the picker for the given bounding range.
    ///
    /// One grid is built per calendar month intersecting `bounds`,
    /// earliest first.  If `initial` is given, its endpoints are
    /// resolved to coordinates independently; an endpoint whose date
    /// lies outside every grid is silently left unset.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfCalendarError`] if a month grid would extend past
    /// the representable calendar range.
    pub fn new(
        bounds: DaySpan,
        initial: Option<DaySpan>,
        config: PickerConfig,
    ) -> Result<DateRangePicker, OutOfCalendarError> {
        let stop = month_start(bounds.start())?;
        let mut cursor = month_start(bounds.end())?;
        // Walk backward from the final month to the first, then flip to
        // chronological order.
        let mut months = Vec::new();
        loop {
            months.push(MonthGrid::new(cursor, config.first_weekday)?);
            if cursor == stop {
                break;
            }
            let prev = cursor.previous_day().ok_or(OutOfCalendarError(cursor))?;
            cursor = month_start(prev)?;
        }
        months.reverse();
        let mut picker = DateRangePicker {
            months,
            bounds,
            today: config.today,
            selection: Selection::default(),
        };
        if let Some(span) = initial {
            picker.select_span(span);
        }
        Ok(picker)
    }

    /// The bounding range the picker was built with.
    pub fn bounds(&self) -> DaySpan {
        self.bounds
    }

    /// The day flagged as today.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Number of month grids.
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// The month grid at the given index.
    pub fn month(&self, index: usize) -> Option<&MonthGrid> {
        self.months.get(index)
    }

    /// All month grids, earliest first.
    pub fn months(&self) -> &[MonthGrid] {
        &self.months
    }

    /// Resolves a date to the coordinate of its cell in the owning
    /// month's grid, or `None` if no grid's month contains the date.
    ///
    /// Filler cells are never returned: a date resolves into the grid of
    /// its own month even when it is also visible as a filler next door.
    pub fn coordinate_for(&self, date: Date) -> Option<GridCoord> {
        self.months.iter().enumerate().find_map(|(month, grid)| {
            grid.contains(date).then(|| GridCoord {
                month,
                cell: grid.cell_for_day(date.day()),
            })
        })
    }

    /// Computes the display state of the cell at `coord`, or `None` if
    /// the coordinate does not address a cell.
    pub fn day_state(&self, coord: GridCoord) -> Option<Day> {
        let grid = self.months.get(coord.month)?;
        let date = grid.date_at(coord.cell)?;
        let Selection { start, end } = self.selection;
        let filler = !grid.contains(date);
        let unselectable = !self.bounds.contains(date);
        let today = date == self.today && !filler;
        let selected_start = start == Some(coord);
        // A lone start endpoint closes its own range.
        let selected_end = end == Some(coord) || (selected_start && end.is_none());
        let within = matches!((start, end), (Some(s), Some(e)) if s <= coord && coord <= e);
        let selected = selected_start || selected_end || within;
        Some(Day {
            date,
            flags: DayFlags {
                today,
                selected,
                selected_start,
                selected_end,
                unselectable,
                filler,
            },
        })
    }

    /// Applies a user tap at the given coordinate.
    ///
    /// Taps on filler or unselectable cells (and coordinates that do not
    /// address a cell at all) leave the selection untouched.  Otherwise:
    /// a tap with a full range active starts a new selection; a tap with
    /// no start sets it; a tap after a lone start completes the range;
    /// and a tap at or before a lone start restarts the selection there.
    /// Re-tapping the start day itself keeps it as a fresh lone start
    /// rather than closing a single-day range.
    pub fn handle_tap(&mut self, coord: GridCoord) {
        let Some(day) = self.day_state(coord) else {
            return;
        };
        if day.flags.filler || day.flags.unselectable {
            return;
        }
        self.selection = match self.selection {
            Selection {
                start: Some(_),
                end: Some(_),
            }
            | Selection { start: None, .. } => Selection {
                start: Some(coord),
                end: None,
            },
            Selection {
                start: Some(s),
                end: None,
            } if coord > s => Selection {
                start: Some(s),
                end: Some(coord),
            },
            Selection { start: Some(_), .. } => Selection {
                start: Some(coord),
                end: None,
            },
        };
    }

    /// Replaces the selection with the given span, resolving each
    /// endpoint like the `initial` argument of [`DateRangePicker::new`]:
    /// an endpoint outside every grid stays unset.
    pub fn select_span(&mut self, span: DaySpan) {
        self.selection = Selection {
            start: self.coordinate_for(span.start()),
            end: self.coordinate_for(span.end()),
        };
    }

    /// Unsets both selection endpoints.
    pub fn clear(&mut self) {
        self.selection = Selection::default();
    }

    /// The date of the selection's start endpoint, if set.
    pub fn selected_start_date(&self) -> Option<Date> {
        self.date_for(self.selection.start?)
    }

    /// The date of the selection's end endpoint, if set.
    pub fn selected_end_date(&self) -> Option<Date> {
        self.date_for(self.selection.end?)
    }

    /// The finished selection.  `Some` only when both endpoints are set.
    pub fn selected_span(&self) -> Option<DaySpan> {
        let start = self.selected_start_date()?;
        let end = self.selected_end_date()?;
        Some(DaySpan::ordered(start, end))
    }

    fn date_for(&self, coord: GridCoord) -> Option<Date> {
        self.months.get(coord.month)?.date_at(coord.cell)
    }
}

fn month_start(date: Date) -> Result<Date, OutOfCalendarError> {
    date.replace_day(1).map_err(|_| OutOfCalendarError(date))
}

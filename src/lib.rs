//! Calendar month-grid model for two-endpoint date-range pickers.
//!
//! `rangepick` turns a bounded day interval into a list of month grids
//! aligned to 7-column weeks, tracks a start/end selection driven by
//! taps on grid coordinates, and computes per-cell display state on
//! demand.  It contains no rendering: a presentation layer queries
//! [`DateRangePicker::day_state`] for each cell it draws, forwards user
//! taps to [`DateRangePicker::handle_tap`], and reads the finished
//! selection from [`DateRangePicker::selected_span`].
//!
//! ```
//! use rangepick::{DateRangePicker, DaySpan, PickerConfig};
//! use time::{macros::date, Weekday};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bounds = DaySpan::new(date!(2024 - 01 - 01), date!(2024 - 03 - 31))?;
//! let config = PickerConfig::new(Weekday::Sunday, date!(2024 - 01 - 15));
//! let mut picker = DateRangePicker::new(bounds, None, config)?;
//!
//! let start = picker.coordinate_for(date!(2024 - 01 - 10)).expect("in range");
//! let end = picker.coordinate_for(date!(2024 - 01 - 20)).expect("in range");
//! picker.handle_tap(start);
//! assert_eq!(picker.selected_span(), None); // only the start is set
//! picker.handle_tap(end);
//! assert_eq!(
//!     picker.selected_span(),
//!     Some(DaySpan::new(date!(2024 - 01 - 10), date!(2024 - 01 - 20))?),
//! );
//! # Ok(())
//! # }
//! ```

mod fmt;
mod grid;
mod picker;
mod span;

pub use crate::fmt::short_date;
pub use crate::grid::{MonthGrid, OutOfCalendarError};
pub use crate::picker::{DateRangePicker, Day, DayFlags, GridCoord, PickerConfig};
pub use crate::span::{DaySpan, InvertedSpanError};

use std::fmt;
use thiserror::Error;
use time::Date;

/// An inclusive interval of calendar days.
///
/// Both the picker's bounding range and a finished selection are spans:
/// `start` is the first selectable/selected day and `end` the last one.
/// The two endpoints may coincide, giving a single-day span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DaySpan {
    start: Date,
    end: Date,
}

/// Error returned by [`DaySpan::new`] when the endpoints are out of order.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("span start {start} is after span end {end}")]
pub struct InvertedSpanError {
    /// The offending start day.
    pub start: Date,
    /// The offending end day.
    pub end: Date,
}

impl DaySpan {
    /// Creates a span from its first and last day.
    ///
    /// # Errors
    ///
    /// Returns [`InvertedSpanError`] if `start` is after `end`.
    pub fn new(start: Date, end: Date) -> Result<DaySpan, InvertedSpanError> {
        if start <= end {
            Ok(DaySpan { start, end })
        } else {
            Err(InvertedSpanError { start, end })
        }
    }

    /// Constructs a span from endpoints already known to be ordered.
    pub(crate) fn ordered(start: Date, end: Date) -> DaySpan {
        debug_assert!(start <= end, "span endpoints must be ordered");
        DaySpan { start, end }
    }

    /// The first day of the span.
    pub fn start(&self) -> Date {
        self.start
    }

    /// The last day of the span.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns true if `date` lies within the span.  Both endpoint days
    /// are inside.
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new_ordered() {
        let span = DaySpan::new(date!(2024 - 01 - 01), date!(2024 - 01 - 31));
        assert_eq!(
            span,
            Ok(DaySpan {
                start: date!(2024 - 01 - 01),
                end: date!(2024 - 01 - 31),
            })
        );
    }

    #[test]
    fn test_new_single_day() {
        let span = DaySpan::new(date!(2024 - 01 - 07), date!(2024 - 01 - 07));
        assert!(span.is_ok());
    }

    #[test]
    fn test_new_inverted() {
        let span = DaySpan::new(date!(2024 - 01 - 31), date!(2024 - 01 - 01));
        assert_eq!(
            span,
            Err(InvertedSpanError {
                start: date!(2024 - 01 - 31),
                end: date!(2024 - 01 - 01),
            })
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let span = DaySpan::ordered(date!(2024 - 01 - 10), date!(2024 - 01 - 20));
        assert!(span.contains(date!(2024 - 01 - 10)));
        assert!(span.contains(date!(2024 - 01 - 15)));
        assert!(span.contains(date!(2024 - 01 - 20)));
        assert!(!span.contains(date!(2024 - 01 - 09)));
        assert!(!span.contains(date!(2024 - 01 - 21)));
    }

    #[test]
    fn test_display() {
        let span = DaySpan::ordered(date!(2024 - 01 - 10), date!(2024 - 02 - 03));
        assert_eq!(span.to_string(), "2024-01-10/2024-02-03");
    }
}

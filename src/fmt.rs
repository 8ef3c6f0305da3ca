use time::{Date, Month};

/// Formats a date as the short "MMM dd" label shown next to each
/// selected endpoint, e.g. "Jan 05".
pub fn short_date(date: Date) -> String {
    format!("{} {:02}", short_month(date.month()), date.day())
}

fn short_month(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

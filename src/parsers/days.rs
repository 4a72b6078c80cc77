//! Day-of-week expressions such as `MWF`, `TuTh` or `Sat Sun`

use chrono::Weekday;
use regex::Regex;
use std::sync::OnceLock;

/// Monday through Friday
pub const WEEKDAYS: [Weekday; 5] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];

/// Sunday through Saturday
pub const FULL_WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Monday through Sunday
pub const FULL_WEEK_MON: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Pattern searched for in a day expression, per weekday (Sunday first)
const DAY_PATTERNS: [(Weekday, &str); 7] = [
    (Weekday::Sun, "Sun?"),
    (Weekday::Mon, "M(on?)?"),
    (Weekday::Tue, "T(ue?)?"),
    (Weekday::Wed, "W(ed?)?"),
    (Weekday::Thu, "Thu?|H|R"),
    (Weekday::Fri, "F(ri?)?"),
    (Weekday::Sat, "Sat?"),
];

fn day_regexes() -> &'static [(Weekday, Regex)] {
    static RES: OnceLock<Vec<(Weekday, Regex)>> = OnceLock::new();
    RES.get_or_init(|| {
        DAY_PATTERNS
            .iter()
            .map(|&(day, pat)| (day, Regex::new(pat).expect("valid regex")))
            .collect()
    })
}

/// Days named anywhere in `expr`, in Sunday-first order.
///
/// Matching is case-sensitive and unanchored, so `"TTh"` yields Tuesday and
/// Thursday.
pub fn parse_days(expr: &str) -> Vec<Weekday> {
    day_regexes()
        .iter()
        .filter(|(_, re)| re.is_match(expr))
        .map(|(day, _)| *day)
        .collect()
}

/// Column order for the displayed week
pub fn week(start_monday: bool, weekends: bool) -> &'static [Weekday] {
    match (weekends, start_monday) {
        (false, _) => &WEEKDAYS,
        (true, true) => &FULL_WEEK_MON,
        (true, false) => &FULL_WEEK,
    }
}

//! The week being typeset

use chrono::Weekday;
use std::collections::HashMap;
use std::fmt;

use super::Event;

/// Projection from a day identifier to its header text
pub struct DayNames(Box<dyn Fn(Weekday) -> String>);

impl DayNames {
    /// Full English names ("Monday", ...)
    pub fn english() -> Self {
        Self(Box::new(|d| english_name(d).to_string()))
    }

    pub fn from_fn(f: impl Fn(Weekday) -> String + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Lookup table; days missing from the table fall back to English.
    pub fn from_map(map: HashMap<Weekday, String>) -> Self {
        Self(Box::new(move |d| {
            map.get(&d)
                .cloned()
                .unwrap_or_else(|| english_name(d).to_string())
        }))
    }

    pub fn name(&self, day: Weekday) -> String {
        (self.0)(day)
    }
}

impl Default for DayNames {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for DayNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DayNames(..)")
    }
}

pub(crate) fn english_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Ordered day columns plus the events drawn into them.
///
/// Column order is whatever the caller supplies. Events keep insertion
/// order, which is also the order they are drawn in.
#[derive(Debug, Default)]
pub struct Schedule {
    days: Vec<Weekday>,
    events: Vec<Event>,
    day_names: DayNames,
}

impl Schedule {
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        Self::with_day_names(days, DayNames::default())
    }

    pub fn with_day_names(days: impl IntoIterator<Item = Weekday>, day_names: DayNames) -> Self {
        Self {
            days: days.into_iter().collect(),
            events: Vec::new(),
            day_names,
        }
    }

    pub fn add_event(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    /// Events occurring on `day`, in insertion order
    pub fn events_on_day(&self, day: Weekday) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.occurs_on(day))
    }

    /// Header text for each column, in column order
    pub fn day_names(&self) -> impl Iterator<Item = String> + '_ {
        self.days.iter().map(|&d| self.day_names.name(d))
    }

    pub fn number_of_days(&self) -> usize {
        self.days.len()
    }
}

impl Extend<Event> for Schedule {
    fn extend<T: IntoIterator<Item = Event>>(&mut self, iter: T) {
        self.events.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;
    use chrono::NaiveTime;

    fn event(h1: u32, h2: u32, name: &str, days: &[Weekday]) -> Event {
        Event::new(
            NaiveTime::from_hms_opt(h1, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(h2, 0, 0).unwrap(),
            vec![name.to_string()],
            Rgb::GREY,
            days.iter().copied(),
        )
        .unwrap()
    }

    #[test]
    fn test_events_on_day_keeps_insertion_order() {
        let mut sched = Schedule::new([Weekday::Mon, Weekday::Tue]);
        sched.add_event(event(13, 14, "late", &[Weekday::Mon]));
        sched.add_event(event(9, 10, "early", &[Weekday::Mon, Weekday::Tue]));
        sched.add_event(event(11, 12, "tue only", &[Weekday::Tue]));

        let mon: Vec<&str> = sched
            .events_on_day(Weekday::Mon)
            .map(|e| e.text()[0].as_str())
            .collect();
        assert_eq!(mon, vec!["late", "early"]);

        let tue: Vec<&str> = sched
            .events_on_day(Weekday::Tue)
            .map(|e| e.text()[0].as_str())
            .collect();
        assert_eq!(tue, vec!["early", "tue only"]);
    }

    #[test]
    fn test_events_on_absent_day() {
        let mut sched = Schedule::new([Weekday::Mon]);
        sched.add_event(event(9, 10, "sat", &[Weekday::Sat]));
        assert_eq!(sched.events_on_day(Weekday::Mon).count(), 0);
        assert_eq!(sched.all_events().len(), 1);
    }

    #[test]
    fn test_default_day_names_english() {
        let sched = Schedule::new([Weekday::Sun, Weekday::Mon]);
        let names: Vec<String> = sched.day_names().collect();
        assert_eq!(names, vec!["Sunday", "Monday"]);
    }

    #[test]
    fn test_custom_day_names_fn() {
        let sched = Schedule::with_day_names(
            [Weekday::Mon, Weekday::Fri],
            DayNames::from_fn(|d| d.to_string().to_uppercase()),
        );
        let names: Vec<String> = sched.day_names().collect();
        assert_eq!(names, vec!["MON", "FRI"]);
    }

    #[test]
    fn test_day_names_map_falls_back() {
        let mut map = HashMap::new();
        map.insert(Weekday::Mon, "Lundi".to_string());
        let sched = Schedule::with_day_names([Weekday::Mon, Weekday::Tue], DayNames::from_map(map));
        let names: Vec<String> = sched.day_names().collect();
        assert_eq!(names, vec!["Lundi", "Tuesday"]);
    }

    #[test]
    fn test_number_of_days() {
        assert_eq!(Schedule::new(Vec::<Weekday>::new()).number_of_days(), 0);
        assert_eq!(Schedule::new([Weekday::Mon, Weekday::Tue]).number_of_days(), 2);
    }
}

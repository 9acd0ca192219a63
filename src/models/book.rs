//! ContactBook model: the name-keyed collection of records.

use crate::domain::{Phone, ValidationError};
use crate::models::Record;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Anniversaries further out than this many days are not upcoming.
const UPCOMING_WINDOW_DAYS: i64 = 7;

/// The contact book: a mapping from contact name to record.
///
/// One entry per unique name; adding a record under an existing name
/// replaces the prior record. The map itself is never exposed, only the
/// operations below. Iteration is in lexicographic name order, which
/// makes listing and grouping deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook {
    records: BTreeMap<String, Record>,
}

impl ContactBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its name. An existing record under the
    /// same name is replaced (last write wins).
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with the given name. Returns whether a removal
    /// occurred.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Replace the named record's entire phone list with the single given
    /// phone.
    ///
    /// Unlike `Record::edit_phone`, which swaps one number for another,
    /// this drops every stored phone in favor of the new one. Returns
    /// `Ok(false)` when the name is absent; the phone is only validated
    /// once the record has been found.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidPhone` for an invalid
    /// `new_phone`.
    pub fn edit_phone(&mut self, name: &str, new_phone: &str) -> Result<bool, ValidationError> {
        match self.records.get_mut(name) {
            Some(record) => {
                record.replace_phones(Phone::new(new_phone)?);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Set the named record's birthday through the record's non-fatal
    /// validation.
    ///
    /// Returns whether the record was found. A found record reports
    /// success even when the value was rejected and discarded; the
    /// rejection is only visible in the log and by re-querying state.
    pub fn add_birthday(&mut self, name: &str, birthday: &str) -> bool {
        match self.records.get_mut(name) {
            Some(record) => {
                record.add_birthday(birthday);
                true
            }
            None => false,
        }
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Group the contacts whose next birthday anniversary falls within
    /// the coming week, keyed by the weekday to congratulate them on.
    ///
    /// For each record with a birthday the anniversary is taken in the
    /// current year, rolling to next year when it has already passed.
    /// A record is included when the anniversary is strictly less than
    /// seven days away (an anniversary today counts). Anniversaries on
    /// Saturday or Sunday are congratulated on the following Monday; the
    /// shift affects only the grouping, not the window test.
    ///
    /// Groups appear in order of first occurrence, names within a group
    /// in book iteration order. The caller renders one line per group.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<(String, Vec<String>)> {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };
            let Some(anniversary) = next_anniversary(birthday.date(), today) else {
                continue;
            };

            let delta_days = (anniversary - today).num_days();
            if delta_days >= UPCOMING_WINDOW_DAYS {
                continue;
            }

            let weekday = weekday_name(congratulation_day(anniversary).weekday());
            let name = record.name().as_str().to_string();
            match groups.iter_mut().find(|(day, _)| day == weekday) {
                Some((_, names)) => names.push(name),
                None => groups.push((weekday.to_string(), vec![name])),
            }
        }

        groups
    }

    /// `upcoming_birthdays` for the current local date.
    pub fn birthdays_in_next_week(&self) -> Vec<(String, Vec<String>)> {
        self.upcoming_birthdays(Local::now().date_naive())
    }
}

/// The next occurrence of the birthday's month/day on or after `today`.
///
/// A Feb 29 birthday resolves to Mar 1 in years where the 29th does not
/// exist. Returns `None` only if the date cannot be represented at all.
fn next_anniversary(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(today.year(), birthday)?;
    if this_year < today {
        anniversary_in(today.year() + 1, birthday)
    } else {
        Some(this_year)
    }
}

fn anniversary_in(year: i32, birthday: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Weekend anniversaries are congratulated on the following Monday.
fn congratulation_day(anniversary: NaiveDate) -> NaiveDate {
    match anniversary.weekday() {
        Weekday::Sat => anniversary + Days::new(2),
        Weekday::Sun => anniversary + Days::new(1),
        _ => anniversary,
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str) -> Record {
        let mut record = Record::new(name).unwrap();
        record.add_phone(phone);
        record
    }

    #[test]
    fn test_add_and_find() {
        let mut book = ContactBook::new();
        book.add_record(record("John", "0501234567"));

        let found = book.find("John").unwrap();
        assert_eq!(found.name().as_str(), "John");
        assert_eq!(found.phones()[0].as_str(), "0501234567");
        assert!(book.find("Jane").is_none());
    }

    #[test]
    fn test_add_record_overwrites_by_name() {
        let mut book = ContactBook::new();
        let mut first = record("John", "0501234567");
        first.add_birthday("15.06.1990");
        book.add_record(first);
        book.add_record(record("John", "0679876543"));

        assert_eq!(book.len(), 1);
        let found = book.find("John").unwrap();
        assert_eq!(found.phones().len(), 1);
        assert_eq!(found.phones()[0].as_str(), "0679876543");
        assert!(found.birthday().is_none());
    }

    #[test]
    fn test_delete() {
        let mut book = ContactBook::new();
        book.add_record(record("John", "0501234567"));

        assert!(book.delete("John"));
        assert!(book.is_empty());
        assert!(!book.delete("John"));
    }

    #[test]
    fn test_delete_on_empty_book() {
        let mut book = ContactBook::new();
        assert!(!book.delete("Ghost"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_edit_phone_replaces_whole_list() {
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_phone("0679876543");
        book.add_record(john);

        assert_eq!(book.edit_phone("John", "0931112233"), Ok(true));
        let phones = book.find("John").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "0931112233");
    }

    #[test]
    fn test_edit_phone_missing_name() {
        let mut book = ContactBook::new();
        assert_eq!(book.edit_phone("Ghost", "0931112233"), Ok(false));
    }

    #[test]
    fn test_edit_phone_invalid_propagates() {
        let mut book = ContactBook::new();
        book.add_record(record("John", "0501234567"));

        let result = book.edit_phone("John", "123");
        assert_eq!(
            result,
            Err(ValidationError::InvalidPhone("123".to_string()))
        );
        // The record is untouched on a fatal validation failure.
        assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "0501234567");
    }

    #[test]
    fn test_edit_phone_invalid_for_missing_name_is_not_an_error() {
        // Lookup happens before validation, mirroring the operation's
        // found-then-validate order.
        let mut book = ContactBook::new();
        assert_eq!(book.edit_phone("Ghost", "123"), Ok(false));
    }

    #[test]
    fn test_add_birthday() {
        let mut book = ContactBook::new();
        book.add_record(record("John", "0501234567"));

        assert!(book.add_birthday("John", "15.06.1990"));
        assert_eq!(
            book.find("John").unwrap().birthday().unwrap().as_str(),
            "15.06.1990"
        );
        assert!(!book.add_birthday("Ghost", "15.06.1990"));
    }

    #[test]
    fn test_add_birthday_invalid_still_reports_found() {
        let mut book = ContactBook::new();
        book.add_record(record("John", "0501234567"));

        assert!(book.add_birthday("John", "31.02.2024"));
        assert!(book.find("John").unwrap().birthday().is_none());
    }

    #[test]
    fn test_upcoming_birthdays_weekday_grouping() {
        // Wednesday. A Friday anniversary two days out stays under Friday.
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_birthday("14.06.1985");
        book.add_record(john);

        let groups = book.upcoming_birthdays(today);
        assert_eq!(groups, vec![("Friday".to_string(), vec!["John".to_string()])]);
    }

    #[test]
    fn test_upcoming_birthdays_weekend_shifts_to_monday() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut book = ContactBook::new();
        let mut sat = record("Alice", "0501234567");
        sat.add_birthday("15.06.1990"); // Saturday, delta 3
        book.add_record(sat);
        let mut sun = record("Bob", "0679876543");
        sun.add_birthday("16.06.1988"); // Sunday, delta 4
        book.add_record(sun);

        let groups = book.upcoming_birthdays(today);
        assert_eq!(
            groups,
            vec![(
                "Monday".to_string(),
                vec!["Alice".to_string(), "Bob".to_string()]
            )]
        );
    }

    #[test]
    fn test_upcoming_birthdays_today_is_included() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_birthday("12.06.1990");
        book.add_record(john);

        let groups = book.upcoming_birthdays(today);
        assert_eq!(
            groups,
            vec![("Wednesday".to_string(), vec!["John".to_string()])]
        );
    }

    #[test]
    fn test_upcoming_birthdays_window_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut book = ContactBook::new();
        let mut inside = record("Ina", "0501234567");
        inside.add_birthday("18.06.1990"); // delta 6
        book.add_record(inside);
        let mut outside = record("Otto", "0679876543");
        outside.add_birthday("19.06.1990"); // delta 7
        book.add_record(outside);

        let groups = book.upcoming_birthdays(today);
        assert_eq!(
            groups,
            vec![("Tuesday".to_string(), vec!["Ina".to_string()])]
        );
    }

    #[test]
    fn test_upcoming_birthdays_passed_date_rolls_to_next_year() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_birthday("11.06.1990"); // passed yesterday, next June 2025
        book.add_record(john);

        assert!(book.upcoming_birthdays(today).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_across_year_end() {
        // Monday 2024-12-30; Jan 2 anniversary is three days into 2025.
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_birthday("02.01.1990");
        book.add_record(john);

        let groups = book.upcoming_birthdays(today);
        assert_eq!(
            groups,
            vec![("Thursday".to_string(), vec!["John".to_string()])]
        );
    }

    #[test]
    fn test_upcoming_birthdays_ignores_records_without_birthday() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let mut book = ContactBook::new();
        book.add_record(record("John", "0501234567"));

        assert!(book.upcoming_birthdays(today).is_empty());
    }

    #[test]
    fn test_upcoming_birthdays_feb_29_in_non_leap_year() {
        // 2025 has no Feb 29; the anniversary resolves to Mar 1 (Saturday),
        // which is congratulated on Monday.
        let today = NaiveDate::from_ymd_opt(2025, 2, 26).unwrap();
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_birthday("29.02.2000");
        book.add_record(john);

        let groups = book.upcoming_birthdays(today);
        assert_eq!(groups, vec![("Monday".to_string(), vec!["John".to_string()])]);
    }

    #[test]
    fn test_book_roundtrips_through_json() {
        let mut book = ContactBook::new();
        let mut john = record("John", "0501234567");
        john.add_phone("0679876543");
        john.add_birthday("15.06.1990");
        book.add_record(john);
        book.add_record(record("Jane", "0931112233"));

        let json = serde_json::to_string(&book).unwrap();
        let restored: ContactBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
    }
}

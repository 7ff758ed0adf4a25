use std::slice::Iter;

use chrono::NaiveDate;

use super::{Error, MenuEntry};
use crate::parse::{extract_section, Section, WeekdayLabels};

/// Every menu entry found on the page, sorted by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyMenu {
    entries: Vec<MenuEntry>,
}

impl WeeklyMenu {
    /// Extracts the entries of every section and orders them by date.
    ///
    /// A section whose header has no usable week number is skipped with a warning.
    /// Entries sharing a date keep the order they were found in.
    pub fn build(sections: &[Section], year: i32, labels: WeekdayLabels) -> Self {
        let mut entries = Vec::new();
        for (i, section) in sections.iter().enumerate() {
            match extract_section(section, year, labels) {
                Ok(found) => entries.extend(found),
                Err(e) => log::warn!("Skipping menu section {i}: {e}"),
            }
        }
        Self::from_entries(entries)
    }

    pub fn from_entries(mut entries: Vec<MenuEntry>) -> Self {
        entries.sort_by_key(MenuEntry::date);
        Self { entries }
    }

    /// The entry dated on `date` together with its position in the week.
    pub fn today(&self, date: NaiveDate) -> Result<(usize, &MenuEntry), Error> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.date() == date)
            .ok_or(Error::NotFound(date))
    }

    /// The entry following the one at `today_index`.
    ///
    /// Fails on the last entry of the week, the page holds no data beyond it.
    pub fn next(&self, today_index: usize) -> Result<&MenuEntry, Error> {
        today_index
            .checked_add(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(Error::IndexOutOfRange {
                index: today_index,
                len: self.entries.len(),
            })
    }

    pub fn iter(&self) -> Iter<MenuEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

use std::str::FromStr;

use crate::menu::MenuEntry;

use super::week::{extract_week_number, weekday_to_date};
use super::Error;

/// The set of weekday headings recognized on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekdayLabels {
    #[default]
    Norwegian,
    English,
}

impl WeekdayLabels {
    pub const fn labels(self) -> [&'static str; 5] {
        match self {
            Self::Norwegian => ["Mandag", "Tirsdag", "Onsdag", "Torsdag", "Fredag"],
            Self::English => ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
        }
    }

    /// Monday is 0. Only exact matches count.
    pub fn weekday_index(self, label: &str) -> Option<u8> {
        self.labels()
            .iter()
            .position(|x| *x == label)
            .and_then(|i| u8::try_from(i).ok())
    }
}

impl FromStr for WeekdayLabels {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "no" | "nb" | "norwegian" => Ok(Self::Norwegian),
            "en" | "english" => Ok(Self::English),
            _ => Err(format!("unknown weekday language {s:?}")),
        }
    }
}

/// Pairs every weekday heading of a section with the two widgets following it.
///
/// The layout of a section is `[week header, day, menu, allergens, day, menu, allergens, ...]`.
/// Widgets missing at the end of a section are replaced with the missing-text placeholders.
/// Fails only when the header does not carry a week number of `year`.
pub fn extract_section(
    blocks: &[String],
    year: i32,
    labels: WeekdayLabels,
) -> Result<Vec<MenuEntry>, Error> {
    let header = blocks
        .first()
        .ok_or_else(|| Error::week_number_error("section has no header"))?;
    let week = extract_week_number(header)?;

    blocks
        .iter()
        .enumerate()
        .filter_map(|(i, text)| labels.weekday_index(text).map(|day| (i, text, day)))
        .map(|(i, label, day)| {
            let date = weekday_to_date(year, week, day).ok_or_else(|| {
                Error::WeekNumber(format!("week {week} does not exist in {year}"))
            })?;
            let menu_text = blocks.get(i + 1).map(String::as_str);
            let allergen_text = blocks.get(i + 2).map(String::as_str);
            Ok(MenuEntry::new(date, label.as_str(), menu_text, allergen_text))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::menu::{ALLERGENS_MISSING, MENU_MISSING};

    fn section(texts: &[&str]) -> Vec<String> {
        texts.iter().map(ToString::to_string).collect()
    }

    fn full_week(header: &str) -> Vec<String> {
        let mut blocks = vec![header.to_string()];
        for day in WeekdayLabels::Norwegian.labels() {
            blocks.push(day.to_string());
            blocks.push(format!("{day} mat"));
            blocks.push(format!("{day} allergener"));
        }
        blocks
    }

    #[test]
    fn test_weekday_index() {
        let labels = WeekdayLabels::Norwegian;
        assert_eq!(labels.weekday_index("Mandag"), Some(0));
        assert_eq!(labels.weekday_index("Fredag"), Some(4));
        assert_eq!(labels.weekday_index("fredag"), None);
        assert_eq!(labels.weekday_index("Lørdag"), None);
        assert_eq!(WeekdayLabels::English.weekday_index("Wednesday"), Some(2));
    }

    #[test]
    fn test_labels_from_str() {
        assert_eq!("en".parse::<WeekdayLabels>(), Ok(WeekdayLabels::English));
        assert_eq!("NO".parse::<WeekdayLabels>(), Ok(WeekdayLabels::Norwegian));
        assert!("de".parse::<WeekdayLabels>().is_err());
    }

    #[test]
    fn test_full_section() {
        let blocks = full_week("Uke 12");
        assert_eq!(blocks.len(), 16);
        let entries = extract_section(&blocks, 2024, WeekdayLabels::Norwegian).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].date(), NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
        assert_eq!(entries[0].weekday_label(), "Mandag");
        assert_eq!(entries[0].menu_text(), "Mandag mat");
        assert_eq!(entries[0].allergen_text(), "Mandag allergener");
        assert_eq!(entries[4].date(), NaiveDate::from_ymd_opt(2024, 3, 22).unwrap());
        assert!(entries
            .iter()
            .all(|x| x.menu_text() != MENU_MISSING && x.allergen_text() != ALLERGENS_MISSING));
    }

    #[test]
    fn test_missing_trailing_blocks() {
        let mut blocks = full_week("Uke 12");
        blocks.pop();
        let entries = extract_section(&blocks, 2024, WeekdayLabels::Norwegian).unwrap();
        assert_eq!(entries[4].menu_text(), "Fredag mat");
        assert_eq!(entries[4].allergen_text(), ALLERGENS_MISSING);

        blocks.pop();
        let entries = extract_section(&blocks, 2024, WeekdayLabels::Norwegian).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[4].menu_text(), MENU_MISSING);
        assert_eq!(entries[4].allergen_text(), ALLERGENS_MISSING);
    }

    #[test]
    fn test_absent_weekday() {
        let blocks = section(&["Uke 12", "Onsdag", "Suppe", "Selleri"]);
        let entries = extract_section(&blocks, 2024, WeekdayLabels::Norwegian).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date(), NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
    }

    #[test]
    fn test_english_labels() {
        let blocks = section(&["Week 12", "Monday", "Soup", "Celery", "Mandag"]);
        let entries = extract_section(&blocks, 2024, WeekdayLabels::English).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weekday_label(), "Monday");
    }

    #[test]
    fn test_header_without_week() {
        let blocks = section(&["Ukens meny", "Mandag", "Suppe", "Selleri"]);
        assert!(matches!(
            extract_section(&blocks, 2024, WeekdayLabels::Norwegian),
            Err(Error::WeekNumber(_))
        ));
        assert!(matches!(
            extract_section(&[], 2024, WeekdayLabels::Norwegian),
            Err(Error::WeekNumber(_))
        ));
    }

    #[test]
    fn test_week_outside_year() {
        let blocks = section(&["Uke 53", "Mandag", "Suppe", "Selleri"]);
        assert!(matches!(
            extract_section(&blocks, 2024, WeekdayLabels::Norwegian),
            Err(Error::WeekNumber(_))
        ));
    }
}

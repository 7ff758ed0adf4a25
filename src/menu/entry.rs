use chrono::NaiveDate;

pub const MENU_MISSING: &str = "Menu missing.";
pub const ALLERGENS_MISSING: &str = "Allergens missing.";

/// The menu of a single weekday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    date: NaiveDate,
    weekday_label: String,
    menu_text: String,
    allergen_text: String,
}

impl MenuEntry {
    /// Missing texts are replaced with [`MENU_MISSING`] and [`ALLERGENS_MISSING`].
    pub fn new(
        date: NaiveDate,
        weekday_label: impl Into<String>,
        menu_text: Option<&str>,
        allergen_text: Option<&str>,
    ) -> Self {
        Self {
            date,
            weekday_label: weekday_label.into(),
            menu_text: menu_text.unwrap_or(MENU_MISSING).to_owned(),
            allergen_text: allergen_text.unwrap_or(ALLERGENS_MISSING).to_owned(),
        }
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday_label(&self) -> &str {
        &self.weekday_label
    }

    pub fn menu_text(&self) -> &str {
        &self.menu_text
    }

    pub fn allergen_text(&self) -> &str {
        &self.allergen_text
    }
}

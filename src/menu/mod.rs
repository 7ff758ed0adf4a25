mod entry;
mod error;
mod weekly_menu;

pub use entry::{MenuEntry, ALLERGENS_MISSING, MENU_MISSING};
pub use error::Error;
pub use weekly_menu::WeeklyMenu;

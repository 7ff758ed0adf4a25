use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use super::Error;

fn selector(cell: &'static OnceLock<Selector>, css: &'static str) -> &'static Selector {
    cell.get_or_init(|| match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("Error parsing static selector {css}: {e:?}"),
    })
}

pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s\s+").expect("regex should be valid"));
    re.replace_all(s, " ")
}

/// All text nodes below `element`, joined and with whitespace collapsed.
pub fn block_text(element: ElementRef) -> String {
    let text = element.text().collect::<String>();
    remove_excess_whitespace(text.trim()).into_owned()
}

/// One weekly menu container of the page, as its widget texts in document order.
pub type Section = Vec<String>;

/// Splits the menu page into its weekly menu sections.
///
/// Empty widgets are kept so the positional layout of a section is not shifted.
pub fn sections(document: &Html) -> Result<Vec<Section>, Error> {
    static SECTION: OnceLock<Selector> = OnceLock::new();
    static BLOCK: OnceLock<Selector> = OnceLock::new();
    let section_selector = selector(&SECTION, ".ukesmenyer");
    let block_selector = selector(&BLOCK, ".elementor-widget-container");

    let sections: Vec<Section> = document
        .select(section_selector)
        .map(|section| section.select(block_selector).map(block_text).collect())
        .collect();

    if sections.is_empty() {
        return Err(Error::html_parse_error(
            "The page should have at least one weekly menu section.",
        ));
    }
    Ok(sections)
}

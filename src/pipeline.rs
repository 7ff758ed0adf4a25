use chrono::{Datelike, NaiveDate};
use scraper::Html;

use crate::{
    config::Config,
    enrich::{enrich_or_fallback, Enricher, OpenAi, PromptKind},
    fetch::{make_client, menu_page},
    menu::WeeklyMenu,
    notify::{deliver, present, MessageSink, OutboundMessage, SlackWebhook},
    parse::{sections, WeekdayLabels},
};

/// Every menu on the page, dated within `year`.
pub fn weekly_menu(html: &str, year: i32, labels: WeekdayLabels) -> crate::Result<WeeklyMenu> {
    let document = Html::parse_document(html);
    let sections = sections(&document)?;
    let menu = WeeklyMenu::build(&sections, year, labels);
    if menu.is_empty() {
        log::warn!("No menus found in {} sections", sections.len());
    } else {
        log::info!("Found {} menus in {} sections", menu.len(), sections.len());
    }
    for entry in menu.iter() {
        log::debug!("{} {}: {}", entry.date(), entry.weekday_label(), entry.menu_text());
    }
    Ok(menu)
}

/// Builds the message for `today`. Nothing is enriched unless both today and the next day have a menu.
pub async fn compose<E: Enricher>(
    menu: &WeeklyMenu,
    today: NaiveDate,
    enricher: &E,
) -> crate::Result<OutboundMessage> {
    let (index, todays) = menu.today(today)?;
    let next = menu.next(index)?;

    let menu_text = enrich_or_fallback(enricher, PromptKind::Improve, todays.menu_text()).await;
    let summary = enrich_or_fallback(enricher, PromptKind::Summarize, next.menu_text()).await;
    let haiku = enricher.enrich(PromptKind::Haiku, todays.menu_text()).await;

    Ok(present(
        menu_text,
        todays.allergen_text(),
        summary,
        haiku,
        next,
    ))
}

/// Parses the page, composes the message for `today` and posts it once.
pub async fn post_menu<E: Enricher, S: MessageSink>(
    html: &str,
    today: NaiveDate,
    labels: WeekdayLabels,
    enricher: &E,
    sink: &S,
) -> crate::Result<()> {
    let menu = weekly_menu(html, today.year(), labels)?;
    let message = compose(&menu, today, enricher).await?;
    deliver(sink, &message).await
}

pub async fn run(config: &Config) -> crate::Result<()> {
    let client = make_client();
    let today = config.reference_date();
    log::info!("Posting menu for {today}");

    let html = menu_page(&client, &config.menu_url).await?;
    let enricher = OpenAi::new(client.clone(), config.openai.clone());
    let sink = SlackWebhook::new(client, config.slack_hook.clone());
    post_menu(&html, today, config.labels, &enricher, &sink).await
}

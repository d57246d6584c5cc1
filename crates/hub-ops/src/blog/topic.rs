use crate::db::WatchListing;
use crate::prelude::*;
use chrono::NaiveDate;
use itertools::Itertools;
use lazy_regex::regex;

/// The three article templates the blog generator rotates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum TopicKind {
    /// Best deals roundup for the currently hottest brand
    Brand,
    /// Price guide for the model with the highest deal score
    Price,
    /// "Is it worth it" analysis of the top listing
    Worth,
}

/// Picks the template for a run that didn't force one via `--topic`.
pub(crate) trait TopicPolicy {
    fn pick(&self, today: NaiveDate) -> TopicKind;
}

/// Advances through the templates once per day. A daily cron covers every
/// template over three days, and rerunning on the same day regenerates the
/// same article instead of rolling the dice again.
pub(crate) struct RotateByDate;

impl TopicPolicy for RotateByDate {
    fn pick(&self, today: NaiveDate) -> TopicKind {
        const CYCLE: [TopicKind; 3] = [TopicKind::Brand, TopicKind::Price, TopicKind::Worth];

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        let days = today.signed_duration_since(epoch).num_days();

        CYCLE[days.rem_euclid(3) as usize]
    }
}

/// Brands recognized in listing titles when the `brand` column is null.
/// Roughly ordered by how often they come up in the deal feeds.
const KNOWN_BRANDS: &[&str] = &[
    "Rolex",
    "Omega",
    "Tudor",
    "Seiko",
    "Grand Seiko",
    "Breitling",
    "Tag Heuer",
    "Cartier",
    "IWC",
    "Panerai",
    "Hamilton",
    "Tissot",
    "Casio",
    "Citizen",
    "Orient",
    "Longines",
    "Oris",
    "Nomos",
    "Zenith",
    "Jaeger-LeCoultre",
    "Vacheron Constantin",
    "Audemars Piguet",
    "Patek Philippe",
    "Hublot",
    "Richard Mille",
    "Apple Watch",
];

/// The brand of a listing: the `brand` column if the scraper filled it,
/// otherwise the first known brand mentioned in the title.
pub(crate) fn listing_brand(listing: &WatchListing) -> Option<&str> {
    listing
        .brand
        .as_deref()
        .or_else(|| brand_in_title(&listing.title))
}

fn brand_in_title(title: &str) -> Option<&'static str> {
    let title = title.to_lowercase();
    KNOWN_BRANDS
        .iter()
        .copied()
        .find(|brand| title.contains(&brand.to_lowercase()))
}

/// Up to ten brands by number of trending listings. Ties break by name so
/// that the ranking is stable across runs.
pub(crate) fn trending_brands(listings: &[WatchListing]) -> Vec<(String, usize)> {
    listings
        .iter()
        .filter_map(listing_brand)
        .counts()
        .into_iter()
        .sorted_by(|(a_brand, a_count), (b_brand, b_count)| {
            b_count.cmp(a_count).then_with(|| a_brand.cmp(b_brand))
        })
        .take(10)
        .map_collect(|(brand, count)| (brand.to_owned(), count))
}

/// Everything needed to prompt for and lay out one article.
#[derive(Debug)]
pub(crate) struct Topic {
    pub(crate) kind: TopicKind,

    /// The brand, model or watch the article is centered on.
    pub(crate) subject: String,

    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) keywords: String,

    /// The listings the article features, already narrowed down to the
    /// subject where the template calls for that.
    pub(crate) listings: Vec<WatchListing>,
}

/// Derives the article subject and metadata from the trending listings.
///
/// Every branch falls back to a well-known watch when the listings carry
/// too little data to derive a subject, so this never fails outright.
pub(crate) fn build_topic(kind: TopicKind, listings: Vec<WatchListing>) -> Topic {
    match kind {
        TopicKind::Brand => brand_topic(listings),
        TopicKind::Price => price_topic(listings),
        TopicKind::Worth => worth_topic(listings),
    }
}

fn brand_topic(listings: Vec<WatchListing>) -> Topic {
    let brand = trending_brands(&listings)
        .into_iter()
        .next()
        .map(|(brand, _)| brand)
        .or_else(|| listings.first().and_then(|listing| listing.brand.clone()))
        .unwrap_or_else(|| "Seiko".to_owned());

    let featured = listings
        .iter()
        .filter(|listing| {
            listing_brand(listing).is_some_and(|candidate| candidate.eq_ignore_ascii_case(&brand))
        })
        .take(10)
        .cloned()
        .collect();

    Topic {
        kind: TopicKind::Brand,
        title: format!("Best {brand} Deals This Week"),
        description: format!(
            "Find the best {brand} watch deals this week. Updated daily with \
             hand-picked deals from Reddit, eBay, WatchUSeek, and more."
        ),
        keywords: format!("{brand}, {brand} deals, {brand} watch, luxury watches, watch deals"),
        subject: brand,
        listings: featured,
    }
}

fn price_topic(listings: Vec<WatchListing>) -> Topic {
    let top = listings.first();

    let model = top
        .and_then(|listing| listing.model.clone())
        .filter(|model| !model.is_empty())
        .or_else(|| top.map(|listing| listing.title.truncate_chars(50).to_owned()))
        .filter(|model| !model.is_empty())
        .unwrap_or_else(|| "Rolex Submariner".to_owned());

    let needle = model.to_lowercase();
    let similar = listings
        .iter()
        .filter(|listing| {
            listing
                .model
                .as_deref()
                .is_some_and(|model| model.to_lowercase().contains(&needle))
                || listing.title.to_lowercase().contains(&needle)
        })
        .take(10)
        .cloned()
        .collect();

    Topic {
        kind: TopicKind::Price,
        title: format!("Price Guide: {model}"),
        description: format!(
            "Complete price guide for {model}. Compare prices across markets \
             and find the best deals."
        ),
        keywords: format!("{model} price, {model} value, watch pricing, luxury watch value"),
        subject: model,
        listings: similar,
    }
}

fn worth_topic(listings: Vec<WatchListing>) -> Topic {
    let watch = listings
        .first()
        .map(|listing| {
            regex!(r"^\[WTS\]\s*"i)
                .replace(&listing.title, "")
                .truncate_chars(60)
                .to_owned()
        })
        .filter(|watch| !watch.is_empty())
        .unwrap_or_else(|| "Omega Speedmaster".to_owned());

    let featured = listings.iter().take(5).cloned().collect();

    Topic {
        kind: TopicKind::Worth,
        title: format!("Is {watch} Worth It in 2026?"),
        description: format!(
            "Detailed analysis: Is {watch} worth buying in 2026? Price trends, \
             market analysis, and expert insights."
        ),
        keywords: format!("{watch}, watch review, worth it, luxury watch buying guide"),
        subject: watch,
        listings: featured,
    }
}

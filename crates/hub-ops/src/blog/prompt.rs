use super::topic::{Topic, TopicKind};
use crate::db::WatchListing;
use crate::util::slug::slugify;
use itertools::Itertools;

/// The site the generated articles link back to.
pub(crate) const SITE_URL: &str = "https://thehubdeals.com";

pub(crate) const SYSTEM_PROMPT: &str = "You are an expert watch journalist and SEO content \
    writer. Write engaging, informative blog posts optimized for search engines. Use natural \
    language, include relevant keywords, and structure content with clear headings.";

/// Renders the user prompt for the given topic. The templates spell out the
/// article structure, the deals to feature and the internal links, so the
/// model has no room to invent its own site URLs.
pub(crate) fn build_prompt(topic: &Topic) -> String {
    let deals_list = deals_list(&topic.listings);

    match topic.kind {
        TopicKind::Brand => format!(
            r#"Write a 600-800 word blog post titled "{title}".

**Target audience:** Watch enthusiasts looking for {brand} deals

**Content requirements:**
- Brief introduction to {brand} and why it's a great brand
- Highlight current market trends for {brand}
- Feature these deals (add context, explain why they're good):
{deals_list}
- Include tips for buying {brand} watches
- End with a call-to-action encouraging readers to browse more deals

**SEO keywords to include naturally:**
{keywords}

**Internal links to include:**
- Link to "deals" page: [Browse all {brand} deals]({site}/deals?brand={brand_slug})
- Link to homepage: [The Hub Deals]({site})

**Tone:** Friendly, informative, helpful. Write like an experienced watch collector sharing tips with a friend."#,
            title = topic.title,
            brand = topic.subject,
            keywords = topic.keywords,
            site = SITE_URL,
            brand_slug = slugify(&topic.subject),
        ),

        TopicKind::Price => format!(
            r#"Write a 600-800 word blog post titled "{title}".

**Target audience:** Buyers researching {model} pricing

**Content requirements:**
- Explain what affects {model} pricing (condition, year, box/papers, etc.)
- Current market price ranges (reference these deals as examples):
{deals_list}
- Price trends: Is it going up or down? Why?
- Best times/places to buy
- Red flags to watch out for
- End with actionable advice

**SEO keywords:**
{keywords}

**Internal links:**
- [Compare {model} prices]({site}/deals?search={model_slug})
- [The Hub Deals homepage]({site})

**Tone:** Expert but accessible. Think "helpful buyer's guide"."#,
            title = topic.title,
            model = topic.subject,
            keywords = topic.keywords,
            site = SITE_URL,
            model_slug = slugify(&topic.subject),
        ),

        TopicKind::Worth => format!(
            r#"Write a 600-800 word blog post titled "{title}".

**Target audience:** Someone considering buying this watch

**Content requirements:**
- Quick overview of the watch and its appeal
- Pros: What makes it great?
- Cons: Any downsides or concerns?
- Current market value and price trends
- Compare to alternatives
- Final verdict: Who is it best for?
- Feature this deal as an example:
{deals_list}

**SEO keywords:**
{keywords}

**Internal links:**
- [Browse similar watches]({site}/deals)
- [The Hub Deals]({site})

**Tone:** Balanced, honest review. Help the reader make an informed decision."#,
            title = topic.title,
            keywords = topic.keywords,
            site = SITE_URL,
        ),
    }
}

/// The featured deals as markdown bullet points for the prompt. Caps at
/// five lines, the model doesn't need fifty examples.
fn deals_list(listings: &[WatchListing]) -> String {
    listings
        .iter()
        .take(5)
        .map(|listing| {
            let price = match listing.price {
                Some(price) => format!("${price}"),
                None => "See listing".to_owned(),
            };
            let condition = listing.condition.as_deref().unwrap_or("Used");
            let source = listing.source.as_deref().unwrap_or("The Hub");

            format!("- {} — {price} ({condition}, via {source})", listing.title)
        })
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use expect_test::expect;

    fn listing(title: &str, price: Option<f64>) -> WatchListing {
        WatchListing {
            title: title.to_owned(),
            brand: None,
            model: None,
            price,
            condition: Some("Excellent".to_owned()),
            source: Some("Reddit".to_owned()),
            deal_score: Some(90.0),
            scraped_at: Utc::now(),
        }
    }

    fn topic(kind: TopicKind, subject: &str, title: &str, keywords: &str) -> Topic {
        Topic {
            kind,
            subject: subject.to_owned(),
            title: title.to_owned(),
            description: String::new(),
            keywords: keywords.to_owned(),
            listings: vec![listing("[WTS] Omega Speedmaster 3861", Some(3200.0))],
        }
    }

    #[test]
    fn brand_prompt() {
        let topic = topic(
            TopicKind::Brand,
            "Omega",
            "Best Omega Deals This Week",
            "Omega, Omega deals, Omega watch, luxury watches, watch deals",
        );

        expect![[r#"
            Write a 600-800 word blog post titled "Best Omega Deals This Week".

            **Target audience:** Watch enthusiasts looking for Omega deals

            **Content requirements:**
            - Brief introduction to Omega and why it's a great brand
            - Highlight current market trends for Omega
            - Feature these deals (add context, explain why they're good):
            - [WTS] Omega Speedmaster 3861 — $3200 (Excellent, via Reddit)
            - Include tips for buying Omega watches
            - End with a call-to-action encouraging readers to browse more deals

            **SEO keywords to include naturally:**
            Omega, Omega deals, Omega watch, luxury watches, watch deals

            **Internal links to include:**
            - Link to "deals" page: [Browse all Omega deals](https://thehubdeals.com/deals?brand=omega)
            - Link to homepage: [The Hub Deals](https://thehubdeals.com)

            **Tone:** Friendly, informative, helpful. Write like an experienced watch collector sharing tips with a friend."#]]
        .assert_eq(&build_prompt(&topic));
    }

    #[test]
    fn price_prompt_links_to_the_search_page() {
        let topic = topic(
            TopicKind::Price,
            "Submariner 126610",
            "Price Guide: Submariner 126610",
            "Submariner 126610 price, Submariner 126610 value, watch pricing, luxury watch value",
        );

        let prompt = build_prompt(&topic);

        assert!(prompt.contains("**Target audience:** Buyers researching Submariner 126610 pricing"));
        assert!(prompt.contains(
            "[Compare Submariner 126610 prices](https://thehubdeals.com/deals?search=submariner-126610)"
        ));
    }

    #[test]
    fn worth_prompt_features_the_deal() {
        let topic = topic(
            TopicKind::Worth,
            "Omega Speedmaster",
            "Is Omega Speedmaster Worth It in 2026?",
            "Omega Speedmaster, watch review, worth it, luxury watch buying guide",
        );

        let prompt = build_prompt(&topic);

        assert!(prompt.contains("- Feature this deal as an example:"));
        assert!(prompt.contains("- [WTS] Omega Speedmaster 3861 — $3200 (Excellent, via Reddit)"));
        assert!(prompt.contains("[Browse similar watches](https://thehubdeals.com/deals)"));
    }

    #[test]
    fn deal_lines_fall_back_gracefully() {
        let mut bare = listing("Mystery chronograph", None);
        bare.condition = None;
        bare.source = None;

        expect![[r#"- Mystery chronograph — See listing (Used, via The Hub)"#]]
            .assert_eq(&deals_list(&[bare]));
    }

    #[test]
    fn deals_list_caps_at_five_lines() {
        let listings: Vec<_> = (1..=8)
            .map(|n| listing(&format!("Deal {n}"), Some(100.0)))
            .collect();

        assert_eq!(deals_list(&listings).lines().count(), 5);
    }
}


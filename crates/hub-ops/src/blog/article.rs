use super::prompt::SITE_URL;
use super::topic::Topic;
use crate::util::slug::slugify;
use chrono::NaiveDate;

/// A rendered blog post, ready to be written into the content directory.
pub(crate) struct Article {
    /// `{date}-{slug}.md`, where the slug is derived from the topic title.
    pub(crate) file_name: String,
    pub(crate) markdown: String,
}

/// Wraps the generated body in the front matter the site generator expects,
/// plus the standard disclaimer footer.
pub(crate) fn render_article(topic: &Topic, body: &str, date: NaiveDate) -> Article {
    let date = date.format("%Y-%m-%d").to_string();
    let file_name = format!("{date}-{slug}.md", slug = slugify(&topic.title));

    let markdown = format!(
        r#"---
title: "{title}"
date: {date}
author: The Hub Team
description: "{description}"
keywords: "{keywords}"
category: {category}
featured: true
---

{body}

---

*This post was automatically generated based on real market data from The Hub Deals. Prices and availability are subject to change.*

**Related Links:**
- [Browse all deals]({site}/deals)
- [Sign up for deal alerts]({site}/signup)
"#,
        title = topic.title,
        description = topic.description,
        keywords = topic.keywords,
        category = topic.kind,
        site = SITE_URL,
    );

    Article { file_name, markdown }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::topic::TopicKind;
    use expect_test::expect;

    #[test]
    fn article_layout() {
        let topic = Topic {
            kind: TopicKind::Brand,
            subject: "Omega".to_owned(),
            title: "Best Omega Deals This Week".to_owned(),
            description: "Discover the best Omega watch deals available right now."
                .to_owned(),
            keywords: "Omega, Omega deals, watch deals".to_owned(),
            listings: vec![],
        };
        let date = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();

        let article = render_article(&topic, "## Market Pulse\n\nOmega prices keep sliding.", date);

        assert_eq!(article.file_name, "2026-08-23-best-omega-deals-this-week.md");

        expect![[r#"
            ---
            title: "Best Omega Deals This Week"
            date: 2026-08-23
            author: The Hub Team
            description: "Discover the best Omega watch deals available right now."
            keywords: "Omega, Omega deals, watch deals"
            category: brand
            featured: true
            ---

            ## Market Pulse

            Omega prices keep sliding.

            ---

            *This post was automatically generated based on real market data from The Hub Deals. Prices and availability are subject to change.*

            **Related Links:**
            - [Browse all deals](https://thehubdeals.com/deals)
            - [Sign up for deal alerts](https://thehubdeals.com/signup)
        "#]]
        .assert_eq(&article.markdown);
    }
}

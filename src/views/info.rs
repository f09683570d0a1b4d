// src/views/info.rs
use super::layout::{self, PageContext, PageMeta};
use super::escape;

/// Static content pages: a title, an intro and numbered sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoPage {
    Company,
    Careers,
    Shipping,
    Terms,
    Privacy,
}

impl InfoPage {
    pub const ALL: [InfoPage; 5] = [
        InfoPage::Company,
        InfoPage::Careers,
        InfoPage::Shipping,
        InfoPage::Terms,
        InfoPage::Privacy,
    ];

    /// URL segment, which is also the message key prefix.
    pub fn slug(self) -> &'static str {
        match self {
            InfoPage::Company => "company",
            InfoPage::Careers => "careers",
            InfoPage::Shipping => "shipping",
            InfoPage::Terms => "terms",
            InfoPage::Privacy => "privacy",
        }
    }

    pub fn from_slug(slug: &str) -> Option<InfoPage> {
        InfoPage::ALL.into_iter().find(|page| page.slug() == slug)
    }

    fn section_count(self) -> usize {
        match self {
            InfoPage::Company => 4,
            InfoPage::Careers => 3,
            InfoPage::Shipping => 4,
            InfoPage::Terms => 6,
            InfoPage::Privacy => 5,
        }
    }
}

pub fn render(ctx: &PageContext, page: InfoPage) -> String {
    let prefix = page.slug();
    let key = |suffix: &str| format!("{prefix}.{suffix}");
    let meta = PageMeta::from_keys(ctx, &key("meta_title"), &key("meta_description"));

    let sections: String = (1..=page.section_count())
        .map(|n| {
            format!(
                "<section><h2>{}</h2><p>{}</p></section>",
                escape(ctx.t(&key(&format!("s{n}.title")))),
                escape(ctx.t(&key(&format!("s{n}.body"))))
            )
        })
        .collect();

    let body = format!(
        r#"<article class="info-page {prefix}">
<h1>{title}</h1>
<p class="intro">{intro}</p>
{sections}
</article>"#,
        title = escape(ctx.t(&key("title"))),
        intro = escape(ctx.t(&key("intro"))),
    );

    layout::render(ctx, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::t;
    use crate::models::locale::Locale;
    use crate::views::Theme;

    #[test]
    fn every_section_has_text_in_both_locales() {
        for page in InfoPage::ALL {
            for locale in Locale::ALL {
                for n in 1..=page.section_count() {
                    let title = format!("{}.s{n}.title", page.slug());
                    assert!(!t(locale, &title).is_empty(), "{locale} {title}");
                }
            }
        }
    }

    #[test]
    fn slug_round_trips() {
        for page in InfoPage::ALL {
            assert_eq!(InfoPage::from_slug(page.slug()), Some(page));
        }
        assert_eq!(InfoPage::from_slug("catalog"), None);
    }

    #[test]
    fn renders_terms_sections() {
        let ctx = PageContext {
            locale: Locale::En,
            path: "/terms".into(),
            theme: Theme::Light,
            site_url: "https://chemdist-global.com".into(),
            query: None,
        };
        let html = render(&ctx, InfoPage::Terms);
        assert_eq!(html.matches("<section><h2>").count(), 6);
        assert!(html.contains("<title>Terms of Service | ChemDist Global</title>"));
    }
}

//! Parsing of the retailer's search-result page.
//!
//! The search endpoint redirects to whatever page best matches the term. The
//! primary-content container (`div[role="main"]`) names that page's kind in
//! `data-page-type`: `PartDetail` for a part, `MegaModel` for a model, other
//! values for listings and "no results".

use scraper::{Html, Selector};

const CONTAINER: &str = r#"div[role="main"]"#;
const SUBHEADING: &str = "h2";
const TITLE: &str = "h1.title-main";

pub const PART_DETAIL: &str = "PartDetail";
pub const MEGA_MODEL: &str = "MegaModel";

/// The few facts the validators read from a search-result page.
///
/// Missing elements are `None`; nothing here fails on unexpected markup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    /// `data-page-type` of the primary-content container
    pub page_type: Option<String>,

    /// Text of the first `h2` on the page
    pub subheading: Option<String>,

    /// Text of the main `h1` title
    pub title: Option<String>,
}

impl SearchPage {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let page_type = first(&document, CONTAINER)
            .and_then(|el| el.value().attr("data-page-type"))
            .map(str::to_string);

        Self {
            page_type,
            subheading: first_text(&document, SUBHEADING),
            title: first_text(&document, TITLE),
        }
    }

    pub fn is_page_type(&self, expected: &str) -> bool {
        self.page_type.as_deref() == Some(expected)
    }
}

fn first<'a>(document: &'a Html, css: &str) -> Option<scraper::ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

fn first_text(document: &Html, css: &str) -> Option<String> {
    first(document, css).map(|el| el.text().collect::<String>().trim().to_string())
}

//! Static page rendering for link previews.
//!
//! Each item gets a copy of the base page with its own title, description and
//! social-sharing meta tags, plus a marker telling the app which item to open.

use crate::constants::{
    DEFAULT_SITE_URL, DEFAULT_TITLE, INITIAL_MARKER_META, META_DESCRIPTION_CHARS,
};
use crate::data::Fallacy;
use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};
use thiserror::Error;

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<title>.*?</title>").expect("title pattern compiles"));
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bname\s*=\s*["']description["'][^>]*>"#)
        .expect("description pattern compiles")
});

const HEAD_CLOSE: &str = "</head>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("template has no </head> to inject metadata into")]
    MissingHead,
}

/// Site-wide values used in generated metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_name: String,
    pub site_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_TITLE.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    #[must_use]
    pub fn item_url(&self, slug: &str) -> String {
        format!("{}/{slug}", self.site_url.trim_end_matches('/'))
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Output file name for an item's page.
#[must_use]
pub fn page_file_name(fallacy: &Fallacy) -> String {
    format!("{}.html", fallacy.slug)
}

/// Meta description: tagline plus the start of the long description.
#[must_use]
pub fn meta_description(fallacy: &Fallacy) -> String {
    let excerpt: String = fallacy
        .description
        .chars()
        .take(META_DESCRIPTION_CHARS)
        .collect();
    format!("{} - {excerpt}...", fallacy.tagline)
}

fn head_tags(fallacy: &Fallacy, site: &SiteConfig) -> String {
    let title = html_escape(&fallacy.title);
    let tagline = html_escape(&fallacy.tagline);
    let url = html_escape(&site.item_url(&fallacy.slug));
    let slug = html_escape(&fallacy.slug);
    format!(
        r#"    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{tagline}">
    <meta property="og:type" content="article">
    <meta property="og:url" content="{url}">
    <meta name="twitter:card" content="summary">
    <meta name="twitter:title" content="{title}">
    <meta name="twitter:description" content="{tagline}">
    <meta name="{INITIAL_MARKER_META}" content="{slug}">
"#
    )
}

/// Render the page for `fallacy` from the base `template`.
///
/// # Errors
///
/// Returns [`PageError::MissingHead`] if the template has no `</head>`.
pub fn render_page(
    template: &str,
    fallacy: &Fallacy,
    site: &SiteConfig,
) -> Result<String, PageError> {
    let head_at = template.find(HEAD_CLOSE).ok_or(PageError::MissingHead)?;

    let title_tag = format!(
        "<title>{} - {}</title>",
        html_escape(&fallacy.title),
        html_escape(&site.site_name)
    );
    let description_tag = format!(
        r#"<meta name="description" content="{}">"#,
        html_escape(&meta_description(fallacy))
    );

    let (head, rest) = template.split_at(head_at);

    let mut missing = String::new();
    if !TITLE_RE.is_match(head) {
        missing.push_str("    ");
        missing.push_str(&title_tag);
        missing.push('\n');
    }
    if !DESCRIPTION_RE.is_match(head) {
        missing.push_str("    ");
        missing.push_str(&description_tag);
        missing.push('\n');
    }

    // Only the head is rewritten; titles inside the body (inline SVG) stay.
    let head = TITLE_RE.replace(head, NoExpand(&title_tag));
    let head = DESCRIPTION_RE.replace(&head, NoExpand(&description_tag));
    Ok(format!("{head}{missing}{}{rest}", head_tags(fallacy, site)))
}

//! Address model for the catalogue.
//!
//! Home is the base path with no suffix. An item is the base path followed by
//! its slug as the final path segment; that is the only form ever written to
//! the address bar. Query-string and legacy `#/<slug>` forms are accepted on
//! input and normalised away.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::borrow::Cow;

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Query keys that carry a slug in the redirect-friendly form.
const SLUG_QUERY_KEYS: [&str; 2] = ["slug", "fallacy"];

/// Deployment base path of the collection, without a trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BasePath(String);

impl BasePath {
    /// Base path at the site root.
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Normalise `raw` (e.g. `play`, `/play/`) into a base path.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            Self::root()
        } else {
            Self(format!("/{trimmed}"))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address of the home view.
    #[must_use]
    pub fn home_url(&self) -> String {
        format!("{}/", self.0)
    }

    /// Canonical address of an item.
    #[must_use]
    pub fn item_url(&self, slug: &str) -> String {
        format!("{}/{}", self.0, utf8_percent_encode(slug, PATH_SEGMENT))
    }

    /// The part of `path` below the base path.
    ///
    /// Paths outside the base are returned unchanged.
    #[must_use]
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        if self.0.is_empty() {
            return path;
        }
        match path.strip_prefix(self.0.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }

    fn is_home_path(&self, path: &str) -> bool {
        path == self.home_url() || (!self.0.is_empty() && path == self.0)
    }
}

/// Path, query and fragment of an address, without the leading `?` and `#`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub path: String,
    pub query: String,
    pub hash: String,
}

impl Address {
    #[must_use]
    pub fn new(path: &str, query: &str, hash: &str) -> Self {
        let path = if path.is_empty() { "/" } else { path };
        Self {
            path: path.to_string(),
            query: query.trim_start_matches('?').to_string(),
            hash: hash.trim_start_matches('#').to_string(),
        }
    }

    /// Split an absolute URL or a path-relative href into its parts.
    #[must_use]
    pub fn parse(href: &str) -> Self {
        let rest = href
            .split_once("://")
            .map_or(href, |(_, after_scheme)| {
                after_scheme
                    .find(['/', '?', '#'])
                    .map_or("", |i| &after_scheme[i..])
            });
        let (rest, hash) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
        Self::new(path, query, hash)
    }

    /// Reassemble the address as a path-relative URL.
    #[must_use]
    pub fn to_url(&self) -> String {
        let mut url = self.path.clone();
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if !self.hash.is_empty() {
            url.push('#');
            url.push_str(&self.hash);
        }
        url
    }
}

/// Ways an address can carry a slug, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlugStrategy {
    /// Final path segment below the base path (canonical form).
    PathSegment,
    /// `?slug=<slug>`, `?fallacy=<slug>`, or the redirect form `?/<slug>`.
    QueryParam,
    /// `#/<slug>`, kept for old shared links.
    LegacyFragment,
}

impl SlugStrategy {
    /// Strategies in the order they are tried.
    pub const ORDER: [Self; 3] = [Self::PathSegment, Self::QueryParam, Self::LegacyFragment];

    #[must_use]
    pub fn extract(self, address: &Address, base: &BasePath) -> Option<String> {
        match self {
            Self::PathSegment => path_slug(address, base),
            Self::QueryParam => query_slug(&address.query),
            Self::LegacyFragment => fragment_slug(&address.hash),
        }
    }
}

fn decode(raw: &str) -> Option<String> {
    let decoded = percent_decode_str(raw).decode_utf8().ok()?;
    let trimmed = decoded.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn path_slug(address: &Address, base: &BasePath) -> Option<String> {
    let last = base
        .strip(&address.path)
        .split('/')
        .rfind(|part| !part.is_empty())?;
    if last == "index.html" || last.contains('.') {
        return None;
    }
    decode(last)
}

fn query_slug(query: &str) -> Option<String> {
    if let Some(redirected) = query.strip_prefix('/') {
        let path = redirected.split('&').next().unwrap_or_default();
        return path
            .split('/')
            .rfind(|part| !part.is_empty())
            .and_then(decode);
    }
    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if !SLUG_QUERY_KEYS.contains(&key) {
            return None;
        }
        let value: Cow<'_, str> = if value.contains('+') {
            Cow::Owned(value.replace('+', " "))
        } else {
            Cow::Borrowed(value)
        };
        decode(&value)
    })
}

fn fragment_slug(hash: &str) -> Option<String> {
    let rest = hash.strip_prefix('/')?;
    decode(rest.trim_end_matches('/'))
}

/// Run every strategy in order; the first one that finds a slug wins.
#[must_use]
pub fn resolve_slug(address: &Address, base: &BasePath) -> Option<String> {
    SlugStrategy::ORDER
        .iter()
        .find_map(|strategy| strategy.extract(address, base))
}

/// Whether `address` is already the canonical address for `slug` (or home when `None`).
#[must_use]
pub fn is_canonical(address: &Address, base: &BasePath, slug: Option<&str>) -> bool {
    if !address.query.is_empty() || !address.hash.is_empty() {
        return false;
    }
    match slug {
        Some(slug) => address.path == base.item_url(slug),
        None => base.is_home_path(&address.path),
    }
}

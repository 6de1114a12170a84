use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Identifier of a fallacy record. The resource may use numbers (any JSON
/// number, including negative and fractional ones) or strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FallacyId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for FallacyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One record of the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fallacy {
    pub id: FallacyId,
    pub slug: String,
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub tagline: String,
    pub description: String,
    pub example: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Borrowed view of the optional source fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribution<'a> {
    pub name: &'a str,
    pub url: Option<&'a str>,
}

impl Fallacy {
    /// Attribution of the record, if it names a source.
    ///
    /// A source URL without a source name is not enough to render an attribution.
    #[must_use]
    pub fn attribution(&self) -> Option<Attribution<'_>> {
        let name = self.source.as_deref().filter(|s| !s.trim().is_empty())?;
        Some(Attribution {
            name,
            url: self.source_url.as_deref().filter(|u| !u.trim().is_empty()),
        })
    }
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid slug {slug:?} on fallacy {id}")]
    InvalidSlug { id: String, slug: String },
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),
    #[error("Duplicate id: {0}")]
    DuplicateId(String),
}

#[derive(Deserialize)]
struct Document {
    fallacies: Vec<Fallacy>,
}

/// Ordered, read-only collection of fallacies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FallacyCollection {
    fallacies: Vec<Fallacy>,
}

/// Whether a slug can be used as the final path segment of an address.
#[must_use]
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug
            .chars()
            .any(|c| matches!(c, '/' | '.' | '?' | '#' | '%') || c.is_whitespace())
}

impl FallacyCollection {
    /// Empty collection (useful before the resource has loaded)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            fallacies: Vec::new(),
        }
    }

    /// Parse and validate the `{ "fallacies": [...] }` resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a required field is missing,
    /// or a slug or id is invalid or repeated.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        let doc: Document = serde_json::from_str(json)?;
        Self::from_fallacies(doc.fallacies)
    }

    /// Validate an already-built list of records.
    ///
    /// # Errors
    ///
    /// Returns an error if a slug is not URL-safe or a slug or id repeats.
    pub fn from_fallacies(fallacies: Vec<Fallacy>) -> Result<Self, DataError> {
        let mut slugs = HashSet::with_capacity(fallacies.len());
        let mut ids = HashSet::with_capacity(fallacies.len());
        for fallacy in &fallacies {
            if !is_url_safe_slug(&fallacy.slug) {
                return Err(DataError::InvalidSlug {
                    id: fallacy.id.to_string(),
                    slug: fallacy.slug.clone(),
                });
            }
            if !slugs.insert(fallacy.slug.as_str()) {
                return Err(DataError::DuplicateSlug(fallacy.slug.clone()));
            }
            if !ids.insert(&fallacy.id) {
                return Err(DataError::DuplicateId(fallacy.id.to_string()));
            }
        }
        log::debug!("validated {} fallacies", fallacies.len());
        Ok(Self { fallacies })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fallacies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fallacies.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Fallacy> {
        self.fallacies.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fallacy> {
        self.fallacies.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Fallacy] {
        &self.fallacies
    }

    /// Exact, case-sensitive slug lookup.
    #[must_use]
    pub fn position_of_slug(&self, slug: &str) -> Option<usize> {
        self.fallacies.iter().position(|f| f.slug == slug)
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Fallacy> {
        self.position_of_slug(slug).and_then(|i| self.get(i))
    }

    /// Index after `index`, wrapping to the first item.
    #[must_use]
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        Some((index + 1) % self.len())
    }

    /// Index before `index`, wrapping to the last item.
    #[must_use]
    pub fn previous_index(&self, index: usize) -> Option<usize> {
        if index >= self.len() {
            return None;
        }
        Some(index.checked_sub(1).unwrap_or(self.len() - 1))
    }
}

impl<'a> IntoIterator for &'a FallacyCollection {
    type Item = &'a Fallacy;
    type IntoIter = std::slice::Iter<'a, Fallacy>;

    fn into_iter(self) -> Self::IntoIter {
        self.fallacies.iter()
    }
}
